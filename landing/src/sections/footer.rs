use growfeed::nav::{NAV_SECTIONS, Section};
use leptos::prelude::*;

use super::config;
use crate::browser;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("LinkedIn", "https://linkedin.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let header_height = config().nav.header_height;

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="footer-logo">"🐟"</span>
                    <span class="footer-title">"GrowFeed"</span>
                    <p class="footer-tagline">
                        "Smart IoT feeding and water monitoring for modern fish farms."
                    </p>
                </div>

                <nav class="footer-links" aria-label="Footer">
                    {NAV_SECTIONS
                        .into_iter()
                        .filter(|section| *section != Section::Home)
                        .map(|section| {
                            view! {
                                <button
                                    class="footer-link"
                                    on:click=move |_| {
                                        browser::scroll_to_section(section, header_height);
                                    }
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="footer-social">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|(name, href)| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="footer-link">
                                    {name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <p class="footer-copyright">"© 2025 GrowFeed. All rights reserved."</p>
        </footer>
    }
}
