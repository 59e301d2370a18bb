use growfeed::nav::{self, NAV_SECTIONS, Section};
use leptos::prelude::*;

use super::config;
use crate::browser;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav_config = config().nav;
    let header_height = nav_config.header_height;
    let (menu_open, set_menu_open) = signal(false);
    let (opaque, set_opaque) = signal(true);

    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        set_opaque.set(nav::header_is_opaque(browser::scroll_y(), &nav_config));
    });
    on_cleanup(move || scroll_listener.remove());

    let go_to = move |section: Section| {
        if browser::scroll_to_section(section, header_height) {
            set_menu_open.set(false);
        }
    };

    view! {
        <nav class=move || if opaque.get() { "navbar navbar-solid" } else { "navbar navbar-clear" }>
            <div class="container navbar-inner">
                <a
                    href="#home"
                    class="navbar-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to(Section::Home);
                    }
                >
                    <span class="navbar-logo">"🐟"</span>
                    <span class="navbar-title">"GrowFeed"</span>
                </a>

                <div class="navbar-links">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button class="navbar-link" on:click=move |_| go_to(section)>
                                    {section.label()}
                                    <span class="navbar-link-underline"></span>
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn-primary navbar-cta" on:click=move |_| go_to(Section::Pricing)>
                        "Get Started"
                    </button>
                </div>

                <button
                    class="navbar-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="navbar-mobile">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button class="navbar-mobile-link" on:click=move |_| go_to(section)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <div class="navbar-mobile-cta">
                        <button class="btn btn-primary btn-block" on:click=move |_| go_to(Section::Pricing)>
                            "Get Started"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
