use growfeed::nav::Section;
use leptos::prelude::*;

use super::{DemoModal, config};
use crate::browser;

#[component]
pub fn Hero() -> impl IntoView {
    let header_height = config().nav.header_height;
    let (demo_open, set_demo_open) = signal(false);

    view! {
        <section id="home" class="hero">
            <div class="hero-overlay"></div>
            <SwimmingFish />

            <div class="container hero-content">
                <div class="hero-brand">
                    <span class="hero-brand-icon">"🐟"</span>
                    <h1 class="hero-brand-name">"GrowFeed"</h1>
                </div>
                <h2 class="hero-title">"Smart IoT Fish Feeding System"</h2>
                <p class="hero-description">
                    "Revolutionize your fish farming with our automated feeding system. "
                    "Monitor water quality, automate feeding schedules, and optimize fish growth with IoT technology."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary btn-pill"
                        on:click=move |_| {
                            browser::scroll_to_section(Section::Pricing, header_height);
                        }
                    >
                        "Get Started"
                    </button>
                    <button class="btn btn-outline btn-pill" on:click=move |_| set_demo_open.set(true)>
                        "View Demo"
                    </button>
                </div>
            </div>

            <div class="hero-fade"></div>
        </section>
        <DemoModal open=demo_open set_open=set_demo_open />
    }
}

/// Five fish drifting across the hero, staggered by two seconds each.
#[component]
fn SwimmingFish() -> impl IntoView {
    view! {
        <div class="hero-school" aria-hidden="true">
            {(0..5u32)
                .map(|i| {
                    let style = format!("animation-delay: {}s; top: {}%;", i * 2, 12 + i * 17);
                    view! { <span class="hero-fish" style=style>"🐟"</span> }
                })
                .collect_view()}
        </div>
    }
}
