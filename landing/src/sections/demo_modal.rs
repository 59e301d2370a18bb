use leptos::prelude::*;

use super::config;

const DEMO_HIGHLIGHTS: [(&str, &str); 4] = [
    (
        "Automated Feeding System",
        "Watch how our smart system dispenses feed at optimal times.",
    ),
    (
        "Real-time Monitoring",
        "See live water quality and environmental data tracking.",
    ),
    (
        "Mobile App Control",
        "Control and monitor your system from anywhere.",
    ),
    ("Data Analytics", "View comprehensive reports and insights."),
];

/// Video walkthrough overlay. Clicking the backdrop, the close button or
/// the call to action closes it.
#[component]
pub fn DemoModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let video_url = config().demo.video_url;
    let close = move |_| set_open.set(false);

    view! {
        <Show when=move || open.get()>
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-backdrop" on:click=close></div>
                <div class="modal-panel">
                    <button class="modal-close" aria-label="Close" on:click=close>
                        "✕"
                    </button>

                    <div class="modal-body">
                        <h2 class="modal-title">"GrowFeed Demo"</h2>

                        <div class="modal-video">
                            <iframe
                                src=video_url.clone()
                                title="GrowFeed Demo"
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen=true
                            ></iframe>
                        </div>

                        <h3 class="modal-subtitle">"Key Features Demo:"</h3>
                        <div class="modal-grid">
                            {DEMO_HIGHLIGHTS
                                .into_iter()
                                .map(|(title, text)| {
                                    view! {
                                        <div class="modal-card">
                                            <h4 class="modal-card-title">{title}</h4>
                                            <p class="modal-card-text">{text}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="modal-actions">
                            <button class="btn btn-primary" on:click=close>
                                "Ready to Get Started?"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
