use leptos::prelude::*;

const BENEFITS: [(&str, &str, &str); 4] = [
    (
        "📈",
        "Improved Efficiency",
        "Save up to 30% on feed costs with precise automated dispensing and smart monitoring",
    ),
    (
        "📊",
        "Optimal Growth",
        "Achieve better growth rates with precise feeding schedules and environmental control",
    ),
    (
        "💓",
        "Better Fish Health",
        "Maintain ideal conditions with real-time pH and temperature monitoring",
    ),
    (
        "💧",
        "Water Quality",
        "Prevent overfeeding and maintain optimal water conditions automatically",
    ),
];

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="benefits">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title section-title-gradient">"Key Benefits"</h2>
                    <p class="section-description section-description-light">
                        "Why choose GrowFeed for your fish farm"
                    </p>
                </div>
                <div class="benefits-grid">
                    {BENEFITS
                        .into_iter()
                        .enumerate()
                        .map(|(i, (icon, title, description))| {
                            // cards slide in from alternating sides
                            let side = if i % 2 == 0 { "benefit-card from-left" } else { "benefit-card from-right" };
                            view! {
                                <article class=side>
                                    <div class="benefit-icon">{icon}</div>
                                    <div>
                                        <h3 class="benefit-title">{title}</h3>
                                        <p class="benefit-description">{description}</p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
