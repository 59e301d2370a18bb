use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"System Components"</h2>
                    <p class="section-description">
                        "Advanced technology for intelligent fish feeding"
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="⚙"
                        title="Arduino Control"
                        description="Central control system with Arduino UNO and WiFi ESP module"
                    />
                    <FeatureCard
                        icon="⚖"
                        title="Precise Feeding"
                        description="HX711 and Load Cell for accurate feed measurement"
                    />
                    <FeatureCard
                        icon="🌡"
                        title="Environment Monitoring"
                        description="Temperature and pH sensors for optimal water conditions"
                    />
                    <FeatureCard
                        icon="⏲"
                        title="Automated Timing"
                        description="Scheduled feeding with precise servo control"
                    />
                    <FeatureCard
                        icon="🗄"
                        title="Fuzzy Logic"
                        description="Smart feed adjustment based on environmental conditions"
                    />
                    <FeatureCard
                        icon="📱"
                        title="Mobile Control"
                        description="Real-time monitoring via Blynk mobile application"
                    />
                    <FeatureCard
                        icon="🖥"
                        title="LCD Display"
                        description="On-site display for instant system status"
                    />
                    <FeatureCard
                        icon="📶"
                        title="IoT Integration"
                        description="Complete wireless control and monitoring"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
