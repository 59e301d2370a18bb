// GrowFeed landing page, Leptos 0.8 CSR
// Smart IoT fish feeding, rendered client-side

mod browser;
mod logging;
mod sections;

use growfeed::GrowfeedConfig;
use growfeed::pricing;
use leptos::prelude::*;
use sections::*;

const CONFIG_TOML: &str = include_str!("../growfeed.toml");

/// Plan picked in the pricing section and not yet sent with a message.
#[derive(Clone, Copy)]
pub struct PendingPlan(pub RwSignal<Option<String>>);

impl PendingPlan {
    pub fn from_context() -> Self {
        use_context::<PendingPlan>().unwrap_or_else(|| PendingPlan(RwSignal::new(None)))
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = GrowfeedConfig::from_toml_str(CONFIG_TOML);
    logging::init(&config.log_filter);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: GrowfeedConfig) -> impl IntoView {
    let store = browser::LocalStore::open();
    provide_context(PendingPlan(RwSignal::new(pricing::pending_plan(&store))));
    provide_context(config);

    view! {
        <Navbar />
        <main class="page">
            <Hero />
            <Features />
            <WaterStats />
            <Benefits />
            <Testimonials />
            <Pricing />
            <Contact />
        </main>
        <Footer />
    }
}
