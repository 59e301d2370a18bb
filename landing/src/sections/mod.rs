// Landing page sections, in page order

mod benefits;
mod contact;
mod demo_modal;
mod features;
mod footer;
mod hero;
mod navbar;
mod pricing;
mod testimonials;
mod water_stats;

pub use benefits::Benefits;
pub use contact::Contact;
pub use demo_modal::DemoModal;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
pub use water_stats::WaterStats;

use growfeed::GrowfeedConfig;
use leptos::prelude::*;

/// Configuration provided by `App`, or the stock defaults.
fn config() -> GrowfeedConfig {
    use_context::<GrowfeedConfig>().unwrap_or_default()
}
