use growfeed::nav::Section;
use growfeed::pricing::{self, PLANS, Plan};
use leptos::prelude::*;

use super::config;
use crate::PendingPlan;
use crate::browser;

#[component]
pub fn Pricing() -> impl IntoView {
    let header_height = config().nav.header_height;
    let pending = PendingPlan::from_context();

    // Remember the tier for the contact form, then take the visitor there
    let choose = move |plan: &'static str| {
        let mut store = browser::LocalStore::open();
        if let Err(e) = pricing::select_plan(&mut store, plan) {
            tracing::warn!(plan, error = %e, "selected plan kept in memory only");
        }
        pending.0.set(Some(plan.to_string()));
        browser::scroll_to_section(Section::Contact, header_height);
    };

    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Simple, Transparent Pricing"</h2>
                    <p class="section-description">"Choose the perfect plan for your farm"</p>
                </div>
                <div class="pricing-grid">
                    {PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan=*plan on_choose=choose /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard<F>(plan: Plan, on_choose: F) -> impl IntoView
where
    F: Fn(&'static str) + Copy + 'static,
{
    view! {
        <article class="plan-card">
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="plan-amount">{plan.price_label()}</span>
                <span class="plan-period">"/month"</span>
            </div>
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="plan-feature">
                                <span class="plan-check">"✓"</span>
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="btn btn-primary btn-block" on:click=move |_| on_choose(plan.name)>
                "Get Started"
            </button>
        </article>
    }
}
