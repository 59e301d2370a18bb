//! Plan catalogue and the pricing -> contact handoff.
//!
//! Picking a tier stores its name under [`SELECTED_PLAN_KEY`]. The contact
//! form shows it while pending and [`crate::contact::submit`] consumes it.

use crate::store::{KeyValueStore, SELECTED_PLAN_KEY, StoreError};

/// One pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    /// Monthly price in whole US dollars.
    pub price_usd: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price_usd: 499,
        description: "Perfect for small fish farms",
        features: &[
            "Basic feeding automation",
            "Temperature monitoring",
            "Mobile app access",
            "Email support",
            "1 feeding station",
        ],
    },
    Plan {
        name: "Professional",
        price_usd: 999,
        description: "Ideal for medium-sized operations",
        features: &[
            "Advanced feeding automation",
            "Full environmental monitoring",
            "Real-time analytics",
            "Priority support",
            "Up to 3 feeding stations",
        ],
    },
    Plan {
        name: "Enterprise",
        price_usd: 1999,
        description: "For large commercial farms",
        features: &[
            "Complete automation suite",
            "Advanced analytics & AI",
            "Custom integration",
            "24/7 dedicated support",
            "Unlimited feeding stations",
        ],
    },
];

impl Plan {
    pub fn find(name: &str) -> Option<&'static Plan> {
        PLANS.iter().find(|plan| plan.name == name)
    }

    /// "$999"
    pub fn price_label(&self) -> String {
        format!("${}", self.price_usd)
    }
}

/// Remember `plan_name` as the pending plan, replacing any earlier pick.
pub fn select_plan<S>(store: &mut S, plan_name: &str) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    if Plan::find(plan_name).is_none() {
        tracing::warn!(plan = plan_name, "selecting plan missing from catalogue");
    }
    store.set(SELECTED_PLAN_KEY, plan_name)?;
    tracing::info!(plan = plan_name, "plan selected");
    Ok(())
}

pub fn pending_plan<S>(store: &S) -> Option<String>
where
    S: KeyValueStore + ?Sized,
{
    store.get(SELECTED_PLAN_KEY).filter(|plan| !plan.is_empty())
}

pub fn clear_pending_plan<S>(store: &mut S) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    store.remove(SELECTED_PLAN_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn catalogue_lookup() {
        let pro = Plan::find("Professional").expect("professional plan");
        assert_eq!(pro.price_usd, 999);
        assert_eq!(pro.price_label(), "$999");
        assert_eq!(pro.features.len(), 5);
        assert!(Plan::find("professional").is_none());
        assert!(Plan::find("Platinum").is_none());
    }

    #[test]
    fn every_plan_has_five_features() {
        for plan in PLANS {
            assert_eq!(plan.features.len(), 5, "{}", plan.name);
        }
    }

    #[test]
    fn select_replaces_previous_pick() {
        let mut store = MemoryStore::default();
        assert_eq!(pending_plan(&store), None);

        select_plan(&mut store, "Starter").unwrap();
        select_plan(&mut store, "Enterprise").unwrap();
        assert_eq!(pending_plan(&store).as_deref(), Some("Enterprise"));

        clear_pending_plan(&mut store).unwrap();
        assert_eq!(pending_plan(&store), None);
    }

    #[test]
    fn empty_stored_plan_is_not_pending() {
        let mut store = MemoryStore::default();
        store.set(SELECTED_PLAN_KEY, "").unwrap();
        assert_eq!(pending_plan(&store), None);
    }
}
