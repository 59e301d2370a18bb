//! # growfeed
//!
//! Platform-independent core of the GrowFeed landing page.
//!
//! Everything the page does that is not markup lives here, behind small
//! traits so it can run natively under `cargo test`:
//!
//! - [`water`] - the simulated water-quality dashboard: metrics, history
//!   window, cadence, chart geometry and the timer lifecycle controller
//! - [`store`] - the key-value store seam standing in for `localStorage`
//! - [`contact`] - contact submissions and their persisted list
//! - [`pricing`] - the plan catalogue and the pending-plan handoff
//! - [`nav`] - page sections, scroll offsets and header styling bands
//! - [`config`] - TOML configuration with defaults
//!
//! The `growfeed-landing` crate binds these traits to browser APIs.
//!
//! ```rust
//! use growfeed::store::MemoryStore;
//! use growfeed::{contact, pricing};
//!
//! let mut store = MemoryStore::default();
//! pricing::select_plan(&mut store, "Enterprise").unwrap();
//!
//! let draft = contact::ContactDraft::new("A", "a@b.com", "hi");
//! let record = contact::submit(&mut store, &draft, chrono::Utc::now()).unwrap();
//!
//! assert_eq!(record.plan.as_deref(), Some("Enterprise"));
//! assert_eq!(pricing::pending_plan(&store), None);
//! ```

pub mod config;
pub mod contact;
pub mod nav;
pub mod pricing;
pub mod store;
pub mod water;

pub use config::GrowfeedConfig;
pub use store::{KeyValueStore, MemoryStore, StoreError};
