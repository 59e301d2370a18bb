//! Simulated water-quality dashboard.
//!
//! [`WaterDashboard`] holds the data (current snapshot + history window) and
//! advances it one [`WaterDashboard::tick`] at a time. [`LiveUpdates`] owns
//! the timer that calls the tick and guarantees there is never more than
//! one of them.

mod cadence;
pub mod chart;
mod dashboard;
mod history;
mod metrics;
mod random;
mod schedule;

pub use cadence::Cadence;
pub use dashboard::{LiveDashboard, WaterDashboard};
pub use history::{HistoricalSeries, HistoryPoint, clock_label};
pub use metrics::{Metric, Reading, Snapshot, sample_change};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use schedule::{LiveUpdates, ManualScheduler, ScheduleError, Scheduler, TimerId};
