use chrono::NaiveTime;
use rand::rngs::StdRng;

use crate::water::history::{HistoricalSeries, HistoryPoint, clock_label};
use crate::water::metrics::{Metric, Reading, Snapshot};
use crate::water::random::{RandomSource, RngSource};

/// Dashboard data as rendered in the browser.
pub type LiveDashboard = WaterDashboard<RngSource<StdRng>>;

/// Current readings plus the charted history window.
#[derive(Debug, Clone)]
pub struct WaterDashboard<R> {
    rng: R,
    snapshot: Snapshot,
    history: HistoricalSeries,
    ticks: u64,
}

impl<R: RandomSource> WaterDashboard<R> {
    /// Baseline snapshot and a randomly seeded history of `history_len`
    /// points.
    pub fn new(history_len: usize, mut rng: R) -> Self {
        let history = HistoricalSeries::seeded(history_len, &mut rng);
        Self {
            rng,
            snapshot: Snapshot::default(),
            history,
            ticks: 0,
        }
    }

    /// Replace the snapshot with fresh readings and chart them at `now`.
    pub fn tick(&mut self, now: NaiveTime) -> &Snapshot {
        self.snapshot = Snapshot::generate(&mut self.rng);
        let point = HistoryPoint::from_snapshot(clock_label(now), &self.snapshot);
        self.history.push(point);
        self.ticks += 1;
        tracing::debug!(
            tick = self.ticks,
            ph = self.snapshot.ph.value,
            "dashboard refreshed"
        );
        &self.snapshot
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn reading(&self, metric: Metric) -> Reading {
        self.snapshot.reading(metric)
    }

    pub fn history(&self) -> &HistoricalSeries {
        &self.history
    }

    /// Ticks applied since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl LiveDashboard {
    pub fn with_entropy(history_len: usize) -> Self {
        Self::new(history_len, RngSource::from_entropy())
    }
}
