use std::collections::VecDeque;

use chrono::{NaiveTime, Timelike};

use crate::water::metrics::{Metric, Snapshot};
use crate::water::random::RandomSource;

/// One charted sample.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub label: String,
    pub ph: f64,
    pub temperature: f64,
    pub dissolved_oxygen: f64,
    pub turbidity: f64,
}

impl HistoryPoint {
    pub fn from_snapshot(label: impl Into<String>, snapshot: &Snapshot) -> Self {
        Self {
            label: label.into(),
            ph: snapshot.ph.value,
            temperature: snapshot.temperature.value,
            dissolved_oxygen: snapshot.dissolved_oxygen.value,
            turbidity: snapshot.turbidity.value,
        }
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Ph => self.ph,
            Metric::Temperature => self.temperature,
            Metric::DissolvedOxygen => self.dissolved_oxygen,
            Metric::Turbidity => self.turbidity,
        }
    }
}

/// Wall-clock label for a live point: `9:05:07`.
pub fn clock_label(time: NaiveTime) -> String {
    format!("{}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// Fixed-length sliding window, oldest point first.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSeries {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl HistoricalSeries {
    /// Fill a window of `len` points (at least one) with random in-range
    /// values, labelled as hours counting down to `0:00`.
    pub fn seeded<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> Self {
        let capacity = len.max(1);
        let points = (0..capacity)
            .rev()
            .map(|hour| HistoryPoint {
                label: format!("{hour}:00"),
                ph: Metric::Ph.sample(rng),
                temperature: Metric::Temperature.sample(rng),
                dissolved_oxygen: Metric::DissolvedOxygen.sample(rng),
                turbidity: Metric::Turbidity.sample(rng),
            })
            .collect();
        Self { points, capacity }
    }

    /// Drop the oldest point and append `point`. Length never changes.
    pub fn push(&mut self, point: HistoryPoint) {
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HistoryPoint> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&HistoryPoint> {
        self.points.front()
    }

    pub fn last(&self) -> Option<&HistoryPoint> {
        self.points.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::random::ScriptedSource;

    fn point(label: &str) -> HistoryPoint {
        HistoryPoint::from_snapshot(label, &Snapshot::default())
    }

    #[test]
    fn seeded_labels_count_down_to_midnight() {
        let mut rng = ScriptedSource::new([0.5]);
        let series = HistoricalSeries::seeded(24, &mut rng);
        assert_eq!(series.len(), 24);
        assert_eq!(series.first().unwrap().label, "23:00");
        assert_eq!(series.last().unwrap().label, "0:00");
        // four draws per point, values only
        assert_eq!(rng.draws(), 24 * 4);
    }

    #[test]
    fn push_evicts_oldest() {
        let mut rng = ScriptedSource::new([0.5]);
        let mut series = HistoricalSeries::seeded(3, &mut rng);
        series.push(point("a"));
        series.push(point("b"));

        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["0:00", "a", "b"]);
    }

    #[test]
    fn length_is_constant() {
        let mut rng = ScriptedSource::new([0.1, 0.9]);
        let mut series = HistoricalSeries::seeded(24, &mut rng);
        for i in 0..100 {
            series.push(point(&i.to_string()));
            assert_eq!(series.len(), 24);
        }
        assert_eq!(series.last().unwrap().label, "99");
        assert_eq!(series.first().unwrap().label, "76");
    }

    #[test]
    fn zero_length_request_keeps_one_point() {
        let mut rng = ScriptedSource::default();
        let mut series = HistoricalSeries::seeded(0, &mut rng);
        assert_eq!(series.len(), 1);
        series.push(point("x"));
        assert_eq!(series.len(), 1);
        assert_eq!(series.last().unwrap().label, "x");
    }

    #[test]
    fn clock_labels() {
        let t = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        assert_eq!(clock_label(t), "9:05:07");
        let t = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        assert_eq!(clock_label(t), "23:59:00");
    }
}
