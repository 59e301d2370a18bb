use std::ops::RangeInclusive;

use crate::water::random::RandomSource;

/// The four simulated water parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Ph,
    Temperature,
    DissolvedOxygen,
    Turbidity,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Ph,
        Metric::Temperature,
        Metric::DissolvedOxygen,
        Metric::Turbidity,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Metric::Ph => "pH Level",
            Metric::Temperature => "Temperature",
            Metric::DissolvedOxygen => "Dissolved Oxygen",
            Metric::Turbidity => "Turbidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Ph => "pH",
            Metric::Temperature => "°C",
            Metric::DissolvedOxygen => "mg/L",
            Metric::Turbidity => "NTU",
        }
    }

    /// Legend text, e.g. "Temperature (°C)".
    pub fn legend(self) -> String {
        match self {
            Metric::Ph => self.title().to_string(),
            _ => format!("{} ({})", self.title(), self.unit()),
        }
    }

    /// Simulated values stay inside this inclusive range.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Metric::Ph => 6.5..=7.5,
            Metric::Temperature => 23.0..=27.0,
            Metric::DissolvedOxygen => 7.0..=9.0,
            Metric::Turbidity => 4.0..=6.0,
        }
    }

    /// Line and accent colour.
    pub fn color(self) -> &'static str {
        match self {
            Metric::Ph => "#3B82F6",
            Metric::Temperature => "#EF4444",
            Metric::DissolvedOxygen => "#10B981",
            Metric::Turbidity => "#F59E0B",
        }
    }

    /// Reading shown before the first tick.
    pub fn baseline(self) -> f64 {
        match self {
            Metric::Ph => 7.0,
            Metric::Temperature => 25.0,
            Metric::DissolvedOxygen => 8.0,
            Metric::Turbidity => 5.0,
        }
    }

    pub fn sample<R: RandomSource + ?Sized>(self, rng: &mut R) -> f64 {
        let range = self.range();
        let (min, max) = (*range.start(), *range.end());
        round1(min + rng.next_unit() * (max - min))
    }
}

/// Percent change vs. the previous update, in [-2, 2].
pub fn sample_change<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    round1(rng.next_unit() * 4.0 - 2.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub change: f64,
}

impl Reading {
    pub fn is_rising(&self) -> bool {
        self.change >= 0.0
    }

    /// "↑ 1.2%" / "↓ 0.4%"
    pub fn trend_label(&self) -> String {
        let arrow = if self.is_rising() { '↑' } else { '↓' };
        format!("{arrow} {}%", self.change.abs())
    }
}

/// One reading per metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ph: Reading,
    pub temperature: Reading,
    pub dissolved_oxygen: Reading,
    pub turbidity: Reading,
}

impl Default for Snapshot {
    fn default() -> Self {
        let steady = |metric: Metric| Reading {
            value: metric.baseline(),
            change: 0.0,
        };
        Self {
            ph: steady(Metric::Ph),
            temperature: steady(Metric::Temperature),
            dissolved_oxygen: steady(Metric::DissolvedOxygen),
            turbidity: steady(Metric::Turbidity),
        }
    }
}

impl Snapshot {
    /// Draw a fresh snapshot. Per metric in [`Metric::ALL`] order the value
    /// is drawn first, then the change.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut draw = |metric: Metric| Reading {
            value: metric.sample(rng),
            change: sample_change(rng),
        };
        Self {
            ph: draw(Metric::Ph),
            temperature: draw(Metric::Temperature),
            dissolved_oxygen: draw(Metric::DissolvedOxygen),
            turbidity: draw(Metric::Turbidity),
        }
    }

    pub fn reading(&self, metric: Metric) -> Reading {
        match metric {
            Metric::Ph => self.ph,
            Metric::Temperature => self.temperature,
            Metric::DissolvedOxygen => self.dissolved_oxygen,
            Metric::Turbidity => self.turbidity,
        }
    }
}
