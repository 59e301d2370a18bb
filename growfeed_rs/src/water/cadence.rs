use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How often the dashboard refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Second,
    Minute,
    Hour,
    Day,
}

impl Cadence {
    pub const ALL: [Cadence; 4] = [
        Cadence::Second,
        Cadence::Minute,
        Cadence::Hour,
        Cadence::Day,
    ];

    pub fn period(self) -> Duration {
        match self {
            Cadence::Second => Duration::from_secs(1),
            Cadence::Minute => Duration::from_secs(60),
            Cadence::Hour => Duration::from_secs(60 * 60),
            Cadence::Day => Duration::from_secs(24 * 60 * 60),
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Cadence::Second => "Every Second",
            Cadence::Minute => "Every Minute",
            Cadence::Hour => "Hourly",
            Cadence::Day => "Daily",
        }
    }

    /// Footer line under the chart, e.g. "Updates hourly. (Updates paused)".
    pub fn status_line(self, running: bool) -> String {
        let mut line = format!("Updates {}.", self.label().to_lowercase());
        if !running {
            line.push_str(" (Updates paused)");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods() {
        assert_eq!(Cadence::Second.period().as_millis(), 1_000);
        assert_eq!(Cadence::Minute.period().as_millis(), 60_000);
        assert_eq!(Cadence::Hour.period().as_millis(), 3_600_000);
        assert_eq!(Cadence::Day.period().as_millis(), 86_400_000);
    }

    #[test]
    fn status_lines() {
        assert_eq!(Cadence::Second.status_line(true), "Updates every second.");
        assert_eq!(
            Cadence::Hour.status_line(false),
            "Updates hourly. (Updates paused)"
        );
    }

    #[test]
    fn serde_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Cadence::Day).unwrap(), r#""day""#);
        let parsed: Cadence = serde_json::from_str(r#""minute""#).unwrap();
        assert_eq!(parsed, Cadence::Minute);
    }
}
