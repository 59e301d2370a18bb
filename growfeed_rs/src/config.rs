//! Configuration file support.
//!
//! The landing binary embeds `growfeed.toml` at build time; native callers
//! can load it from disk. Every field has a default, so an empty or missing
//! file yields the stock page.

use std::path::Path;

use serde::Deserialize;

use crate::water::Cadence;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GrowfeedConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
    pub dashboard: DashboardConfig,
    pub nav: NavConfig,
    pub contact: ContactConfig,
    pub demo: DemoConfig,
}

impl Default for GrowfeedConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            dashboard: DashboardConfig::default(),
            nav: NavConfig::default(),
            contact: ContactConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

/// Water-quality dashboard settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Points kept in the historical chart.
    pub history_len: usize,
    pub initial_cadence: Cadence,
    /// Start ticking as soon as the widget mounts.
    pub start_running: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            history_len: 24,
            initial_cadence: Cadence::Second,
            start_running: true,
        }
    }
}

impl DashboardConfig {
    /// `history_len`, never below one.
    pub fn window_len(&self) -> usize {
        self.history_len.max(1)
    }
}

/// Header geometry and the scroll bands in which it renders opaque
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Fixed header height in CSS pixels, subtracted from scroll targets.
    pub header_height: f64,
    pub top_band: f64,
    pub opaque_after: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_height: 64.0,
            top_band: 20.0,
            opaque_after: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long the success banner stays up.
    pub banner_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { banner_ms: 3000 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub video_url: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            video_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
        }
    }
}

impl GrowfeedConfig {
    /// Parse TOML text. Returns the default config if it is invalid.
    pub fn from_toml_str(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GrowfeedConfig::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.dashboard.history_len, 24);
        assert_eq!(config.dashboard.initial_cadence, Cadence::Second);
        assert!(config.dashboard.start_running);
        assert_eq!(config.nav.header_height, 64.0);
        assert_eq!(config.contact.banner_ms, 3000);
    }

    #[test]
    fn test_empty_string_is_default() {
        assert_eq!(GrowfeedConfig::from_toml_str(""), GrowfeedConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = GrowfeedConfig::from_toml_str(
            r#"
[dashboard]
initial_cadence = "minute"

[contact]
banner_ms = 5000
"#,
        );
        assert_eq!(config.dashboard.initial_cadence, Cadence::Minute);
        assert_eq!(config.dashboard.history_len, 24);
        assert_eq!(config.contact.banner_ms, 5000);
        assert_eq!(config.nav, NavConfig::default());
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = GrowfeedConfig::from_toml_str("[dashboard]\ninitial_cadence = \"weekly\"\n");
        assert_eq!(config, GrowfeedConfig::default());
    }

    #[test]
    fn test_window_len_never_zero() {
        let dashboard = DashboardConfig {
            history_len: 0,
            ..Default::default()
        };
        assert_eq!(dashboard.window_len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = GrowfeedConfig::load_from_path(&temp.path().join("growfeed.toml"));
        assert_eq!(config, GrowfeedConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("growfeed.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
log_filter = "growfeed=debug"

[dashboard]
history_len = 12
start_running = false

[nav]
header_height = 80.0
"#
        )
        .expect("write config");

        let config = GrowfeedConfig::load_from_path(&config_path);
        assert_eq!(config.log_filter, "growfeed=debug");
        assert_eq!(config.dashboard.history_len, 12);
        assert!(!config.dashboard.start_running);
        assert_eq!(config.nav.header_height, 80.0);
        assert_eq!(config.nav.opaque_after, 100.0);
    }

    #[test]
    fn test_shipped_landing_config_parses() {
        let shipped = include_str!("../../landing/growfeed.toml");
        let parsed: Result<GrowfeedConfig, _> = toml::from_str(shipped);
        assert!(parsed.is_ok(), "{parsed:?}");
    }
}
