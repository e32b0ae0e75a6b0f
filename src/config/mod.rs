use anyhow::{Context, Result};
use config::{Config, File};
use log::{debug, LevelFilter};
use serde::Deserialize;
use std::path::Path;

fn default_refresh_ms() -> u64 {
    1000
}

fn default_history_points() -> usize {
    60
}

fn default_max_connections_rows() -> usize {
    50
}

fn default_enable_tracker() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorConfig {
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
    #[serde(default = "default_history_points")]
    pub history_points: usize,
    #[serde(default = "default_max_connections_rows")]
    pub max_connections_rows: usize,
    #[serde(default = "default_enable_tracker")]
    pub enable_app_usage_tracker: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            refresh_ms: default_refresh_ms(),
            history_points: default_history_points(),
            max_connections_rows: default_max_connections_rows(),
            enable_app_usage_tracker: default_enable_tracker(),
        }
    }
}

/// Warning/critical thresholds consumed by the display layer; the
/// engine only carries them.
#[derive(Debug, Deserialize, Clone)]
pub struct AlertsConfig {
    #[serde(default = "default_warn_percent")]
    pub cpu_warn: f32,
    #[serde(default = "default_crit_percent")]
    pub cpu_crit: f32,
    #[serde(default = "default_warn_percent")]
    pub ram_warn: f32,
    #[serde(default = "default_crit_percent")]
    pub ram_crit: f32,
    #[serde(default = "default_disk_free_warn_gb")]
    pub disk_free_warn_gb: f64,
    #[serde(default = "default_disk_free_crit_gb")]
    pub disk_free_crit_gb: f64,
}

fn default_warn_percent() -> f32 {
    85.0
}

fn default_crit_percent() -> f32 {
    95.0
}

fn default_disk_free_warn_gb() -> f64 {
    10.0
}

fn default_disk_free_crit_gb() -> f64 {
    5.0
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            cpu_warn: default_warn_percent(),
            cpu_crit: default_crit_percent(),
            ram_warn: default_warn_percent(),
            ram_crit: default_crit_percent(),
            disk_free_warn_gb: default_disk_free_warn_gb(),
            disk_free_crit_gb: default_disk_free_crit_gb(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(rename = "MONITOR", default)]
    pub monitor: MonitorConfig,
    #[serde(rename = "ALERTS", default)]
    pub alerts: AlertsConfig,
    #[serde(rename = "LOGGING", default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_file("config.ini")
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(
                File::with_name(config_path.to_str().unwrap_or(""))
                    .format(config::FileFormat::Ini),
            )
            .build()
            .context(format!(
                "Failed to load config from {}",
                config_path.display()
            ))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.monitor.refresh_ms, 1000);
        assert_eq!(config.monitor.history_points, 60);
        assert_eq!(config.monitor.max_connections_rows, 50);
        assert!(config.monitor.enable_app_usage_tracker);
        assert_eq!(config.alerts.cpu_warn, 85.0);
        assert_eq!(config.alerts.cpu_crit, 95.0);
        assert_eq!(config.alerts.disk_free_warn_gb, 10.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = "[MONITOR]\nrefresh_ms = 500\nhistory_points = 120\nmax_connections_rows = 25\nenable_app_usage_tracker = false\n\n[ALERTS]\ncpu_warn = 70.0\ncpu_crit = 90.0\n\n[LOGGING]\nlevel = \"debug\"\n";

        temp_file.write_all(config_content.as_bytes()).unwrap();
        let config = AppConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.monitor.refresh_ms, 500);
        assert_eq!(config.monitor.history_points, 120);
        assert_eq!(config.monitor.max_connections_rows, 25);
        assert!(!config.monitor.enable_app_usage_tracker);
        assert_eq!(config.alerts.cpu_warn, 70.0);
        assert_eq!(config.alerts.cpu_crit, 90.0);
        // untouched sections keep their defaults
        assert_eq!(config.alerts.ram_warn, 85.0);
        assert_eq!(config.get_log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[MONITOR]\nrefresh_ms = 2000\n")
            .unwrap();
        let config = AppConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.monitor.refresh_ms, 2000);
        assert_eq!(config.monitor.history_points, 60);
        assert_eq!(config.alerts.cpu_crit, 95.0);
    }

    #[test]
    fn test_invalid_log_level_defaults_to_info() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert_eq!(config.get_log_level(), LevelFilter::Info);
    }
}
