use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use crate::Category;

/// Alerting configuration, read from a JSON file once at startup and
/// immutable for the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Seconds between two monitoring ticks.
    #[serde(default = "default_check_interval")]
    pub check_interval: u64,

    /// Minimum seconds between two fired alerts of the same category.
    #[serde(default = "default_alert_cooldown")]
    pub alert_cooldown: u64,

    /// Append-only alert log.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Print fired alerts to the operator console.
    #[serde(default = "default_console_alerts")]
    pub console_alerts: bool,
}

/// Per-category trigger thresholds in percent. Values above 100 are legal and
/// effectively disable the check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_cpu_threshold")]
    pub cpu: f32,
    #[serde(default = "default_memory_threshold")]
    pub memory: f32,
    #[serde(default = "default_disk_threshold")]
    pub disk: f32,
}

impl AlertConfig {
    pub fn threshold_for(&self, category: Category) -> f32 {
        match category {
            Category::Cpu => self.thresholds.cpu,
            Category::Memory => self.thresholds.memory,
            Category::Disk => self.thresholds.disk,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            check_interval: default_check_interval(),
            alert_cooldown: default_alert_cooldown(),
            log_file: default_log_file(),
            console_alerts: default_console_alerts(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu: default_cpu_threshold(),
            memory: default_memory_threshold(),
            disk: default_disk_threshold(),
        }
    }
}

fn default_cpu_threshold() -> f32 {
    80.0
}

fn default_memory_threshold() -> f32 {
    85.0
}

fn default_disk_threshold() -> f32 {
    90.0
}

fn default_check_interval() -> u64 {
    60
}

fn default_alert_cooldown() -> u64 {
    300
}

fn default_log_file() -> PathBuf {
    PathBuf::from("alerts.log")
}

fn default_console_alerts() -> bool {
    true
}

/// Load the configuration, recovering locally from every failure mode: a
/// missing file is created with the defaults, a malformed one falls back to
/// the defaults with a warning. Never fails the process.
pub fn load_or_create(path: &Path) -> AlertConfig {
    if !path.exists() {
        let config = AlertConfig::default();
        match write_config_file(path, &config) {
            Ok(()) => info!(
                "{} not found, created it with the default configuration",
                path.display()
            ),
            Err(e) => warn!("could not create configuration file {}: {e}", path.display()),
        }
        return config;
    }

    match read_config_file(path) {
        Ok(config) => {
            info!("configuration loaded from {}", path.display());
            config
        }
        Err(e) => {
            warn!(
                "{}: {e}, falling back to the default configuration",
                path.display()
            );
            AlertConfig::default()
        }
    }
}

pub fn read_config_file(path: &Path) -> anyhow::Result<AlertConfig> {
    let file_content = std::fs::read_to_string(path)?;
    serde_json::from_str(&file_content)
        .map_err(|_| anyhow::anyhow!("Invalid configuration file provided!"))
        .inspect(|config| trace!("loaded config: {config:?}"))
}

fn write_config_file(path: &Path, config: &AlertConfig) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
