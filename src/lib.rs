pub mod alerts;
pub mod config;
pub mod monitor;
pub mod probe;
pub mod render;
pub mod sampler;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub cpu: CpuUsage,
    pub memory: MemoryUsage,
    pub disk: DiskUsage,
    pub network: NetworkTotals,
    pub taken_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuUsage {
    pub percent: f32,
    pub cores: usize,
    pub frequency_mhz: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub percent: f32,
    pub swap_total_bytes: u64,
    pub swap_used_bytes: u64,
    pub swap_percent: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub percent: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkTotals {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
}

impl MetricSnapshot {
    /// The utilization percentage inspected for alerting in this category.
    pub fn percent(&self, category: Category) -> f32 {
        match category {
            Category::Cpu => self.cpu.percent,
            Category::Memory => self.memory.percent,
            Category::Disk => self.disk.percent,
        }
    }
}

/// Monitored resource category. The set is closed: thresholds, cooldowns and
/// severities are all keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Cpu,
    Memory,
    Disk,
}

impl Category {
    /// Evaluation order of a monitoring tick.
    pub const ALL: [Category; 3] = [Category::Cpu, Category::Memory, Category::Disk];

    /// Severity attached to alerts of this category. Fixed mapping, not
    /// configurable: disk alerts are always critical.
    pub fn severity(self) -> Severity {
        match self {
            Category::Disk => Severity::Critical,
            Category::Cpu | Category::Memory => Severity::Warning,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Cpu => 0,
            Category::Memory => 1,
            Category::Disk => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Cpu => "CPU",
            Category::Memory => "MEMORY",
            Category::Disk => "DISK",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{label}")
    }
}

/// A fired alert. Created only by the alert engine, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub category: Category,
    pub message: String,
    pub severity: Severity,
    pub fired_at: DateTime<Utc>,
}
