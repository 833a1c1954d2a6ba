//! Threshold alerting engine.
//!
//! Converts noisy, periodically sampled metrics into deduplicated,
//! cooldown-gated alert events. Data flows one direction per tick:
//!
//! ```text
//! snapshot → evaluate → cooldown gate → history/log → fired events
//! ```
//!
//! A triggered category that is still cooling down produces nothing
//! observable. That is deliberate noise suppression, not a failure.

pub mod cooldown;
pub mod evaluator;
pub mod history;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::config::AlertConfig;
use crate::{AlertEvent, Category, MetricSnapshot};

use cooldown::CooldownTracker;
use history::AlertHistory;

/// Stateful engine for one monitoring session. Owns the configuration
/// (immutable after load), the per-category cooldown state and the bounded
/// alert history.
#[derive(Debug)]
pub struct AlertEngine {
    config: AlertConfig,
    cooldowns: CooldownTracker,
    history: AlertHistory,
}

impl AlertEngine {
    pub fn new(config: AlertConfig) -> Self {
        let cooldowns = CooldownTracker::new(config.alert_cooldown);
        let history = AlertHistory::new(config.log_file.clone());

        Self {
            config,
            cooldowns,
            history,
        }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn history(&self) -> &AlertHistory {
        &self.history
    }

    /// Run one tick worth of checks over the snapshot, in the fixed order
    /// CPU, MEMORY, DISK. A triggered category fires only if its cooldown
    /// window has elapsed; firing appends to the history, persists to the
    /// log and records the fire time before the next category is inspected.
    ///
    /// Returns the alerts that actually fired. An empty result means "no new
    /// alerts", which is not the same thing as "no threshold exceeded".
    pub fn run_checks(&mut self, snapshot: &MetricSnapshot, now: DateTime<Utc>) -> Vec<AlertEvent> {
        let mut fired = Vec::new();

        for category in Category::ALL {
            let value = snapshot.percent(category);
            let threshold = self.config.threshold_for(category);

            if !evaluator::exceeds(value, threshold) {
                continue;
            }

            if !self.cooldowns.can_fire(category, now) {
                trace!("{category}: {value}% over threshold {threshold}%, suppressed by cooldown");
                continue;
            }

            let event = AlertEvent {
                category,
                message: alert_message(category, value, threshold),
                severity: category.severity(),
                fired_at: now,
            };

            debug!("{category}: fired at {value}% (threshold: {threshold}%)");

            self.history.append(event.clone());
            self.history.persist(&event);
            self.cooldowns.record_fire(category, now);
            fired.push(event);
        }

        fired
    }
}

fn alert_message(category: Category, value: f32, threshold: f32) -> String {
    match category {
        Category::Cpu => format!("CPU usage high: {value:.1}% (threshold: {threshold}%)"),
        Category::Memory => format!("memory usage high: {value:.1}% (threshold: {threshold}%)"),
        Category::Disk => format!("disk almost full: {value:.1}% (threshold: {threshold}%)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use crate::{CpuUsage, DiskUsage, MemoryUsage, NetworkTotals, Severity};
    use chrono::TimeZone;

    fn snapshot(cpu: f32, memory: f32, disk: f32) -> MetricSnapshot {
        MetricSnapshot {
            cpu: CpuUsage {
                percent: cpu,
                ..Default::default()
            },
            memory: MemoryUsage {
                percent: memory,
                ..Default::default()
            },
            disk: DiskUsage {
                percent: disk,
                ..Default::default()
            },
            network: NetworkTotals::default(),
            taken_at: Utc::now(),
        }
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn test_engine(cooldown: u64) -> (AlertEngine, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = AlertConfig {
            thresholds: Thresholds {
                cpu: 80.0,
                memory: 85.0,
                disk: 90.0,
            },
            check_interval: 1,
            alert_cooldown: cooldown,
            log_file: dir.path().join("alerts.log"),
            console_alerts: false,
        };
        (AlertEngine::new(config), dir)
    }

    #[test]
    fn quiet_snapshot_fires_nothing() {
        let (mut engine, _dir) = test_engine(300);

        let fired = engine.run_checks(&snapshot(10.0, 20.0, 30.0), at(0));

        assert!(fired.is_empty());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn categories_fire_in_fixed_order() {
        let (mut engine, _dir) = test_engine(300);

        let fired = engine.run_checks(&snapshot(95.0, 95.0, 95.0), at(0));

        let categories: Vec<Category> = fired.iter().map(|event| event.category).collect();
        assert_eq!(
            categories,
            vec![Category::Cpu, Category::Memory, Category::Disk]
        );
    }

    #[test]
    fn value_on_the_threshold_does_not_fire() {
        let (mut engine, _dir) = test_engine(300);

        let fired = engine.run_checks(&snapshot(80.0, 85.0, 90.0), at(0));

        assert!(fired.is_empty());
    }

    #[test]
    fn cooldown_suppresses_and_releases() {
        // cpu=85 at t=0,1,2 with a 2s cooldown: fires, suppressed, fires
        let (mut engine, _dir) = test_engine(2);
        let high_cpu = snapshot(85.0, 0.0, 0.0);

        let first = engine.run_checks(&high_cpu, at(0));
        let second = engine.run_checks(&high_cpu, at(1));
        let third = engine.run_checks(&high_cpu, at(2));

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(third.len(), 1);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn evaluation_is_deterministic_with_exhausted_cooldown() {
        let (mut engine, _dir) = test_engine(0);
        let busy = snapshot(95.0, 90.0, 95.0);

        let first: Vec<Category> = engine
            .run_checks(&busy, at(0))
            .iter()
            .map(|event| event.category)
            .collect();
        let second: Vec<Category> = engine
            .run_checks(&busy, at(0))
            .iter()
            .map(|event| event.category)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn disk_alerts_are_always_critical() {
        let (mut engine, _dir) = test_engine(300);

        let fired = engine.run_checks(&snapshot(0.0, 0.0, 95.0), at(0));

        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].severity, Severity::Critical);
        assert!(fired[0].message.contains("95.0%"));
        assert!(fired[0].message.contains("90%"));
    }

    #[test]
    fn cpu_and_memory_alerts_are_warnings() {
        let (mut engine, _dir) = test_engine(300);

        let fired = engine.run_checks(&snapshot(85.0, 90.0, 0.0), at(0));

        assert_eq!(fired.len(), 2);
        assert!(fired.iter().all(|event| event.severity == Severity::Warning));
    }

    #[test]
    fn suppressed_tick_leaves_no_trace() {
        let (mut engine, _dir) = test_engine(300);
        let high_cpu = snapshot(85.0, 0.0, 0.0);

        engine.run_checks(&high_cpu, at(0));
        engine.run_checks(&high_cpu, at(10));

        // nothing observable from the suppressed second tick
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn log_write_failure_does_not_stop_the_engine() {
        let dir = tempfile::tempdir().unwrap();
        let config = AlertConfig {
            // the log path is a directory, every persist will fail
            log_file: dir.path().to_path_buf(),
            alert_cooldown: 0,
            ..Default::default()
        };
        let mut engine = AlertEngine::new(config);
        let busy = snapshot(95.0, 95.0, 95.0);

        let first = engine.run_checks(&busy, at(0));
        let second = engine.run_checks(&busy, at(1));

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
        assert_eq!(engine.history().len(), 6);
    }
}
