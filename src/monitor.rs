use std::time::Duration;

use chrono::Utc;
use tokio::signal;
use tracing::debug;

use crate::alerts::AlertEngine;
use crate::render::dashboard;
use crate::sampler::MetricSampler;

/// Lifecycle of a monitoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Drives the alert engine on a fixed interval. One logical actor runs one
/// tick at a time; the interval sleep is the sole preemption point, so a
/// cancellation never interrupts a tick mid-flight.
pub struct MonitorLoop {
    sampler: MetricSampler,
    engine: AlertEngine,
    state: LoopState,
}

impl MonitorLoop {
    pub fn new(engine: AlertEngine) -> Self {
        Self {
            sampler: MetricSampler::new(),
            engine,
            state: LoopState::Stopped,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn engine(&self) -> &AlertEngine {
        &self.engine
    }

    /// Continuous monitoring until the operator cancels with Ctrl+C. Prints
    /// a session summary before transitioning back to stopped.
    pub async fn run(&mut self) {
        let interval = Duration::from_secs(self.engine.config().check_interval);

        self.state = LoopState::Running;
        debug!("starting monitoring loop, interval {:?}", interval);

        println!("🚀 Alerting started");
        println!("⏱  Check interval: {}s", self.engine.config().check_interval);
        println!("📝 Alert log: {}", self.engine.config().log_file.display());
        println!("💡 Press Ctrl+C to stop\n");

        loop {
            self.tick().await;

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = signal::ctrl_c() => break,
            }
        }

        println!("\n✋ Stopping alerting...");
        println!(
            "📊 Alerts recorded in this session: {}",
            self.engine.history().len()
        );

        self.state = LoopState::Stopped;
        debug!("monitoring loop stopped");
    }

    /// Test mode: exactly one tick, then return without sleeping or looping.
    pub async fn run_once(&mut self) {
        self.state = LoopState::Running;
        self.tick().await;
        self.state = LoopState::Stopped;
    }

    /// One tick: sample, render the status block, evaluate, render the
    /// outcome. Every side effect of the tick (history append, log write)
    /// completes here, before the loop can observe a cancellation.
    async fn tick(&mut self) {
        let snapshot = self.sampler.sample().await;

        println!(
            "{}",
            dashboard::render_status(&snapshot, self.engine.config())
        );

        let console_alerts = self.engine.config().console_alerts;
        let fired = self.engine.run_checks(&snapshot, Utc::now());

        if fired.is_empty() {
            println!("✅ No alerts - system OK\n");
            return;
        }

        if console_alerts {
            for event in &fired {
                println!("⚠️  ALERT: {}", event.message);
            }
        }

        let categories: Vec<String> = fired
            .iter()
            .map(|event| event.category.to_string())
            .collect();
        println!("🚨 {} alert(s) fired: {}\n", fired.len(), categories.join(", "));
    }
}
