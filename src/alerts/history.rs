use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

use crate::AlertEvent;

/// Most-recent alerts kept for session summaries.
const HISTORY_CAPACITY: usize = 100;

/// Bounded in-memory record of fired alerts plus the durable append-only log.
/// The log file is opened per write and released immediately, so external log
/// rotation between ticks is safe.
#[derive(Debug)]
pub struct AlertHistory {
    events: VecDeque<AlertEvent>,
    log_file: PathBuf,
}

impl AlertHistory {
    pub fn new(log_file: PathBuf) -> Self {
        Self {
            events: VecDeque::with_capacity(HISTORY_CAPACITY),
            log_file,
        }
    }

    /// Record the event in memory, evicting the oldest entries once the
    /// capacity is exceeded.
    pub fn append(&mut self, event: AlertEvent) {
        self.events.push_back(event);
        while self.events.len() > HISTORY_CAPACITY {
            self.events.pop_front();
        }
    }

    /// Append one formatted line to the alert log. A write failure is reported
    /// to the operator but never interrupts monitoring.
    pub fn persist(&self, event: &AlertEvent) {
        let line = format_log_line(event);
        let result = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.log_file)
            .and_then(|mut file| writeln!(file, "{line}"));

        if let Err(e) = result {
            warn!("could not write to {}: {e}", self.log_file.display());
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Fired alerts in firing order, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &AlertEvent> {
        self.events.iter()
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

/// `[YYYY-MM-DD HH:MM:SS] [LEVEL] [CATEGORY] message`, in local time.
pub fn format_log_line(event: &AlertEvent) -> String {
    format!(
        "[{}] [{}] [{}] {}",
        event.fired_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
        event.severity,
        event.category,
        event.message
    )
}
