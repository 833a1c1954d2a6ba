//! Pure presentation over the core metric and alert types. Renderers are
//! functions of their inputs and have no effect on engine state.

pub mod dashboard;
pub mod report;
pub mod services;

const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Human-readable byte count with one decimal, 1024-based units.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }

    format!("{value:.1} PB")
}

/// ANSI progress bar with a level color: green under 50%, yellow under 80%,
/// red from there on.
pub fn draw_bar(percent: f32, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f32) as usize;

    let color = if percent < 50.0 {
        GREEN
    } else if percent < 80.0 {
        YELLOW
    } else {
        RED
    };

    format!(
        "[{color}{}{RESET}{}] {percent:.1}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
    )
}

/// CSS class of the HTML report's progress bars, same cut points as
/// [`draw_bar`].
pub(crate) fn status_class(percent: f32) -> &'static str {
    if percent < 50.0 {
        "good"
    } else if percent < 80.0 {
        "warning"
    } else {
        "danger"
    }
}
