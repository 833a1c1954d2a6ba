//! Text dashboard and the compact status block of the alerting loop.

use chrono::Local;

use crate::MetricSnapshot;
use crate::config::AlertConfig;

use super::{draw_bar, format_bytes};

const WIDTH: usize = 70;
const BAR_WIDTH: usize = 40;

/// Full dashboard, redrawn by `sentinel-monitor` on every refresh.
pub fn render(snapshot: &MetricSnapshot, config: &AlertConfig) -> String {
    let mut out = String::new();
    let timestamp = snapshot
        .taken_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S");

    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));
    out.push_str(&format!("{:^WIDTH$}\n", "🖥  SYSTEM MONITOR"));
    out.push_str(&format!("{:^WIDTH$}\n", format!("Updated: {timestamp}")));
    out.push_str(&format!("{}\n\n", "=".repeat(WIDTH)));

    out.push_str("💻 CPU\n");
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
    out.push_str(&format!(
        "  Usage:      {}\n",
        draw_bar(snapshot.cpu.percent, BAR_WIDTH)
    ));
    out.push_str(&format!("  Cores:      {}\n", snapshot.cpu.cores));
    out.push_str(&format!(
        "  Frequency:  {} MHz\n",
        snapshot.cpu.frequency_mhz
    ));

    out.push_str("\n💾 MEMORY\n");
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
    out.push_str(&format!(
        "  RAM:        {}\n",
        draw_bar(snapshot.memory.percent, BAR_WIDTH)
    ));
    out.push_str(&format!(
        "  Used:       {} / {}\n",
        format_bytes(snapshot.memory.used_bytes),
        format_bytes(snapshot.memory.total_bytes)
    ));
    out.push_str(&format!(
        "  Available:  {}\n",
        format_bytes(snapshot.memory.available_bytes)
    ));

    if snapshot.memory.swap_total_bytes > 0 {
        out.push_str(&format!(
            "  Swap:       {}\n",
            draw_bar(snapshot.memory.swap_percent, BAR_WIDTH)
        ));
        out.push_str(&format!(
            "              {} / {}\n",
            format_bytes(snapshot.memory.swap_used_bytes),
            format_bytes(snapshot.memory.swap_total_bytes)
        ));
    }

    out.push_str("\n💿 DISK\n");
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
    out.push_str(&format!(
        "  Usage:      {}\n",
        draw_bar(snapshot.disk.percent, BAR_WIDTH)
    ));
    out.push_str(&format!(
        "  Used:       {} / {}\n",
        format_bytes(snapshot.disk.used_bytes),
        format_bytes(snapshot.disk.total_bytes)
    ));
    out.push_str(&format!(
        "  Free:       {}\n",
        format_bytes(snapshot.disk.available_bytes)
    ));

    out.push_str("\n🌐 NETWORK\n");
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
    out.push_str(&format!(
        "  Sent:       {}\n",
        format_bytes(snapshot.network.bytes_sent)
    ));
    out.push_str(&format!(
        "  Received:   {}\n",
        format_bytes(snapshot.network.bytes_received)
    ));
    out.push_str(&format!("  Packets ↑:  {}\n", snapshot.network.packets_sent));
    out.push_str(&format!(
        "  Packets ↓:  {}\n",
        snapshot.network.packets_received
    ));

    let warnings = collect_warnings(snapshot, config);
    if !warnings.is_empty() {
        out.push_str("\n🚨 ALERTS\n");
        out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
        for warning in warnings {
            out.push_str(&format!("  ⚠️  {warning}\n"));
        }
    }

    out.push_str(&format!("\n{}\n", "=".repeat(WIDTH)));
    out.push_str("  Ctrl+C to quit\n");
    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));

    out
}

/// Compact per-category status block used by `sentinel-alerts` between
/// ticks: measured value against the configured threshold.
pub fn render_status(snapshot: &MetricSnapshot, config: &AlertConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));
    out.push_str(&format!("{:^WIDTH$}\n", "🔍 SYSTEM STATUS"));
    out.push_str(&format!("{}\n\n", "=".repeat(WIDTH)));

    out.push_str(&status_line(
        "CPU",
        snapshot.cpu.percent,
        config.thresholds.cpu,
    ));
    out.push_str(&status_line(
        "Memory",
        snapshot.memory.percent,
        config.thresholds.memory,
    ));
    out.push_str(&status_line(
        "Disk",
        snapshot.disk.percent,
        config.thresholds.disk,
    ));

    if snapshot.memory.swap_total_bytes > 0 {
        out.push_str(&format!(
            "   Swap:    {:5.1}% (not alerted)\n",
            snapshot.memory.swap_percent
        ));
    }

    out.push_str(&format!("\n{}", "=".repeat(WIDTH)));
    out
}

fn status_line(label: &str, value: f32, threshold: f32) -> String {
    let icon = if value < threshold { "✅" } else { "⚠️" };
    format!(
        "{icon} {:<8} {value:5.1}% (threshold: {threshold}%)\n",
        format!("{label}:")
    )
}

fn collect_warnings(snapshot: &MetricSnapshot, config: &AlertConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if snapshot.cpu.percent > config.thresholds.cpu {
        warnings.push(format!("CPU high: {:.1}%", snapshot.cpu.percent));
    }
    if snapshot.memory.percent > config.thresholds.memory {
        warnings.push(format!("memory high: {:.1}%", snapshot.memory.percent));
    }
    if snapshot.disk.percent > config.thresholds.disk {
        warnings.push(format!("disk almost full: {:.1}%", snapshot.disk.percent));
    }

    warnings
}
