//! Standalone HTML report: one snapshot plus service states, rendered to a
//! self-contained document.

use chrono::Local;

use crate::MetricSnapshot;
use crate::config::AlertConfig;
use crate::probe::ServiceState;

use super::{format_bytes, status_class};

/// Render the full report document.
pub fn render(
    snapshot: &MetricSnapshot,
    config: &AlertConfig,
    services: &[ServiceState],
    hostname: &str,
) -> String {
    let timestamp = snapshot
        .taken_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>System Report - {hostname}</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            padding: 20px;
            color: #333;
        }}
        .container {{
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            overflow: hidden;
        }}
        .header {{
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 40px;
            text-align: center;
        }}
        .header h1 {{ font-size: 2.5em; margin-bottom: 10px; }}
        .content {{ padding: 40px; }}
        .section {{
            margin-bottom: 40px;
            background: #f8f9fa;
            padding: 30px;
            border-radius: 10px;
            border-left: 5px solid #667eea;
        }}
        .section h2 {{ color: #667eea; margin-bottom: 20px; }}
        .grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 20px;
        }}
        .card {{
            background: white;
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }}
        .card h3 {{ color: #667eea; margin-bottom: 15px; }}
        .stat {{
            display: flex;
            justify-content: space-between;
            padding: 10px 0;
            border-bottom: 1px solid #eee;
        }}
        .stat:last-child {{ border-bottom: none; }}
        .stat-label {{ font-weight: 600; color: #666; }}
        .progress {{
            width: 100%;
            height: 25px;
            background: #e9ecef;
            border-radius: 12px;
            overflow: hidden;
            margin: 10px 0;
        }}
        .progress-bar {{
            height: 100%;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
            font-weight: 600;
            font-size: 0.9em;
        }}
        .progress-bar.good {{ background: linear-gradient(90deg, #28a745 0%, #20c997 100%); }}
        .progress-bar.warning {{ background: linear-gradient(90deg, #ffc107 0%, #fd7e14 100%); }}
        .progress-bar.danger {{ background: linear-gradient(90deg, #dc3545 0%, #c82333 100%); }}
        table {{ width: 100%; border-collapse: collapse; background: white; }}
        th {{ background: #667eea; color: white; padding: 15px; text-align: left; }}
        td {{ padding: 15px; border-bottom: 1px solid #eee; }}
        .service-active {{ color: #28a745; font-weight: 600; }}
        .service-inactive {{ color: #dc3545; font-weight: 600; }}
        .alert {{
            background: #fff3cd;
            border: 1px solid #ffc107;
            border-radius: 10px;
            padding: 15px 20px;
            margin: 20px 0;
            color: #856404;
        }}
        .alert.danger {{ background: #f8d7da; border-color: #dc3545; color: #721c24; }}
        .footer {{
            background: #f8f9fa;
            padding: 20px 40px;
            text-align: center;
            color: #666;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🖥️ System Report</h1>
            <p><strong>Host:</strong> {hostname}</p>
            <p><strong>Generated:</strong> {timestamp}</p>
        </div>
        <div class="content">
            {alerts}
            <div class="section">
                <h2>💻 System Resources</h2>
                <div class="grid">
                    {cpu_card}
                    {memory_card}
                    {disk_card}
                    {network_card}
                </div>
            </div>
            <div class="section">
                <h2>🌐 Service Status</h2>
                <table>
                    <thead>
                        <tr><th>Service</th><th>Status</th><th>Enabled at boot</th></tr>
                    </thead>
                    <tbody>
{service_rows}
                    </tbody>
                </table>
            </div>
        </div>
        <div class="footer">
            <p>📊 Generated automatically by sentinel-report</p>
        </div>
    </div>
</body>
</html>
"#,
        alerts = alert_banner(snapshot, config),
        cpu_card = cpu_card(snapshot),
        memory_card = memory_card(snapshot),
        disk_card = disk_card(snapshot),
        network_card = network_card(snapshot),
        service_rows = service_rows(services),
    )
}

fn progress_bar(percent: f32) -> String {
    format!(
        r#"<div class="progress">
    <div class="progress-bar {class}" style="width: {percent:.1}%">{percent:.1}%</div>
</div>"#,
        class = status_class(percent),
    )
}

fn stat(label: &str, value: &str) -> String {
    format!(
        r#"<div class="stat"><span class="stat-label">{label}</span><span>{value}</span></div>"#
    )
}

fn cpu_card(snapshot: &MetricSnapshot) -> String {
    format!(
        r#"<div class="card">
    <h3>Processor</h3>
    {usage}
    {bar}
    {cores}
    {frequency}
</div>"#,
        usage = stat("Usage", &format!("{:.1}%", snapshot.cpu.percent)),
        bar = progress_bar(snapshot.cpu.percent),
        cores = stat("Cores", &snapshot.cpu.cores.to_string()),
        frequency = stat("Frequency", &format!("{} MHz", snapshot.cpu.frequency_mhz)),
    )
}

fn memory_card(snapshot: &MetricSnapshot) -> String {
    format!(
        r#"<div class="card">
    <h3>Memory</h3>
    {usage}
    {bar}
    {total}
    {used}
    {available}
</div>"#,
        usage = stat("Usage", &format!("{:.1}%", snapshot.memory.percent)),
        bar = progress_bar(snapshot.memory.percent),
        total = stat("Total", &format_bytes(snapshot.memory.total_bytes)),
        used = stat("Used", &format_bytes(snapshot.memory.used_bytes)),
        available = stat("Available", &format_bytes(snapshot.memory.available_bytes)),
    )
}

fn disk_card(snapshot: &MetricSnapshot) -> String {
    format!(
        r#"<div class="card">
    <h3>Disk</h3>
    {usage}
    {bar}
    {total}
    {used}
    {free}
</div>"#,
        usage = stat("Usage", &format!("{:.1}%", snapshot.disk.percent)),
        bar = progress_bar(snapshot.disk.percent),
        total = stat("Total", &format_bytes(snapshot.disk.total_bytes)),
        used = stat("Used", &format_bytes(snapshot.disk.used_bytes)),
        free = stat("Free", &format_bytes(snapshot.disk.available_bytes)),
    )
}

fn network_card(snapshot: &MetricSnapshot) -> String {
    format!(
        r#"<div class="card">
    <h3>Network</h3>
    {sent}
    {received}
    {packets_sent}
    {packets_received}
</div>"#,
        sent = stat("Data sent", &format_bytes(snapshot.network.bytes_sent)),
        received = stat("Data received", &format_bytes(snapshot.network.bytes_received)),
        packets_sent = stat("Packets sent", &snapshot.network.packets_sent.to_string()),
        packets_received = stat(
            "Packets received",
            &snapshot.network.packets_received.to_string()
        ),
    )
}

fn service_rows(services: &[ServiceState]) -> String {
    services
        .iter()
        .map(|service| {
            let (class, text) = if service.active {
                ("service-active", "✅ active")
            } else {
                ("service-inactive", "❌ inactive")
            };
            let enabled = if service.enabled { "🟢 yes" } else { "🔴 no" };

            format!(
                r#"                        <tr><td>{}</td><td class="{class}">{text}</td><td>{enabled}</td></tr>"#,
                service.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn alert_banner(snapshot: &MetricSnapshot, config: &AlertConfig) -> String {
    let mut alerts = Vec::new();

    if snapshot.cpu.percent > config.thresholds.cpu {
        alerts.push(format!("⚠️ CPU high: {:.1}%", snapshot.cpu.percent));
    }
    if snapshot.memory.percent > config.thresholds.memory {
        alerts.push(format!("⚠️ Memory high: {:.1}%", snapshot.memory.percent));
    }
    if snapshot.disk.percent > config.thresholds.disk {
        alerts.push(format!("⚠️ Disk almost full: {:.1}%", snapshot.disk.percent));
    }

    if alerts.is_empty() {
        return String::new();
    }

    let class = if [
        snapshot.cpu.percent,
        snapshot.memory.percent,
        snapshot.disk.percent,
    ]
    .iter()
    .any(|percent| *percent > 90.0)
    {
        "alert danger"
    } else {
        "alert"
    };

    let items: String = alerts
        .iter()
        .map(|alert| format!("<li>{alert}</li>"))
        .collect();

    format!(r#"<div class="{class}"><strong>Alerts detected:</strong><ul>{items}</ul></div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CpuUsage, DiskUsage, MemoryUsage, NetworkTotals};
    use chrono::Utc;

    fn snapshot(cpu: f32, memory: f32, disk: f32) -> MetricSnapshot {
        MetricSnapshot {
            cpu: CpuUsage {
                percent: cpu,
                cores: 4,
                frequency_mhz: 3000,
            },
            memory: MemoryUsage {
                total_bytes: 8 << 30,
                used_bytes: 4 << 30,
                available_bytes: 4 << 30,
                percent: memory,
                ..Default::default()
            },
            disk: DiskUsage {
                total_bytes: 100 << 30,
                used_bytes: 50 << 30,
                available_bytes: 50 << 30,
                percent: disk,
            },
            network: NetworkTotals::default(),
            taken_at: Utc::now(),
        }
    }

    fn services() -> Vec<ServiceState> {
        vec![
            ServiceState {
                name: "nginx".to_string(),
                active: true,
                enabled: true,
            },
            ServiceState {
                name: "mysql".to_string(),
                active: false,
                enabled: false,
            },
        ]
    }

    #[test]
    fn report_embeds_host_and_services() {
        let html = render(
            &snapshot(10.0, 20.0, 30.0),
            &AlertConfig::default(),
            &services(),
            "test-host",
        );

        assert!(html.contains("<strong>Host:</strong> test-host"));
        assert!(html.contains("nginx"));
        assert!(html.contains("service-active"));
        assert!(html.contains("mysql"));
        assert!(html.contains("service-inactive"));
        assert!(!html.contains("Alerts detected"));
    }

    #[test]
    fn report_banner_appears_when_thresholds_are_exceeded() {
        let html = render(
            &snapshot(85.0, 20.0, 30.0),
            &AlertConfig::default(),
            &services(),
            "test-host",
        );

        assert!(html.contains("Alerts detected"));
        assert!(html.contains("⚠️ CPU high: 85.0%"));
        // nothing above 90%, the softer banner style is used
        assert!(!html.contains("alert danger"));
    }

    #[test]
    fn report_banner_escalates_above_ninety_percent() {
        let html = render(
            &snapshot(10.0, 20.0, 95.0),
            &AlertConfig::default(),
            &services(),
            "test-host",
        );

        assert!(html.contains("alert danger"));
        assert!(html.contains("⚠️ Disk almost full: 95.0%"));
    }

    #[test]
    fn progress_bars_carry_the_level_class() {
        let html = render(
            &snapshot(10.0, 60.0, 85.0),
            &AlertConfig::default(),
            &services(),
            "test-host",
        );

        assert!(html.contains(r#"progress-bar good" style="width: 10.0%"#));
        assert!(html.contains(r#"progress-bar warning" style="width: 60.0%"#));
        assert!(html.contains(r#"progress-bar danger" style="width: 85.0%"#));
    }
}
