//! Plain-text table for the services binary.

use crate::probe::ServiceState;

const WIDTH: usize = 60;

/// Render the active/enabled table plus the summary line.
pub fn render(services: &[ServiceState]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));
    out.push_str(&format!("{:^WIDTH$}\n", "🔍 SERVICE CHECK"));
    out.push_str(&format!("{}\n\n", "=".repeat(WIDTH)));

    out.push_str(&format!(
        "{:<15} {:<15} {:<15}\n",
        "Service", "Status", "Enabled at boot"
    ));
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));

    let mut active_count = 0;
    for service in services {
        let status = if service.active {
            active_count += 1;
            "✅ active"
        } else {
            "❌ inactive"
        };
        let enabled = if service.enabled { "🟢 yes" } else { "🔴 no" };

        out.push_str(&format!(
            "{:<15} {:<15} {:<15}\n",
            service.name, status, enabled
        ));
    }

    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
    out.push_str(&format!(
        "\n📊 Summary: {} active | {} inactive\n",
        active_count,
        services.len() - active_count
    ));

    out
}
