use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

/// How long a `systemctl` query may take before the service is treated as
/// not running.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Services inspected when the operator does not name any.
pub const DEFAULT_SERVICES: [&str; 7] = [
    "nginx",
    "apache2",
    "ssh",
    "mysql",
    "postgresql",
    "docker",
    "cron",
];

/// External probe for service state, consumed by the report and services
/// renderers (never by the alert engine). Both queries are fail-soft: a spawn
/// error, a timeout or a negative answer all read as `false`.
#[async_trait]
pub trait ServiceProbe: Send + Sync {
    async fn is_active(&self, name: &str) -> bool;
    async fn is_enabled(&self, name: &str) -> bool;
}

/// Probe backed by `systemctl`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemdProbe;

impl SystemdProbe {
    pub fn new() -> Self {
        Self
    }

    async fn query(&self, verb: &str, name: &str) -> Option<String> {
        let output = timeout(
            PROBE_TIMEOUT,
            Command::new("systemctl").arg(verb).arg(name).output(),
        )
        .await
        .ok()?
        .ok()?;

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl ServiceProbe for SystemdProbe {
    async fn is_active(&self, name: &str) -> bool {
        let answer = self.query("is-active", name).await;
        trace!("systemctl is-active {name}: {answer:?}");
        answer.as_deref() == Some("active")
    }

    async fn is_enabled(&self, name: &str) -> bool {
        let answer = self.query("is-enabled", name).await;
        trace!("systemctl is-enabled {name}: {answer:?}");
        answer.as_deref() == Some("enabled")
    }
}

/// Active/enabled state of one service unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceState {
    pub name: String,
    pub active: bool,
    pub enabled: bool,
}

/// Query the probe for every named service, in order.
pub async fn check_services(probe: &dyn ServiceProbe, names: &[String]) -> Vec<ServiceState> {
    let mut states = Vec::with_capacity(names.len());

    for name in names {
        states.push(ServiceState {
            name: name.clone(),
            active: probe.is_active(name).await,
            enabled: probe.is_enabled(name).await,
        });
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe {
        active: &'static [&'static str],
        enabled: &'static [&'static str],
    }

    #[async_trait]
    impl ServiceProbe for FixedProbe {
        async fn is_active(&self, name: &str) -> bool {
            self.active.contains(&name)
        }

        async fn is_enabled(&self, name: &str) -> bool {
            self.enabled.contains(&name)
        }
    }

    #[tokio::test]
    async fn check_services_preserves_order_and_state() {
        let probe = FixedProbe {
            active: &["nginx"],
            enabled: &["nginx", "ssh"],
        };
        let names = vec!["nginx".to_string(), "ssh".to_string()];

        let states = check_services(&probe, &names).await;

        assert_eq!(
            states,
            vec![
                ServiceState {
                    name: "nginx".to_string(),
                    active: true,
                    enabled: true,
                },
                ServiceState {
                    name: "ssh".to_string(),
                    active: false,
                    enabled: true,
                },
            ]
        );
    }

    #[tokio::test]
    async fn probe_is_fail_soft_for_unknown_units() {
        // works whether or not systemctl exists on the test host: every
        // failure mode must read as inactive
        let probe = SystemdProbe::new();

        assert!(!probe.is_active("definitely-not-a-real-unit-xyz").await);
        assert!(!probe.is_enabled("definitely-not-a-real-unit-xyz").await);
    }
}
