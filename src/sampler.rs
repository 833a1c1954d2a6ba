use std::path::Path;

use chrono::Utc;
use sysinfo::{Disks, Networks, System};
use tracing::trace;

use crate::{CpuUsage, DiskUsage, MemoryUsage, MetricSnapshot, NetworkTotals};

/// Stateless sampler deriving instantaneous utilization from the kernel
/// counters. CPU usage needs two reads separated by a short delay; everything
/// else is a single read. Every sampling step is independently fail-soft: a
/// source that cannot be read yields zeroed values instead of an error, so
/// metrics reporting can never crash the monitoring loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricSampler;

impl MetricSampler {
    pub fn new() -> Self {
        Self
    }

    /// Take a full snapshot, stamped with the current time.
    pub async fn sample(&self) -> MetricSnapshot {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;
        // the second refresh also picks up the frequency for the dashboard
        sys.refresh_cpu_all();

        let snapshot = MetricSnapshot {
            cpu: self.sample_cpu(&sys),
            memory: self.sample_memory(&sys),
            disk: self.sample_disk(),
            network: self.sample_network(),
            taken_at: Utc::now(),
        };

        trace!(
            "sampled cpu={}% memory={}% disk={}%",
            snapshot.cpu.percent, snapshot.memory.percent, snapshot.disk.percent
        );

        snapshot
    }

    fn sample_cpu(&self, sys: &System) -> CpuUsage {
        let cpus = sys.cpus();
        if cpus.is_empty() {
            return CpuUsage::default();
        }

        let usage_sum = cpus.iter().map(|cpu| cpu.cpu_usage()).sum::<f32>();

        CpuUsage {
            percent: round1(usage_sum / cpus.len() as f32),
            cores: cpus.len(),
            frequency_mhz: cpus[0].frequency(),
        }
    }

    fn sample_memory(&self, sys: &System) -> MemoryUsage {
        let total = sys.total_memory();
        if total == 0 {
            return MemoryUsage::default();
        }

        let available = sys.available_memory();
        let swap_total = sys.total_swap();
        let swap_used = sys.used_swap();

        MemoryUsage {
            total_bytes: total,
            used_bytes: sys.used_memory(),
            available_bytes: available,
            percent: round1(total.saturating_sub(available) as f32 / total as f32 * 100.0),
            swap_total_bytes: swap_total,
            swap_used_bytes: swap_used,
            swap_percent: if swap_total == 0 {
                0.0
            } else {
                round1(swap_used as f32 / swap_total as f32 * 100.0)
            },
        }
    }

    fn sample_disk(&self) -> DiskUsage {
        let disks = Disks::new_with_refreshed_list();
        let root = disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))
            .or_else(|| disks.list().first());

        let Some(disk) = root else {
            return DiskUsage::default();
        };

        let total = disk.total_space();
        if total == 0 {
            return DiskUsage::default();
        }

        let available = disk.available_space();
        let used = total.saturating_sub(available);

        DiskUsage {
            total_bytes: total,
            used_bytes: used,
            available_bytes: available,
            percent: round1(used as f32 / total as f32 * 100.0),
        }
    }

    fn sample_network(&self) -> NetworkTotals {
        let networks = Networks::new_with_refreshed_list();
        let mut totals = NetworkTotals::default();

        for (name, data) in networks.iter() {
            // loopback traffic is not interesting for an operator
            if name == "lo" || name == "lo0" {
                continue;
            }

            totals.bytes_sent += data.total_transmitted();
            totals.bytes_received += data.total_received();
            totals.packets_sent += data.total_packets_transmitted();
            totals.packets_received += data.total_packets_received();
        }

        totals
    }
}

fn round1(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}
