use std::path::PathBuf;

use clap::Parser;
use host_sentinel::config::AlertConfig;
use host_sentinel::probe::{DEFAULT_SERVICES, SystemdProbe, check_services};
use host_sentinel::render::report;
use host_sentinel::sampler::MetricSampler;
use sysinfo::System;
use tracing::{level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate an HTML report of the local host resources and service states.
#[derive(Debug, Clone, Parser)]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "report.html")]
    output: PathBuf,
}

fn init() {
    let filter = filter::Targets::new().with_targets(vec![
        ("host_sentinel", LevelFilter::INFO),
        ("sentinel_report", LevelFilter::INFO),
    ]);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();
    let args = Args::parse();
    trace!("started with args: {args:?}");

    println!("🔍 Collecting system information...");

    let snapshot = MetricSampler::new().sample().await;

    let probe = SystemdProbe::new();
    let names: Vec<String> = DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect();
    let services = check_services(&probe, &names).await;

    let hostname = System::host_name().unwrap_or_else(|| "unknown".to_string());

    println!("📊 Generating HTML report...");
    let html = report::render(&snapshot, &AlertConfig::default(), &services, &hostname);
    std::fs::write(&args.output, html)?;

    println!("\n✅ Report generated");
    println!("📁 File: {}", args.output.display());

    Ok(())
}
