use std::path::PathBuf;

use clap::Parser;
use host_sentinel::alerts::AlertEngine;
use host_sentinel::config;
use host_sentinel::monitor::MonitorLoop;
use tracing::{level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

/// Threshold-based alerting for local host resources.
#[derive(Debug, Clone, Parser)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = "alerts.json")]
    config: PathBuf,

    /// Run a single check pass and exit
    #[arg(long)]
    test: bool,
}

fn init() {
    let filter = filter::Targets::new().with_targets(vec![
        ("host_sentinel", LevelFilter::DEBUG),
        ("sentinel_alerts", LevelFilter::DEBUG),
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

    let config = config::load_or_create(&args.config);
    let engine = AlertEngine::new(config);
    let mut monitor = MonitorLoop::new(engine);

    if args.test {
        println!("🧪 Test mode - single check\n");
        monitor.run_once().await;
    } else {
        monitor.run().await;
    }

    Ok(())
}
