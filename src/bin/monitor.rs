use std::io::stdout;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use host_sentinel::config::AlertConfig;
use host_sentinel::render::dashboard;
use host_sentinel::sampler::MetricSampler;
use tracing::{level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

/// Live dashboard of local host resources.
#[derive(Debug, Clone, Parser)]
struct Args {
    /// Refresh interval in seconds
    #[arg(short, long, default_value_t = 3)]
    interval: u64,
}

fn init() {
    let filter = filter::Targets::new().with_targets(vec![
        ("host_sentinel", LevelFilter::WARN),
        ("sentinel_monitor", LevelFilter::WARN),
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

    println!("🚀 Starting monitor (interval: {}s)", args.interval);
    println!("💡 Press Ctrl+C to stop");

    let sampler = MetricSampler::new();
    // display thresholds for the inline alert section
    let config = AlertConfig::default();

    loop {
        let snapshot = sampler.sample().await;

        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        println!("{}", dashboard::render(&snapshot, &config));

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(args.interval)) => {}
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    println!("\n✋ Monitor stopped");
    Ok(())
}
