use anyhow::bail;
use clap::Parser;
use host_sentinel::probe::{DEFAULT_SERVICES, SystemdProbe, check_services};
use host_sentinel::render::services;
use tracing::{level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

/// Check whether systemd services are active and enabled.
#[derive(Debug, Clone, Parser)]
struct Args {
    /// Service units to check
    services: Vec<String>,

    /// Check the default service list instead
    #[arg(long)]
    all: bool,
}

fn init() {
    let filter = filter::Targets::new().with_targets(vec![
        ("host_sentinel", LevelFilter::INFO),
        ("sentinel_services", LevelFilter::INFO),
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

    let names: Vec<String> = if args.all {
        DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect()
    } else if args.services.is_empty() {
        bail!("name at least one service, or pass --all for the default list");
    } else {
        args.services.clone()
    };

    println!("🔍 Checking {} service(s)...", names.len());

    let probe = SystemdProbe::new();
    let states = check_services(&probe, &names).await;

    println!("{}", services::render(&states));

    Ok(())
}
