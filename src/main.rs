//! Failover verification CLI.
//!
//! Drives the blue/green failover verification procedure against a running
//! deployment, or issues individual probes / chaos toggles for manual
//! diagnosis. The overall verdict is the process exit code: 0 for pass,
//! 1 for fail (including a baseline abort).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use failover_verify::chaos::ChaosClient;
use failover_verify::config::{load_config, VerifyConfig};
use failover_verify::probe::Prober;
use failover_verify::report;
use failover_verify::verify::VerificationRun;

#[derive(Parser)]
#[command(name = "failover-verify")]
#[command(about = "Blue/green failover verification against a running deployment", long_about = None)]
struct Cli {
    /// Base URL of the service under test.
    #[arg(long)]
    service_url: Option<String>,

    /// Base URL of the chaos-control endpoint.
    #[arg(long)]
    chaos_url: Option<String>,

    /// Optional TOML config file; CLI URL flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full failover verification procedure
    Run,
    /// Issue a single probe and print status and serving pool
    Probe,
    /// Manually toggle fault injection
    Chaos {
        #[command(subcommand)]
        action: ChaosAction,
    },
}

#[derive(Subcommand)]
enum ChaosAction {
    /// Begin fault injection on the primary pool
    Start {
        /// Fault mode to request
        #[arg(long, default_value = "error")]
        mode: String,
    },
    /// End fault injection
    Stop,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "failover_verify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => VerifyConfig::default(),
    };
    if let Some(url) = cli.service_url {
        config.endpoints.service_url = url;
    }
    if let Some(url) = cli.chaos_url {
        config.endpoints.chaos_url = url;
    }

    tracing::info!(
        service_url = %config.endpoints.service_url,
        chaos_url = %config.endpoints.chaos_url,
        "failover-verify starting"
    );

    match cli.command {
        Commands::Run => {
            let run = VerificationRun::new(config)?;
            let report = run.run().await?;
            report::print_summary(&report);
            std::process::exit(report.exit_code());
        }
        Commands::Probe => {
            let prober = Prober::new(&config.endpoints, &config.http)?;
            let outcome = prober.probe().await;
            match outcome.status {
                Some(status) => println!("status={} pool={}", status, outcome.pool),
                None => println!("status=unreachable pool={}", outcome.pool),
            }
        }
        Commands::Chaos { action } => {
            let chaos = ChaosClient::new(&config.endpoints, &config.http)?;
            match action {
                ChaosAction::Start { mode } => chaos.start(&mode).await?,
                ChaosAction::Stop => chaos.stop().await?,
            }
            println!("ok");
        }
    }

    Ok(())
}
