mod config;
mod connectors;
mod monitoring;
mod report;
mod utils;
mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use config::Config;
use connectors::MetricsClient;

#[derive(Parser)]
#[command(name = "sessionwatch", version, about = "WebSocket session cleanup monitor")]
struct AppCli {
    /// Backend base URL (overrides config file and environment)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the guided cleanup monitoring flow
    Watch,
    /// List WebSocket sessions once
    Sessions {
        /// Include disconnected sessions, as raw JSON
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Show backend health status
    Health,
    /// Trigger the backend's manual session cleanup probe
    Cleanup,
}

fn load_config(args: &AppCli) -> Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env_or_default(),
    };
    if let Some(url) = &args.base_url {
        cfg.base_url = url.clone();
    }
    Ok(cfg)
}

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init();

    let args = AppCli::parse();
    let config = load_config(&args)?;

    match args.command {
        Some(Commands::Sessions { all }) => {
            let client = MetricsClient::new(&config.base_url, config.request_timeout())?;
            let sessions = client.session_metrics().await?;
            if all {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else {
                report::print_active_sessions(&sessions);
            }
        }
        Some(Commands::Health) => {
            let client = MetricsClient::new(&config.base_url, config.request_timeout())?;
            let health = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        Some(Commands::Cleanup) => {
            let client = MetricsClient::new(&config.base_url, config.request_timeout())?;
            let report = client.trigger_cleanup().await?;
            info!(active_sessions = report.active_sessions, "cleanup probe completed");
            println!("{}: {}", report.status, report.message);
            if let Some(note) = report.note {
                println!("{note}");
            }
            if let Some(issue) = report.issue {
                println!("{issue}");
            }
        }
        Some(Commands::Watch) | None => {
            // SIGINT during a monitoring run is a normal way to stop; exit 0.
            tokio::select! {
                res = watch::run(&config) => res?,
                _ = tokio::signal::ctrl_c() => {
                    println!("\n\nMonitoring stopped by user");
                }
            }
        }
    }

    Ok(())
}
