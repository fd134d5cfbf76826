//! `groove` — command-line frontend for the PetGroove rendering service.

mod commands;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use groove_client::{ClientConfig, GrooveClient};

#[derive(Debug, Parser)]
#[command(name = "groove", version, about = "Turn a pet photo into a short video")]
struct Cli {
    /// Base URL of the PetGroove API (overrides GROOVE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Seconds between status polls (overrides GROOVE_POLL_INTERVAL)
    #[arg(long, global = true)]
    poll_interval: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit a render job and wait for the result
    Submit(SubmitArgs),
    /// Show the current status of a job
    Status {
        /// Job identifier
        job_id: String,
    },
    /// Poll an existing job until it reaches a terminal state
    Watch {
        /// Job identifier
        job_id: String,
        /// Download the result video to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check whether the service is reachable and healthy
    Health,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true)))]
pub(crate) struct SubmitArgs {
    /// Image URL to animate
    #[arg(long, group = "source")]
    pub(crate) image_url: Option<String>,

    /// Local image file to upload first
    #[arg(long, group = "source")]
    pub(crate) file: Option<PathBuf>,

    /// Motion preset identifier
    #[arg(long)]
    pub(crate) motion: String,

    /// Render style
    #[arg(long, default_value = groove_models::DEFAULT_STYLE)]
    pub(crate) style: String,

    /// Create the job and exit without polling
    #[arg(long)]
    pub(crate) no_wait: bool,

    /// Download the result video to this path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.poll_interval {
        config = config.with_poll_interval(Duration::from_secs(secs));
    }

    tracing::debug!(
        "using API at {} (poll every {:?})",
        config.base_url,
        config.poll_interval
    );
    let client = GrooveClient::new(config)?;

    match cli.command {
        Command::Submit(args) => commands::submit(&client, args).await,
        Command::Status { job_id } => commands::status(&client, &job_id).await,
        Command::Watch { job_id, output } => {
            commands::watch(&client, &job_id, output.as_deref()).await
        }
        Command::Health => commands::health(&client).await,
    }
}
