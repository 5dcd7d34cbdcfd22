mod input;
mod render;
mod replay;

use clap::{Args, Parser, Subcommand};
use headway_core::DEFAULT_DISK_SIZE;
use headway_scheduler::{EngineConfig, PolicyKind, SeekEngine};
use input::read_requests;
use render::{render_comparison, render_report, OutputFormat};
use replay::{replay, ReplayConfig};
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "headway", about = "Disk head scheduling simulator")]
struct Cli {
    /// Number of cylinders on the disk (valid addresses are 0..disk-size)
    #[arg(long, global = true, env = "HEADWAY_DISK_SIZE", default_value_t = i64::from(DEFAULT_DISK_SIZE))]
    disk_size: i64,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Where the request set and head position come from
#[derive(Args)]
struct InputArgs {
    /// Cylinder requests, comma separated (e.g. "98,183,37,122")
    #[arg(long, allow_hyphen_values = true, conflicts_with = "requests_file")]
    requests: Option<String>,
    /// Read the cylinder requests from a file instead
    #[arg(long)]
    requests_file: Option<PathBuf>,
    /// Starting head position
    #[arg(long, allow_hyphen_values = true)]
    initial: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the seek sequence and head movement for one policy
    Run {
        /// Scheduling policy: FCFS, SSTF, SCAN, CSCAN, LOOK or CLOOK
        #[arg(long)]
        policy: String,
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run every policy over the same input and compare head movement
    Compare {
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Replay the head moves of one policy step by step
    Replay {
        /// Scheduling policy: FCFS, SSTF, SCAN, CSCAN, LOOK or CLOOK
        #[arg(long)]
        policy: String,
        #[command(flatten)]
        input: InputArgs,
        /// Delay between head moves in milliseconds
        #[arg(long, env = "HEADWAY_STEP_DELAY_MS", default_value_t = 1000)]
        delay_ms: u64,
    },
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_json);

    let engine = SeekEngine::new(EngineConfig::with_disk_size(cli.disk_size)?);

    match cli.command {
        Commands::Run {
            policy,
            input,
            format,
        } => run_single(&engine, &policy, &input, format),
        Commands::Compare { input, format } => run_compare(&engine, &input, format),
        Commands::Replay {
            policy,
            input,
            delay_ms,
        } => {
            let config = ReplayConfig {
                step_delay: Duration::from_millis(delay_ms),
            };
            run_replay(&engine, &policy, &input, &config).await
        }
    }
}

/// Initialize tracing, writing to stderr so reports on stdout stay clean
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Compute and print one policy's report
fn run_single(
    engine: &SeekEngine,
    policy: &str,
    input: &InputArgs,
    format: OutputFormat,
) -> miette::Result<()> {
    let raw = read_requests(input.requests.as_deref(), input.requests_file.as_deref())?;
    let report = engine.plan(policy, &raw, &input.initial)?;

    println!("{}", render_report(&report, format)?);
    Ok(())
}

/// Compute and print every policy's report
fn run_compare(engine: &SeekEngine, input: &InputArgs, format: OutputFormat) -> miette::Result<()> {
    let raw = read_requests(input.requests.as_deref(), input.requests_file.as_deref())?;
    let reports = engine.compare(&raw, &input.initial)?;

    println!("{}", render_comparison(&reports, format)?);
    Ok(())
}

/// Replay one policy's moves with a pause between each, until done or Ctrl-C
async fn run_replay(
    engine: &SeekEngine,
    policy: &str,
    input: &InputArgs,
    config: &ReplayConfig,
) -> miette::Result<()> {
    let kind: PolicyKind = policy.parse()?;
    let raw = read_requests(input.requests.as_deref(), input.requests_file.as_deref())?;
    let validated = engine.validate(&raw, &input.initial)?;
    let report = engine.run(kind, &validated);

    let token = CancellationToken::new();
    let ctrl_c_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, stopping replay");
            ctrl_c_token.cancel();
        }
    });

    let mut stdout = std::io::stdout();
    replay(&report, engine.geometry(), config, &token, &mut stdout).await?;
    Ok(())
}
