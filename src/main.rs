mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::release::{self, ReleaseCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::jira::JiraClient;
use crate::workflow::release::ReleaseOutcome;

#[derive(Parser)]
#[command(
    name = "relnotes",
    author,
    version,
    about = "Release notes from the finished Jira subtasks of the current branch"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Exit with a non-zero status when the run fails.
    #[arg(long, global = true)]
    fail_on_error: bool,

    /// Read settings from this file instead of the nearest `.env`.
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write RELEASE_NOTES.md from the Done subtasks of the branch's ticket (default).
    Generate(GenerateArgs),
    /// Inspect the configuration read from the environment.
    Config(ConfigArgs),
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Branch name to resolve the ticket from, instead of $BRANCH_NAME.
    #[arg(short, long)]
    branch: Option<String>,

    /// Where the fetched subtasks are persisted.
    #[arg(long)]
    subtasks_file: Option<PathBuf>,

    /// Release notes output file.
    #[arg(long)]
    release_file: Option<PathBuf>,

    /// Board used for issue links, instead of $JIRA_BOARD_ID.
    #[arg(long)]
    board_id: Option<u32>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let fail_on_error = cli.fail_on_error;
    if let Err(error) = run(cli).await {
        error!("Error: {error}");
        if fail_on_error {
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.env_file {
        Some(path) => AppConfig::from_env_file(path)?,
        None => AppConfig::from_env()?,
    };

    match cli.command {
        Some(Commands::Config(args)) => config_cmd::run(args.command, &config),
        Some(Commands::Generate(args)) => run_generate(config, args).await,
        None => run_generate(config, GenerateArgs::default()).await,
    }
}

async fn run_generate(mut config: AppConfig, args: GenerateArgs) -> AppResult<()> {
    if let Some(path) = args.subtasks_file {
        config.subtasks_path = path;
    }
    if let Some(path) = args.release_file {
        config.release_path = path;
    }
    if let Some(board_id) = args.board_id {
        config.board_id = board_id;
    }
    config.warn_on_missing();

    let issue_tracker = Arc::new(JiraClient::new(
        config.site_url(),
        config.jira_email.clone(),
        config.jira_token.clone(),
    ));
    let context = AppContext::new(config, issue_tracker);

    let outcome = release::run(&context, ReleaseCommandArgs { branch: args.branch }).await?;

    match outcome {
        ReleaseOutcome::IssueNotFound { ticket } => {
            info!("Issue {ticket} not found. Exiting");
        }
        ReleaseOutcome::Written(summary) => {
            info!(
                "Release notes for {} written to {} from {} ({} done, {} skipped)",
                summary.ticket,
                summary.release_path.display(),
                summary.subtasks_path.display(),
                summary.included.len(),
                summary.skipped
            );
        }
    }

    Ok(())
}
