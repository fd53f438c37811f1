/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Interactive work update submission, backend queries or maintenance
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or logging setup
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use intern_tracker_client::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "intern-tracker", version, about = "Daily intern work update tracker")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Overrides log.level from the config file
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    /// Overrides api.base_url from the config file
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in today's work update and answer the follow-up questions
    Submit,
    /// Check backend and database health
    Health,
    /// Show work update, temporary update and session counts
    Stats,
    /// Delete temporary work updates whose follow-up was never completed
    Cleanup {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List follow-up sessions of a user
    Sessions {
        #[arg(long = "user", value_name = "ID")]
        user: String,
        #[arg(long, default_value_t = 150)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        skip: u32,
    },
    /// Show a single follow-up session
    Session {
        #[arg(value_name = "ID")]
        session_id: String,
    },
    /// Write a configuration file interactively
    Init {
        #[arg(long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Command::Init { output }) = &args.command {
        let output = match output {
            Some(path) => path.clone(),
            None => AppConfig::default_path().context("no config directory on this platform")?,
        };
        return cli::init::run_init(output);
    }

    let config = load_config(args.config_path.as_deref(), args.api_url.as_deref())?;
    let log_level = args.log_level.as_deref().unwrap_or(&config.log.level);

    if args.dry_run {
        init_tracing(log_level)?;
        info!(
            base_url = %config.api.base_url,
            timeout_secs = config.api.timeout_secs,
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    match args.command.unwrap_or(Command::Submit) {
        Command::Submit => {
            let _guard = init_file_tracing(log_level, &config.log.log_directory())?;
            info!(base_url = %config.api.base_url, "starting interactive session");
            cli::interactive::run_interactive(&config).await
        }
        Command::Health => {
            init_tracing(log_level)?;
            cli::query::run_health(&config).await
        }
        Command::Stats => {
            init_tracing(log_level)?;
            cli::query::run_stats(&config).await
        }
        Command::Cleanup { yes } => {
            init_tracing(log_level)?;
            cli::query::run_cleanup(&config, yes).await
        }
        Command::Sessions { user, limit, skip } => {
            init_tracing(log_level)?;
            cli::query::run_sessions(&config, &user, limit, skip).await
        }
        Command::Session { session_id } => {
            init_tracing(log_level)?;
            cli::query::run_session(&config, &session_id).await
        }
        Command::Init { .. } => Ok(()),
    }
}

fn load_config(path: Option<&Path>, api_url: Option<&str>) -> Result<AppConfig> {
    let mut config = AppConfig::load(path).context("load config")?;
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
    }
    config.validate().context("validate config")?;
    Ok(config)
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// Log to a daily rolling file so output does not interleave with prompts
fn init_file_tracing(log_level: &str, directory: &Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::daily(directory, "intern-tracker.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
