use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use lab_core::{FixedClock, SystemClock};
use lab_ui::{
    app,
    config::{AppConfig, CliOverrides, DEFAULT_LOG_LEVEL},
    csv_loader, logging, views,
};

/// Log file used by the terminal UI when none is configured, since stdout
/// belongs to the UI while it runs.
const DEFAULT_TUI_LOG_FILE: &str = "lab-reservations.log";

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Laboratory room reservations.
///
/// Collects reservation requests, enforces the minimum lead time and
/// one booking per lab per day, and exports a plain-text report.
#[derive(Debug, Parser)]
#[command(name = "lab-reservations", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug`); overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to this file; overrides the config file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive reservation form and listing (default).
    Tui,

    /// Submit every draft in a CSV file, then write the report.
    Import {
        /// CSV file of drafts.
        #[arg(short, long)]
        file: PathBuf,

        /// Directory for `relatorio_reservas.txt`; overrides the config file.
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Treat this date (YYYY-MM-DD) as today for the lead-time rule.
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Print the lab catalogue.
    Labs,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_logging(DEFAULT_LOG_LEVEL);

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);
    let report_dir = match &command {
        Command::Import { report_dir, .. } => report_dir.clone(),
        Command::Tui | Command::Labs => None,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_overrides(CliOverrides {
        log_level: cli.log_level,
        log_file: cli.log_file,
        report_dir,
    });
    apply_logging(&config)?;
    debug!(?config, "configuration loaded");

    match command {
        Command::Tui => run_tui(config),
        Command::Import { file, today, .. } => run_import(&config, &file, today),
        Command::Labs => {
            println!("{}", app::lab_catalogue());
            Ok(())
        }
    }
}

fn apply_logging(config: &AppConfig) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    logging::set_log_level(&config.log_level(rust_log.as_deref()))?;
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }
    logging::set_stdout_enabled(config.logging.stdout)
}

fn run_tui(config: AppConfig) -> anyhow::Result<()> {
    if config.logging.file.is_none() {
        logging::enable_file_logging(Path::new(DEFAULT_TUI_LOG_FILE))?;
    }
    logging::set_stdout_enabled(false)?;
    info!(layout = ?config.layout, lead_time_days = config.lead_time_days, "starting terminal UI");

    let mut siv = cursive::default();
    siv.set_user_data(app::build_state(&config, SystemClock));
    views::show_root(&mut siv);
    siv.run();

    info!("terminal UI closed");
    Ok(())
}

fn run_import(
    config: &AppConfig,
    file: &Path,
    today: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let drafts = csv_loader::load_from_file(file)
        .with_context(|| format!("Failed to load drafts from {}", file.display()))?;
    info!(rows = drafts.len(), file = %file.display(), "drafts loaded");

    let mut state = match today {
        Some(date) => app::build_state(config, FixedClock(date)),
        None => app::build_state(config, SystemClock),
    };
    let summary = app::run_import(&mut state, drafts).context("Failed to write the report")?;

    println!("{summary}");
    Ok(())
}
