//! folio - a developer portfolio in the terminal
//!
//! Renders profile, timeline, projects with screenshot galleries and a
//! contact form that delivers messages through an email relay.

mod config;
mod core;
mod data;
mod frontend;
mod links;
mod relay;
mod validator;

use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use frontend::Frontend;
use std::path::{Path, PathBuf};

#[derive(ClapParser)]
#[command(name = "folio")]
#[command(about = "Developer portfolio in the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Portfolio content file (default: portfolio.toml in the data directory)
    #[arg(short, long, value_name = "FILE")]
    portfolio: Option<PathBuf>,

    /// Custom data directory (default: ~/.folio)
    /// Can also be set via FOLIO_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log contact submissions instead of sending them
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a portfolio file and exit
    Validate {
        /// Portfolio file to validate (default: the data directory's portfolio.toml)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set custom data directory first; the log file lives there
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
    }

    init_logging()?;

    if let Ok(env_dir) = std::env::var(config::DATA_DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DATA_DIR_ENV, env_dir);
    }

    // Handle subcommands
    if let Some(Commands::Validate { file }) = cli.command {
        let ok = validate_command(file.as_deref())?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()?
    };

    let portfolio = load_portfolio(cli.portfolio.as_deref())?;
    let result = validator::validate_portfolio(&portfolio);
    for warning in result.warnings() {
        tracing::warn!("Portfolio: {}", warning.message());
    }
    if result.has_errors() {
        for error in result.errors() {
            tracing::error!("Portfolio: {}", error.message());
        }
        bail!(
            "Portfolio has {} error(s); run `folio validate` for details",
            result.errors().len()
        );
    }

    if let Some(field) = config.relay.missing_field() {
        if !cli.dry_run {
            tracing::warn!(
                "Relay setting '{}' is empty, contact messages will fail to send",
                field
            );
        }
    }

    run_tui(config, portfolio, cli.dry_run)
}

/// Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
/// TUI apps can't log to stdout, so we write to a file
fn init_logging() -> Result<()> {
    let log_path = config::Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create log directory {:?}", parent))?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file {:?}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    Ok(())
}

/// Explicit file, else the data directory's copy, else the embedded default
fn load_portfolio(path: Option<&Path>) -> Result<data::Portfolio> {
    if let Some(path) = path {
        return data::Portfolio::load_from_file(path);
    }
    let default_path = config::Config::portfolio_path()?;
    if default_path.exists() {
        data::Portfolio::load_from_file(&default_path)
    } else {
        tracing::info!("No portfolio at {:?}, using embedded content", default_path);
        data::Portfolio::embedded()
    }
}

/// Print validation results; returns false when errors were found
fn validate_command(file: Option<&Path>) -> Result<bool> {
    match file {
        Some(path) => println!("Validating portfolio file: {:?}", path),
        None => println!("Validating default portfolio"),
    }

    let portfolio = match load_portfolio(file) {
        Ok(portfolio) => portfolio,
        Err(e) => {
            eprintln!("✗ Failed to load portfolio: {:#}", e);
            return Ok(false);
        }
    };

    println!("✓ Portfolio loaded successfully");
    println!(
        "  {} projects, {} with galleries",
        portfolio.projects.len(),
        portfolio
            .projects
            .iter()
            .filter(|p| p.gallery.is_some())
            .count()
    );

    let result = validator::validate_portfolio(&portfolio);
    for error in result.errors() {
        eprintln!("✗ Error: {}", error.message());
    }
    for warning in result.warnings() {
        println!("⚠ Warning: {}", warning.message());
    }

    // Summary
    if result.is_valid() {
        println!("✓ Portfolio is valid with no issues");
    } else {
        if result.has_errors() {
            eprintln!("\n✗ Found {} error(s)", result.errors().len());
        }
        if result.has_warnings() {
            println!("⚠ Found {} warning(s)", result.warnings().len());
        }
    }

    Ok(!result.has_errors())
}

/// Run TUI frontend
fn run_tui(config: config::Config, portfolio: data::Portfolio, dry_run: bool) -> Result<()> {
    // Use tokio runtime for async relay I/O
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_tui(config, portfolio, dry_run))
}

/// Async TUI main loop; contact submissions are delivered on spawned tasks
async fn async_run_tui(
    config: config::Config,
    portfolio: data::Portfolio,
    dry_run: bool,
) -> Result<()> {
    use crate::core::app_core::RelayOutcome;
    use crate::core::input_router::{forwards_text_input, route_input};
    use crate::core::AppCore;
    use frontend::{FrontendEvent, TuiFrontend};
    use std::time::Duration;
    use tokio::sync::mpsc;

    // Relay results come back to the loop over this channel
    let (relay_tx, mut relay_rx) = mpsc::unbounded_channel::<RelayOutcome>();
    let relay = relay::build_relay(&config.relay, dry_run)?;

    let poll_timeout = Duration::from_millis(config.ui.poll_timeout_ms);

    // Create core application state
    let mut app_core = AppCore::new(config, portfolio, relay, relay_tx);

    // Create TUI frontend
    let mut frontend = TuiFrontend::new()?;
    frontend.set_poll_timeout(poll_timeout);
    let (width, height) = frontend.size();
    tracing::info!("Started in a {}x{} terminal", width, height);

    // Main event loop
    while app_core.running {
        // Poll for frontend events (keyboard, resize, paste)
        let events = frontend.poll_events()?;

        for event in events {
            match &event {
                FrontendEvent::Key { .. } => {
                    let Some(key) = event.as_key_event() else {
                        continue;
                    };
                    let mode = app_core.ui_state.input_mode.clone();
                    let action = if forwards_text_input(&mode) {
                        frontend.handle_contact_key(key, &mut app_core)
                    } else {
                        Some(route_input(key, &mode))
                    };
                    if let Some(action) = action {
                        app_core.handle_action(action);
                    }
                }
                FrontendEvent::Paste { text } => frontend.handle_paste(text, &mut app_core),
                FrontendEvent::Resize { .. } => app_core.needs_render = true,
                FrontendEvent::Quit => app_core.running = false,
            }
        }

        // Poll for relay results (non-blocking)
        while let Ok(outcome) = relay_rx.try_recv() {
            app_core.on_relay_result(outcome);
        }

        // Render if needed
        if app_core.needs_render {
            frontend.render(&mut app_core)?;
            app_core.needs_render = false;
        }

        // No sleep needed - event::poll() timeout already limits frame rate
    }

    // Cleanup
    frontend.cleanup()?;

    Ok(())
}
