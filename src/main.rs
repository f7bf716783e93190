//! glasscalc - terminal client for a multi-mode remote calculator
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use glasscalc_app::config::{self, Settings};
use glasscalc_app::Engine;
use glasscalc_core::prelude::*;
use glasscalc_core::Mode;
use glasscalc_remote::HttpEvaluator;

/// glasscalc - a terminal client for a multi-mode remote calculator
#[derive(Parser, Debug)]
#[command(name = "glasscalc")]
#[command(about = "A terminal client for a multi-mode remote calculator", long_about = None)]
struct Args {
    /// Base URL of the evaluation service (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Starting mode: 1 simple, 2 advanced, 3 scientific
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    mode: Option<u8>,

    /// Path to a config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (keys on stdin, JSON on stdout, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging (to file, since the TUI owns stdout)
    glasscalc_core::logging::init()?;

    let settings = resolve_settings(&args)?;
    info!(
        "Settings: server={} mode={} error_display_ms={}",
        settings.server.url, settings.behavior.default_mode, settings.behavior.error_display_ms
    );

    let evaluator = HttpEvaluator::new(
        &settings.server.url,
        Duration::from_millis(settings.server.connect_timeout_ms),
    )?;
    let engine = Engine::new(settings, evaluator);

    let result = if args.headless {
        glasscalc::run_headless(engine).await
    } else {
        glasscalc_tui::run(engine).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("glasscalc exiting");
    Ok(result?)
}

/// Load settings from the chosen config file and apply CLI overrides
fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound { path: path.clone() });
            }
            config::load_settings(path)
        }
        None => match config::default_config_path() {
            Some(path) => {
                if let Err(e) = config::init_config(&path) {
                    warn!("Could not create default config {}: {}", path.display(), e);
                }
                config::load_settings(&path)
            }
            None => Settings::default(),
        },
    };

    if let Some(url) = &args.server {
        settings.server.url = url.clone();
    }
    if let Some(mode) = args.mode.and_then(Mode::from_ordinal) {
        settings.behavior.default_mode = mode;
    }

    Ok(settings)
}
