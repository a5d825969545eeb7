//! octoscope TUI - look up GitHub profiles from the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use octoscope_core::{build_info::BUILD_INFO, paths, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "octoscope-tui")]
#[command(about = "Interactive GitHub profile lookup", long_about = None)]
struct Cli {
    /// Config file (defaults to config.toml in the octoscope directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    if matches!(std::env::args().nth(1).as_deref(), Some("--version" | "-V")) {
        println!("{}", BUILD_INFO.version_line("octoscope-tui"));
        return Ok(());
    }

    let cli = Cli::parse();

    // stdout belongs to the UI; log to a file instead.
    let log_path = paths::log_path();
    if let Err(e) = octoscope_core::logging::init_to_file(&log_path) {
        eprintln!("Logging disabled: {e}");
    }

    let config_path = cli.config.unwrap_or_else(paths::config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    tracing::info!("octoscope-tui starting ({})", BUILD_INFO.compact());

    // Run the TUI
    octoscope_tui::run(config)
}
