//! octoscope: look up GitHub profiles from the command line.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use octoscope_core::{
    build_info::BUILD_INFO, paths, Config, FilePreferenceStore, ThemeChoice, ThemePreference,
};
use octoscope_github::{GitHubClient, ProfileCard};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "octoscope")]
#[command(about = "GitHub profile lookup", long_about = None)]
struct Cli {
    /// Config file (defaults to config.toml in the octoscope directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a GitHub user
    Lookup {
        /// GitHub login
        username: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Card)]
        format: Format,
    },

    /// Show or change the saved theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the active theme and where it came from
    Show,
    /// Switch between dark and light
    Toggle,
    /// Save a specific theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Card,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeChoice {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeChoice::Dark,
            ThemeArg::Light => ThemeChoice::Light,
        }
    }
}

fn main() -> Result<ExitCode> {
    if matches!(std::env::args().nth(1).as_deref(), Some("--version" | "-V")) {
        println!("{}", BUILD_INFO.version_line("octoscope"));
        return Ok(ExitCode::SUCCESS);
    }

    octoscope_core::logging::init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(paths::config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    match cli.command {
        Some(Commands::Lookup { username, format }) => lookup(&config, &username, format),
        Some(Commands::Theme { action }) => {
            theme(&config, action.unwrap_or(ThemeAction::Show))?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Config) => {
            show_config(&config, &config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("octoscope {}", BUILD_INFO.compact());
            println!("Use --help for usage information");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn current_theme(config: &Config) -> ThemeChoice {
    let store = FilePreferenceStore::open_default();
    ThemePreference::initialize(&store, config.theme.resolve_hint()).current()
}

fn lookup(config: &Config, username: &str, format: Format) -> Result<ExitCode> {
    let username = username.trim();
    if username.is_empty() {
        eprintln!("Error: username must not be blank");
        return Ok(ExitCode::from(2));
    }

    let client = GitHubClient::new(&config.api)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let outcome = runtime.block_on(client.lookup(username));

    let theme = current_theme(config);
    match outcome {
        Ok(profile) => {
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
                Format::Card => {
                    let card = ProfileCard::from(&profile);
                    println!("{}", render::render_card(&card, theme, use_color()));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
            eprintln!("{}", render::render_error(&err, theme, color));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn theme(config: &Config, action: ThemeAction) -> Result<()> {
    let mut store = FilePreferenceStore::open_default();
    let mut pref = ThemePreference::initialize(&store, config.theme.resolve_hint());

    match action {
        ThemeAction::Show => {
            println!("{} ({})", pref.current(), pref.source());
        }
        ThemeAction::Toggle => {
            let theme = pref
                .toggle(&mut store)
                .with_context(|| format!("Failed to save {}", store.path().display()))?;
            info!(path = %store.path().display(), "Theme preference saved: {}", theme);
            println!("{theme}");
        }
        ThemeAction::Set { theme } => {
            let theme = pref
                .set(theme.into(), &mut store)
                .with_context(|| format!("Failed to save {}", store.path().display()))?;
            info!(path = %store.path().display(), "Theme preference saved: {}", theme);
            println!("{theme}");
        }
    }

    Ok(())
}

fn show_config(config: &Config, path: &std::path::Path) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("# {}", path.display());
    print!("{rendered}");
    Ok(())
}
