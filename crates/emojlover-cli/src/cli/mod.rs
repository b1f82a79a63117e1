//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use emojlover_core::config::{self, Config};
use emojlover_core::{interrupt, logging};

mod commands;

#[derive(Parser)]
#[command(name = "emojlover")]
#[command(version)]
#[command(about = "Pick an emoji, then swipe through them full screen")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Comma-separated emojis to use instead of the configured list
    #[arg(long, value_name = "LIST")]
    emojis: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the emoji collection, one `index<TAB>glyph` per line
    List,
    /// Print the viewer palette, one `index<TAB>name<TAB>#rrggbb` per line
    Palette,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let Cli { command, emojis } = Cli::parse();

    interrupt::init()?;

    match command {
        // Config commands must work even when the file on disk is broken.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Some(Commands::List) => {
            let config = load_config(emojis.as_deref())?;
            logging::init_stderr(&config.log_level)?;
            commands::list::run(&config)
        }
        Some(Commands::Palette) => {
            let config = load_config(emojis.as_deref())?;
            logging::init_stderr(&config.log_level)?;
            commands::palette::run(&config)
        }
        None => {
            let config = load_config(emojis.as_deref())?;
            let _guard = logging::init_file(&config::paths::logs_dir(), &config.log_level)?;
            tracing::info!(
                config = %config::paths::config_path().display(),
                emojis = config.emojis.len(),
                "starting picker"
            );
            emojlover_tui::run_picker(&config)
        }
    }
}

fn load_config(emojis: Option<&str>) -> Result<Config> {
    let mut config = Config::load().context("load config")?;
    if let Some(list) = emojis {
        config.override_emojis(list);
    }
    Ok(config)
}
