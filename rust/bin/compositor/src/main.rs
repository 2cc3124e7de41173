//! `compositor` — generates the captcha card item model for a resource pack.
//!
//! Reads the game's registry report and writes one selector model per
//! configured carrier under the pack's output directory.

mod commands;

use std::path::PathBuf;

use captcha_compositor::config::DEFAULT_CONFIG_FILE;
use captcha_compositor::CompositorConfig;
use clap::{Parser, Subcommand};

/// Captcha card model compositor.
#[derive(Parser, Debug)]
#[command(name = "compositor", about = "Generate captcha card item models")]
struct Cli {
    /// Path to config file (default: ./compositor.toml).
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile the selector model for each carrier.
    Generate(commands::generate::GenerateArgs),

    /// Summarize the registry report.
    Catalog {
        /// Registry report (reports/registries.json).
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = CompositorConfig::load(&config_path)?;

    match cli.command {
        Commands::Generate(args) => {
            args.apply(&mut config)?;
            commands::generate::run(&config)
        }
        Commands::Catalog { catalog } => {
            if let Some(catalog) = catalog {
                config.catalog = Some(catalog);
            }
            commands::catalog::run(&config)
        }
    }
}
