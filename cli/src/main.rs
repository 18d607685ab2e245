use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;
use wardwatch_cli::Scenario;
use wardwatch_cli::commands;

#[derive(Parser)]
#[command(version, about = "Replay and inspect enemy ward tracking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a scenario file through the tracker and log every draw call
    Replay {
        scenario: PathBuf,
        /// Ward definitions TOML (defaults to the builtin table)
        #[arg(short, long)]
        definitions: Option<PathBuf>,
        /// Overlay toggles file (defaults to the persisted config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the active ward definitions as TOML
    Definitions {
        #[arg(short, long)]
        definitions: Option<PathBuf>,
    },
    /// Show the persisted overlay toggles
    Config,
}

/// Initialize logging, writing to WARDWATCH_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("WARDWATCH_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            scenario,
            definitions,
            config,
        } => {
            let overlay =
                commands::load_overlay_config(config.as_deref()).map_err(|e| e.to_string())?;
            let scenario = Scenario::load(&scenario).map_err(|e| e.to_string())?;
            let summary = commands::replay(&scenario, definitions.as_deref(), overlay)
                .map_err(|e| e.to_string())?;
            print!("{summary}");
        }
        Commands::Definitions { definitions } => {
            let text = commands::show_definitions(definitions.as_deref())
                .map_err(|e| e.to_string())?;
            print!("{text}");
        }
        Commands::Config => {
            let overlay = commands::load_overlay_config(None).map_err(|e| e.to_string())?;
            let path = commands::overlay_config_path().ok();
            print!("{}", commands::show_config(&overlay, path.as_deref()));
        }
    }

    Ok(())
}
