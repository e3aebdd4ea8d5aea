use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spinview_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "spinview")]
#[command(author, version, about = "A terminal 360-degree scene viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scene to view (shorthand for `run <scene>`)
    scene: Option<String>,

    /// Show the telemetry overlay
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Override the scene source (base URL or directory)
    #[arg(short = 'b', long = "base")]
    base: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// View a scene in the terminal
    Run {
        /// Scene key, e.g. "penthouse"
        scene: String,
        /// Show the telemetry overlay
        #[arg(short = 'd', long = "debug")]
        debug: bool,
    },
    /// Print scene details without opening the viewer
    Info {
        /// Scene key
        scene: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(base) = cli.base {
        config.scene.base_url = base;
    }

    // Initialize logging; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Arc::new(config);

    // Handle shorthand scene (positional)
    if let Some(scene) = cli.scene {
        return commands::run::run(config, scene, cli.debug).await;
    }

    // Handle commands
    match cli.command {
        Some(Commands::Run { scene, debug }) => {
            commands::run::run(config, scene, debug || cli.debug).await
        }
        Some(Commands::Info { scene }) => commands::info::run(&config, &scene).await,
        None => {
            println!("To view a scene, run:");
            println!("  spinview <scene>");
            println!("\nFor scene details without opening the viewer:");
            println!("  spinview info <scene>");
            Ok(())
        }
    }
}
