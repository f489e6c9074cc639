//! Calm AI Help - backend for the senior-friendly AI education site
//!
//! Serves the form submission and chat APIs, plus the static site when
//! configured.

use anyhow::Result;
use calmhelp::{
    api::build_app,
    chat::{ChatState, Responder},
    config::CalmHelpConfig,
    records::{RecordStore, RecordsState},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "calmhelp")]
#[command(author = "Calm AI Help Team")]
#[command(version)]
#[command(about = "Backend for the Calm AI Help site")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CALMHELP_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Data directory for records and summary indexes
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Answer a single chat message from the scripted rule table
    Respond {
        /// Message text
        message: String,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("calmhelp={},tower_http=debug", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CalmHelpConfig::load(config_path)?
    } else {
        CalmHelpConfig::default()
    };

    match cli.command {
        Commands::Serve {
            host,
            port,
            data_dir,
        } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(data_dir) = data_dir {
                config.storage.data_dir = data_dir;
            }
            run_serve(config).await?;
        }
        Commands::Respond { message } => {
            let responder = Responder::from_config(&config.chat);
            println!("{}", responder.respond(&message));
        }
        Commands::Config { default } => {
            let config = if default {
                CalmHelpConfig::default()
            } else {
                config
            };
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn run_serve(config: CalmHelpConfig) -> Result<()> {
    tracing::info!("Starting Calm AI Help server");

    let store = RecordStore::open(config.storage.data_dir.clone()).await?;
    tracing::info!("Data directory: {}", store.data_dir().display());

    let app = build_app(
        RecordsState {
            store: Arc::new(store),
        },
        ChatState {
            responder: Arc::new(Responder::from_config(&config.chat)),
        },
        &config.server.cors_origins,
        config.server.static_dir.as_deref(),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Calm AI Help server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
