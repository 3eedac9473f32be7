//! Emotion Detector CLI - serve the web front end or analyze a single text

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use emotion_detector::server::routes::emotion::analyze_text;
use emotion_detector::server::{EmotionServer, ServerConfig, WatsonDetector};
use emotion_detector::VERSION;

/// Emotion Detector - web front end for an external emotion-analysis service
#[derive(Parser, Debug)]
#[command(name = "emotion-detector")]
#[command(author, version, about)]
#[command(long_about = "
Forwards text to an external emotion-analysis service and reports the anger,
disgust, fear, joy and sadness scores with the dominant emotion.

Examples:
  # Start the web server on 0.0.0.0:5000
  emotion-detector serve

  # Use a config file and a different port
  emotion-detector --config server.yaml serve --port 8080

  # Analyze one statement from the command line
  emotion-detector analyze --text \"I am happy\"
")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Analyze a single text and print the reply
    Analyze {
        /// Text to analyze
        #[arg(short, long)]
        text: String,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "server.yaml")]
        output: PathBuf,
    },
}

fn setup_logging(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose { "debug" } else { level };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => Ok(ServerConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;
    setup_logging(cli.verbose, &config.logging.level);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            info!("Emotion Detector v{}", VERSION);
            let server = EmotionServer::new(config).context("Failed to create detector")?;
            server.run().await.context("Server error")?;
            Ok(())
        }

        Commands::Analyze { text } => {
            let detector =
                WatsonDetector::new(config.detector).context("Failed to create detector")?;
            let reply = analyze_text(&detector, &text)
                .await
                .context("Emotion detection failed")?;
            println!("{}", reply);
            Ok(())
        }

        Commands::InitConfig { output } => {
            config
                .save(&output)
                .with_context(|| format!("Failed to write config to {:?}", output))?;
            println!("Wrote configuration to {:?}", output);
            Ok(())
        }
    }
}
