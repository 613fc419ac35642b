//! play-publisher entry point: checks that a publishing config can authorize

use std::path::{Path, PathBuf};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use play_publisher::config::Config;
use play_publisher::publisher;

/// Print usage information
fn print_usage() {
    eprintln!("Usage: play-publisher <config.yaml> [--verify]");
    eprintln!();
    eprintln!("play-publisher - Google Play publishing credential check");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.yaml    Path to configuration file");
    eprintln!("  --verify       Also exchange the key for an access token");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  play-publisher ./play.yaml --verify");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, verify) = match args.as_slice() {
        [path] => (PathBuf::from(path), false),
        [path, flag] if flag == "--verify" => (PathBuf::from(path), true),
        _ => {
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config_path, verify).await {
        error!(kind = e.kind(), "{}", e);
        eprintln!("play-publisher: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Load the config, install logging and build the client
async fn run(config_path: &Path, verify: bool) -> play_publisher::Result<()> {
    let config = Config::from_file(config_path)?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Loaded configuration from {:?}", config_path);

    let client = publisher::init(&config.play).await?;
    info!("Client ready for {}", client.application_name());

    if verify {
        client.access_token().await?;
        info!("Service account authorized for the publishing scope");
    }

    Ok(())
}
