mod cli;
mod config;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use skillhost_skills::AgentApp;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    skillhost_logging::init_logging(&config.logging.level)?;

    let options = cli.session_options(&config);
    let mut app = AgentApp::with_builtin_skills(&config.builtin_options());
    info!("Registered skills: {}", app.skills().names().join(", "));

    if !app.skills().contains(&options.skill) {
        warn!("Skill '{}' is not registered", options.skill);
    }

    // Setup signal handler for graceful shutdown
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal");
    };

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    session::run(&mut app, &options, input, &mut output, shutdown).await?;

    info!("Session ended");
    Ok(())
}
