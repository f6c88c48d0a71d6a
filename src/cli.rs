use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::AppConfig;
use crate::controller::EditSession;
use crate::slack::SlackMessageClient;

#[derive(Parser, Debug)]
#[command(
    name = "slackedit",
    version,
    about = "Edit Slack bot messages from the terminal"
)]
pub struct Cli {
    /// Override the secrets file location
    #[arg(long)]
    pub secrets: Option<PathBuf>,

    /// Minimum log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)
        .with_context(|| format!("initialising logging at level {}", cli.log_level))?;

    // Startup precondition: no token, no interaction loop.
    let config =
        AppConfig::resolve(cli.secrets.as_deref()).context("resolving Slack credentials")?;

    let client = SlackMessageClient::new(config.bot_token);
    let mut app = App::new(EditSession::new(client));
    app.run().await
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).context("parsing log level")?,
    };
    // Logs go to stderr; stdout belongs to the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
