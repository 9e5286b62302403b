use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use bethere::api::ApiClient;
use bethere::config::Config;
use bethere::session::SessionContext;

/// BeThere client: prints the recommended events for the configured user.
#[derive(Parser)]
#[command(name = "bethere", version)]
struct Cli {
    /// Override the backend base URL from the config file.
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("invalid base URL override")?;
    }

    let session = SessionContext::new(config.session.to_user());
    let api = ApiClient::new(&config.api).context("failed to build API client")?;

    let user = session.current_user();
    tracing::info!(user_id = %user.id, username = %user.username, "fetching recommended events");

    let events = api
        .recommended_events(&user.id)
        .await
        .context("failed to fetch recommended events")?;

    if events.is_empty() {
        println!("No recommended events.");
        return Ok(());
    }
    for event in events {
        println!("{} | {} | {}", event.name, event.date, event.description);
    }
    Ok(())
}
