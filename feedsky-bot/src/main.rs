use std::time::Duration;

use feedsky_core::{run_once, BotConfig};
use reqwest::{redirect, ClientBuilder};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = BotConfig::load();
    let client = ClientBuilder::new()
        .redirect(redirect::Policy::limited(5))
        .user_agent("feedsky/0.1")
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()
        .expect("failed to build HTTP client");

    match run_once(&client, &config).await {
        Ok(report) => {
            info!(
                selected = report.selected,
                published = report.published,
                "run complete"
            );
        }
        Err(err) => {
            error!(error = %err, "run aborted");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
