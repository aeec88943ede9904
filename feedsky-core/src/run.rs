use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use tracing::{error, info, warn};

use crate::config::BotConfig;
use crate::error::RunError;
use crate::feed::{self, FeedEntry};
use crate::publish;
use crate::scrape;
use crate::{bluesky, watermark};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunReport {
    /// Entries published after the watermark, with a usable preview image.
    pub selected: usize,
    /// Entries that made it through blob upload and record creation.
    pub published: usize,
}

/// One full pass: load the watermark, select and enrich new feed entries,
/// authenticate, publish each entry oldest first, persist the new watermark.
///
/// A feed or authentication failure aborts the run and leaves the watermark
/// untouched so the next run retries the same entries. Per-entry failures
/// are logged and skipped.
pub async fn run_once(client: &Client, config: &BotConfig) -> Result<RunReport, RunError> {
    let started_at = Utc::now();
    let watermark_ts = watermark::load(&config.watermark_path, started_at).await;

    let channel = feed::fetch_channel(client, &config.feed_url).await?;
    let mut entries: Vec<FeedEntry> = Vec::new();
    for item in channel.items() {
        let Some(mut entry) = FeedEntry::from_rss_item(item) else {
            warn!(
                title = item.title().unwrap_or_default(),
                "dropping item without link or parseable date"
            );
            continue;
        };
        if !entry.is_newer_than(watermark_ts) {
            continue;
        }
        match scrape::og_image_url(client, &entry.url).await {
            Ok(image_url) => {
                info!(
                    url = %entry.url,
                    published_at = entry.published_at.timestamp(),
                    "entry selected"
                );
                entry.image_url = image_url;
                entries.push(entry);
            }
            Err(err) => {
                warn!(url = %entry.url, error = %err, "skipping entry without a preview image");
            }
        }
    }

    // Feeds typically arrive newest first; publish oldest first.
    entries.sort_by_key(|entry| entry.published_at);
    let selected = entries.len();

    let session = bluesky::create_session(
        client,
        &config.service_url,
        &config.identifier,
        &config.password,
    )
    .await?;
    info!(did = %session.did, "authenticated with Bluesky");

    let created_at = started_at.to_rfc3339_opts(SecondsFormat::Micros, true);
    let mut published = 0;
    for entry in &entries {
        match publish::publish_entry(client, config, &session, entry, &created_at).await {
            Ok(()) => published += 1,
            Err(err) => error!(url = %entry.url, error = %err, "failed to publish entry"),
        }
    }

    watermark::store(&config.watermark_path, Utc::now()).await;
    Ok(RunReport {
        selected,
        published,
    })
}
