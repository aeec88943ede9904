use reqwest::Client;
use tracing::info;

use crate::bluesky::{self, ExternalCard, PostRecord, Session};
use crate::config::BotConfig;
use crate::error::PublishError;
use crate::feed::FeedEntry;
use crate::thumb;

/// Bluesky's limit for the card title.
pub const MAX_TITLE_LEN: usize = 300;

const ELLIPSIS: &str = "...";

/// Cuts overlong titles so that title plus ellipsis stays within
/// `MAX_TITLE_LEN` characters.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_LEN {
        return title.to_owned();
    }
    let mut cut: String = title.chars().take(MAX_TITLE_LEN - ELLIPSIS.len()).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Thumbnail download and resize, blob upload, then record creation.
/// Any failure leaves the entry unposted; the caller decides to skip.
pub async fn publish_entry(
    client: &Client,
    config: &BotConfig,
    session: &Session,
    entry: &FeedEntry,
    created_at: &str,
) -> Result<(), PublishError> {
    let png = thumb::fetch_thumb(client, &entry.image_url).await?;
    let blob = bluesky::upload_blob(client, &config.service_url, session, png).await?;
    info!(url = %entry.url, "thumbnail blob uploaded");

    let record = PostRecord::card(
        created_at,
        &config.language,
        ExternalCard {
            uri: entry.url.clone(),
            title: truncate_title(&entry.title),
            description: entry.description.clone(),
            thumb: blob,
        },
    );
    let response = bluesky::create_record(client, &config.service_url, session, &record).await?;
    info!(url = %entry.url, response = %response, "record created");
    Ok(())
}
