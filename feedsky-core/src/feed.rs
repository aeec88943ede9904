use chrono::{DateTime, Utc};
use reqwest::Client;
use rss::Channel;
use serde::{Deserialize, Serialize};

use crate::error::FeedError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedEntry {
    pub url: String,
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    /// Filled in from the linked page's og:image tag after filtering.
    pub image_url: String,
}

impl FeedEntry {
    /// Items without a link or a parseable RFC 2822 publication date are
    /// unusable for card posts and yield `None`.
    pub fn from_rss_item(item: &rss::Item) -> Option<Self> {
        let url = item.link()?.to_owned();
        let published_at = item
            .pub_date()
            .and_then(|value| DateTime::parse_from_rfc2822(value).ok())?
            .with_timezone(&Utc);

        Some(Self {
            url,
            title: item.title().unwrap_or_default().to_owned(),
            description: item.description().unwrap_or_default().to_owned(),
            published_at,
            image_url: String::new(),
        })
    }

    pub fn is_newer_than(&self, watermark: i64) -> bool {
        self.published_at.timestamp() > watermark
    }
}

pub async fn fetch_channel(client: &Client, url: &str) -> Result<Channel, FeedError> {
    let response = client.get(url).send().await?;
    let bytes = response.bytes().await?;
    let channel = Channel::read_from(&bytes[..])?;
    Ok(channel)
}
