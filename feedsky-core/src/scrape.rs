use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::ScrapeError;

/// Fetches the entry's page and returns the og:image URL advertised for it.
pub async fn og_image_url(client: &Client, page_url: &str) -> Result<String, ScrapeError> {
    let response = client.get(page_url).send().await?.error_for_status()?;
    let html = response.text().await?;
    extract_og_image(&html).ok_or(ScrapeError::MissingImageTag)
}

pub fn extract_og_image(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[property="og:image"]"#).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_owned)
}
