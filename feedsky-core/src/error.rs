use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("feed parsing error: {0}")]
    Parse(#[from] rss::Error),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("page exposes no og:image tag")]
    MissingImageTag,
}

#[derive(Debug, Error)]
pub enum ThumbError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("image decoding error: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("thumbnail error: {0}")]
    Thumb(#[from] ThumbError),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),
    #[error("session error: {0}")]
    Session(#[from] reqwest::Error),
}
