pub mod bluesky;
pub mod config;
pub mod error;
pub mod feed;
pub mod publish;
pub mod run;
pub mod scrape;
pub mod thumb;
pub mod watermark;

pub use bluesky::{ExternalCard, ExternalEmbed, PostRecord, Session};
pub use config::BotConfig;
pub use error::{FeedError, PublishError, RunError, ScrapeError, ThumbError};
pub use feed::FeedEntry;
pub use run::{run_once, RunReport};
