use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// One week, the lookback window used when no usable watermark exists.
pub const DEFAULT_LOOKBACK_SECS: i64 = 604_800;

/// Reads the watermark file and parses it as Unix seconds. Missing, empty,
/// or non-numeric state degrades to `now - DEFAULT_LOOKBACK_SECS`.
pub async fn load(path: &Path, now: DateTime<Utc>) -> i64 {
    let fallback = now.timestamp() - DEFAULT_LOOKBACK_SECS;
    match tokio::fs::read_to_string(path).await {
        Ok(content) => match content.trim().parse::<i64>() {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "invalid watermark, using one-week fallback");
                fallback
            }
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unreadable watermark, using one-week fallback");
            fallback
        }
    }
}

/// Overwrites the watermark file with `now` as decimal Unix seconds.
/// Write failures are logged, never escalated.
pub async fn store(path: &Path, now: DateTime<Utc>) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = tokio::fs::create_dir_all(parent).await;
        }
    }
    match tokio::fs::write(path, now.timestamp().to_string()).await {
        Ok(()) => info!(path = %path.display(), watermark = now.timestamp(), "watermark updated"),
        Err(err) => warn!(path = %path.display(), error = %err, "failed to persist watermark"),
    }
}
