use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub feed_url: String,
    pub service_url: String,
    pub identifier: String,
    pub password: String,
    pub watermark_path: PathBuf,
    pub request_timeout_seconds: u64,
    pub language: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            feed_url: "https://feeds.feedburner.com/AmazonWebServicesBlog".to_owned(),
            service_url: "https://bsky.social".to_owned(),
            identifier: "user".to_owned(),
            password: "password".to_owned(),
            watermark_path: PathBuf::from("timestamp"),
            request_timeout_seconds: 10,
            language: "en-US".to_owned(),
        }
    }
}

impl BotConfig {
    /// Linux: ~/.config/feedsky/config.json
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("feedsky").join("config.json"))
    }

    /// Loads the config file, falling back to defaults on any failure, then
    /// applies credential overrides from the environment.
    pub fn load() -> Self {
        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => match Self::load_from_file(&path) {
                Ok(config) => config,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to load config, using defaults");
                    Self::default()
                }
            },
            _ => Self::default(),
        };
        config.apply_env();
        config
    }

    fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn apply_env(&mut self) {
        if let Ok(identifier) = std::env::var("BLUE_LOGIN") {
            self.identifier = identifier;
        }
        if let Ok(password) = std::env::var("BLUE_PASSWORD") {
            self.password = password;
        }
    }
}
