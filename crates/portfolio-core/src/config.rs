//! Site Configuration
//!
//! Every field has a default, so a partial (or missing) override object is
//! always accepted.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::contact::DEFAULT_ACK_DELAY;
use crate::domain::DomainResult;

/// How routes appear in the address bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterMode {
    /// `#/blog`, works on any static host
    #[default]
    Hash,
    /// `/blog`, needs the host to serve index.html for every path
    Path,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_title: String,
    pub router_mode: RouterMode,
    /// Prefix for relative asset paths; empty means site root
    pub asset_base: String,
    /// Articles shown on the home page
    pub recent_articles: usize,
    /// Contact acknowledgment banner lifetime
    pub ack_delay_ms: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Jane Waithira".to_string(),
            router_mode: RouterMode::Hash,
            asset_base: String::new(),
            recent_articles: 3,
            ack_delay_ms: DEFAULT_ACK_DELAY.as_millis() as u32,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn ack_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.ack_delay_ms))
    }

    /// Max tracing level; unknown names fall back to INFO
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    /// Resolve a content asset path against `asset_base`.
    ///
    /// Absolute URLs pass through untouched.
    pub fn asset_url(&self, path: &str) -> String {
        let is_absolute = ["http://", "https://", "//", "data:", "mailto:"]
            .iter()
            .any(|prefix| path.starts_with(prefix));
        if is_absolute || self.asset_base.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.asset_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
