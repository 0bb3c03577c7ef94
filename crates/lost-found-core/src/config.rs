//! Application Configuration
//!
//! Compiled-in defaults; the UI can override them from a JSON blob embedded
//! in the page.

use serde::{Deserialize, Serialize};

use crate::counter::CounterTiming;

/// Figures shown by the landing page counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingTargets {
    pub total_items: u64,
    pub items_claimed: u64,
    pub success_rate: u64,
}

impl Default for LandingTargets {
    fn default() -> Self {
        Self {
            total_items: 2847,
            items_claimed: 2134,
            success_rate: 87,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Local storage key of the persisted snapshot
    pub storage_key: String,
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
    /// Items shown in the admin "recent" list
    pub recent_items: usize,
    pub counter: CounterTiming,
    pub landing: LandingTargets,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "lost-found-storage".to_string(),
            log_level: "info".to_string(),
            recent_items: 5,
            counter: CounterTiming::default(),
            landing: LandingTargets::default(),
        }
    }
}

impl AppConfig {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"logLevel":"debug","counter":{"startDelayMs":0,"durationMs":1000,"steps":10}}"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.counter.step_ms(), 100);
        assert_eq!(config.storage_key, "lost-found-storage");
        assert_eq!(config.recent_items, 5);
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
