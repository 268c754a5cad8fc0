//! Configuration for the Gameball SDK.

use serde::{Deserialize, Serialize};

/// Default language used when the host supplies none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// SDK configuration supplied to [`GameballApp::init`](crate::GameballApp::init).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameballConfig {
    /// Gameball API key for the account.
    pub api_key: String,
    /// Two-letter language code for widget content.
    pub lang: String,
    /// Optional shop identifier (multi-store accounts).
    pub shop: Option<String>,
    /// Optional commerce platform identifier.
    pub platform: Option<String>,
    /// Optional base-URL override for the Gameball API.
    pub api_prefix: Option<String>,
}

impl GameballConfig {
    /// Create a configuration with the given API key and default language.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            lang: DEFAULT_LANGUAGE.to_string(),
            shop: None,
            platform: None,
            api_prefix: None,
        }
    }

    /// Set the widget language.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set the shop identifier.
    pub fn shop(mut self, shop: impl Into<String>) -> Self {
        self.shop = Some(shop.into());
        self
    }

    /// Set the commerce platform identifier.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Override the API base URL (e.g. for a staging environment).
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameballConfig::new("key-123");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.lang, "en");
        assert!(config.shop.is_none());
        assert!(config.api_prefix.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = GameballConfig::new("key-123")
            .lang("ar")
            .shop("store-1")
            .platform("shopify")
            .api_prefix("https://staging.gameball.co");
        assert_eq!(config.lang, "ar");
        assert_eq!(config.shop.as_deref(), Some("store-1"));
        assert_eq!(config.platform.as_deref(), Some("shopify"));
        assert_eq!(config.api_prefix.as_deref(), Some("https://staging.gameball.co"));
    }
}
