//! Widget launch descriptor for the embedded loyalty profile overlay.
//!
//! Rendering is the host's concern; the SDK produces a [`WidgetSettings`]
//! value carrying everything the web view needs, including the composed
//! widget URL.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Languages the widget renders left-to-right.
const LTR_LANGUAGES: &[&str] = &[
    "en", "fr", "es", "de", "pt", "pl", "it", "hu", "zh-tw", "nl", "sv", "no", "dk", "ja",
];

/// Languages the widget renders right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar"];

/// Whether a language code renders right-to-left (used for close-button
/// placement).
pub fn is_rtl(language: &str) -> bool {
    RTL_LANGUAGES.contains(&language)
}

/// Whether a language code renders left-to-right.
pub fn is_ltr(language: &str) -> bool {
    LTR_LANGUAGES.contains(&language)
}

/// Request to show the loyalty profile widget for a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowProfileRequest {
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_close_button: Option<bool>,
    /// Widget detail page to open directly (e.g. a challenge id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_navigation: Option<bool>,
    /// Override for the widget host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_url_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_button_color: Option<String>,
}

impl ShowProfileRequest {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }
}

/// Everything the widget-rendering collaborator needs to launch the overlay.
///
/// Built by [`GameballApp::show_profile`](crate::GameballApp::show_profile)
/// from the current session; an explicit value rather than shared mutable
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSettings {
    pub api_key: String,
    pub lang: String,
    pub shop: Option<String>,
    pub platform: Option<String>,
    pub widget_url_prefix: String,
    pub customer_id: String,
    pub open_detail: Option<String>,
    pub hide_navigation: Option<bool>,
    pub show_close_button: Option<bool>,
    pub close_button_color: Option<String>,
    /// Accent color cached at init, hex digits without `#`.
    pub main_color: Option<String>,
    /// Session token resolved at launch time, if any.
    pub session_token: Option<String>,
}

impl WidgetSettings {
    /// Compose the full widget URL for the embedded web view.
    pub fn url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("playerId", &self.customer_id);
        query.append_pair("apiKey", &self.api_key);
        query.append_pair("lang", &self.lang);
        if let Some(shop) = &self.shop {
            query.append_pair("shop", shop);
        }
        if let Some(platform) = &self.platform {
            query.append_pair("platform", platform);
        }
        query.append_pair("os", std::env::consts::OS);
        query.append_pair("sdk", &format!("Rust/{}", crate::VERSION));
        if let Some(main) = &self.main_color {
            query.append_pair("main", main);
        }
        if let Some(detail) = &self.open_detail {
            query.append_pair("openDetail", detail);
        }
        if self.hide_navigation == Some(true) {
            query.append_pair("hideNavigation", "true");
        }
        format!("{}?{}", self.widget_url_prefix, query.finish())
    }

    /// Whether the close button should sit on the left (RTL layouts).
    pub fn close_button_on_left(&self) -> bool {
        is_rtl(&self.lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> WidgetSettings {
        WidgetSettings {
            api_key: "key-1".to_string(),
            lang: "en".to_string(),
            shop: Some("store".to_string()),
            platform: None,
            widget_url_prefix: crate::request::WIDGET_BASE_URL.to_string(),
            customer_id: "c1".to_string(),
            open_detail: None,
            hide_navigation: None,
            show_close_button: Some(true),
            close_button_color: None,
            main_color: Some("FF5500".to_string()),
            session_token: None,
        }
    }

    #[test]
    fn test_url_includes_required_params() {
        let url = settings().url();
        assert!(url.starts_with("https://m.gameball.app?"));
        assert!(url.contains("playerId=c1"));
        assert!(url.contains("apiKey=key-1"));
        assert!(url.contains("lang=en"));
        assert!(url.contains("shop=store"));
        assert!(url.contains("main=FF5500"));
        assert!(!url.contains("platform="));
        assert!(!url.contains("hideNavigation"));
    }

    #[test]
    fn test_url_optional_flags() {
        let mut s = settings();
        s.open_detail = Some("challenges".to_string());
        s.hide_navigation = Some(true);
        let url = s.url();
        assert!(url.contains("openDetail=challenges"));
        assert!(url.contains("hideNavigation=true"));
    }

    #[test]
    fn test_language_direction() {
        assert!(is_rtl("ar"));
        assert!(!is_rtl("en"));
        assert!(is_ltr("ja"));
        assert!(!is_ltr("ar"));

        let mut s = settings();
        assert!(!s.close_button_on_left());
        s.lang = "ar".to_string();
        assert!(s.close_button_on_left());
    }
}
