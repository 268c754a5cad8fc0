//! Request building for the Gameball API.
//!
//! [`build_request`] is a pure function from the current [`Session`] and a
//! logical endpoint to a fully formed [`RequestDescriptor`]. Versioned
//! endpoints switch to the session-aware API version when a token is set at
//! build time, so the backend can tell authenticated and anonymous request
//! shapes apart from the URL alone.

use crate::session::Session;
use serde_json::Value;

/// Production API base URL.
pub const BASE_URL: &str = "https://api.gameball.co";
/// Widget host used by the embedded profile overlay.
pub const WIDGET_BASE_URL: &str = "https://m.gameball.app";
/// Bot settings path; unversioned by design.
pub const BOT_SETTINGS_PATH: &str = "/api/v1.0/Bots/BotSettings?c=mobile";
/// Integrations segment for anonymous requests.
pub const INTEGRATIONS_PATH: &str = "/api/v4.0/integrations";
/// Integrations segment for session-authenticated requests.
pub const INTEGRATIONS_SESSION_PATH: &str = "/api/v4.1/integrations";

const CUSTOMERS_PATH: &str = "/customers";
const EVENTS_PATH: &str = "/events";

/// HTTP method of a request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Logical Gameball endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Theming settings, fetched once at init.
    BotSettings,
    /// Customer registration / identification.
    Customers,
    /// Behavioral event ingestion.
    Events,
}

/// A fully formed request, ready for the transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Look up a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Compose the user-agent string sent as `X-GB-Agent`.
pub fn user_agent() -> String {
    format!("GB/rust/{}", crate::VERSION)
}

/// Build a request descriptor from the current session state.
///
/// Must be called synchronously after any session-token mutation, before the
/// transport call is awaited; the token read here is the one the request
/// carries.
pub fn build_request(session: &Session, endpoint: Endpoint, body: Option<Value>) -> RequestDescriptor {
    let base = session.base_url();
    let (method, url) = match endpoint {
        Endpoint::BotSettings => (Method::Get, format!("{base}{BOT_SETTINGS_PATH}")),
        Endpoint::Customers | Endpoint::Events => {
            let version = if session.session_token.is_some() {
                INTEGRATIONS_SESSION_PATH
            } else {
                INTEGRATIONS_PATH
            };
            let resource = match endpoint {
                Endpoint::Customers => CUSTOMERS_PATH,
                _ => EVENTS_PATH,
            };
            (Method::Post, format!("{base}{version}{resource}"))
        }
    };

    let mut headers: Vec<(&'static str, String)> = vec![
        ("Content-Type", "application/json".to_string()),
        ("APIKey", session.api_key.clone()),
        ("OS", std::env::consts::OS.to_string()),
        ("SDKVersion", crate::VERSION.to_string()),
        ("X-GB-Agent", user_agent()),
    ];
    if let Some(token) = &session.session_token {
        headers.push(("SessionToken", token.clone()));
    }

    let body = match method {
        Method::Post => body,
        Method::Get => None,
    };

    RequestDescriptor {
        method,
        url,
        headers,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameballConfig;

    fn session_with_token(token: Option<&str>) -> Session {
        let mut session = Session::default();
        session.begin_init(&GameballConfig::new("key-1"));
        session.finish_init();
        session.apply_session_token(token);
        session
    }

    #[test]
    fn test_versioned_url_without_token() {
        let session = session_with_token(None);
        let request = build_request(&session, Endpoint::Customers, None);
        assert_eq!(
            request.url,
            "https://api.gameball.co/api/v4.0/integrations/customers"
        );
        assert_eq!(request.method, Method::Post);
        assert!(request.header("SessionToken").is_none());
    }

    #[test]
    fn test_versioned_url_with_token() {
        let session = session_with_token(Some("tok-9"));
        let request = build_request(&session, Endpoint::Events, None);
        assert_eq!(
            request.url,
            "https://api.gameball.co/api/v4.1/integrations/events"
        );
        assert_eq!(request.header("SessionToken"), Some("tok-9"));
    }

    #[test]
    fn test_bot_settings_url_never_versioned() {
        for token in [None, Some("tok")] {
            let session = session_with_token(token);
            let request = build_request(&session, Endpoint::BotSettings, None);
            assert_eq!(
                request.url,
                "https://api.gameball.co/api/v1.0/Bots/BotSettings?c=mobile"
            );
            assert_eq!(request.method, Method::Get);
            assert!(request.body.is_none());
        }
    }

    #[test]
    fn test_standard_headers_always_present() {
        let session = session_with_token(None);
        let request = build_request(&session, Endpoint::Customers, None);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("APIKey"), Some("key-1"));
        assert_eq!(request.header("SDKVersion"), Some(crate::VERSION));
        assert_eq!(request.header("OS"), Some(std::env::consts::OS));
        assert_eq!(
            request.header("X-GB-Agent"),
            Some(format!("GB/rust/{}", crate::VERSION).as_str())
        );
    }

    #[test]
    fn test_base_url_override_applies() {
        let mut session = session_with_token(None);
        session.api_prefix = Some("https://staging.gameball.co".to_string());
        let request = build_request(&session, Endpoint::Customers, None);
        assert!(request
            .url
            .starts_with("https://staging.gameball.co/api/v4.0/"));
    }
}
