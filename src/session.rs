//! Session state store for the Gameball SDK.
//!
//! A single mutable [`Session`] holds everything the request builder needs:
//! the API key, lifecycle state, active language, base-URL override, the
//! cached main color fetched at init, and the current session token. The
//! facade owns it behind a mutex; this module never does I/O.

use crate::config::GameballConfig;
use crate::error::GameballError;

/// SDK lifecycle state.
///
/// `init` is the only transition into `Ready`; once there, the state never
/// reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SdkState {
    /// `init` has not been called.
    #[default]
    Uninitialized,
    /// `init` is in flight (settings fetch pending).
    Initializing,
    /// `init` completed; all operations are available.
    Ready,
}

/// Mutable session state shared by all SDK operations.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub api_key: String,
    pub state: SdkState,
    pub lang: String,
    pub shop: Option<String>,
    pub platform: Option<String>,
    pub api_prefix: Option<String>,
    /// Widget accent color fetched at init, hex digits without `#`.
    pub main_color: Option<String>,
    /// Current session-authentication token, if any.
    pub session_token: Option<String>,
}

impl Session {
    /// Store the configuration and mark the session as initializing.
    pub fn begin_init(&mut self, config: &GameballConfig) {
        self.api_key = config.api_key.clone();
        self.lang = config.lang.clone();
        self.shop = config.shop.clone();
        self.platform = config.platform.clone();
        self.api_prefix = config.api_prefix.clone();
        self.state = SdkState::Initializing;
    }

    /// Mark initialization as complete.
    pub fn finish_init(&mut self) {
        self.state = SdkState::Ready;
    }

    /// Fail unless `init` has completed.
    pub fn ensure_ready(&self) -> Result<(), GameballError> {
        if self.state == SdkState::Ready {
            Ok(())
        } else {
            Err(GameballError::NotInitialized)
        }
    }

    /// Overwrite the stored session token.
    ///
    /// The overwrite is unconditional: a non-empty token replaces whatever
    /// was stored, anything else (absent or blank) clears it. The new value
    /// is the global default for subsequent calls that pass `None`.
    pub fn apply_session_token(&mut self, token: Option<&str>) {
        self.session_token = match token {
            Some(t) if !t.is_empty() => Some(t.to_string()),
            _ => None,
        };
    }

    /// Replace the active language.
    ///
    /// The code must be exactly two characters; it is not checked against a
    /// known-language list.
    pub fn change_language(&mut self, code: &str) -> Result<(), GameballError> {
        if code.chars().count() != 2 {
            return Err(GameballError::InvalidLanguage(code.to_string()));
        }
        self.lang = code.to_string();
        Ok(())
    }

    /// API base URL, honoring the configured override.
    pub fn base_url(&self) -> &str {
        self.api_prefix
            .as_deref()
            .unwrap_or(crate::request::BASE_URL)
    }
}
