//! Error types for the Gameball SDK.

/// Errors surfaced by the Gameball SDK.
///
/// Precondition and validation errors are raised synchronously, before any
/// network I/O. `Server` and `Network` errors surface after the transport
/// call resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameballError {
    /// An operation other than `init` was called before initialization
    /// completed.
    NotInitialized,
    /// Language code is not exactly two characters.
    InvalidLanguage(String),
    /// Customer identifier is empty or whitespace-only.
    EmptyCustomerId,
    /// A device token was supplied without a push provider.
    MissingPushProvider,
    /// A push provider was supplied without a device token.
    MissingDeviceToken,
    /// The server answered with a non-2xx status.
    Server { status: u16, reason: String },
    /// Network-level transport failure (DNS, connect, timeout).
    Network(String),
    /// Request body could not be serialized or a 2xx response body could not
    /// be parsed.
    Serialization(String),
    /// Anything else (runtime or client construction failures).
    Other(String),
}

impl std::fmt::Display for GameballError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameballError::NotInitialized => {
                write!(f, "Gameball must be initialized before use. Call init() first")
            }
            GameballError::InvalidLanguage(code) => {
                write!(f, "Language must be a two-letter code (e.g. \"en\", \"ar\"), got {code:?}")
            }
            GameballError::EmptyCustomerId => write!(f, "Customer id must not be blank"),
            GameballError::MissingPushProvider => {
                write!(f, "A device token requires a push provider")
            }
            GameballError::MissingDeviceToken => {
                write!(f, "A push provider requires a device token")
            }
            GameballError::Server { status, reason } => write!(f, "HTTP {status}: {reason}"),
            GameballError::Network(msg) => write!(f, "Network error: {msg}"),
            GameballError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            GameballError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GameballError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_and_reason() {
        let err = GameballError::Server {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        let text = format!("{err}");
        assert!(text.contains("503"));
        assert!(text.contains("Service Unavailable"));
    }

    #[test]
    fn test_validation_errors_are_distinct() {
        assert_ne!(GameballError::MissingPushProvider, GameballError::MissingDeviceToken);
        assert_ne!(GameballError::EmptyCustomerId, GameballError::NotInitialized);
    }
}
