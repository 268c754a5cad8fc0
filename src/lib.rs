//! Gameball SDK for Rust - loyalty and engagement platform client.
//!
//! This library lets a host application integrate with the Gameball
//! platform: initializing a session, registering and identifying customers,
//! sending behavioral events, and resolving the launch descriptor for the
//! embedded loyalty widget.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        GameballApp                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────────┐   ┌───────────┐              │
//! │  │ Validator │──▶│ Normalizer │──▶│  Request  │──▶ Transport │
//! │  │           │   │ (customer) │   │  Builder  │    (reqwest) │
//! │  └───────────┘   └────────────┘   └───────────┘              │
//! │                          │              ▲                    │
//! │                          ▼              │                    │
//! │                   ┌─────────────────────┴──┐                 │
//! │                   │   Session state store  │                 │
//! │                   │ (token, lang, theming) │                 │
//! │                   └────────────────────────┘                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session token written by each operation and the request built from it
//! are coordinated synchronously, so concurrent in-flight operations never
//! observe each other's tokens.
//!
//! # Example
//!
//! ```no_run
//! use gameball_sdk::{GameballApp, GameballConfig, InitializeCustomerRequest};
//!
//! # async fn demo() -> Result<(), gameball_sdk::GameballError> {
//! let app = GameballApp::new()?;
//! app.init(GameballConfig::new("your-api-key").lang("en")).await?;
//!
//! let customer = app
//!     .initialize_customer(InitializeCustomerRequest::new("customer-1"), None, None)
//!     .await?;
//! println!("gameball id: {}", customer.gameball_id);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod customer;
pub mod error;
pub mod event;
pub mod request;
pub mod session;
pub mod transport;
pub mod widget;

// Re-export key types at crate root for convenience
pub use app::{BlockingGameballApp, Callback, GameballApp};
pub use config::GameballConfig;
pub use customer::{CustomerAttributes, InitializeCustomerRequest, InitializeCustomerResponse};
pub use error::GameballError;
pub use event::Event;
pub use request::{build_request, Endpoint, Method, RequestDescriptor};
pub use session::{SdkState, Session};
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use widget::{ShowProfileRequest, WidgetSettings};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
