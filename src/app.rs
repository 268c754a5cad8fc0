//! Public facade for the Gameball SDK.
//!
//! [`GameballApp`] owns the session state and a [`Transport`], and exposes
//! the boundary operations: `init`, `initialize_customer`, `send_event`,
//! `show_profile`, and `change_language`. Each operation returns a
//! `Result`; callers that prefer callback style pass a [`Callback`], which
//! is fed through a single adapter at this boundary.

use crate::config::GameballConfig;
use crate::customer::{self, InitializeCustomerRequest, InitializeCustomerResponse};
use crate::error::GameballError;
use crate::event::Event;
use crate::request::{build_request, Endpoint, RequestDescriptor, WIDGET_BASE_URL};
use crate::session::Session;
use crate::transport::{HttpTransport, Transport};
use crate::widget::{ShowProfileRequest, WidgetSettings};
use std::sync::{Arc, Mutex, MutexGuard};
use url::{form_urlencoded, Url};

/// Dual-channel result delivery for callback-style callers.
///
/// Every operation that accepts a callback reports its outcome through both
/// the returned `Result` and the callback, never only one.
pub struct Callback<T> {
    success: Option<Box<dyn Fn(&T) + Send + Sync>>,
    error: Option<Box<dyn Fn(&GameballError) + Send + Sync>>,
}

impl<T> Callback<T> {
    pub fn new() -> Self {
        Self {
            success: None,
            error: None,
        }
    }

    /// Invoked with the operation result on success.
    pub fn on_success(mut self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.success = Some(Box::new(f));
        self
    }

    /// Invoked with the error on failure.
    pub fn on_error(mut self, f: impl Fn(&GameballError) + Send + Sync + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Route a result into the callback's matching channel, exactly once.
fn deliver<T>(callback: Option<&Callback<T>>, result: &Result<T, GameballError>) {
    let Some(callback) = callback else { return };
    match result {
        Ok(value) => {
            if let Some(f) = &callback.success {
                f(value);
            }
        }
        Err(err) => {
            if let Some(f) = &callback.error {
                f(err);
            }
        }
    }
}

/// Gameball SDK entry point.
///
/// Construct one per host application; there is no process-wide singleton.
/// All operations other than [`init`](Self::init) fail with
/// [`GameballError::NotInitialized`] until `init` completes.
pub struct GameballApp {
    session: Mutex<Session>,
    transport: Arc<dyn Transport>,
}

impl GameballApp {
    /// Create an app backed by the production HTTP transport.
    pub fn new() -> Result<Self, GameballError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?)))
    }

    /// Create an app with a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            session: Mutex::new(Session::default()),
            transport,
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().expect("session lock poisoned")
    }

    /// Initialize the SDK.
    ///
    /// Stores the configuration, fetches the widget theming settings, and
    /// marks the session ready. The settings fetch is best-effort: failure
    /// is logged and swallowed, and never blocks initialization.
    pub async fn init(&self, config: GameballConfig) -> Result<(), GameballError> {
        let descriptor = {
            let mut session = self.session();
            session.begin_init(&config);
            build_request(&session, Endpoint::BotSettings, None)
        };

        match self.fetch_main_color(&descriptor).await {
            Ok(color) => self.session().main_color = color,
            Err(err) => tracing::warn!("Failed to fetch bot settings: {err}"),
        }

        let mut session = self.session();
        session.finish_init();
        tracing::debug!(
            version = crate::VERSION,
            lang = %session.lang,
            "Gameball SDK initialized"
        );
        Ok(())
    }

    async fn fetch_main_color(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<Option<String>, GameballError> {
        let body = self.transport.send(descriptor).await?.into_result()?;
        Ok(body
            .get("response")
            .and_then(|r| r.get("botMainColor"))
            .and_then(|c| c.as_str())
            .map(|c| c.trim_start_matches('#').to_string()))
    }

    /// Register or identify a customer.
    ///
    /// `session_token` overwrites the stored token before the request is
    /// built: a non-empty value replaces it, `None` clears it, and the new
    /// value sticks for subsequent calls. Returns the platform-assigned
    /// customer id.
    pub async fn initialize_customer(
        &self,
        request: InitializeCustomerRequest,
        session_token: Option<&str>,
        callback: Option<&Callback<InitializeCustomerResponse>>,
    ) -> Result<InitializeCustomerResponse, GameballError> {
        let result = self.initialize_customer_inner(request, session_token).await;
        deliver(callback, &result);
        result
    }

    async fn initialize_customer_inner(
        &self,
        request: InitializeCustomerRequest,
        session_token: Option<&str>,
    ) -> Result<InitializeCustomerResponse, GameballError> {
        self.session().ensure_ready()?;
        customer::validate(&request)?;
        let payload = customer::normalize(&request, std::env::consts::OS)?;

        // Token write and descriptor build share one lock acquisition; the
        // guard drops before the transport call suspends, so an in-flight
        // operation can never pick up a token written after its build.
        let descriptor = {
            let mut session = self.session();
            session.apply_session_token(session_token);
            build_request(&session, Endpoint::Customers, Some(payload))
        };

        let body = self.transport.send(&descriptor).await?.into_result()?;
        let gameball_id = body
            .get("gameballId")
            .and_then(|v| v.as_str())
            .or_else(|| body.get("id").and_then(|v| v.as_str()))
            .unwrap_or("")
            .to_string();
        Ok(InitializeCustomerResponse { gameball_id })
    }

    /// Send a behavioral event batch.
    ///
    /// The payload is sent as supplied; `session_token` follows the same
    /// overwrite rule as [`initialize_customer`](Self::initialize_customer).
    pub async fn send_event(
        &self,
        event: Event,
        session_token: Option<&str>,
        callback: Option<&Callback<()>>,
    ) -> Result<(), GameballError> {
        let result = self.send_event_inner(event, session_token).await;
        deliver(callback, &result);
        result
    }

    async fn send_event_inner(
        &self,
        event: Event,
        session_token: Option<&str>,
    ) -> Result<(), GameballError> {
        self.session().ensure_ready()?;
        let payload = serde_json::to_value(&event)
            .map_err(|e| GameballError::Serialization(e.to_string()))?;

        let descriptor = {
            let mut session = self.session();
            session.apply_session_token(session_token);
            build_request(&session, Endpoint::Events, Some(payload))
        };

        self.transport.send(&descriptor).await?.into_result()?;
        Ok(())
    }

    /// Resolve the launch descriptor for the loyalty profile widget.
    ///
    /// Applies the session-token overwrite rule, then snapshots the session
    /// into a [`WidgetSettings`] value for the rendering collaborator. No
    /// network I/O happens here.
    pub fn show_profile(
        &self,
        request: ShowProfileRequest,
        session_token: Option<&str>,
    ) -> Result<WidgetSettings, GameballError> {
        let mut session = self.session();
        session.ensure_ready()?;
        session.apply_session_token(session_token);
        Ok(WidgetSettings {
            api_key: session.api_key.clone(),
            lang: session.lang.clone(),
            shop: session.shop.clone(),
            platform: session.platform.clone(),
            widget_url_prefix: request
                .widget_url_prefix
                .unwrap_or_else(|| WIDGET_BASE_URL.to_string()),
            customer_id: request.customer_id,
            open_detail: request.open_detail,
            hide_navigation: request.hide_navigation,
            show_close_button: request.show_close_button,
            close_button_color: request.close_button_color,
            main_color: session.main_color.clone(),
            session_token: session.session_token.clone(),
        })
    }

    /// Change the widget language. The code must be exactly two characters.
    pub fn change_language(&self, code: &str) -> Result<(), GameballError> {
        let mut session = self.session();
        session.ensure_ready()?;
        session.change_language(code)?;
        tracing::debug!(lang = code, "Language changed");
        Ok(())
    }

    /// Extract the `GBReferral` code from a referral link, if present.
    ///
    /// Scheme-less and otherwise malformed links still carry referrals, so
    /// when full URL parsing fails the query string is scanned directly.
    pub fn referral_code(url: &str) -> Option<String> {
        if let Ok(parsed) = Url::parse(url) {
            return parsed
                .query_pairs()
                .find(|(key, _)| key == "GBReferral")
                .map(|(_, value)| value.into_owned());
        }
        let (_, query) = url.split_once('?')?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "GBReferral")
            .map(|(_, value)| value.into_owned())
    }
}

/// Blocking facade for synchronous hosts.
///
/// Owns a current-thread tokio runtime and delegates to [`GameballApp`].
pub struct BlockingGameballApp {
    inner: GameballApp,
    runtime: tokio::runtime::Runtime,
}

impl BlockingGameballApp {
    pub fn new() -> Result<Self, GameballError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GameballError::Other(format!("Failed to create runtime: {e}")))?;
        Ok(Self {
            inner: GameballApp::new()?,
            runtime,
        })
    }

    pub fn init(&self, config: GameballConfig) -> Result<(), GameballError> {
        self.runtime.block_on(self.inner.init(config))
    }

    pub fn initialize_customer(
        &self,
        request: InitializeCustomerRequest,
        session_token: Option<&str>,
        callback: Option<&Callback<InitializeCustomerResponse>>,
    ) -> Result<InitializeCustomerResponse, GameballError> {
        self.runtime
            .block_on(self.inner.initialize_customer(request, session_token, callback))
    }

    pub fn send_event(
        &self,
        event: Event,
        session_token: Option<&str>,
        callback: Option<&Callback<()>>,
    ) -> Result<(), GameballError> {
        self.runtime
            .block_on(self.inner.send_event(event, session_token, callback))
    }

    pub fn show_profile(
        &self,
        request: ShowProfileRequest,
        session_token: Option<&str>,
    ) -> Result<WidgetSettings, GameballError> {
        self.inner.show_profile(request, session_token)
    }

    pub fn change_language(&self, code: &str) -> Result<(), GameballError> {
        self.inner.change_language(code)
    }
}
