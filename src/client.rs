//! Best-effort HTTP notifier for the debug bar.
//!
//! Each notification is a single JSON `POST` to the local debug bar server,
//! bounded by the configured timeout. There is no buffering and no retry:
//! failures are logged at debug level and dropped, so the host application
//! is never slowed or crashed by a missing or unreachable receiver. The
//! notification methods are independent and the client is cheap to share
//! (`reqwest::Client` is internally reference-counted).
//!
//! # Example
//!
//! ```no_run
//! use debugbar_client::{dump, Client, Config, QueryReport};
//!
//! # async fn demo() {
//! let client = Client::new(Config::default());
//!
//! dump!(client, vec![1i64, 2, 3]).await;
//!
//! client
//!     .query(&QueryReport::new("select * from users").with_time(2.4))
//!     .await;
//! # }
//! ```

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::format;
use crate::snippet::{self, DEFAULT_CONTEXT_LINES};
use crate::types::{
    DumpPayload, ErrorPayload, ErrorReport, MailPayload, QueryPayload, QueryReport,
    WarningPayload, DEFAULT_CONNECTION, WARNING_LEVEL,
};
use crate::value::Value;

/// HTTP client for the debug bar server.
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { config, http }
    }

    /// Creates a client configured from `DEBUGBAR_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if an environment variable has an invalid
    /// value.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends an error report, with a code snippet extracted around the
    /// reported line when the source file is readable.
    pub async fn error(&self, report: &ErrorReport) {
        if !self.config.enabled {
            return;
        }

        let payload = ErrorPayload {
            kind: report.kind.clone(),
            message: report.message.clone(),
            file: report.file.clone(),
            line: report.line,
            trace: report.trace.clone(),
            snippet: snippet::extract(
                Path::new(&report.file),
                report.line as usize,
                DEFAULT_CONTEXT_LINES,
            ),
            domain: self.config.domain.clone(),
        };

        self.deliver(ErrorPayload::ENDPOINT, &payload).await;
    }

    /// Sends a non-fatal warning.
    pub async fn warning(&self, message: impl Into<String>, file: impl Into<String>, line: u32) {
        if !self.config.enabled {
            return;
        }

        let payload = WarningPayload {
            level: WARNING_LEVEL.to_string(),
            message: message.into(),
            file: file.into(),
            line,
            domain: self.config.domain.clone(),
        };

        self.deliver(WarningPayload::ENDPOINT, &payload).await;
    }

    /// Sends a database query capture.
    pub async fn query(&self, report: &QueryReport) {
        if !self.config.enabled {
            return;
        }

        let payload = QueryPayload {
            sql: report.sql.clone(),
            bindings: report.bindings.clone(),
            time: report.time,
            connection: report
                .connection
                .clone()
                .unwrap_or_else(|| DEFAULT_CONNECTION.to_string()),
            file: report.file.clone(),
            line: report.line,
            domain: self.config.domain.clone(),
        };

        self.deliver(QueryPayload::ENDPOINT, &payload).await;
    }

    /// Sends an outgoing-mail capture.
    pub async fn mail(&self, mail: &MailPayload) {
        if !self.config.enabled {
            return;
        }

        self.deliver(MailPayload::ENDPOINT, mail).await;
    }

    /// Sends a value dump tagged with the producing file and line. The
    /// [`dump!`](crate::dump) macro captures the call site automatically.
    pub async fn dump<V: Into<Value>>(&self, value: V, file: impl Into<String>, line: u32) {
        if !self.config.enabled {
            return;
        }

        let value = value.into();
        let payload = DumpPayload {
            file: file.into(),
            line,
            content: format::serialize(&value),
            kind: value.type_name().to_string(),
            domain: self.config.domain.clone(),
        };

        self.deliver(DumpPayload::ENDPOINT, &payload).await;
    }

    /// Fire-and-forget delivery; any failure is logged and swallowed.
    async fn deliver<T: Serialize>(&self, endpoint: &str, payload: &T) {
        if let Err(error) = self.post(endpoint, payload).await {
            debug!(endpoint, error = %error, "debug bar unreachable, notification dropped");
        }
    }

    /// Single POST of the JSON body. The response status is not inspected;
    /// the debug bar acknowledges receipt by displaying the event.
    async fn post<T: Serialize>(&self, endpoint: &str, payload: &T) -> Result<()> {
        let url = self.config.endpoint_url(endpoint);
        let body = serde_json::to_string(payload)?;

        self.http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ClientError::Http)?;

        Ok(())
    }
}
