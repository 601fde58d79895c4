//! Debug bar client for Rust applications.
//!
//! This crate forwards application debug events — errors, warnings, database
//! queries, outgoing mail, and ad-hoc value dumps — as JSON over HTTP to a
//! locally running debug bar desktop app. Delivery is best effort: each
//! notification is a single POST with a short timeout, and failures are
//! swallowed so the host application behaves identically whether or not a
//! debug bar is listening.
//!
//! # Overview
//!
//! Values to dump are converted into the [`Value`] tree (via `From` impls or
//! the [`Inspect`] trait) and rendered by the serializer in [`format`] into
//! the nested text the debug bar displays. The [`Client`] wraps each event
//! in the wire payload for its endpoint and posts it to the configured
//! `host:port`.
//!
//! ```no_run
//! use debugbar_client::{dump, Client, Config};
//!
//! # async fn demo() {
//! let client = Client::new(Config::default());
//! dump!(client, vec![1i64, 2, 3]).await;
//! # }
//! ```
//!
//! # Modules
//!
//! - [`value`]: the `Value` model and conversions from native values
//! - [`format`]: the structured value serializer
//! - [`types`]: wire payload types for the five endpoints
//! - [`snippet`]: code-snippet extraction for error reports
//! - [`config`]: configuration from environment variables
//! - [`client`]: the best-effort HTTP notifier
//! - [`error`]: error types for client operations

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod snippet;
pub mod types;
pub mod value;

pub use client::Client;
pub use config::{Config, ConfigError};
pub use error::{ClientError, Result};
pub use format::{serialize, serialize_with_depth, DEFAULT_MAX_DEPTH};
pub use snippet::{SnippetLine, DEFAULT_CONTEXT_LINES};
pub use types::{
    DumpPayload, ErrorPayload, ErrorReport, MailPayload, QueryPayload, QueryReport,
    WarningPayload,
};
pub use value::{Inspect, MapKey, Value};

/// Sends a value dump tagged with the call site's file and line.
///
/// Converts the argument via [`Into<Value>`] and returns the client's dump
/// future; `.await` it, or hand it to a spawner to fully detach delivery
/// from the caller.
///
/// ```no_run
/// # async fn demo(client: debugbar_client::Client) {
/// debugbar_client::dump!(client, vec![1i64, 2, 3]).await;
/// # }
/// ```
#[macro_export]
macro_rules! dump {
    ($client:expr, $value:expr) => {
        $client.dump($value, file!(), line!())
    };
}
