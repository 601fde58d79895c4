//! Wire payload types for the debug bar protocol.
//!
//! One serde struct per endpoint: `/error`, `/warning`, `/query`, `/mail`,
//! and `/dump`. Field names match the JSON keys the debug bar expects, so
//! every rename lives here and nowhere else. [`ErrorReport`] and
//! [`QueryReport`] are the caller-facing inputs; the client fills in the
//! pieces it owns (code snippet, domain tag, connection default) when
//! building the wire payload.

use serde::Serialize;

use crate::snippet::SnippetLine;

/// Fixed level string for warning payloads.
pub(crate) const WARNING_LEVEL: &str = "Warning";

/// Default connection name for query payloads.
pub(crate) const DEFAULT_CONNECTION: &str = "default";

/// An application error to report to the debug bar.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    /// Error type name shown as the report heading.
    pub kind: String,

    /// Human-readable error message.
    pub message: String,

    /// Source file the error originated in.
    pub file: String,

    /// 1-based line the error originated on.
    pub line: u32,

    /// Multi-line cause trace; empty when unknown.
    pub trace: String,
}

impl ErrorReport {
    /// Creates a report with an empty trace.
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            file: file.into(),
            line,
            trace: String::new(),
        }
    }

    /// Attaches a cause trace.
    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = trace.into();
        self
    }

    /// Builds a report from a std error, using its type name as the kind and
    /// its `source()` chain as the trace.
    pub fn from_error<E: std::error::Error>(err: &E, file: impl Into<String>, line: u32) -> Self {
        let kind = std::any::type_name::<E>()
            .rsplit("::")
            .next()
            .unwrap_or("Error");

        let mut trace = String::new();
        let mut source = err.source();
        while let Some(cause) = source {
            if !trace.is_empty() {
                trace.push('\n');
            }
            trace.push_str("caused by: ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }

        Self {
            kind: kind.to_string(),
            message: err.to_string(),
            file: file.into(),
            line,
            trace,
        }
    }
}

/// Wire payload for `POST /error`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub trace: String,
    pub snippet: Vec<SnippetLine>,
    pub domain: Option<String>,
}

impl ErrorPayload {
    pub(crate) const ENDPOINT: &'static str = "/error";
}

/// Wire payload for `POST /warning`.
#[derive(Debug, Clone, Serialize)]
pub struct WarningPayload {
    pub level: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub domain: Option<String>,
}

impl WarningPayload {
    pub(crate) const ENDPOINT: &'static str = "/warning";
}

/// A database query to report to the debug bar.
#[derive(Debug, Clone)]
pub struct QueryReport {
    /// The SQL statement as executed.
    pub sql: String,

    /// Bound parameter values, stringified.
    pub bindings: Vec<String>,

    /// Execution time in milliseconds.
    pub time: f64,

    /// Connection name; the client substitutes `"default"` when `None`.
    pub connection: Option<String>,

    /// Call site, when the caller knows it.
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl QueryReport {
    /// Creates a report for a statement with no bindings and zero time.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            bindings: Vec::new(),
            time: 0.0,
            connection: None,
            file: None,
            line: None,
        }
    }

    /// Sets the bound parameter values.
    #[must_use]
    pub fn with_bindings<I, S>(mut self, bindings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bindings = bindings.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the execution time in milliseconds.
    #[must_use]
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Sets the connection name.
    #[must_use]
    pub fn on_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Records the call site that issued the query.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }
}

/// Wire payload for `POST /query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPayload {
    pub sql: String,
    pub bindings: Vec<String>,
    pub time: f64,
    pub connection: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub domain: Option<String>,
}

impl QueryPayload {
    pub(crate) const ENDPOINT: &'static str = "/query";
}

/// Wire payload for `POST /mail`. Unlike the other payloads, mail captures
/// carry no domain tag.
#[derive(Debug, Clone, Serialize)]
pub struct MailPayload {
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
}

impl MailPayload {
    pub(crate) const ENDPOINT: &'static str = "/mail";

    /// Creates a mail capture with no CC/BCC recipients and no body.
    pub fn new<I, S>(from: impl Into<String>, to: I, subject: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into(),
            to: to.into_iter().map(Into::into).collect(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            html: None,
            text: None,
        }
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Sets the plain-text body.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the CC recipients.
    #[must_use]
    pub fn with_cc<I, S>(mut self, cc: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc = cc.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the BCC recipients.
    #[must_use]
    pub fn with_bcc<I, S>(mut self, bcc: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bcc = bcc.into_iter().map(Into::into).collect();
        self
    }
}

/// Wire payload for `POST /dump`. `content` is the serializer's rendered
/// text; `kind` is the type namer's tag for the dumped value.
#[derive(Debug, Clone, Serialize)]
pub struct DumpPayload {
    pub file: String,
    pub line: u32,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub domain: Option<String>,
}

impl DumpPayload {
    pub(crate) const ENDPOINT: &'static str = "/dump";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_serializes_kind_as_type() {
        let payload = ErrorPayload {
            kind: "ParseError".to_string(),
            message: "unexpected token".to_string(),
            file: "src/main.rs".to_string(),
            line: 42,
            trace: String::new(),
            snippet: vec![SnippetLine {
                number: 42,
                content: "let x = ;".to_string(),
            }],
            domain: Some("my-app".to_string()),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "ParseError");
        assert!(json.get("kind").is_none());
        assert_eq!(json["snippet"][0]["number"], 42);
        assert_eq!(json["snippet"][0]["content"], "let x = ;");
        assert_eq!(json["domain"], "my-app");
    }

    #[test]
    fn dump_payload_serializes_kind_as_type() {
        let payload = DumpPayload {
            file: "src/lib.rs".to_string(),
            line: 7,
            content: "[]".to_string(),
            kind: "sequence".to_string(),
            domain: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "sequence");
        assert_eq!(json["content"], "[]");
        assert!(json["domain"].is_null());
    }

    #[test]
    fn query_payload_keeps_unknown_call_site_null() {
        let payload = QueryPayload {
            sql: "select 1".to_string(),
            bindings: vec![],
            time: 1.25,
            connection: "default".to_string(),
            file: None,
            line: None,
            domain: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["sql"], "select 1");
        assert_eq!(json["time"], 1.25);
        assert!(json["file"].is_null());
        assert!(json["line"].is_null());
    }

    #[test]
    fn query_report_builder() {
        let report = QueryReport::new("select * from users where id = ?")
            .with_bindings(["7"])
            .with_time(3.5)
            .on_connection("replica")
            .at("src/db.rs", 120);

        assert_eq!(report.bindings, vec!["7".to_string()]);
        assert_eq!(report.time, 3.5);
        assert_eq!(report.connection.as_deref(), Some("replica"));
        assert_eq!(report.file.as_deref(), Some("src/db.rs"));
        assert_eq!(report.line, Some(120));
    }

    #[test]
    fn mail_payload_builder_and_shape() {
        let payload = MailPayload::new("app@example.com", ["user@example.com"], "Welcome")
            .with_text("hello")
            .with_cc(["audit@example.com"]);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["from"], "app@example.com");
        assert_eq!(json["to"][0], "user@example.com");
        assert_eq!(json["cc"][0], "audit@example.com");
        assert_eq!(json["bcc"].as_array().unwrap().len(), 0);
        assert_eq!(json["subject"], "Welcome");
        assert!(json["html"].is_null());
        assert_eq!(json["text"], "hello");
    }

    #[test]
    fn error_report_from_error_uses_type_name_and_cause_chain() {
        use std::fmt;

        #[derive(Debug)]
        struct Inner;

        impl fmt::Display for Inner {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "inner failure")
            }
        }

        impl std::error::Error for Inner {}

        #[derive(Debug)]
        struct Outer(Inner);

        impl fmt::Display for Outer {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "outer failure")
            }
        }

        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let report = ErrorReport::from_error(&Outer(Inner), "src/job.rs", 9);
        assert_eq!(report.kind, "Outer");
        assert_eq!(report.message, "outer failure");
        assert_eq!(report.trace, "caused by: inner failure");
        assert_eq!(report.file, "src/job.rs");
        assert_eq!(report.line, 9);
    }
}
