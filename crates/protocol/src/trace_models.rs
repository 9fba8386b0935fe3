//! Observability records emitted during a workflow run.
//!
//! Three append-only sequences are produced per run: log entries, trace
//! spans (one per log entry), and inter-agent protocol messages. All
//! three are purely observational; nothing in the workflow reads them
//! back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Category of a log entry, used by UIs for color coding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Search,
    Automation,
    Ai,
    Protocol,
    Execution,
    Agent,
    Validation,
    System,
    Success,
    Error,
    Trace,
}

/// A single line of workflow log output.
///
/// Entries are immutable once created and appended in emission order.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct LogEntry {
    /// Name of the agent or tool that produced the entry.
    pub agent: String,

    /// The log message.
    pub message: String,

    /// Display category.
    pub kind: LogKind,

    /// Emission time.
    pub timestamp: DateTime<Utc>,
}

/// A mock tracing span, recorded 1:1 with each log entry.
///
/// Durations are synthetic values in [500, 2500) milliseconds; no real
/// timing is measured.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct TraceSpan {
    /// Unique span identifier of the form `span_<hex>`.
    pub span_id: String,

    /// Agent the span is attributed to.
    pub agent: String,

    /// The operation being traced (the log message).
    pub operation: String,

    /// Emission time.
    pub timestamp: DateTime<Utc>,

    /// Mock duration in milliseconds.
    pub duration_ms: f64,
}

/// A logical inter-agent message.
///
/// Represents one simulated A2A-style send. There are no delivery or
/// acknowledgement semantics.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct ProtocolMessage {
    /// Unique message identifier.
    #[ts(type = "string")]
    pub id: Uuid,

    /// Sending party.
    pub from: String,

    /// Receiving party.
    pub to: String,

    /// Message body.
    pub message: String,

    /// Emission time.
    pub timestamp: DateTime<Utc>,
}
