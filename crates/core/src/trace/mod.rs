//! Append-only trace recording for a workflow run.
//!
//! Every run owns a fresh [`TraceRecorder`] that accumulates three
//! ordered sequences: log entries, trace spans, and inter-agent protocol
//! messages. Each `log()` call appends exactly one entry and one span
//! (the 1:1 invariant), then emits both over the event channel and hands
//! the entry to the out-of-band [`TraceSink`].

use chrono::Utc;
use qw_protocol::ipc::Event;
use qw_protocol::trace_models::{LogEntry, LogKind, ProtocolMessage, TraceSpan};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use uuid::Uuid;

/// Out-of-band log delivery.
///
/// Models the original demo's fire-and-forget POST of each log entry to
/// a logging endpoint. Implementations must never fail: delivery is best
/// effort and a sink failure must not affect workflow progress, so the
/// method has no return value.
pub trait TraceSink: Send + Sync {
    fn record(&self, entry: &LogEntry);
}

/// Sink that discards everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&self, _entry: &LogEntry) {}
}

/// Per-run observability recorder.
pub struct TraceRecorder {
    run_id: Uuid,
    logs: Vec<LogEntry>,
    spans: Vec<TraceSpan>,
    messages: Vec<ProtocolMessage>,
    events_tx: Sender<Event>,
    sink: Arc<dyn TraceSink>,
}

impl TraceRecorder {
    /// Create an empty recorder for the given run.
    pub fn new(run_id: Uuid, events_tx: Sender<Event>, sink: Arc<dyn TraceSink>) -> Self {
        Self {
            run_id,
            logs: Vec::new(),
            spans: Vec::new(),
            messages: Vec::new(),
            events_tx,
            sink,
        }
    }

    /// Append a log entry and its paired trace span, then emit both.
    ///
    /// Span durations are mock values in [500, 2500) ms; no real timing
    /// is measured.
    pub async fn log(&mut self, agent: &str, message: impl Into<String>, kind: LogKind) {
        let message = message.into();
        let timestamp = Utc::now();

        let entry = LogEntry {
            agent: agent.to_string(),
            message: message.clone(),
            kind,
            timestamp,
        };
        let span = TraceSpan {
            span_id: format!("span_{}", Uuid::new_v4().simple()),
            agent: agent.to_string(),
            operation: message,
            timestamp,
            duration_ms: rand::thread_rng().gen_range(500.0..2500.0),
        };

        self.sink.record(&entry);
        self.logs.push(entry.clone());
        self.spans.push(span.clone());

        let _ = self
            .events_tx
            .send(Event::Log {
                run_id: self.run_id,
                entry,
            })
            .await;
        let _ = self
            .events_tx
            .send(Event::Span {
                run_id: self.run_id,
                span,
            })
            .await;
    }

    /// Append an inter-agent protocol message and emit it.
    pub async fn protocol(&mut self, from: &str, to: &str, message: impl Into<String>) {
        let msg = ProtocolMessage {
            id: Uuid::new_v4(),
            from: from.to_string(),
            to: to.to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        };

        self.messages.push(msg.clone());
        let _ = self
            .events_tx
            .send(Event::Protocol {
                run_id: self.run_id,
                message: msg,
            })
            .await;
    }

    /// All log entries recorded so far, in emission order.
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// All trace spans recorded so far, in emission order.
    pub fn spans(&self) -> &[TraceSpan] {
        &self.spans
    }

    /// All protocol messages recorded so far, in emission order.
    pub fn messages(&self) -> &[ProtocolMessage] {
        &self.messages
    }
}
