//! Inter-process communication protocol.
//!
//! This module defines the event types for asynchronous communication
//! between a presentation layer and the Core (workflow engine).
//!
//! The core emits events over a channel as a run progresses; delivery
//! is best effort and fire-and-forget. A UI may render them live or
//! poll the accumulated streams after each stage. The core never waits
//! on the consumer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::agent_models::AgentId;
use crate::trace_models::{LogEntry, ProtocolMessage, TraceSpan};
use crate::workflow_models::{ArtStyle, RunState};

/// Events sent from the Core to the UI.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// {
///   "type": "stateChanged",
///   "payload": {
///     "run_id": "uuid-here",
///     "state": "RESEARCHING"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// A new workflow run has been accepted.
    RunStarted {
        #[ts(type = "string")]
        run_id: Uuid,
        payload: String,
        style: ArtStyle,
    },

    /// The run transitioned to a new lifecycle state.
    StateChanged {
        #[ts(type = "string")]
        run_id: Uuid,
        state: RunState,
    },

    /// An agent became the single active agent.
    AgentActivated {
        #[ts(type = "string")]
        run_id: Uuid,
        agent: AgentId,
    },

    /// The previously active agent was deactivated.
    AgentDeactivated {
        #[ts(type = "string")]
        run_id: Uuid,
        agent: AgentId,
    },

    /// A log entry was appended.
    ///
    /// Every `Log` event is followed by exactly one matching `Span`.
    Log {
        #[ts(type = "string")]
        run_id: Uuid,
        entry: LogEntry,
    },

    /// A trace span was recorded.
    Span {
        #[ts(type = "string")]
        run_id: Uuid,
        span: TraceSpan,
    },

    /// An inter-agent protocol message was sent.
    Protocol {
        #[ts(type = "string")]
        run_id: Uuid,
        message: ProtocolMessage,
    },

    /// The run completed successfully.
    RunCompleted {
        #[ts(type = "string")]
        run_id: Uuid,
    },

    /// The run terminated with an error.
    RunFailed {
        #[ts(type = "string")]
        run_id: Uuid,
        error: String,
    },
}
