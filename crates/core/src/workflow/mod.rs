//! Workflow orchestration.
//!
//! [`run`] holds the per-run state struct and its transition helpers;
//! [`engine`] drives the fixed stage sequence over the providers.

pub mod engine;
pub mod run;

use crate::providers::base::ProviderError;
use crate::render::RenderError;
use qw_protocol::workflow_models::RunState;
use thiserror::Error;

/// Errors that terminate a workflow run.
///
/// Failures are caught exactly once at the top of the engine; no
/// retries are attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// A second `run()` was attempted while one was in flight.
    #[error("a workflow run is already in flight")]
    Busy,

    /// A provider-backed stage failed.
    #[error("{stage:?} stage failed: {source}")]
    Stage {
        stage: RunState,
        source: ProviderError,
    },

    /// Image compositing failed.
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

pub use engine::WorkflowEngine;
pub use run::WorkflowRun;
