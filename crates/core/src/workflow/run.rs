//! Workflow run state machine.
//!
//! This module provides the per-run state struct and the transition
//! functions that mutate it while emitting events. The engine calls
//! these in a fixed order; the functions themselves enforce that at
//! most one agent is active at a time.

use qw_protocol::agent_models::AgentId;
use qw_protocol::ipc::Event;
use qw_protocol::workflow_models::{ArtStyle, RunState};
use tokio::sync::mpsc::Sender;
use uuid::Uuid;

/// The mutable state of a single workflow run.
#[derive(Debug, Clone)]
pub struct WorkflowRun {
    /// Unique identifier for this run.
    pub id: Uuid,

    /// The payload the decorative grid will be derived from.
    pub payload: String,

    /// Requested art style.
    pub style: ArtStyle,

    /// Current lifecycle state.
    pub state: RunState,

    /// The single currently active agent, if any.
    ///
    /// `None` in `Idle`, `Completed`, and `Errored`.
    pub active_agent: Option<AgentId>,
}

/// Create a new run in the `Idle` state.
pub fn create_run(payload: String, style: ArtStyle) -> WorkflowRun {
    WorkflowRun {
        id: Uuid::new_v4(),
        payload,
        style,
        state: RunState::Idle,
        active_agent: None,
    }
}

/// Enter a stage: deactivate the previous agent, record the new state,
/// and activate the stage's agent. Emits the corresponding events.
pub async fn begin_stage(
    run: &mut WorkflowRun,
    events_tx: &Sender<Event>,
    state: RunState,
    agent: AgentId,
) {
    deactivate(run, events_tx).await;

    run.state = state;
    let _ = events_tx
        .send(Event::StateChanged {
            run_id: run.id,
            state,
        })
        .await;

    run.active_agent = Some(agent);
    let _ = events_tx
        .send(Event::AgentActivated {
            run_id: run.id,
            agent,
        })
        .await;
}

/// Mark the run completed. Deactivates the active agent and emits
/// `StateChanged` followed by `RunCompleted`.
pub async fn complete_run(run: &mut WorkflowRun, events_tx: &Sender<Event>) {
    deactivate(run, events_tx).await;
    run.state = RunState::Completed;
    let _ = events_tx
        .send(Event::StateChanged {
            run_id: run.id,
            state: run.state,
        })
        .await;
    let _ = events_tx
        .send(Event::RunCompleted { run_id: run.id })
        .await;
}

/// Mark the run errored. Deactivates the active agent and emits
/// `StateChanged` followed by `RunFailed`.
pub async fn fail_run(run: &mut WorkflowRun, events_tx: &Sender<Event>, error: String) {
    deactivate(run, events_tx).await;
    run.state = RunState::Errored;
    let _ = events_tx
        .send(Event::StateChanged {
            run_id: run.id,
            state: run.state,
        })
        .await;
    let _ = events_tx
        .send(Event::RunFailed {
            run_id: run.id,
            error,
        })
        .await;
}

async fn deactivate(run: &mut WorkflowRun, events_tx: &Sender<Event>) {
    if let Some(agent) = run.active_agent.take() {
        let _ = events_tx
            .send(Event::AgentDeactivated {
                run_id: run.id,
                agent,
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_create_run_is_idle() {
        let run = create_run("example.com/x".to_string(), ArtStyle::Geometric);
        assert_eq!(run.state, RunState::Idle);
        assert!(run.active_agent.is_none());
        assert_eq!(run.payload, "example.com/x");
    }

    #[tokio::test]
    async fn test_begin_stage_activates_agent() {
        let mut run = create_run("x".to_string(), ArtStyle::Nature);
        let (tx, mut rx) = mpsc::channel(10);

        begin_stage(&mut run, &tx, RunState::Researching, AgentId::StyleResearcher).await;

        assert_eq!(run.state, RunState::Researching);
        assert_eq!(run.active_agent, Some(AgentId::StyleResearcher));

        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event,
            Event::StateChanged {
                state: RunState::Researching,
                ..
            }
        ));
        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event,
            Event::AgentActivated {
                agent: AgentId::StyleResearcher,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_begin_stage_deactivates_previous_agent() {
        let mut run = create_run("x".to_string(), ArtStyle::Nature);
        let (tx, mut rx) = mpsc::channel(10);

        begin_stage(&mut run, &tx, RunState::Researching, AgentId::StyleResearcher).await;
        begin_stage(&mut run, &tx, RunState::Generating, AgentId::ArtGenerator).await;

        // Exclusivity: only one agent active after the handoff.
        assert_eq!(run.active_agent, Some(AgentId::ArtGenerator));

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert!(matches!(
            events[2],
            Event::AgentDeactivated {
                agent: AgentId::StyleResearcher,
                ..
            }
        ));
        assert!(matches!(
            events[4],
            Event::AgentActivated {
                agent: AgentId::ArtGenerator,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_complete_run_clears_agent() {
        let mut run = create_run("x".to_string(), ArtStyle::Nature);
        let (tx, mut rx) = mpsc::channel(10);

        begin_stage(&mut run, &tx, RunState::Validating, AgentId::QualityAssurance).await;
        complete_run(&mut run, &tx).await;

        assert_eq!(run.state, RunState::Completed);
        assert!(run.active_agent.is_none());

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert!(matches!(events.last(), Some(Event::RunCompleted { .. })));
    }

    #[tokio::test]
    async fn test_fail_run_emits_error_event() {
        let mut run = create_run("x".to_string(), ArtStyle::Nature);
        let (tx, mut rx) = mpsc::channel(10);

        begin_stage(&mut run, &tx, RunState::Generating, AgentId::ArtGenerator).await;
        fail_run(&mut run, &tx, "mock failure".to_string()).await;

        assert_eq!(run.state, RunState::Errored);
        assert!(run.active_agent.is_none());

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert!(matches!(
            events.last(),
            Some(Event::RunFailed { error, .. }) if error == "mock failure"
        ));
    }
}
