//! The static agent roster for the artistic QR workflow.
//!
//! The workflow always runs the same four simulated agents in a fixed
//! order. Agents carry no state of their own; the orchestrator tracks
//! which one is currently active.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifies one of the four workflow agents.
///
/// Serialized in kebab-case so UI clients can use the values directly
/// as element keys.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "kebab-case")]
pub enum AgentId {
    /// Searches for artistic inspiration and scrapes references.
    StyleResearcher,

    /// Produces artistic elements from the gathered references.
    ArtGenerator,

    /// Merges the art with the decorative QR grid.
    QrIntegrator,

    /// Reports readability and art-quality metrics.
    QualityAssurance,
}

impl AgentId {
    /// Human-readable display name, as shown in log entries.
    pub fn display_name(self) -> &'static str {
        match self {
            AgentId::StyleResearcher => "Style Research Agent",
            AgentId::ArtGenerator => "Art Generation Agent",
            AgentId::QrIntegrator => "QR Integration Agent",
            AgentId::QualityAssurance => "QA Agent",
        }
    }
}

/// Describes a workflow agent for display purposes.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct AgentDescriptor {
    /// Stable identifier referenced by workflow events.
    pub id: AgentId,

    /// Human-readable agent name.
    pub name: String,

    /// One-line description of the agent's responsibility.
    pub role: String,

    /// Names of the (simulated) tools this agent drives.
    pub tools: Vec<String>,
}

/// The full agent roster, in activation order.
pub fn agent_roster() -> Vec<AgentDescriptor> {
    vec![
        AgentDescriptor {
            id: AgentId::StyleResearcher,
            name: AgentId::StyleResearcher.display_name().to_string(),
            role: "Searches for artistic inspiration using the Exa API".to_string(),
            tools: vec!["Exa Search".to_string(), "BrowserBase".to_string()],
        },
        AgentDescriptor {
            id: AgentId::ArtGenerator,
            name: AgentId::ArtGenerator.display_name().to_string(),
            role: "Creates artistic elements using Google Cloud AI".to_string(),
            tools: vec![
                "Google Cloud Vertex AI".to_string(),
                "Fly.io Sandbox".to_string(),
            ],
        },
        AgentDescriptor {
            id: AgentId::QrIntegrator,
            name: AgentId::QrIntegrator.display_name().to_string(),
            role: "Merges art with functional QR codes".to_string(),
            tools: vec!["Custom QR Library".to_string(), "Canvas API".to_string()],
        },
        AgentDescriptor {
            id: AgentId::QualityAssurance,
            name: AgentId::QualityAssurance.display_name().to_string(),
            role: "Validates QR readability and art quality".to_string(),
            tools: vec!["QR Scanner".to_string(), "Image Analysis".to_string()],
        },
    ]
}
