//! Workflow run state models.
//!
//! This module defines the structures for tracking the state of a single
//! workflow execution: the requested art style, the run lifecycle, and
//! the final result record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

/// The closed vocabulary of art styles the renderer understands.
///
/// This is deliberately an enum rather than a free-form string: the
/// renderer's label step and the research query both depend on a fixed
/// set of names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum ArtStyle {
    Cyberpunk,
    Abstract,
    Nature,
    Geometric,
    Watercolor,
}

impl ArtStyle {
    /// All styles, in the order the original demo offered them.
    pub fn all() -> [ArtStyle; 5] {
        [
            ArtStyle::Cyberpunk,
            ArtStyle::Abstract,
            ArtStyle::Nature,
            ArtStyle::Geometric,
            ArtStyle::Watercolor,
        ]
    }

    /// Lowercase style name.
    pub fn as_str(self) -> &'static str {
        match self {
            ArtStyle::Cyberpunk => "cyberpunk",
            ArtStyle::Abstract => "abstract",
            ArtStyle::Nature => "nature",
            ArtStyle::Geometric => "geometric",
            ArtStyle::Watercolor => "watercolor",
        }
    }
}

impl fmt::Display for ArtStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cyberpunk" => Ok(ArtStyle::Cyberpunk),
            "abstract" => Ok(ArtStyle::Abstract),
            "nature" => Ok(ArtStyle::Nature),
            "geometric" => Ok(ArtStyle::Geometric),
            "watercolor" => Ok(ArtStyle::Watercolor),
            other => Err(format!("unknown art style: {other}")),
        }
    }
}

/// Lifecycle state of a workflow run.
///
/// Normal progression:
/// Idle -> Researching -> Generating -> Integrating -> Validating -> Completed
///
/// `Errored` is reachable from any non-terminal state and is terminal
/// for the run; a fresh `run()` call starts over from `Researching`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    /// No run has started yet.
    Idle,

    /// Style research: mock search plus browser automation.
    Researching,

    /// Art generation: mock AI generation plus sandbox execution.
    Generating,

    /// Image compositing.
    Integrating,

    /// Mock quality validation.
    Validating,

    /// Run finished successfully; a result record exists.
    Completed,

    /// A stage failed; the run produced no result.
    Errored,
}

/// Fixed mock quality metrics reported by the validation stage.
///
/// These are declarative constants, not computed from the image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct QualityMetrics {
    /// Readability percentage, e.g. `"98.5%"`.
    pub readability: String,

    /// Artistic quality score out of 10.
    pub art_score: f64,

    /// Wall-clock generation time, e.g. `"8.4s"`.
    pub generation_time: String,
}

/// The final record of a successful workflow run.
///
/// Created exactly once at completion and immutable thereafter. The
/// image is a base64 data URI; it is decorative only and carries no
/// scannable QR guarantee.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct WorkflowResult {
    /// Unique identifier of the run that produced this result.
    #[ts(type = "string")]
    pub id: Uuid,

    /// The payload the decorative grid was derived from.
    pub payload: String,

    /// The style the run was requested with.
    pub style: ArtStyle,

    /// Composited image as a base64 `data:` URI.
    pub image: String,

    /// Names of the (simulated) tools exercised by the run.
    pub tools_used: Vec<String>,

    /// Names of the (simulated) protocols exercised by the run.
    pub protocols_used: Vec<String>,

    /// Fixed mock quality metrics.
    pub metrics: QualityMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_style_parse_round_trip() {
        for style in ArtStyle::all() {
            let parsed: ArtStyle = style.to_string().parse().unwrap();
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn test_art_style_parse_rejects_unknown() {
        assert!("vaporwave".parse::<ArtStyle>().is_err());
    }

    #[test]
    fn test_run_state_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&RunState::Researching).unwrap();
        assert_eq!(json, "\"RESEARCHING\"");
    }
}
