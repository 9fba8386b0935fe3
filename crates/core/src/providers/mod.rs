//! Capability providers for the workflow stages.
//!
//! Each external capability the workflow depends on (search, browser
//! automation, art generation, sandbox execution) sits behind a trait so
//! a real backend can be substituted without touching the state machine.
//! The shipped implementations are mocks that return the fixed data of
//! the original demo.

pub mod base;
pub mod mock;

pub use base::{
    ArtConcept, ArtProvider, ArtReferences, ProviderError, ResearchProvider, SandboxProvider,
    SandboxReport, SearchResult,
};
pub use mock::{MockArtProvider, MockResearchProvider, MockSandboxProvider};
