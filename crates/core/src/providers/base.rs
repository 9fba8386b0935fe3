//! Provider traits and supporting types.

use async_trait::async_trait;
use thiserror::Error;

/// One ranked search hit returned by [`ResearchProvider::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    /// Relevance score in [0, 1].
    pub score: f64,
}

/// Art references scraped by browser automation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtReferences {
    /// Reference image names.
    pub images: Vec<String>,
    /// Palette colors as `#rrggbb` strings.
    pub colors: Vec<String>,
    /// Pattern family names.
    pub patterns: Vec<String>,
}

/// Artistic elements produced by the generation step.
///
/// The renderer treats this as opaque; it exists so a real art backend
/// can feed the compositor later.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtConcept {
    pub background: String,
    pub foreground: String,
    pub accent: String,
    /// Model confidence in [0, 1].
    pub confidence: f64,
}

/// Outcome of a sandboxed code execution.
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxReport {
    pub success: bool,
    pub execution_time: String,
    pub memory_used: String,
}

/// Errors raised by provider implementations.
///
/// Any of these terminates the workflow run (fail-fast; no retries).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider not available: {0}")]
    NotAvailable(String),
    #[error("API call failed: {0}")]
    ApiError(String),
    #[error("Execution failed: {0}")]
    ExecutionError(String),
}

/// Style research: ranked search plus browser-automation scraping.
#[async_trait]
pub trait ResearchProvider: Send + Sync {
    /// Run a ranked search for the given query.
    ///
    /// Returns at most three results, best first.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;

    /// Scrape art references from the given URLs.
    async fn browse(&self, urls: &[String]) -> Result<ArtReferences, ProviderError>;
}

/// AI art generation.
#[async_trait]
pub trait ArtProvider: Send + Sync {
    /// Generate artistic elements for the given prompt.
    async fn generate(
        &self,
        prompt: &str,
        references: &ArtReferences,
    ) -> Result<ArtConcept, ProviderError>;
}

/// Sandboxed code execution.
#[async_trait]
pub trait SandboxProvider: Send + Sync {
    /// Execute the named program in an isolated sandbox.
    async fn execute(&self, program: &str) -> Result<SandboxReport, ProviderError>;
}
