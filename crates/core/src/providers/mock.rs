//! Mock provider implementations.
//!
//! These return the fixed data of the original demo and resolve
//! immediately. The async boundary is kept so real network-backed
//! providers can be dropped in without changing the engine.

use crate::providers::base::{
    ArtConcept, ArtProvider, ArtReferences, ProviderError, ResearchProvider, SandboxProvider,
    SandboxReport, SearchResult,
};
use async_trait::async_trait;

/// Research provider returning a fixed ranked result list and a fixed
/// palette/pattern bundle.
#[derive(Debug, Clone, Default)]
pub struct MockResearchProvider {
    fail: bool,
}

impl MockResearchProvider {
    pub fn new() -> Self {
        Self { fail: false }
    }

    /// A provider whose `search` call fails, for error-path tests.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ResearchProvider for MockResearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        if self.fail {
            return Err(ProviderError::ApiError(format!(
                "search request for \"{query}\" timed out"
            )));
        }

        Ok(vec![
            SearchResult {
                title: "Artistic QR Code Gallery - Behance".to_string(),
                url: "https://behance.net/qr-art-gallery".to_string(),
                snippet: "Collection of artistic QR codes blending functionality with visual appeal"
                    .to_string(),
                score: 0.95,
            },
            SearchResult {
                title: "QR Code Art: When Function Meets Form".to_string(),
                url: "https://medium.com/qr-code-art-design".to_string(),
                snippet: "Exploring the intersection of QR functionality and artistic expression"
                    .to_string(),
                score: 0.89,
            },
            SearchResult {
                title: "Generative QR Art Tutorial".to_string(),
                url: "https://github.com/qr-art-generator".to_string(),
                snippet: "Open source tools for creating artistic QR codes with AI".to_string(),
                score: 0.87,
            },
        ])
    }

    async fn browse(&self, _urls: &[String]) -> Result<ArtReferences, ProviderError> {
        if self.fail {
            return Err(ProviderError::ExecutionError(
                "browser session could not be established".to_string(),
            ));
        }

        Ok(ArtReferences {
            images: vec![
                "art_ref_1.jpg".to_string(),
                "art_ref_2.jpg".to_string(),
                "art_ref_3.jpg".to_string(),
            ],
            colors: vec![
                "#FF6B6B".to_string(),
                "#4ECDC4".to_string(),
                "#45B7D1".to_string(),
                "#96CEB4".to_string(),
            ],
            patterns: vec![
                "geometric".to_string(),
                "organic".to_string(),
                "abstract".to_string(),
            ],
        })
    }
}

/// Art provider returning a fixed element set with confidence 0.94.
#[derive(Debug, Clone, Default)]
pub struct MockArtProvider {
    fail: bool,
}

impl MockArtProvider {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ArtProvider for MockArtProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _references: &ArtReferences,
    ) -> Result<ArtConcept, ProviderError> {
        if self.fail {
            return Err(ProviderError::ApiError(
                "generation model rejected the request".to_string(),
            ));
        }

        Ok(ArtConcept {
            background: "gradient-cyberpunk".to_string(),
            foreground: "neon-circuits".to_string(),
            accent: "holographic-effects".to_string(),
            confidence: 0.94,
        })
    }
}

/// Sandbox provider reporting a fixed successful execution.
#[derive(Debug, Clone, Default)]
pub struct MockSandboxProvider {
    fail: bool,
}

impl MockSandboxProvider {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl SandboxProvider for MockSandboxProvider {
    async fn execute(&self, program: &str) -> Result<SandboxReport, ProviderError> {
        if self.fail {
            return Err(ProviderError::ExecutionError(format!(
                "sandbox crashed while running {program}"
            )));
        }

        Ok(SandboxReport {
            success: true,
            execution_time: "1.2s".to_string(),
            memory_used: "45MB".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_search_returns_ranked_results() {
        let provider = MockResearchProvider::new();
        let results = provider.search("nature artistic QR code inspiration").await.unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));
    }

    #[tokio::test]
    async fn test_mock_browse_returns_palette_bundle() {
        let provider = MockResearchProvider::new();
        let refs = provider.browse(&[]).await.unwrap();

        assert_eq!(refs.images.len(), 3);
        assert_eq!(refs.colors.len(), 4);
        assert!(refs.patterns.contains(&"organic".to_string()));
    }

    #[tokio::test]
    async fn test_mock_generate_confidence() {
        let provider = MockArtProvider::new();
        let concept = provider
            .generate("Generate nature artistic elements", &ArtReferences::default())
            .await
            .unwrap();

        assert_eq!(concept.confidence, 0.94);
        assert_eq!(concept.background, "gradient-cyberpunk");
    }

    #[tokio::test]
    async fn test_mock_sandbox_reports_success() {
        let provider = MockSandboxProvider::new();
        let report = provider.execute("qr_art_generator.py").await.unwrap();

        assert!(report.success);
        assert_eq!(report.execution_time, "1.2s");
    }

    #[tokio::test]
    async fn test_failing_mocks_raise_provider_errors() {
        let research = MockResearchProvider::failing();
        assert!(matches!(
            research.search("q").await,
            Err(ProviderError::ApiError(_))
        ));

        let art = MockArtProvider::failing();
        assert!(art
            .generate("p", &ArtReferences::default())
            .await
            .is_err());

        let sandbox = MockSandboxProvider::failing();
        assert!(matches!(
            sandbox.execute("job.py").await,
            Err(ProviderError::ExecutionError(_))
        ));
    }
}
