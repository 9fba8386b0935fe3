//! Configuration models.

use qw_protocol::workflow_models::ArtStyle;
use serde::{Deserialize, Serialize};

/// Renderer settings.
///
/// The defaults reproduce the original demo: a 400x400 canvas with 20
/// decorative blobs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RendererConfig {
    /// Canvas edge length in logical units (the canvas is square).
    pub size: u32,

    /// Number of semi-transparent decorative blobs.
    pub blob_count: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            size: 400,
            blob_count: 20,
        }
    }
}

/// Application configuration loaded from `qrweave.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Style used when the caller does not specify one.
    pub default_style: ArtStyle,

    /// Renderer settings.
    pub renderer: RendererConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_style: ArtStyle::Nature,
            renderer: RendererConfig::default(),
        }
    }
}
