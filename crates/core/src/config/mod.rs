//! Configuration loading for qrweave.
//!
//! Settings live in an optional `qrweave.toml` file; a missing file
//! yields the built-in defaults.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_config;
pub use models::{AppConfig, RendererConfig};
