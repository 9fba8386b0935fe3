//! # qw-core
//!
//! Workflow engine and image compositing for qrweave.
//!
//! This crate provides:
//! - Configuration loading from `qrweave.toml`
//! - Provider abstraction layer with mock implementations
//! - The multi-agent workflow state machine
//! - Append-only trace recording (logs, spans, protocol messages)
//! - The composite image renderer
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and management
//! - [`providers`]: Capability traits and mock implementations
//! - [`workflow`]: Workflow run state machine and engine
//! - [`trace`]: Observability recording
//! - [`render`]: Composite image rendering

pub mod config;
pub mod providers;
pub mod render;
pub mod trace;
pub mod workflow;
