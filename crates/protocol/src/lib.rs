//! # qw-protocol
//!
//! Core protocol definitions and data models for qrweave.
//!
//! This crate defines all shared data structures used for:
//! - Workflow run state, art styles, and final results
//! - Observability records (logs, trace spans, protocol messages)
//! - Inter-process communication between a UI and the Core
//!
//! ## Modules
//!
//! - [`agent_models`]: The static agent roster
//! - [`trace_models`]: Log, span, and protocol-message records
//! - [`workflow_models`]: Art styles, run states, and workflow results
//! - [`ipc`]: Events for Core-UI communication
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, ts-rs, uuid, and chrono
//! - TypeScript generation: All types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other qrweave crates

pub mod agent_models;
pub mod ipc;
pub mod trace_models;
pub mod workflow_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use ipc::*;
pub use trace_models::*;
pub use workflow_models::*;
