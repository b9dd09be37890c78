//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `params.rs` — persisted economic-parameter commands.
//! - `predict.rs` — fetch/predict/run workflow commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*` and `workflow.rs`.
//! - Keep behavior and output schema stable.

pub mod params;
pub mod predict;

pub use params::handle_params_commands;
pub use predict::handle_workflow_commands;
