//! Parameter exploration and sensitivity engine for the vaccine-awareness model.
//!
//! This crate holds the validated parameter set, the category editor that
//! turns user text into updates, the call contract for the external
//! simulation backend, and the single-factor sweep engine.
//! The compartmental integrator itself is supplied by the caller through
//! [`runner::ScenarioRunner`].

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod editor;
pub mod error;
pub mod runner;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SweepConfig, SweepField, SweepPoint, SweepResult, run_sweep};
pub use editor::{Category, EditOutcome, apply_edit};
pub use error::{ParameterError, ScenarioError, SensitivityError};
pub use model::{MetricValue, MetricsRecord, ParameterField, ParameterSet, RealField, Scenario};
pub use runner::{ScenarioOutcome, ScenarioRunner, run_scenario};
