//! Single-factor sensitivity analysis.
//!
//! A sweep varies one registry field across a list of values while every
//! other parameter stays at the baseline:
//!
//! ```ignore
//! use vaxdash_core::analysis::{SweepConfig, SweepField, run_sweep};
//!
//! let config = SweepConfig::predeclared(SweepField::CampaignStrength);
//! let result = run_sweep(&params, &config, &backend)?;
//! println!("optimal: {:.2}", result.best().value);
//! ```
//!
//! Every simulation call runs on a private copy of the baseline, so the
//! caller's parameter set is never modified.

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
