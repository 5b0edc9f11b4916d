//! Scenario-level tests for the parameter engine
//!
//! Tests are organized by topic:
//! - `support` - Scripted simulation backend shared by the other modules
//! - `editing` - Category edits against the shared parameter set
//! - `sensitivity` - Sweep ordering, isolation and optimum selection

mod editing;
mod support;
