//! Data model: parameter set, scenarios and metrics records.

mod metrics;
mod parameters;
mod scenario;

pub use metrics::*;
pub use parameters::*;
pub use scenario::*;
