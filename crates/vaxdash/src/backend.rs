//! Collaborators the dashboard calls but does not implement.

use std::fmt;

use vaxdash_core::{MetricsRecord, ParameterSet, Scenario, ScenarioError, ScenarioRunner};

/// Failure reported by a collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct CollaboratorError(pub String);

impl CollaboratorError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for CollaboratorError {}

/// Analysis and reporting routines layered on a simulation backend.
///
/// Each call prints its own output and returns only success or failure.
pub trait AnalysisSuite: ScenarioRunner {
    /// Standard side-by-side comparison of every scenario at default parameters
    fn compare_scenarios(&self) -> Result<(), CollaboratorError>;

    /// Multi-part analysis batch
    fn run_advanced_analysis(&self) -> Result<(), CollaboratorError>;

    /// Render one run's history
    fn visualize(
        &self,
        scenario: Scenario,
        history: &Self::History,
        params: &ParameterSet,
    ) -> Result<(), CollaboratorError>;
}

const NOT_LINKED: &str = "simulation backend not linked into this build";

/// Backend used by the standalone binary: every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlinkedBackend;

impl ScenarioRunner for UnlinkedBackend {
    type History = ();

    fn run_simulation(&self, _params: &ParameterSet, _scenario: Scenario) -> Result<(), ScenarioError> {
        Err(ScenarioError::Collaborator(NOT_LINKED.to_string()))
    }

    fn calculate_metrics(&self, _history: &()) -> Result<MetricsRecord, ScenarioError> {
        Err(ScenarioError::Collaborator(NOT_LINKED.to_string()))
    }
}

impl AnalysisSuite for UnlinkedBackend {
    fn compare_scenarios(&self) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::new(NOT_LINKED))
    }

    fn run_advanced_analysis(&self) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::new(NOT_LINKED))
    }

    fn visualize(&self, _: Scenario, _: &(), _: &ParameterSet) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::new(NOT_LINKED))
    }
}
