use std::fmt;

use crate::model::ParameterField;

/// Errors raised while turning user text into parameter updates
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Text could not be parsed as the field's numeric type
    InvalidNumber {
        field: ParameterField,
        input: String,
    },
    /// Parsed value is not a positive integer where one is required
    NotPositive {
        field: ParameterField,
        input: String,
    },
    /// Wrong number of inputs supplied for an edit batch
    InputCount { expected: usize, actual: usize },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::InvalidNumber { field, input } => {
                write!(f, "invalid number for {}: {input:?}", field.label())
            }
            ParameterError::NotPositive { field, input } => {
                write!(f, "{} must be positive, got {input:?}", field.label())
            }
            ParameterError::InputCount { expected, actual } => {
                write!(f, "expected {expected} inputs, got {actual}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Errors reported by (or about the output of) the external scenario runner
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// The simulation backend failed while running or scoring a scenario
    Collaborator(String),
    /// A required metric key was absent from the metrics record
    MissingMetric(&'static str),
    /// A metric was present but did not hold the expected kind of value
    InvalidMetric {
        key: &'static str,
        expected: &'static str,
    },
    /// Scenario name outside the fixed set
    UnknownScenario(String),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Collaborator(msg) => write!(f, "simulation failed: {msg}"),
            ScenarioError::MissingMetric(key) => write!(f, "metric '{key}' missing from results"),
            ScenarioError::InvalidMetric { key, expected } => {
                write!(f, "metric '{key}' is not {expected}")
            }
            ScenarioError::UnknownScenario(name) => write!(f, "unknown scenario '{name}'"),
        }
    }
}

impl std::error::Error for ScenarioError {}

/// Errors from a single-factor sensitivity sweep
#[derive(Debug, Clone, PartialEq)]
pub enum SensitivityError {
    /// Sweep selection outside the registry
    UnknownField(String),
    /// No values to test
    EmptyValues,
    /// A custom value list entry could not be parsed
    InvalidValue(String),
    /// A simulation run failed part-way through the sweep
    Scenario { value: f64, source: ScenarioError },
}

impl fmt::Display for SensitivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensitivityError::UnknownField(choice) => {
                write!(f, "no sweepable parameter for choice {choice:?}")
            }
            SensitivityError::EmptyValues => write!(f, "sweep has no values to test"),
            SensitivityError::InvalidValue(text) => {
                write!(f, "invalid sweep value {text:?}")
            }
            SensitivityError::Scenario { value, source } => {
                write!(f, "sweep aborted at value {value}: {source}")
            }
        }
    }
}

impl std::error::Error for SensitivityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SensitivityError::Scenario { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParameterError>;
