//! Loosely-typed metrics record produced by the simulation backend.
//!
//! The backend decides which metrics exist. The dashboard prints all of them,
//! but only two keys are interpreted: [`TOTAL_DEATHS`] and
//! [`VACCINATION_COVERAGE`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

pub const TOTAL_DEATHS: &str = "total_deaths";
pub const VACCINATION_COVERAGE: &str = "vaccination_coverage";

/// A single metric value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Interpret as a non-negative whole count
    #[must_use]
    pub fn as_count(&self) -> Option<u64> {
        match self {
            MetricValue::Count(n) => Some(*n),
            MetricValue::Number(x) if x.is_finite() && *x >= 0.0 && x.fract() == 0.0 => {
                Some(*x as u64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Number(x) => write!(f, "{x}"),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for MetricValue {
    fn from(n: u64) -> Self {
        MetricValue::Count(n)
    }
}

impl From<f64> for MetricValue {
    fn from(x: f64) -> Self {
        MetricValue::Number(x)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        MetricValue::Text(s)
    }
}

/// Metric name → value, in the order the backend reported them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    entries: Vec<(String, MetricValue)>,
}

impl MetricsRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a metric, keeping first-insertion order
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetricValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total deaths over the run
    pub fn total_deaths(&self) -> Result<u64, ScenarioError> {
        self.get(TOTAL_DEATHS)
            .ok_or(ScenarioError::MissingMetric(TOTAL_DEATHS))?
            .as_count()
            .ok_or(ScenarioError::InvalidMetric {
                key: TOTAL_DEATHS,
                expected: "a non-negative integer",
            })
    }

    /// Final vaccination coverage, passed through for display
    pub fn vaccination_coverage(&self) -> Result<&MetricValue, ScenarioError> {
        self.get(VACCINATION_COVERAGE)
            .ok_or(ScenarioError::MissingMetric(VACCINATION_COVERAGE))
    }
}

impl<K: Into<String>, V: Into<MetricValue>> FromIterator<(K, V)> for MetricsRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = MetricsRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
