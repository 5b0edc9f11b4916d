//! Scripted backend that returns canned metrics and records every call

use std::cell::RefCell;

use crate::error::ScenarioError;
use crate::model::{
    MetricsRecord, ParameterSet, RealField, Scenario, TOTAL_DEATHS, VACCINATION_COVERAGE,
};
use crate::runner::ScenarioRunner;

/// One recorded `run_simulation` call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRun {
    pub scenario: Scenario,
    pub params: ParameterSet,
}

/// Returns `deaths[i]` for the i-th run, or fails on a chosen call
pub struct ScriptedRunner {
    deaths: Vec<u64>,
    fail_on: Option<usize>,
    pub runs: RefCell<Vec<RecordedRun>>,
    pub metric_calls: RefCell<usize>,
}

impl ScriptedRunner {
    pub fn new(deaths: &[u64]) -> Self {
        Self {
            deaths: deaths.to_vec(),
            fail_on: None,
            runs: RefCell::new(Vec::new()),
            metric_calls: RefCell::new(0),
        }
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub fn run_count(&self) -> usize {
        self.runs.borrow().len()
    }

    /// Values of `field` seen by each run, in call order
    pub fn seen(&self, field: RealField) -> Vec<f64> {
        self.runs.borrow().iter().map(|r| r.params.real(field)).collect()
    }
}

impl ScenarioRunner for ScriptedRunner {
    type History = usize;

    fn run_simulation(
        &self,
        params: &ParameterSet,
        scenario: Scenario,
    ) -> Result<usize, ScenarioError> {
        let call = self.run_count();
        self.runs.borrow_mut().push(RecordedRun {
            scenario,
            params: params.clone(),
        });
        if self.fail_on == Some(call) {
            return Err(ScenarioError::Collaborator(format!("run {call} diverged")));
        }
        Ok(call)
    }

    fn calculate_metrics(&self, history: &usize) -> Result<MetricsRecord, ScenarioError> {
        *self.metric_calls.borrow_mut() += 1;
        let deaths = self.deaths.get(*history).copied().unwrap_or(0);
        Ok(MetricsRecord::new()
            .with("peak_infected", deaths * 10)
            .with(TOTAL_DEATHS, deaths)
            .with(VACCINATION_COVERAGE, format!("{:.1}%", 50.0 + *history as f64)))
    }
}

/// Backend whose metrics never include the death count
pub struct NoDeathsRunner;

impl ScenarioRunner for NoDeathsRunner {
    type History = ();

    fn run_simulation(&self, _: &ParameterSet, _: Scenario) -> Result<(), ScenarioError> {
        Ok(())
    }

    fn calculate_metrics(&self, _: &()) -> Result<MetricsRecord, ScenarioError> {
        Ok(MetricsRecord::new().with(VACCINATION_COVERAGE, 0.7))
    }
}
