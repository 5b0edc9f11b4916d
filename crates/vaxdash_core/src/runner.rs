//! Call contract for the external simulation backend.
//!
//! The compartmental integrator lives outside this crate. Everything here
//! talks to it through [`ScenarioRunner`]: one full time-stepped run per call,
//! synchronous and deterministic for fixed inputs.

use crate::error::ScenarioError;
use crate::model::{MetricsRecord, ParameterSet, Scenario};

/// A simulation backend
pub trait ScenarioRunner {
    /// Time series produced by one run, opaque to this crate
    type History;

    /// Run one scenario over `params.time_days()` steps
    fn run_simulation(
        &self,
        params: &ParameterSet,
        scenario: Scenario,
    ) -> Result<Self::History, ScenarioError>;

    /// Reduce a run's history to summary metrics
    fn calculate_metrics(&self, history: &Self::History) -> Result<MetricsRecord, ScenarioError>;
}

/// Output of one run+metrics pipeline
#[derive(Debug, Clone)]
pub struct ScenarioOutcome<H> {
    pub scenario: Scenario,
    pub history: H,
    pub metrics: MetricsRecord,
}

/// Run a scenario and score it
pub fn run_scenario<R: ScenarioRunner + ?Sized>(
    runner: &R,
    params: &ParameterSet,
    scenario: Scenario,
) -> Result<ScenarioOutcome<R::History>, ScenarioError> {
    let history = runner.run_simulation(params, scenario)?;
    let metrics = runner.calculate_metrics(&history)?;
    Ok(ScenarioOutcome {
        scenario,
        history,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::model::TOTAL_DEATHS;

    struct EchoRunner {
        calls: RefCell<Vec<&'static str>>,
    }

    impl ScenarioRunner for EchoRunner {
        type History = (Scenario, u64);

        fn run_simulation(
            &self,
            params: &ParameterSet,
            scenario: Scenario,
        ) -> Result<Self::History, ScenarioError> {
            self.calls.borrow_mut().push("run");
            Ok((scenario, params.population()))
        }

        fn calculate_metrics(
            &self,
            history: &Self::History,
        ) -> Result<MetricsRecord, ScenarioError> {
            self.calls.borrow_mut().push("metrics");
            Ok(MetricsRecord::new().with(TOTAL_DEATHS, history.1 / 1000))
        }
    }

    #[test]
    fn test_run_scenario_pipeline() {
        let runner = EchoRunner {
            calls: RefCell::new(Vec::new()),
        };
        let outcome = run_scenario(&runner, &ParameterSet::default(), Scenario::Targeted).unwrap();

        assert_eq!(outcome.scenario, Scenario::Targeted);
        assert_eq!(outcome.history, (Scenario::Targeted, 1_000_000));
        assert_eq!(outcome.metrics.total_deaths(), Ok(1000));
        assert_eq!(*runner.calls.borrow(), vec!["run", "metrics"]);
    }

    #[test]
    fn test_run_failure_skips_metrics() {
        struct Failing;
        impl ScenarioRunner for Failing {
            type History = ();
            fn run_simulation(&self, _: &ParameterSet, _: Scenario) -> Result<(), ScenarioError> {
                Err(ScenarioError::Collaborator("diverged".into()))
            }
            fn calculate_metrics(&self, _: &()) -> Result<MetricsRecord, ScenarioError> {
                panic!("metrics must not be computed after a failed run");
            }
        }

        let err = run_scenario(&Failing, &ParameterSet::default(), Scenario::Baseline).unwrap_err();
        assert_eq!(err, ScenarioError::Collaborator("diverged".into()));
    }
}
