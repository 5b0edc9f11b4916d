//! Sweep evaluator - runs the backend once per test value on an isolated copy
//! of the baseline parameters and reduces the results to a recommendation.
//!
//! The baseline is only ever borrowed immutably. Each point gets its own
//! snapshot with a single field overridden, which is dropped as soon as the
//! backend returns.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ScenarioError, SensitivityError};
use crate::model::{MetricValue, ParameterSet};
use crate::runner::{ScenarioRunner, run_scenario};

use super::{SweepConfig, SweepField};

/// One evaluated sweep value
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Value stored in the snapshot (after range rules)
    pub value: f64,
    pub deaths: u64,
    pub coverage: MetricValue,
}

/// Ordered results of a sweep plus the recommended value
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub field: SweepField,
    points: Vec<SweepPoint>,
    best_index: usize,
}

impl SweepResult {
    fn from_points(field: SweepField, points: Vec<SweepPoint>) -> Result<Self, SensitivityError> {
        let best_index = select_optimum(&points).ok_or(SensitivityError::EmptyValues)?;
        Ok(Self {
            field,
            points,
            best_index,
        })
    }

    /// Points in the order the values were supplied
    #[must_use]
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Point with the fewest deaths (earliest on ties)
    #[must_use]
    pub fn best(&self) -> &SweepPoint {
        &self.points[self.best_index]
    }

    #[must_use]
    pub fn best_index(&self) -> usize {
        self.best_index
    }
}

/// Index of the minimum-deaths point, preferring the earliest on ties.
///
/// Scans every point; there is no early exit.
#[must_use]
pub fn select_optimum(points: &[SweepPoint]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, point) in points.iter().enumerate() {
        match best {
            Some((_, deaths)) if point.deaths >= deaths => {}
            _ => best = Some((i, point.deaths)),
        }
    }
    best.map(|(i, _)| i)
}

/// Evaluate a single sweep value on its own snapshot
fn evaluate_point<R: ScenarioRunner + ?Sized>(
    baseline: &ParameterSet,
    config: &SweepConfig,
    runner: &R,
    value: f64,
) -> Result<SweepPoint, SensitivityError> {
    let snapshot = baseline.with_real(config.field.target(), value);
    let stored = snapshot.real(config.field.target());

    let wrap = |source: ScenarioError| SensitivityError::Scenario {
        value: stored,
        source,
    };
    let outcome = run_scenario(runner, &snapshot, config.scenario).map_err(wrap)?;
    let deaths = outcome.metrics.total_deaths().map_err(wrap)?;
    let coverage = outcome.metrics.vaccination_coverage().map_err(wrap)?.clone();

    Ok(SweepPoint {
        value: stored,
        deaths,
        coverage,
    })
}

/// Run a sweep sequentially
pub fn run_sweep<R: ScenarioRunner + ?Sized>(
    baseline: &ParameterSet,
    config: &SweepConfig,
    runner: &R,
) -> Result<SweepResult, SensitivityError> {
    run_sweep_with_progress(baseline, config, runner, |_, _| {})
}

/// Run a sweep sequentially, reporting each point as soon as it is evaluated.
///
/// `on_point` receives the point's index in the value list.
pub fn run_sweep_with_progress<R, F>(
    baseline: &ParameterSet,
    config: &SweepConfig,
    runner: &R,
    mut on_point: F,
) -> Result<SweepResult, SensitivityError>
where
    R: ScenarioRunner + ?Sized,
    F: FnMut(usize, &SweepPoint),
{
    if config.values.is_empty() {
        return Err(SensitivityError::EmptyValues);
    }

    let mut points = Vec::with_capacity(config.values.len());
    for (i, &value) in config.values.iter().enumerate() {
        let point = evaluate_point(baseline, config, runner, value)?;
        on_point(i, &point);
        points.push(point);
    }

    SweepResult::from_points(config.field, points)
}

/// Run a sweep with points evaluated on the rayon pool.
///
/// Points are still reported in value order and the optimum is chosen only
/// after every point has been collected.
#[cfg(feature = "parallel")]
pub fn run_sweep_parallel<R>(
    baseline: &ParameterSet,
    config: &SweepConfig,
    runner: &R,
) -> Result<SweepResult, SensitivityError>
where
    R: ScenarioRunner + Sync + ?Sized,
{
    if config.values.is_empty() {
        return Err(SensitivityError::EmptyValues);
    }

    let points = config
        .values
        .par_iter()
        .map(|&value| evaluate_point(baseline, config, runner, value))
        .collect::<Result<Vec<_>, _>>()?;

    SweepResult::from_points(config.field, points)
}
