//! Interactive menu loop.
//!
//! The dashboard owns the working [`ParameterSet`]. Each non-menu state runs
//! exactly one action and falls back to [`MenuState::MainMenu`], whatever the
//! outcome. Input and collaborator failures are reported on the display
//! stream and the loop continues; only a failure to write to the display
//! stream (or to read from a broken input stream) ends [`Dashboard::run`]
//! with an error.

use std::fmt;
use std::io::{self, BufRead, Write};

use vaxdash_core::analysis::{parse_value_list, run_sweep_with_progress};
use vaxdash_core::model::Bound;
use vaxdash_core::{
    Category, ParameterError, ParameterField, ParameterSet, Scenario, ScenarioError,
    SensitivityError, SweepConfig, SweepField, apply_edit, run_scenario,
};

use crate::backend::{AnalysisSuite, CollaboratorError};
use crate::menu::{InvalidChoice, MenuChoice, MenuState};
use crate::prompt::{InputError, Prompt};
use crate::view;

const FAREWELL: &str = "Exiting simulation. Stay safe!";

/// Why a single action stopped early
#[derive(Debug)]
enum ActionError {
    Input(InputError),
    /// Sub-menu answer outside the listed options
    InvalidChoice,
    Parameter(ParameterError),
    Sensitivity(SensitivityError),
    Scenario(ScenarioError),
    Collaborator(CollaboratorError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Input(err) => write!(f, "{err}"),
            ActionError::InvalidChoice => write!(f, "invalid choice"),
            ActionError::Parameter(err) => write!(f, "{err}"),
            ActionError::Sensitivity(err) => write!(f, "{err}"),
            ActionError::Scenario(err) => write!(f, "{err}"),
            ActionError::Collaborator(err) => write!(f, "{err}"),
        }
    }
}

impl From<InputError> for ActionError {
    fn from(err: InputError) -> Self {
        ActionError::Input(err)
    }
}

impl From<io::Error> for ActionError {
    fn from(err: io::Error) -> Self {
        ActionError::Input(InputError::Io(err))
    }
}

impl From<ParameterError> for ActionError {
    fn from(err: ParameterError) -> Self {
        ActionError::Parameter(err)
    }
}

impl From<SensitivityError> for ActionError {
    fn from(err: SensitivityError) -> Self {
        match err {
            SensitivityError::UnknownField(_) => ActionError::InvalidChoice,
            other => ActionError::Sensitivity(other),
        }
    }
}

impl From<ScenarioError> for ActionError {
    fn from(err: ScenarioError) -> Self {
        ActionError::Scenario(err)
    }
}

impl From<CollaboratorError> for ActionError {
    fn from(err: CollaboratorError) -> Self {
        ActionError::Collaborator(err)
    }
}

pub struct Dashboard<B, R, W> {
    params: ParameterSet,
    backend: B,
    prompt: Prompt<R, W>,
}

impl<B: AnalysisSuite, R: BufRead, W: Write> Dashboard<B, R, W> {
    pub fn new(params: ParameterSet, backend: B, prompt: Prompt<R, W>) -> Self {
        Self {
            params,
            backend,
            prompt,
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn into_parts(self) -> (ParameterSet, B, Prompt<R, W>) {
        (self.params, self.backend, self.prompt)
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = MenuState::MainMenu;
        while state != MenuState::Exit {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Advance the state machine by one transition
    pub fn step(&mut self, state: MenuState) -> io::Result<MenuState> {
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::Exit => Ok(MenuState::Exit),
            action => {
                let result = self.perform(action);
                let cancelled = matches!(result, Err(ActionError::Input(_)));
                self.report(result)?;

                // Sweep results and sweep errors both wait for Enter unless cancelled
                if action == MenuState::SensitivityTest && !cancelled {
                    if let Err(err) = self.prompt.pause() {
                        self.report(Err(err.into()))?;
                    }
                }
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn main_menu(&mut self) -> io::Result<MenuState> {
        view::main_menu(self.prompt.out())?;

        let line = match self.prompt.ask("Enter choice: ") {
            Ok(line) => line,
            Err(InputError::Interrupted) => {
                writeln!(self.prompt.out(), "\n\n{FAREWELL}")?;
                tracing::info!("Input interrupted at main menu, exiting");
                return Ok(MenuState::Exit);
            }
            Err(InputError::Io(err)) => return Err(err),
        };

        match MenuChoice::parse(&line) {
            Ok(MenuChoice::Exit) => {
                writeln!(self.prompt.out(), "\n{FAREWELL}")?;
                tracing::info!("User exited from main menu");
                Ok(MenuState::Exit)
            }
            Ok(choice) => {
                tracing::debug!(?choice, "Menu choice");
                Ok(choice.into())
            }
            Err(InvalidChoice(input)) => {
                tracing::debug!(input = %input, "Unrecognized menu choice");
                writeln!(self.prompt.out(), "\n✗ Invalid choice. Please try again.")?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn perform(&mut self, state: MenuState) -> Result<(), ActionError> {
        match state {
            MenuState::CompareScenarios => {
                tracing::info!("Running standard scenario comparison");
                self.backend.compare_scenarios()?;
                self.prompt.pause()?;
            }
            MenuState::CustomSimulation => self.custom_simulation()?,
            MenuState::ModifyParameters { category } => self.modify_parameters(category)?,
            MenuState::AdvancedAnalysis => {
                tracing::info!("Running advanced analysis suite");
                self.backend.run_advanced_analysis()?;
                self.prompt.pause()?;
            }
            MenuState::ViewParameters => {
                view::parameters(self.prompt.out(), &self.params)?;
                self.prompt.pause()?;
            }
            MenuState::SensitivityTest => self.sensitivity_test()?,
            MenuState::MainMenu | MenuState::Exit => {}
        }
        Ok(())
    }

    /// Print the outcome of an action. Only display-stream failures escape.
    fn report(&mut self, result: Result<(), ActionError>) -> io::Result<()> {
        let err = match result {
            Ok(()) => return Ok(()),
            Err(ActionError::Input(InputError::Io(err))) => return Err(err),
            Err(err) => err,
        };

        let out = self.prompt.out();
        match err {
            ActionError::Input(_) => {
                tracing::info!("Action cancelled");
                writeln!(out, "\nOperation cancelled")
            }
            ActionError::InvalidChoice => writeln!(out, "\nInvalid choice"),
            ActionError::Parameter(_)
            | ActionError::Sensitivity(SensitivityError::InvalidValue(_))
            | ActionError::Sensitivity(SensitivityError::EmptyValues) => {
                tracing::warn!(error = %err, "Rejected input");
                writeln!(out, "✗ Invalid input: {err}")
            }
            other => {
                tracing::error!(error = %other, "Action failed");
                writeln!(out, "\n✗ Error: {other}")?;
                writeln!(out, "Please try again.")
            }
        }
    }

    fn modify_parameters(&mut self, category: Option<Category>) -> Result<(), ActionError> {
        let category = match category {
            Some(category) => category,
            None => {
                view::category_menu(self.prompt.out())?;
                let choice = self.prompt.ask("\nEnter choice: ")?;
                if choice.trim() == "0" {
                    return Ok(());
                }
                Category::from_choice(&choice).ok_or(ActionError::InvalidChoice)?
            }
        };

        // Collect every answer before touching the parameters
        let mut answers = Vec::with_capacity(category.fields().len());
        for (i, &field) in category.fields().iter().enumerate() {
            let lead = if i == 0 { "\n" } else { "" };
            let label = format!(
                "{lead}{}{} [{}]: ",
                field.label(),
                range_hint(field),
                view::current_value(&self.params, field)
            );
            answers.push(self.prompt.ask(&label)?);
        }

        let inputs: Vec<&str> = answers.iter().map(String::as_str).collect();
        let outcome = apply_edit(&mut self.params, category, &inputs)?;
        tracing::info!(
            category = category.title(),
            changed = ?outcome.changed,
            r0 = outcome.basic_reproduction_number,
            "Parameters updated"
        );

        let out = self.prompt.out();
        if category == Category::Disease {
            writeln!(
                out,
                "✓ Parameters updated (New R₀: {:.2})",
                outcome.basic_reproduction_number
            )?;
        } else {
            writeln!(out, "✓ Parameters updated")?;
        }
        Ok(())
    }

    fn custom_simulation(&mut self) -> Result<(), ActionError> {
        view::scenario_menu(self.prompt.out())?;
        let choice = self.prompt.ask("\nEnter choice: ")?;
        let scenario = scenario_from_choice(&choice).ok_or(ActionError::InvalidChoice)?;

        writeln!(self.prompt.out(), "\nRunning {scenario} scenario...")?;
        view::rule(self.prompt.out(), '-')?;
        tracing::info!(%scenario, "Running custom simulation");

        let outcome = run_scenario(&self.backend, &self.params, scenario)?;
        view::metrics(self.prompt.out(), &outcome.metrics)?;

        let answer = self.prompt.ask("\nGenerate visualization? (y/n): ")?;
        if answer.trim().eq_ignore_ascii_case("y") {
            self.backend.visualize(scenario, &outcome.history, &self.params)?;
        }
        Ok(())
    }

    fn sensitivity_test(&mut self) -> Result<(), ActionError> {
        view::sweep_menu(self.prompt.out())?;
        let choice = self.prompt.ask("\nEnter choice: ")?;

        let config = if choice.trim() == "4" {
            let field = SweepField::from_choice(&self.prompt.ask("Parameter to vary (1-3): ")?)?;
            let values = parse_value_list(&self.prompt.ask("Values (comma separated): ")?)?;
            SweepConfig::custom(field, values)?
        } else {
            SweepConfig::predeclared(SweepField::from_choice(&choice)?)
        };

        view::sweep_intro(self.prompt.out(), config.field, &config.values)?;
        tracing::info!(
            field = config.field.label(),
            points = config.total_points(),
            "Starting sensitivity sweep"
        );

        let result = run_sweep_with_progress(&self.params, &config, &self.backend, |index, point| {
            tracing::debug!(
                index,
                value = point.value,
                deaths = point.deaths,
                "Sweep point evaluated"
            );
        })?;

        // Rows only appear once every point succeeded
        for point in result.points() {
            view::sweep_row(self.prompt.out(), config.field, point)?;
        }

        let best = result.best();
        tracing::info!(
            field = config.field.label(),
            value = best.value,
            deaths = best.deaths,
            "Sensitivity sweep finished"
        );
        view::sweep_optimum(self.prompt.out(), &result)?;
        Ok(())
    }
}

fn scenario_from_choice(choice: &str) -> Option<Scenario> {
    let index: usize = choice.trim().parse().ok()?;
    Scenario::ALL.get(index.checked_sub(1)?).copied()
}

fn range_hint(field: ParameterField) -> &'static str {
    match field {
        ParameterField::Real(f) if f.bound() == Bound::Probability => " 0-1",
        _ => "",
    }
}
