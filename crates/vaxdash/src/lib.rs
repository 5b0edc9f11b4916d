//! Terminal dashboard for exploring the vaccine-awareness model.
//!
//! The [`Dashboard`] is generic over its simulation backend and its
//! input/output streams. The `vaxdash` binary runs it on stdin/stdout with
//! [`UnlinkedBackend`]; embedders supply their own [`AnalysisSuite`].

pub mod backend;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod util;
pub mod view;

pub use backend::{AnalysisSuite, CollaboratorError, UnlinkedBackend};
pub use config::{ConfigError, ParametersFile, load_parameters};
pub use console::{ConsoleInput, ConsoleWaker};
pub use dashboard::Dashboard;
pub use logging::init_logging;
pub use menu::{MenuChoice, MenuState};
pub use prompt::{InputError, Interrupt, Prompt};
