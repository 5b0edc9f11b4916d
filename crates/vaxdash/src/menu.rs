//! Menu choices and dashboard states.

use std::fmt;

use vaxdash_core::Category;

/// A recognized top-level menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CompareScenarios,
    CustomSimulation,
    ModifyParameters,
    AdvancedAnalysis,
    ViewParameters,
    SensitivityTest,
    Exit,
}

/// Main-menu input that matched no entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid menu choice {:?}", self.0)
    }
}

impl std::error::Error for InvalidChoice {}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CompareScenarios,
        MenuChoice::CustomSimulation,
        MenuChoice::ModifyParameters,
        MenuChoice::AdvancedAnalysis,
        MenuChoice::ViewParameters,
        MenuChoice::SensitivityTest,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Result<Self, InvalidChoice> {
        match input.trim() {
            "1" => Ok(MenuChoice::CompareScenarios),
            "2" => Ok(MenuChoice::CustomSimulation),
            "3" => Ok(MenuChoice::ModifyParameters),
            "4" => Ok(MenuChoice::AdvancedAnalysis),
            "5" => Ok(MenuChoice::ViewParameters),
            "6" => Ok(MenuChoice::SensitivityTest),
            "0" => Ok(MenuChoice::Exit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }

    pub fn key(self) -> char {
        match self {
            MenuChoice::CompareScenarios => '1',
            MenuChoice::CustomSimulation => '2',
            MenuChoice::ModifyParameters => '3',
            MenuChoice::AdvancedAnalysis => '4',
            MenuChoice::ViewParameters => '5',
            MenuChoice::SensitivityTest => '6',
            MenuChoice::Exit => '0',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuChoice::CompareScenarios => "Run standard scenario comparison",
            MenuChoice::CustomSimulation => "Run custom simulation",
            MenuChoice::ModifyParameters => "Modify simulation parameters",
            MenuChoice::AdvancedAnalysis => "Run advanced analysis suite",
            MenuChoice::ViewParameters => "View current parameters",
            MenuChoice::SensitivityTest => "Quick sensitivity test",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Where the dashboard loop is.
///
/// Every state other than `MainMenu` runs one action and then returns to
/// `MainMenu`. `Exit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    CompareScenarios,
    CustomSimulation,
    /// `None` asks the user for a category first
    ModifyParameters { category: Option<Category> },
    AdvancedAnalysis,
    ViewParameters,
    SensitivityTest,
    Exit,
}

impl From<MenuChoice> for MenuState {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::CompareScenarios => MenuState::CompareScenarios,
            MenuChoice::CustomSimulation => MenuState::CustomSimulation,
            MenuChoice::ModifyParameters => MenuState::ModifyParameters { category: None },
            MenuChoice::AdvancedAnalysis => MenuState::AdvancedAnalysis,
            MenuChoice::ViewParameters => MenuState::ViewParameters,
            MenuChoice::SensitivityTest => MenuState::SensitivityTest,
            MenuChoice::Exit => MenuState::Exit,
        }
    }
}
