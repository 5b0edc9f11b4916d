use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// Named policy preset interpreted by the simulation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Moderate campaigns
    Baseline,
    AggressiveCampaign,
    NoIntervention,
    /// Threshold-based campaigns
    Targeted,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Baseline,
        Scenario::AggressiveCampaign,
        Scenario::NoIntervention,
        Scenario::Targeted,
    ];

    /// Wire name passed to the backend
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Baseline => "baseline",
            Scenario::AggressiveCampaign => "aggressive_campaign",
            Scenario::NoIntervention => "no_intervention",
            Scenario::Targeted => "targeted",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Scenario::Baseline => "Baseline (moderate campaigns)",
            Scenario::AggressiveCampaign => "Aggressive campaign",
            Scenario::NoIntervention => "No intervention",
            Scenario::Targeted => "Targeted (threshold-based)",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s.trim())
            .ok_or_else(|| ScenarioError::UnknownScenario(s.to_string()))
    }
}
