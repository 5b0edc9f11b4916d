//! Configuration types for single-factor sweeps.

use crate::error::SensitivityError;
use crate::model::{RealField, Scenario};

/// Registry of parameters that can be swept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepField {
    CampaignStrength,
    VaccineHesitancy,
    SocialInfluence,
}

impl SweepField {
    pub const ALL: [SweepField; 3] = [
        SweepField::CampaignStrength,
        SweepField::VaccineHesitancy,
        SweepField::SocialInfluence,
    ];

    /// Parameter overridden by this sweep
    #[must_use]
    pub fn target(self) -> RealField {
        match self {
            SweepField::CampaignStrength => RealField::MediaCampaignStrength,
            SweepField::VaccineHesitancy => RealField::VaccineHesitancyBaseline,
            SweepField::SocialInfluence => RealField::SocialInfluenceStrength,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SweepField::CampaignStrength => "Campaign Strength",
            SweepField::VaccineHesitancy => "Vaccine Hesitancy",
            SweepField::SocialInfluence => "Social Influence",
        }
    }

    /// Predeclared test values spanning the practical range
    #[must_use]
    pub fn test_values(self) -> &'static [f64] {
        match self {
            SweepField::CampaignStrength | SweepField::SocialInfluence => &[0.0, 0.3, 0.6, 1.0],
            SweepField::VaccineHesitancy => &[0.05, 0.15, 0.30, 0.45],
        }
    }

    /// Sub-menu digit ("1".."3")
    pub fn from_choice(choice: &str) -> Result<Self, SensitivityError> {
        match choice.trim() {
            "1" => Ok(SweepField::CampaignStrength),
            "2" => Ok(SweepField::VaccineHesitancy),
            "3" => Ok(SweepField::SocialInfluence),
            other => Err(SensitivityError::UnknownField(other.to_string())),
        }
    }
}

/// Scenario every sweep run uses
pub const SWEEP_SCENARIO: Scenario = Scenario::Baseline;

/// A fully specified sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub field: SweepField,
    /// Values in evaluation order
    pub values: Vec<f64>,
    pub scenario: Scenario,
}

impl SweepConfig {
    /// Sweep over the field's predeclared values
    #[must_use]
    pub fn predeclared(field: SweepField) -> Self {
        Self {
            field,
            values: field.test_values().to_vec(),
            scenario: SWEEP_SCENARIO,
        }
    }

    /// Sweep over caller-supplied values
    pub fn custom(field: SweepField, values: Vec<f64>) -> Result<Self, SensitivityError> {
        if values.is_empty() {
            return Err(SensitivityError::EmptyValues);
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(SensitivityError::InvalidValue(bad.to_string()));
        }
        Ok(Self {
            field,
            values,
            scenario: SWEEP_SCENARIO,
        })
    }

    /// Number of simulation runs this sweep will issue
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.values.len()
    }
}

/// Parse a comma- or whitespace-separated list of values.
///
/// Any malformed entry rejects the whole list.
pub fn parse_value_list(text: &str) -> Result<Vec<f64>, SensitivityError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(SensitivityError::InvalidValue(s.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(SensitivityError::EmptyValues);
    }
    Ok(values)
}
