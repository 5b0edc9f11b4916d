//! Simulation parameter set and its closed field schema.
//!
//! Every field is private; reads go through accessors and writes through
//! typed setters that enforce the range rules at the moment of mutation:
//!
//! - probability fields are clamped to `[0, 1]`
//! - `awareness_decay_rate` is clamped to `>= 0`
//! - `population` and `time_days` are non-zero by construction
//! - the transition rates β, σ and γ must be strictly positive; they are
//!   rejected rather than clamped
//!
//! A snapshot for a one-factor experiment is a plain `clone()`.

use std::fmt;
use std::num::{NonZeroU32, NonZeroU64};

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Version of the documented default values below.
/// Bump whenever a default changes.
pub const DEFAULTS_VERSION: u32 = 1;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Range rule applied when a real-valued field is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Stored as parsed
    Unbounded,
    /// Clamped to `[0, 1]`
    Probability,
    /// Clamped to `>= 0`
    NonNegative,
}

impl Bound {
    /// Apply the rule to a value
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Bound::Unbounded => value,
            Bound::Probability => value.clamp(0.0, 1.0),
            Bound::NonNegative => value.max(0.0),
        }
    }
}

/// Real-valued parameter fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealField {
    Beta,
    Sigma,
    Gamma,
    DiseaseMortality,
    VaccineEfficacy,
    VaccineCoverageBaseline,
    VaccineHesitancyBaseline,
    MediaCampaignStrength,
    AwarenessDecayRate,
    SocialInfluenceStrength,
    RiskPerceptionDisease,
    RiskPerceptionVaccine,
}

impl RealField {
    pub const ALL: [RealField; 12] = [
        RealField::Beta,
        RealField::Sigma,
        RealField::Gamma,
        RealField::DiseaseMortality,
        RealField::VaccineEfficacy,
        RealField::VaccineCoverageBaseline,
        RealField::VaccineHesitancyBaseline,
        RealField::MediaCampaignStrength,
        RealField::AwarenessDecayRate,
        RealField::SocialInfluenceStrength,
        RealField::RiskPerceptionDisease,
        RealField::RiskPerceptionVaccine,
    ];

    #[must_use]
    pub fn bound(self) -> Bound {
        match self {
            RealField::DiseaseMortality
            | RealField::VaccineEfficacy
            | RealField::VaccineCoverageBaseline
            | RealField::VaccineHesitancyBaseline
            | RealField::MediaCampaignStrength
            | RealField::SocialInfluenceStrength => Bound::Probability,
            RealField::AwarenessDecayRate => Bound::NonNegative,
            RealField::Beta
            | RealField::Sigma
            | RealField::Gamma
            | RealField::RiskPerceptionDisease
            | RealField::RiskPerceptionVaccine => Bound::Unbounded,
        }
    }

    /// Transition rates divide into R₀ and the period lengths
    #[must_use]
    pub fn is_rate(self) -> bool {
        matches!(self, RealField::Beta | RealField::Sigma | RealField::Gamma)
    }

    /// Identifier matching the serialized field name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RealField::Beta => "beta",
            RealField::Sigma => "sigma",
            RealField::Gamma => "gamma",
            RealField::DiseaseMortality => "disease_mortality",
            RealField::VaccineEfficacy => "vaccine_efficacy",
            RealField::VaccineCoverageBaseline => "vaccine_coverage_baseline",
            RealField::VaccineHesitancyBaseline => "vaccine_hesitancy_baseline",
            RealField::MediaCampaignStrength => "media_campaign_strength",
            RealField::AwarenessDecayRate => "awareness_decay_rate",
            RealField::SocialInfluenceStrength => "social_influence_strength",
            RealField::RiskPerceptionDisease => "risk_perception_disease",
            RealField::RiskPerceptionVaccine => "risk_perception_vaccine",
        }
    }

    /// Human-readable label used in prompts and reports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RealField::Beta => "Transmission rate β",
            RealField::Sigma => "Incubation rate σ",
            RealField::Gamma => "Recovery rate γ",
            RealField::DiseaseMortality => "Case fatality rate",
            RealField::VaccineEfficacy => "Vaccine efficacy",
            RealField::VaccineCoverageBaseline => "Baseline coverage",
            RealField::VaccineHesitancyBaseline => "Baseline hesitancy",
            RealField::MediaCampaignStrength => "Campaign strength",
            RealField::AwarenessDecayRate => "Awareness decay rate",
            RealField::SocialInfluenceStrength => "Social influence",
            RealField::RiskPerceptionDisease => "Disease risk perception",
            RealField::RiskPerceptionVaccine => "Vaccine risk perception",
        }
    }
}

/// Every field of a [`ParameterSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    Population,
    /// Edited as a year count, stored in days
    TimeDays,
    Real(RealField),
}

impl ParameterField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ParameterField::Population => "population",
            ParameterField::TimeDays => "time_days",
            ParameterField::Real(field) => field.name(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ParameterField::Population => "Population",
            ParameterField::TimeDays => "Simulation years",
            ParameterField::Real(field) => field.label(),
        }
    }
}

impl From<RealField> for ParameterField {
    fn from(field: RealField) -> Self {
        ParameterField::Real(field)
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full configuration of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParameterRecord", into = "ParameterRecord")]
pub struct ParameterSet {
    population: NonZeroU64,
    time_days: NonZeroU32,

    beta: f64,
    sigma: f64,
    gamma: f64,
    disease_mortality: f64,

    vaccine_efficacy: f64,
    vaccine_coverage_baseline: f64,
    vaccine_hesitancy_baseline: f64,

    media_campaign_strength: f64,
    awareness_decay_rate: f64,
    social_influence_strength: f64,
    risk_perception_disease: f64,
    risk_perception_vaccine: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            population: NonZeroU64::new(1_000_000).unwrap_or(NonZeroU64::MIN),
            time_days: NonZeroU32::new(730).unwrap_or(NonZeroU32::MIN),
            beta: 0.3,
            sigma: 0.2,
            gamma: 0.1,
            disease_mortality: 0.01,
            vaccine_efficacy: 0.9,
            vaccine_coverage_baseline: 0.6,
            vaccine_hesitancy_baseline: 0.2,
            media_campaign_strength: 0.5,
            awareness_decay_rate: 0.05,
            social_influence_strength: 0.3,
            risk_perception_disease: 1.0,
            risk_perception_vaccine: 0.5,
        }
    }
}

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.get()
    }

    #[must_use]
    pub fn time_days(&self) -> u32 {
        self.time_days.get()
    }

    /// Simulation duration expressed in years
    #[must_use]
    pub fn years(&self) -> f64 {
        f64::from(self.time_days.get()) / DAYS_PER_YEAR
    }

    #[must_use]
    pub fn real(&self, field: RealField) -> f64 {
        match field {
            RealField::Beta => self.beta,
            RealField::Sigma => self.sigma,
            RealField::Gamma => self.gamma,
            RealField::DiseaseMortality => self.disease_mortality,
            RealField::VaccineEfficacy => self.vaccine_efficacy,
            RealField::VaccineCoverageBaseline => self.vaccine_coverage_baseline,
            RealField::VaccineHesitancyBaseline => self.vaccine_hesitancy_baseline,
            RealField::MediaCampaignStrength => self.media_campaign_strength,
            RealField::AwarenessDecayRate => self.awareness_decay_rate,
            RealField::SocialInfluenceStrength => self.social_influence_strength,
            RealField::RiskPerceptionDisease => self.risk_perception_disease,
            RealField::RiskPerceptionVaccine => self.risk_perception_vaccine,
        }
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn disease_mortality(&self) -> f64 {
        self.disease_mortality
    }

    pub fn vaccine_efficacy(&self) -> f64 {
        self.vaccine_efficacy
    }

    pub fn vaccine_coverage_baseline(&self) -> f64 {
        self.vaccine_coverage_baseline
    }

    pub fn vaccine_hesitancy_baseline(&self) -> f64 {
        self.vaccine_hesitancy_baseline
    }

    pub fn media_campaign_strength(&self) -> f64 {
        self.media_campaign_strength
    }

    pub fn awareness_decay_rate(&self) -> f64 {
        self.awareness_decay_rate
    }

    pub fn social_influence_strength(&self) -> f64 {
        self.social_influence_strength
    }

    pub fn risk_perception_disease(&self) -> f64 {
        self.risk_perception_disease
    }

    pub fn risk_perception_vaccine(&self) -> f64 {
        self.risk_perception_vaccine
    }

    /// Basic reproduction number R₀ = β/γ
    #[must_use]
    pub fn basic_reproduction_number(&self) -> f64 {
        self.beta / self.gamma
    }

    /// Mean latent period in days (1/σ)
    #[must_use]
    pub fn latent_period_days(&self) -> f64 {
        1.0 / self.sigma
    }

    /// Mean infectious period in days (1/γ)
    #[must_use]
    pub fn infectious_period_days(&self) -> f64 {
        1.0 / self.gamma
    }

    pub fn set_population(&mut self, population: NonZeroU64) {
        self.population = population;
    }

    pub fn set_time_days(&mut self, days: NonZeroU32) {
        self.time_days = days;
    }

    /// Write a real-valued field, applying its range rule.
    /// Returns the value actually stored.
    pub fn set_real(&mut self, field: RealField, value: f64) -> f64 {
        let value = field.bound().apply(value);
        let slot = match field {
            RealField::Beta => &mut self.beta,
            RealField::Sigma => &mut self.sigma,
            RealField::Gamma => &mut self.gamma,
            RealField::DiseaseMortality => &mut self.disease_mortality,
            RealField::VaccineEfficacy => &mut self.vaccine_efficacy,
            RealField::VaccineCoverageBaseline => &mut self.vaccine_coverage_baseline,
            RealField::VaccineHesitancyBaseline => &mut self.vaccine_hesitancy_baseline,
            RealField::MediaCampaignStrength => &mut self.media_campaign_strength,
            RealField::AwarenessDecayRate => &mut self.awareness_decay_rate,
            RealField::SocialInfluenceStrength => &mut self.social_influence_strength,
            RealField::RiskPerceptionDisease => &mut self.risk_perception_disease,
            RealField::RiskPerceptionVaccine => &mut self.risk_perception_vaccine,
        };
        *slot = value;
        value
    }

    /// Copy of this set with a single real field overridden
    #[must_use]
    pub fn with_real(&self, field: RealField, value: f64) -> Self {
        let mut snapshot = self.clone();
        snapshot.set_real(field, value);
        snapshot
    }
}

/// Serialized shape of a [`ParameterSet`].
///
/// Missing fields take the documented defaults. Loading goes through the
/// same setters as interactive edits, so out-of-range files are clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ParameterRecord {
    population: NonZeroU64,
    time_days: NonZeroU32,
    beta: f64,
    sigma: f64,
    gamma: f64,
    disease_mortality: f64,
    vaccine_efficacy: f64,
    vaccine_coverage_baseline: f64,
    vaccine_hesitancy_baseline: f64,
    media_campaign_strength: f64,
    awareness_decay_rate: f64,
    social_influence_strength: f64,
    risk_perception_disease: f64,
    risk_perception_vaccine: f64,
}

impl Default for ParameterRecord {
    fn default() -> Self {
        ParameterSet::default().into()
    }
}

impl From<ParameterSet> for ParameterRecord {
    fn from(p: ParameterSet) -> Self {
        Self {
            population: p.population,
            time_days: p.time_days,
            beta: p.beta,
            sigma: p.sigma,
            gamma: p.gamma,
            disease_mortality: p.disease_mortality,
            vaccine_efficacy: p.vaccine_efficacy,
            vaccine_coverage_baseline: p.vaccine_coverage_baseline,
            vaccine_hesitancy_baseline: p.vaccine_hesitancy_baseline,
            media_campaign_strength: p.media_campaign_strength,
            awareness_decay_rate: p.awareness_decay_rate,
            social_influence_strength: p.social_influence_strength,
            risk_perception_disease: p.risk_perception_disease,
            risk_perception_vaccine: p.risk_perception_vaccine,
        }
    }
}

impl TryFrom<ParameterRecord> for ParameterSet {
    type Error = ParameterError;

    fn try_from(r: ParameterRecord) -> Result<Self, Self::Error> {
        let mut params = ParameterSet {
            population: r.population,
            time_days: r.time_days,
            ..ParameterSet::default()
        };
        let values = [
            (RealField::Beta, r.beta),
            (RealField::Sigma, r.sigma),
            (RealField::Gamma, r.gamma),
            (RealField::DiseaseMortality, r.disease_mortality),
            (RealField::VaccineEfficacy, r.vaccine_efficacy),
            (RealField::VaccineCoverageBaseline, r.vaccine_coverage_baseline),
            (RealField::VaccineHesitancyBaseline, r.vaccine_hesitancy_baseline),
            (RealField::MediaCampaignStrength, r.media_campaign_strength),
            (RealField::AwarenessDecayRate, r.awareness_decay_rate),
            (RealField::SocialInfluenceStrength, r.social_influence_strength),
            (RealField::RiskPerceptionDisease, r.risk_perception_disease),
            (RealField::RiskPerceptionVaccine, r.risk_perception_vaccine),
        ];
        for (field, value) in values {
            // Must run before the range rule, which maps NaN and ±inf into range
            if !value.is_finite() {
                return Err(ParameterError::InvalidNumber {
                    field: field.into(),
                    input: value.to_string(),
                });
            }
            if field.is_rate() && value <= 0.0 {
                return Err(ParameterError::NotPositive {
                    field: field.into(),
                    input: value.to_string(),
                });
            }
            params.set_real(field, value);
        }
        Ok(params)
    }
}
