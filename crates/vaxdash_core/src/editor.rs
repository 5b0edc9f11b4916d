//! Category-at-a-time parameter editing from free-form text.
//!
//! An edit takes one string per field of a [`Category`]. Empty strings keep
//! the current value. Every non-empty string is parsed before anything is
//! written: a single bad entry rejects the whole batch and leaves the
//! [`ParameterSet`] untouched. Range rules are applied on write (see
//! [`crate::model::Bound`]).

use std::num::{NonZeroU32, NonZeroU64};

use crate::error::{ParameterError, Result};
use crate::model::{DAYS_PER_YEAR, ParameterField, ParameterSet, RealField};

/// Group of fields edited together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    PopulationTime,
    Disease,
    Vaccine,
    Awareness,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::PopulationTime,
        Category::Disease,
        Category::Vaccine,
        Category::Awareness,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::PopulationTime => "Population & Time",
            Category::Disease => "Disease characteristics",
            Category::Vaccine => "Vaccine parameters",
            Category::Awareness => "Awareness & campaigns",
        }
    }

    /// Sub-menu digit for this category ("1".."4")
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Category::PopulationTime),
            "2" => Some(Category::Disease),
            "3" => Some(Category::Vaccine),
            "4" => Some(Category::Awareness),
            _ => None,
        }
    }

    /// Fields in prompt order
    #[must_use]
    pub fn fields(self) -> &'static [ParameterField] {
        use ParameterField::{Population, Real, TimeDays};
        match self {
            Category::PopulationTime => &[Population, TimeDays],
            Category::Disease => &[
                Real(RealField::Beta),
                Real(RealField::Sigma),
                Real(RealField::Gamma),
                Real(RealField::DiseaseMortality),
            ],
            Category::Vaccine => &[
                Real(RealField::VaccineEfficacy),
                Real(RealField::VaccineCoverageBaseline),
                Real(RealField::VaccineHesitancyBaseline),
            ],
            Category::Awareness => &[
                Real(RealField::MediaCampaignStrength),
                Real(RealField::AwarenessDecayRate),
                Real(RealField::SocialInfluenceStrength),
                Real(RealField::RiskPerceptionDisease),
                Real(RealField::RiskPerceptionVaccine),
            ],
        }
    }
}

/// Result of a committed edit
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub category: Category,
    /// Fields whose stored value actually changed
    pub changed: Vec<ParameterField>,
    /// R₀ after the edit, recomputed for display only
    pub basic_reproduction_number: f64,
}

/// A parsed, not yet applied, field update
#[derive(Debug, Clone, Copy)]
enum Update {
    Population(NonZeroU64),
    TimeDays(NonZeroU32),
    Real(RealField, f64),
}

/// Apply one batch of textual inputs to a category.
///
/// `inputs` must hold exactly one entry per field in `category.fields()`.
pub fn apply_edit(
    params: &mut ParameterSet,
    category: Category,
    inputs: &[&str],
) -> Result<EditOutcome> {
    let fields = category.fields();
    if inputs.len() != fields.len() {
        return Err(ParameterError::InputCount {
            expected: fields.len(),
            actual: inputs.len(),
        });
    }

    let mut updates = Vec::with_capacity(fields.len());
    for (&field, &input) in fields.iter().zip(inputs) {
        if let Some(update) = parse_update(field, input)? {
            updates.push(update);
        }
    }

    let before = params.clone();
    for update in updates {
        match update {
            Update::Population(n) => params.set_population(n),
            Update::TimeDays(days) => params.set_time_days(days),
            Update::Real(field, value) => {
                params.set_real(field, value);
            }
        }
    }

    let changed = fields
        .iter()
        .copied()
        .filter(|&field| field_differs(&before, params, field))
        .collect();

    Ok(EditOutcome {
        category,
        changed,
        basic_reproduction_number: params.basic_reproduction_number(),
    })
}

fn field_differs(a: &ParameterSet, b: &ParameterSet, field: ParameterField) -> bool {
    match field {
        ParameterField::Population => a.population() != b.population(),
        ParameterField::TimeDays => a.time_days() != b.time_days(),
        ParameterField::Real(f) => a.real(f).to_bits() != b.real(f).to_bits(),
    }
}

/// Parse one input. `Ok(None)` means "keep current value".
fn parse_update(field: ParameterField, input: &str) -> Result<Option<Update>> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let update = match field {
        ParameterField::Population => Update::Population(parse_count(field, text)?),
        ParameterField::TimeDays => Update::TimeDays(parse_years(field, text)?),
        ParameterField::Real(f) => {
            let value = parse_real(field, text)?;
            if f.is_rate() && value <= 0.0 {
                return Err(ParameterError::NotPositive {
                    field,
                    input: text.to_string(),
                });
            }
            Update::Real(f, value)
        }
    };
    Ok(Some(update))
}

/// Parse a finite real number
pub fn parse_real(field: ParameterField, text: &str) -> Result<f64> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParameterError::InvalidNumber {
            field,
            input: text.to_string(),
        }),
    }
}

/// Parse a strictly positive integer
pub fn parse_count(field: ParameterField, text: &str) -> Result<NonZeroU64> {
    let text = text.trim();
    if let Ok(n) = text.parse::<u64>() {
        return NonZeroU64::new(n).ok_or_else(|| ParameterError::NotPositive {
            field,
            input: text.to_string(),
        });
    }
    // Negative integers are well-formed numbers, just not positive ones
    if text.parse::<i64>().is_ok() {
        return Err(ParameterError::NotPositive {
            field,
            input: text.to_string(),
        });
    }
    Err(ParameterError::InvalidNumber {
        field,
        input: text.to_string(),
    })
}

/// Parse a year count into whole days (truncating)
pub fn parse_years(field: ParameterField, text: &str) -> Result<NonZeroU32> {
    let years = parse_real(field, text)?;
    let days = (years * DAYS_PER_YEAR).trunc();
    if days < 1.0 {
        return Err(ParameterError::NotPositive {
            field,
            input: text.trim().to_string(),
        });
    }
    if days > f64::from(u32::MAX) {
        return Err(ParameterError::InvalidNumber {
            field,
            input: text.trim().to_string(),
        });
    }
    NonZeroU32::new(days as u32).ok_or_else(|| ParameterError::NotPositive {
        field,
        input: text.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_keep_everything() {
        let mut params = ParameterSet::default();
        let outcome = apply_edit(&mut params, Category::Disease, &["", " ", "", ""]).unwrap();

        assert_eq!(params, ParameterSet::default());
        assert!(outcome.changed.is_empty());
        assert!((outcome.basic_reproduction_number - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_population_and_years() {
        let mut params = ParameterSet::default();
        let outcome = apply_edit(&mut params, Category::PopulationTime, &["50000", "0.5"]).unwrap();

        assert_eq!(params.population(), 50_000);
        assert_eq!(params.time_days(), 182);
        assert_eq!(
            outcome.changed,
            vec![ParameterField::Population, ParameterField::TimeDays]
        );
    }

    #[test]
    fn test_disease_edit_reports_new_r0() {
        let mut params = ParameterSet::default();
        let outcome = apply_edit(&mut params, Category::Disease, &["0.5", "", "0.25", ""]).unwrap();

        assert_eq!(params.beta(), 0.5);
        assert_eq!(params.gamma(), 0.25);
        assert!((outcome.basic_reproduction_number - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mortality_is_clamped() {
        let mut params = ParameterSet::default();
        apply_edit(&mut params, Category::Disease, &["", "", "", "1.4"]).unwrap();
        assert_eq!(params.disease_mortality(), 1.0);
    }

    #[test]
    fn test_vaccine_values_clamped_to_unit_interval() {
        let mut params = ParameterSet::default();
        apply_edit(&mut params, Category::Vaccine, &["1.5", "-0.25", "0.35"]).unwrap();

        assert_eq!(params.vaccine_efficacy(), 1.0);
        assert_eq!(params.vaccine_coverage_baseline(), 0.0);
        assert_eq!(params.vaccine_hesitancy_baseline(), 0.35);
    }

    #[test]
    fn test_awareness_decay_floor_only() {
        let mut params = ParameterSet::default();
        apply_edit(&mut params, Category::Awareness, &["", "-4", "", "", ""]).unwrap();
        assert_eq!(params.awareness_decay_rate(), 0.0);

        apply_edit(&mut params, Category::Awareness, &["", "7.5", "", "-1", "3"]).unwrap();
        assert_eq!(params.awareness_decay_rate(), 7.5);
        assert_eq!(params.risk_perception_disease(), -1.0);
        assert_eq!(params.risk_perception_vaccine(), 3.0);
    }

    #[test]
    fn test_bad_entry_discards_batch() {
        let mut params = ParameterSet::default();
        let err = apply_edit(&mut params, Category::Vaccine, &["0.8", "0.7", "lots"]).unwrap_err();

        assert_eq!(
            err,
            ParameterError::InvalidNumber {
                field: ParameterField::Real(RealField::VaccineHesitancyBaseline),
                input: "lots".to_string(),
            }
        );
        assert_eq!(params, ParameterSet::default());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut params = ParameterSet::default();
        for bad in ["NaN", "inf", "-infinity"] {
            assert!(apply_edit(&mut params, Category::Disease, &[bad, "", "", ""]).is_err());
        }
        assert_eq!(params, ParameterSet::default());
    }

    #[test]
    fn test_rates_must_be_positive() {
        let mut params = ParameterSet::default();
        for (index, field) in [RealField::Beta, RealField::Sigma, RealField::Gamma]
            .into_iter()
            .enumerate()
        {
            for bad in ["0", "-0.1"] {
                let mut inputs = ["", "", "", ""];
                inputs[index] = bad;
                assert_eq!(
                    apply_edit(&mut params, Category::Disease, &inputs),
                    Err(ParameterError::NotPositive {
                        field: ParameterField::Real(field),
                        input: bad.to_string(),
                    })
                );
            }
        }
        assert_eq!(params, ParameterSet::default());

        // Mortality shares the category but is a clamped probability
        apply_edit(&mut params, Category::Disease, &["", "", "", "-0.5"]).unwrap();
        assert_eq!(params.disease_mortality(), 0.0);
    }

    #[test]
    fn test_population_must_be_positive_integer() {
        let mut params = ParameterSet::default();
        let field = ParameterField::Population;

        assert_eq!(
            apply_edit(&mut params, Category::PopulationTime, &["0", ""]),
            Err(ParameterError::NotPositive {
                field,
                input: "0".into()
            })
        );
        assert_eq!(
            apply_edit(&mut params, Category::PopulationTime, &["-10", ""]),
            Err(ParameterError::NotPositive {
                field,
                input: "-10".into()
            })
        );
        assert_eq!(
            apply_edit(&mut params, Category::PopulationTime, &["2.5", ""]),
            Err(ParameterError::InvalidNumber {
                field,
                input: "2.5".into()
            })
        );
        assert_eq!(params, ParameterSet::default());
    }

    #[test]
    fn test_years_shorter_than_a_day_rejected() {
        let mut params = ParameterSet::default();
        let err = apply_edit(&mut params, Category::PopulationTime, &["", "0.001"]).unwrap_err();
        assert!(matches!(err, ParameterError::NotPositive { .. }));
        assert_eq!(params.time_days(), 730);
    }

    #[test]
    fn test_input_count_mismatch() {
        let mut params = ParameterSet::default();
        assert_eq!(
            apply_edit(&mut params, Category::Vaccine, &["0.5"]),
            Err(ParameterError::InputCount {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_category_choices() {
        assert_eq!(Category::from_choice("1"), Some(Category::PopulationTime));
        assert_eq!(Category::from_choice(" 4 "), Some(Category::Awareness));
        assert_eq!(Category::from_choice("0"), None);
        assert_eq!(Category::from_choice("x"), None);
    }

    #[test]
    fn test_every_real_field_is_editable() {
        for field in RealField::ALL {
            assert!(
                Category::ALL
                    .iter()
                    .any(|c| c.fields().contains(&ParameterField::Real(field))),
                "{} has no category",
                field.name()
            );
        }
    }
}
