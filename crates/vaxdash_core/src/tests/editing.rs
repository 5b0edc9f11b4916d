//! Tests for category edits against a long-lived parameter set

use crate::editor::{Category, apply_edit};
use crate::error::ParameterError;
use crate::model::{ParameterField, ParameterSet, RealField};

const SAMPLES: [f64; 9] = [-3.5, -1.0, -0.0001, 0.0, 0.25, 0.5, 1.0, 1.0001, 42.0];

fn field_slot(field: RealField) -> (Category, usize) {
    Category::ALL
        .iter()
        .find_map(|&category| {
            category
                .fields()
                .iter()
                .position(|&f| f == ParameterField::Real(field))
                .map(|i| (category, i))
        })
        .unwrap()
}

fn inputs_with(category: Category, index: usize, text: &str) -> Vec<String> {
    (0..category.fields().len())
        .map(|i| if i == index { text.to_string() } else { String::new() })
        .collect()
}

#[test]
fn test_probability_fields_store_clamped_value() {
    let probabilities = RealField::ALL
        .into_iter()
        .filter(|f| f.bound() == crate::model::Bound::Probability);

    for field in probabilities {
        let (category, index) = field_slot(field);
        for r in SAMPLES {
            let mut params = ParameterSet::default();
            let inputs = inputs_with(category, index, &r.to_string());
            let refs: Vec<&str> = inputs.iter().map(String::as_str).collect();

            apply_edit(&mut params, category, &refs).unwrap();

            assert_eq!(params.real(field), r.clamp(0.0, 1.0), "{} <- {r}", field.name());
        }
    }
}

#[test]
fn test_decay_rate_stores_floor_at_zero() {
    let (category, index) = field_slot(RealField::AwarenessDecayRate);
    for r in SAMPLES {
        let mut params = ParameterSet::default();
        let inputs = inputs_with(category, index, &r.to_string());
        let refs: Vec<&str> = inputs.iter().map(String::as_str).collect();

        apply_edit(&mut params, category, &refs).unwrap();

        assert_eq!(params.awareness_decay_rate(), r.max(0.0));
    }
}

/// Empty population keeps the prior value, "50000" sets it exactly
#[test]
fn test_population_default_and_explicit() {
    let mut params = ParameterSet::default();
    apply_edit(&mut params, Category::PopulationTime, &["250000", ""]).unwrap();

    apply_edit(&mut params, Category::PopulationTime, &["", ""]).unwrap();
    assert_eq!(params.population(), 250_000);

    apply_edit(&mut params, Category::PopulationTime, &["50000", ""]).unwrap();
    assert_eq!(params.population(), 50_000);
    assert_eq!(params.time_days(), 730);
}

#[test]
fn test_failed_batch_preserves_every_category_field() {
    for category in Category::ALL {
        let n = category.fields().len();
        for bad_index in 0..n {
            let mut params = ParameterSet::default();
            params.set_real(RealField::Beta, 0.41);
            let before = params.clone();

            let inputs: Vec<&str> = (0..n)
                .map(|i| if i == bad_index { "1e" } else { "0.5" })
                .collect();

            let err = apply_edit(&mut params, category, &inputs).unwrap_err();
            assert!(matches!(err, ParameterError::InvalidNumber { .. }));
            assert_eq!(params, before, "{category:?} field {bad_index}");
        }
    }
}

#[test]
fn test_edits_accumulate_across_categories() {
    let mut params = ParameterSet::default();

    apply_edit(&mut params, Category::PopulationTime, &["8000000", "3"]).unwrap();
    apply_edit(&mut params, Category::Disease, &["0.6", "", "0.2", "0.02"]).unwrap();
    apply_edit(&mut params, Category::Vaccine, &["", "0.75", ""]).unwrap();
    apply_edit(&mut params, Category::Awareness, &["0.9", "", "", "", ""]).unwrap();

    assert_eq!(params.population(), 8_000_000);
    assert_eq!(params.time_days(), 1095);
    assert!((params.basic_reproduction_number() - 3.0).abs() < 1e-12);
    assert_eq!(params.disease_mortality(), 0.02);
    assert_eq!(params.vaccine_coverage_baseline(), 0.75);
    assert_eq!(params.media_campaign_strength(), 0.9);
    assert_eq!(params.vaccine_efficacy(), 0.9);
}
