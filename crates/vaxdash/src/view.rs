//! Text rendering for the dashboard screens.

use std::io::{self, Write};

use vaxdash_core::{
    Category, MetricsRecord, ParameterField, ParameterSet, Scenario, SweepField, SweepPoint,
    SweepResult,
};

use crate::menu::MenuChoice;
use crate::util::format::{format_count, format_percentage, format_value_list, title_case};

const RULE_WIDTH: usize = 80;

pub fn rule(w: &mut impl Write, c: char) -> io::Result<()> {
    writeln!(w, "{}", c.to_string().repeat(RULE_WIDTH))
}

/// Blank line, double rule, title, double rule
pub fn header(w: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(w)?;
    rule(w, '=')?;
    writeln!(w, "{title}")?;
    rule(w, '=')
}

pub fn main_menu(w: &mut impl Write) -> io::Result<()> {
    header(w, "VACCINE AWARENESS SIMULATION - INTERACTIVE DASHBOARD")?;
    writeln!(w, "\nSelect an option:")?;
    // Exit is listed last even though its key is 0
    for choice in MenuChoice::ALL {
        writeln!(w, "  {}. {}", choice.key(), choice.description())?;
    }
    rule(w, '-')
}

pub fn category_menu(w: &mut impl Write) -> io::Result<()> {
    header(w, "MODIFY PARAMETERS")?;
    writeln!(w, "\nSelect parameter category to modify:")?;
    for (i, category) in Category::ALL.iter().enumerate() {
        writeln!(w, "  {}. {}", i + 1, category.title())?;
    }
    writeln!(w, "  0. Back to main menu")
}

pub fn scenario_menu(w: &mut impl Write) -> io::Result<()> {
    header(w, "CUSTOM SIMULATION")?;
    writeln!(w, "\nSelect scenario type:")?;
    for (i, scenario) in Scenario::ALL.iter().enumerate() {
        writeln!(w, "  {}. {}", i + 1, scenario.description())?;
    }
    Ok(())
}

pub fn sweep_menu(w: &mut impl Write) -> io::Result<()> {
    header(w, "QUICK SENSITIVITY TEST")?;
    writeln!(w, "\nTest sensitivity to:")?;
    for (i, field) in SweepField::ALL.iter().enumerate() {
        writeln!(w, "  {}. {}", i + 1, field.label())?;
    }
    writeln!(w, "  4. Custom value list")
}

/// Current value of a field, formatted as the default shown in an edit prompt
pub fn current_value(params: &ParameterSet, field: ParameterField) -> String {
    match field {
        ParameterField::Population => format_count(params.population()),
        ParameterField::TimeDays => format!("{:.1}", params.years()),
        ParameterField::Real(f) => params.real(f).to_string(),
    }
}

/// Full grouped parameter report
pub fn parameters(w: &mut impl Write, params: &ParameterSet) -> io::Result<()> {
    header(w, "CURRENT SIMULATION PARAMETERS")?;

    writeln!(w, "\nPopulation:")?;
    writeln!(w, "  Total population: {}", format_count(params.population()))?;
    writeln!(w, "  Simulation duration: {:.1} years", params.years())?;

    writeln!(w, "\nDisease Characteristics:")?;
    writeln!(w, "  Transmission rate (β): {}", params.beta())?;
    writeln!(
        w,
        "  Incubation rate (σ): {} (latent period: {:.1} days)",
        params.sigma(),
        params.latent_period_days()
    )?;
    writeln!(
        w,
        "  Recovery rate (γ): {} (infectious period: {:.1} days)",
        params.gamma(),
        params.infectious_period_days()
    )?;
    writeln!(
        w,
        "  Basic reproduction number (R₀): {:.2}",
        params.basic_reproduction_number()
    )?;
    writeln!(
        w,
        "  Case fatality rate: {}",
        format_percentage(params.disease_mortality(), 2)
    )?;

    writeln!(w, "\nVaccine Parameters:")?;
    writeln!(
        w,
        "  Vaccine efficacy: {}",
        format_percentage(params.vaccine_efficacy(), 0)
    )?;
    writeln!(
        w,
        "  Baseline coverage: {}",
        format_percentage(params.vaccine_coverage_baseline(), 0)
    )?;
    writeln!(
        w,
        "  Baseline hesitancy: {}",
        format_percentage(params.vaccine_hesitancy_baseline(), 0)
    )?;

    writeln!(w, "\nAwareness & Behavior:")?;
    writeln!(w, "  Media campaign strength: {}", params.media_campaign_strength())?;
    writeln!(w, "  Awareness decay rate: {}", params.awareness_decay_rate())?;
    writeln!(w, "  Social influence strength: {}", params.social_influence_strength())?;
    writeln!(w, "  Disease risk perception: {}", params.risk_perception_disease())?;
    writeln!(w, "  Vaccine risk perception: {}", params.risk_perception_vaccine())
}

/// Every metric in backend order as "Title Case Key: value"
pub fn metrics(w: &mut impl Write, metrics: &MetricsRecord) -> io::Result<()> {
    writeln!(w, "\nRESULTS:")?;
    rule(w, '-')?;
    for (key, value) in metrics.iter() {
        writeln!(w, "  {}: {value}", title_case(key))?;
    }
    Ok(())
}

pub fn sweep_intro(w: &mut impl Write, field: SweepField, values: &[f64]) -> io::Result<()> {
    writeln!(
        w,
        "\nTesting {} at values: {}",
        field.label(),
        format_value_list(values)
    )?;
    rule(w, '-')
}

pub fn sweep_row(w: &mut impl Write, field: SweepField, point: &SweepPoint) -> io::Result<()> {
    writeln!(
        w,
        "  {} = {:.2}: {} deaths, {} coverage",
        field.label(),
        point.value,
        format_count(point.deaths),
        point.coverage
    )
}

pub fn sweep_optimum(w: &mut impl Write, result: &SweepResult) -> io::Result<()> {
    writeln!(w)?;
    rule(w, '-')?;
    let best = result.best();
    writeln!(
        w,
        "Optimal value: {:.2} (fewest deaths: {})",
        best.value,
        format_count(best.deaths)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaxdash_core::{MetricValue, RealField};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_parameters_report_defaults() {
        let text = render(|w| parameters(w, &ParameterSet::default()));

        assert!(text.contains("Total population: 1,000,000"));
        assert!(text.contains("Simulation duration: 2.0 years"));
        assert!(text.contains("Basic reproduction number (R₀): 3.00"));
        assert!(text.contains("(latent period: 5.0 days)"));
        assert!(text.contains("(infectious period: 10.0 days)"));
        assert!(text.contains("Case fatality rate: 1.00%"));
        assert!(text.contains("Vaccine efficacy: 90%"));
        assert!(text.contains("Baseline hesitancy: 20%"));
        assert!(text.contains("Awareness decay rate: 0.05"));
    }

    #[test]
    fn test_metrics_title_case_in_order() {
        let record = MetricsRecord::new()
            .with("peak_infected", 12_000u64)
            .with("total_deaths", 950u64)
            .with("vaccination_coverage", "71.2%");
        let text = render(|w| metrics(w, &record));

        let peak = text.find("  Peak Infected: 12000").unwrap();
        let deaths = text.find("  Total Deaths: 950").unwrap();
        let coverage = text.find("  Vaccination Coverage: 71.2%").unwrap();
        assert!(peak < deaths && deaths < coverage);
    }

    #[test]
    fn test_sweep_lines() {
        let field = SweepField::CampaignStrength;
        let point = SweepPoint {
            value: 0.6,
            deaths: 12_345,
            coverage: MetricValue::Text("64.0%".into()),
        };

        let row = render(|w| sweep_row(w, field, &point));
        assert_eq!(row, "  Campaign Strength = 0.60: 12,345 deaths, 64.0% coverage\n");

        let intro = render(|w| sweep_intro(w, field, field.test_values()));
        assert!(intro.starts_with("\nTesting Campaign Strength at values: [0.0, 0.3, 0.6, 1.0]\n"));
    }

    #[test]
    fn test_current_value_defaults() {
        let params = ParameterSet::default();
        assert_eq!(current_value(&params, ParameterField::Population), "1,000,000");
        assert_eq!(current_value(&params, ParameterField::TimeDays), "2.0");
        assert_eq!(
            current_value(&params, ParameterField::Real(RealField::Beta)),
            "0.3"
        );
    }

    #[test]
    fn test_main_menu_lists_every_choice() {
        let text = render(|w| main_menu(w));
        for choice in MenuChoice::ALL {
            assert!(text.contains(&format!("  {}. {}", choice.key(), choice.description())));
        }
    }
}
