//! Starting parameters loaded from a YAML file.
//!
//! ```yaml
//! version: 1
//! parameters:
//!   population: 250000
//!   beta: 0.35
//! ```
//!
//! Fields left out of `parameters` keep their defaults. Values are clamped
//! exactly as interactive edits are; NaN, infinities and non-positive rates
//! are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vaxdash_core::model::DEFAULTS_VERSION;
use vaxdash_core::ParameterSet;

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    /// File was written against a different set of defaults
    Version { found: u32, expected: u32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Version { found, expected } => write!(
                f,
                "Unsupported parameter file version {} (expected {})",
                found, expected
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// On-disk shape of a parameter file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParametersFile {
    pub version: u32,
    #[serde(default)]
    pub parameters: ParameterSet,
}

impl ParametersFile {
    pub fn new(parameters: ParameterSet) -> Self {
        Self {
            version: DEFAULTS_VERSION,
            parameters,
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let file: Self =
            serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if file.version != DEFAULTS_VERSION {
            return Err(ConfigError::Version {
                found: file.version,
                expected: DEFAULTS_VERSION,
            });
        }
        Ok(file)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Load the starting parameter set from `path`
pub fn load_parameters(path: &Path) -> Result<ParameterSet, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    let file = ParametersFile::from_yaml(&content)?;
    tracing::info!(path = %path.display(), "Loaded parameter file");
    Ok(file.parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vaxdash_core::RealField;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = ParametersFile::from_yaml(
            "version: 1\nparameters:\n  population: 250000\n  beta: 0.35\n",
        )
        .unwrap();

        assert_eq!(file.parameters.population(), 250_000);
        assert_eq!(file.parameters.beta(), 0.35);
        assert_eq!(file.parameters.gamma(), 0.1);
        assert_eq!(file.parameters.time_days(), 730);
    }

    #[test]
    fn test_missing_parameters_section() {
        let file = ParametersFile::from_yaml("version: 1\n").unwrap();
        assert_eq!(file.parameters, ParameterSet::default());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let file = ParametersFile::from_yaml(
            "version: 1\nparameters:\n  vaccine_efficacy: 1.7\n  awareness_decay_rate: -0.5\n",
        )
        .unwrap();

        assert_eq!(file.parameters.vaccine_efficacy(), 1.0);
        assert_eq!(file.parameters.awareness_decay_rate(), 0.0);
    }

    #[test]
    fn test_rejects_wrong_version() {
        let err = ParametersFile::from_yaml("version: 2\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Version {
                found: 2,
                expected: 1
            }
        ));
    }

    #[test]
    fn test_rejects_zero_population_and_unknown_fields() {
        assert!(matches!(
            ParametersFile::from_yaml("version: 1\nparameters:\n  population: 0\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ParametersFile::from_yaml("version: 1\nparameters:\n  herd_immunity: 0.7\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let cases = [
            ("beta", ".nan"),
            ("vaccine_efficacy", ".inf"),
            ("media_campaign_strength", "-.inf"),
            ("awareness_decay_rate", ".nan"),
        ];
        for (field, value) in cases {
            let yaml = format!("version: 1\nparameters:\n  {field}: {value}\n");
            let result = ParametersFile::from_yaml(&yaml);
            assert!(
                matches!(result, Err(ConfigError::Parse(_))),
                "{field}: {value} was accepted"
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let err =
            ParametersFile::from_yaml("version: 1\nparameters:\n  gamma: 0\n").unwrap_err();
        match err {
            ConfigError::Parse(msg) => assert!(msg.contains("Recovery rate"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.yaml");

        let mut params = ParameterSet::default();
        params.set_real(RealField::MediaCampaignStrength, 0.8);
        fs::write(&path, ParametersFile::new(params.clone()).to_yaml().unwrap()).unwrap();

        assert_eq!(load_parameters(&path).unwrap(), params);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_parameters(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
