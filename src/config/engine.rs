//! SAW engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::SawOptions;

/// Defaults applied when a request leaves an option unset, plus collector limits
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Rescale weights that do not sum to 1
    #[serde(default = "default_true")]
    pub auto_normalize_weight: bool,

    /// Include raw/normalized matrices and the weight table in responses
    #[serde(default = "default_true")]
    pub show_detail_tables: bool,

    /// Largest accepted alternative count
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Largest accepted criterion count
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,

    /// File name offered for the ranking download
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

impl EngineConfig {
    /// Default evaluation options
    pub fn default_options(&self) -> SawOptions {
        SawOptions {
            auto_normalize_weight: self.auto_normalize_weight,
            show_detail_tables: self.show_detail_tables,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_alternatives == 0 {
            return Err(ValidationError::InvalidLimit("max_alternatives"));
        }
        if self.max_criteria == 0 {
            return Err(ValidationError::InvalidLimit("max_criteria"));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ValidationError::EmptyExportFileName);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            auto_normalize_weight: default_true(),
            show_detail_tables: default_true(),
            max_alternatives: default_max_alternatives(),
            max_criteria: default_max_criteria(),
            export_file_name: default_export_file_name(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_alternatives() -> usize {
    1_000
}

fn default_max_criteria() -> usize {
    100
}

fn default_export_file_name() -> String {
    "ranking_results.csv".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert!(config.auto_normalize_weight);
        assert!(config.show_detail_tables);
        assert_eq!(config.default_options(), SawOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_deserialization_fills_defaults() {
        let json = r#"{ "auto_normalize_weight": false }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();

        assert!(!config.auto_normalize_weight);
        assert!(config.show_detail_tables);
        assert_eq!(config.max_alternatives, 1_000);
        assert_eq!(config.export_file_name, "ranking_results.csv");
    }

    #[test]
    fn test_validation_rejects_zero_limits() {
        let config = EngineConfig {
            max_criteria: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLimit("max_criteria"))
        );
    }

    #[test]
    fn test_validation_rejects_blank_file_name() {
        let config = EngineConfig {
            export_file_name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyExportFileName));
    }
}
