pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::domain::model::TermId;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "scotus-tracker")]
#[command(about = "Supreme Court term summary reports")]
pub struct CliConfig {
    #[arg(long, default_value = "./data/scotus.json", help = "Dataset JSON file")]
    pub dataset: String,

    #[arg(long, help = "Term to summarize")]
    pub term_id: Option<TermId>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<OutputFormat>,

    #[arg(long, help = "Bundle the report files into one ZIP archive")]
    pub archive: bool,

    #[arg(long, help = "Pretty-print the JSON summary")]
    pub pretty: bool,

    #[arg(long, help = "Read settings from a TOML file instead")]
    pub config: Option<String>,

    #[arg(long, help = "List the terms in the dataset and exit")]
    pub list_terms: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn dataset_path(&self) -> &str {
        &self.dataset
    }

    fn term_id(&self) -> Option<TermId> {
        self.term_id
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.formats
    }

    fn archive(&self) -> bool {
        self.archive
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        if let Some(config) = &self.config {
            validate_file_extension("config", config, &["toml"])?;
            return Ok(());
        }

        validate_path("dataset", &self.dataset)?;
        validate_file_extension("dataset", &self.dataset, &["json"])?;

        if self.list_terms {
            return Ok(());
        }

        let term_id = validate_required_field("term_id", &self.term_id)?;
        validate_positive_number("term_id", *term_id, 1)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty("formats", &self.formats)?;

        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["scotus-tracker", "--term-id", "4"]);
        assert_eq!(config.dataset, "./data/scotus.json");
        assert_eq!(config.term_id, Some(4));
        assert_eq!(config.formats, vec![OutputFormat::Json]);
        assert!(!config.archive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_format_list() {
        let config = CliConfig::parse_from([
            "scotus-tracker",
            "--term-id",
            "4",
            "--formats",
            "json,csv",
            "--archive",
        ]);
        assert_eq!(config.formats, vec![OutputFormat::Json, OutputFormat::Csv]);
        assert!(config.archive());
    }

    #[test]
    fn test_term_id_required_unless_listing() {
        let config = CliConfig::parse_from(["scotus-tracker"]);
        assert!(config.validate().is_err());

        let listing = CliConfig::parse_from(["scotus-tracker", "--list-terms"]);
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn test_dataset_must_be_json() {
        let config =
            CliConfig::parse_from(["scotus-tracker", "--term-id", "1", "--dataset", "cases.csv"]);
        assert!(config.validate().is_err());
    }
}
