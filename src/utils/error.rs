use crate::domain::model::{CourtId, JusticeId, TermId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("No cases found for term {term_id}")]
    TermNotFound { term_id: TermId },

    #[error("Opinion {opinion_id} references unknown justice {justice_id}")]
    UnknownJustice {
        opinion_id: u64,
        justice_id: JusticeId,
    },

    #[error("Docket {docket_id} references unknown court {court_id}")]
    UnknownCourt { docket_id: u64, court_id: CourtId },

    #[error("Dataset table {table} has more than one record with id {id}")]
    DuplicateRecord { table: &'static str, id: u64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::ConfigError { .. }
            | TrackerError::MissingConfigError { .. }
            | TrackerError::InvalidConfigValueError { .. }
            | TrackerError::TomlError(_) => ErrorCategory::Configuration,
            TrackerError::TermNotFound { .. }
            | TrackerError::UnknownJustice { .. }
            | TrackerError::UnknownCourt { .. }
            | TrackerError::DuplicateRecord { .. }
            | TrackerError::SerializationError(_) => ErrorCategory::Data,
            TrackerError::IoError(_) | TrackerError::ZipError(_) => ErrorCategory::Io,
            TrackerError::CsvError(_) | TrackerError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::TermNotFound { .. } => ErrorSeverity::Medium,
            TrackerError::IoError(_) | TrackerError::ZipError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TrackerError::TermNotFound { .. } => {
                "Run with --list-terms to see the terms present in the dataset".to_string()
            }
            TrackerError::UnknownJustice { justice_id, .. } => {
                format!("Add justice {} to the dataset's justices table", justice_id)
            }
            TrackerError::UnknownCourt { court_id, .. } => {
                format!("Add court {} to the dataset's courts table", court_id)
            }
            TrackerError::DuplicateRecord { table, id } => {
                format!("Remove the repeated record {} from the dataset's {} table", id, table)
            }
            TrackerError::SerializationError(_) => {
                "Check that the dataset file is valid JSON with the expected tables".to_string()
            }
            TrackerError::TomlError(_) => "Check the syntax of the TOML config file".to_string(),
            TrackerError::ConfigError { .. }
            | TrackerError::MissingConfigError { .. }
            | TrackerError::InvalidConfigValueError { .. } => {
                "Review the command line arguments or config file".to_string()
            }
            TrackerError::IoError(_) | TrackerError::ZipError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            TrackerError::CsvError(_) | TrackerError::ProcessingError { .. } => {
                "Re-run with --verbose for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::TermNotFound { term_id } => {
                format!("Term {} has no cases in the dataset", term_id)
            }
            TrackerError::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
