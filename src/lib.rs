pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{Dataset, DatasetLoader};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    pipeline::SummaryPipeline,
    report::ReportEngine,
    term_summary::{build_term_summary, summarize_term},
};
pub use domain::summary::TermSummaryResponse;
pub use utils::error::{Result, TrackerError};
