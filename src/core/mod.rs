pub mod agreement;
pub mod classification;
pub mod court_summary;
pub mod justice_summary;
pub mod pipeline;
pub mod report;
pub mod term_summary;
pub mod timing;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{Case, Term};
pub use crate::domain::ports::{
    ConfigProvider, OutputFormat, Pipeline, ReportOutput, Storage, TermCaseLoader,
};
pub use crate::utils::error::Result;
