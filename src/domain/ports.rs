use crate::domain::model::{Case, Term, TermId};
use crate::domain::summary::TermSummaryResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Supplies every case of a term with opinions, joins and dockets resolved.
pub trait TermCaseLoader: Send + Sync {
    fn load_cases_for_term(
        &self,
        term_id: TermId,
    ) -> impl std::future::Future<Output = Result<Vec<Case>>> + Send;

    fn list_terms(&self) -> impl std::future::Future<Output = Result<Vec<Term>>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

pub trait ConfigProvider: Send + Sync {
    fn dataset_path(&self) -> &str;
    fn term_id(&self) -> Option<TermId>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
    fn archive(&self) -> bool;
    fn pretty(&self) -> bool;
}

/// Rendered report, ready to be written.
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub summary: TermSummaryResponse,
    pub json_output: Option<String>,
    pub justice_csv: Option<String>,
    pub court_csv: Option<String>,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Case>>;
    async fn transform(&self, cases: Vec<Case>) -> Result<ReportOutput>;
    async fn load(&self, output: ReportOutput) -> Result<String>;
}
