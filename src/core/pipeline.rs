use crate::core::term_summary::summarize_term;
use crate::core::{
    Case, ConfigProvider, OutputFormat, Pipeline, ReportOutput, Storage, TermCaseLoader,
};
use crate::domain::model::TermId;
use crate::domain::summary::{TermCourtSummary, TermJusticeSummary, TermSummaryResponse};
use crate::utils::error::{Result, TrackerError};
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

#[derive(Debug, Serialize)]
struct JusticeRow<'a> {
    justice_id: u64,
    name: &'a str,
    party: &'a str,
    majority_author: u32,
    concurring_author: u32,
    concur_judgement_author: u32,
    dissent_author: u32,
    dissent_judgement_author: u32,
    cases_in_majority: u32,
    cases_with_opinion: u32,
    percent_in_majority: Option<f64>,
}

impl<'a> From<&'a TermJusticeSummary> for JusticeRow<'a> {
    fn from(s: &'a TermJusticeSummary) -> Self {
        Self {
            justice_id: s.justice.id,
            name: &s.justice.name,
            party: &s.justice.party,
            majority_author: s.majority_author,
            concurring_author: s.concurring_author,
            concur_judgement_author: s.concur_judgement_author,
            dissent_author: s.dissent_author,
            dissent_judgement_author: s.dissent_judgement_author,
            cases_in_majority: s.cases_in_majority,
            cases_with_opinion: s.cases_with_opinion,
            percent_in_majority: s.percent_in_majority(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CourtRow<'a> {
    court_id: u64,
    short_name: &'a str,
    name: &'a str,
    cases: u32,
    affirmed: u32,
    reversed_remanded: u32,
}

impl<'a> From<&'a TermCourtSummary> for CourtRow<'a> {
    fn from(s: &'a TermCourtSummary) -> Self {
        Self {
            court_id: s.court.id,
            short_name: &s.court.short_name,
            name: &s.court.name,
            cases: s.cases,
            affirmed: s.affirmed,
            reversed_remanded: s.reversed_remanded,
        }
    }
}

const JUSTICE_HEADER: [&str; 11] = [
    "justice_id",
    "name",
    "party",
    "majority_author",
    "concurring_author",
    "concur_judgement_author",
    "dissent_author",
    "dissent_judgement_author",
    "cases_in_majority",
    "cases_with_opinion",
    "percent_in_majority",
];

const COURT_HEADER: [&str; 6] = [
    "court_id",
    "short_name",
    "name",
    "cases",
    "affirmed",
    "reversed_remanded",
];

fn render_csv<R: Serialize>(header: &[&str], rows: impl Iterator<Item = R>) -> Result<String> {
    // header is written by hand so an empty term still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TrackerError::ProcessingError {
            message: format!("Failed to flush CSV output: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| TrackerError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn render_justice_csv(summary: &TermSummaryResponse) -> Result<String> {
    render_csv(
        &JUSTICE_HEADER,
        summary.justice_summary.iter().map(JusticeRow::from),
    )
}

pub fn render_court_csv(summary: &TermSummaryResponse) -> Result<String> {
    render_csv(
        &COURT_HEADER,
        summary.court_summary.iter().map(CourtRow::from),
    )
}

pub fn summary_file_name(term_id: TermId) -> String {
    format!("term_{}_summary.json", term_id)
}

pub fn justice_file_name(term_id: TermId) -> String {
    format!("term_{}_justices.csv", term_id)
}

pub fn court_file_name(term_id: TermId) -> String {
    format!("term_{}_courts.csv", term_id)
}

pub fn archive_file_name(term_id: TermId) -> String {
    format!("term_{}_report.zip", term_id)
}

/// Loads one term, summarizes it and writes the report through `storage`.
pub struct SummaryPipeline<L: TermCaseLoader, S: Storage, C: ConfigProvider> {
    loader: L,
    storage: S,
    config: C,
}

impl<L: TermCaseLoader, S: Storage, C: ConfigProvider> SummaryPipeline<L, S, C> {
    pub fn new(loader: L, storage: S, config: C) -> Self {
        Self {
            loader,
            storage,
            config,
        }
    }

    fn term_id(&self) -> Result<TermId> {
        self.config
            .term_id()
            .ok_or_else(|| TrackerError::MissingConfigError {
                field: "term_id".to_string(),
            })
    }

    fn wants(&self, format: OutputFormat) -> bool {
        self.config.output_formats().contains(&format)
    }

    fn build_archive(&self, term_id: TermId, files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        for (name, data) in files {
            zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
            zip.write_all(data)?;
        }

        let manifest = serde_json::json!({
            "term_id": term_id,
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "files": files.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
        });
        zip.start_file::<_, ()>("manifest.json", FileOptions::default())?;
        zip.write_all(serde_json::to_string_pretty(&manifest)?.as_bytes())?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<L: TermCaseLoader, S: Storage, C: ConfigProvider> Pipeline for SummaryPipeline<L, S, C> {
    async fn extract(&self) -> Result<Vec<Case>> {
        let term_id = self.term_id()?;
        tracing::debug!(
            "Loading cases for term {} from {}",
            term_id,
            self.config.dataset_path()
        );
        self.loader.load_cases_for_term(term_id).await
    }

    async fn transform(&self, cases: Vec<Case>) -> Result<ReportOutput> {
        let term_id = self.term_id()?;
        let summary = summarize_term(term_id, &cases)?;

        let json_output = if self.wants(OutputFormat::Json) {
            Some(if self.config.pretty() {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string(&summary)?
            })
        } else {
            None
        };

        let (justice_csv, court_csv) = if self.wants(OutputFormat::Csv) {
            (
                Some(render_justice_csv(&summary)?),
                Some(render_court_csv(&summary)?),
            )
        } else {
            (None, None)
        };

        Ok(ReportOutput {
            summary,
            json_output,
            justice_csv,
            court_csv,
        })
    }

    async fn load(&self, output: ReportOutput) -> Result<String> {
        let term_id = output.summary.term_id;
        let mut files: Vec<(String, Vec<u8>)> = Vec::new();
        if let Some(json) = output.json_output {
            files.push((summary_file_name(term_id), json.into_bytes()));
        }
        if let Some(csv) = output.justice_csv {
            files.push((justice_file_name(term_id), csv.into_bytes()));
        }
        if let Some(csv) = output.court_csv {
            files.push((court_file_name(term_id), csv.into_bytes()));
        }

        if files.is_empty() {
            return Err(TrackerError::ConfigError {
                message: "No output format selected".to_string(),
            });
        }

        if self.config.archive() {
            let name = archive_file_name(term_id);
            tracing::debug!("Creating ZIP archive {} with {} files", name, files.len());
            let zip_data = self.build_archive(term_id, &files)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(&name, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), name));
        }

        for (name, data) in &files {
            tracing::debug!("Writing {} ({} bytes) to storage", name, data.len());
            self.storage.write_file(name, data).await?;
        }
        Ok(format!("{}/{}", self.config.output_path(), files[0].0))
    }
}
