use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting term summary report");

        let cases = self.pipeline.extract().await?;
        tracing::info!("Loaded {} cases", cases.len());

        let output = self.pipeline.transform(cases).await?;
        tracing::info!(
            "Summarized term {}: {} justices, {} courts, {} unanimous, {} party split",
            output.summary.term_id,
            output.summary.justice_summary.len(),
            output.summary.court_summary.len(),
            output.summary.unanimous.len(),
            output.summary.party_split.len()
        );

        let output_path = self.pipeline.load(output).await?;
        tracing::info!("Report saved to {} in {:?}", output_path, started.elapsed());

        Ok(output_path)
    }
}
