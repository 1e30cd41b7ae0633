use crate::core::{LoadReport, Pipeline, TransformResult};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Any error returned here happened before the README was written.
    pub async fn run(&self) -> Result<LoadReport> {
        let result = self.render().await?;

        // Load
        tracing::info!("Updating README sections...");
        let report = self.pipeline.load(result).await?;
        tracing::info!(
            "Wrote {} ({} updated, {} failed)",
            report.output_path,
            report.updated_sections.len(),
            report.failed_sections.len()
        );

        Ok(report)
    }

    /// Extract and transform only; nothing is written.
    pub async fn render(&self) -> Result<TransformResult> {
        // Extract
        tracing::info!("Loading catalogs...");
        let raw = self.pipeline.extract().await?;

        // Transform
        tracing::info!("Validating and rendering...");
        let result = self.pipeline.transform(raw).await?;
        tracing::info!("Rendered {} port list rows", result.row_count);

        Ok(result)
    }
}
