// ============================================================
// TABULAR INGESTION USE CASE
// ============================================================
// Orchestrate decoding, parsing and numeric column detection

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::domain::dashboard_config::DashboardConfig;
use crate::domain::error::Result;
use crate::domain::tabular::{Dataset, DatasetPreview, NumericColumnSet};
use crate::domain::upload::UploadedFile;
use crate::infrastructure::tabular::{DelimitedParser, SchemaInspector};

/// Result of ingesting one tabular upload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestedDataset {
    pub dataset: Dataset,
    pub numeric_columns: NumericColumnSet,
    pub preview: DatasetPreview,
    pub processing_time_ms: u64,
}

/// Tabular ingestion use case
pub struct TabularIngestion {
    parser: DelimitedParser,
    inspector: SchemaInspector,
    preview_rows: usize,
    preview_columns: usize,
    cell_width: usize,
}

impl TabularIngestion {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            parser: DelimitedParser::new(),
            inspector: SchemaInspector::new(config.numeric_inference),
            preview_rows: config.upload_preview_rows,
            preview_columns: config.upload_preview_columns,
            cell_width: config.upload_cell_width,
        }
    }

    /// Parse an upload into a dataset. Nothing is kept on failure.
    pub fn ingest(&self, upload: &UploadedFile) -> Result<IngestedDataset> {
        let start = Instant::now();

        let dataset = self.parser.parse_bytes(&upload.file_name, &upload.bytes)?;
        let numeric_columns = self.inspector.numeric_columns(&dataset);
        let preview = dataset.preview(self.preview_rows, self.preview_columns, self.cell_width);

        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            file_name = %upload.file_name,
            format = %dataset.format,
            rows = dataset.len(),
            columns = dataset.data_columns().len(),
            numeric_columns = numeric_columns.len(),
            processing_time_ms,
            "Tabular file ingested"
        );

        Ok(IngestedDataset {
            dataset,
            numeric_columns,
            preview,
            processing_time_ms,
        })
    }
}

impl Default for TabularIngestion {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}
