// ============================================================
// DASHBOARD CONFIGURATION
// ============================================================
// Tunable delays, preview sizes and inference policy

use serde::{Deserialize, Serialize};

/// How numeric columns are detected in an ingested dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NumericInference {
    /// Judge each column by its first-row value only
    #[default]
    FirstRow,

    /// Require every non-empty value of the column to be numeric
    FullScan,
}

/// Configuration for the dashboard core
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Artificial delay before screenshot metrics are installed (default: 2000)
    pub image_delay_ms: u64,

    /// Artificial delay before AI metrics are installed (default: 3000)
    pub ai_delay_ms: u64,

    /// Rows shown in the upload preview (default: 3)
    pub upload_preview_rows: usize,

    /// Columns shown in the upload preview (default: 6)
    pub upload_preview_columns: usize,

    /// Cell width in characters before truncation in the upload preview (default: 20)
    pub upload_cell_width: usize,

    /// Rows shown in the analysis table (default: 5)
    pub table_preview_rows: usize,

    /// Columns shown in the analysis table (default: 8)
    pub table_preview_columns: usize,

    /// Cell width in characters before truncation in the analysis table (default: 30)
    pub table_cell_width: usize,

    /// Rows plotted in the numeric line chart (default: 10)
    pub chart_rows: usize,

    /// Numeric columns plotted in the line chart (default: 5)
    pub chart_series: usize,

    pub numeric_inference: NumericInference,

    /// tracing-subscriber filter directive (default: "info")
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            image_delay_ms: 2000,
            ai_delay_ms: 3000,
            upload_preview_rows: 3,
            upload_preview_columns: 6,
            upload_cell_width: 20,
            table_preview_rows: 5,
            table_preview_columns: 8,
            table_cell_width: 30,
            chart_rows: 10,
            chart_series: 5,
            numeric_inference: NumericInference::FirstRow,
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Config without artificial delays, for tests and headless use
    pub fn immediate() -> Self {
        Self {
            image_delay_ms: 0,
            ai_delay_ms: 0,
            ..Default::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.upload_cell_width == 0 || self.table_cell_width == 0 {
            return Err("cell widths must be > 0".to_string());
        }
        if self.table_preview_columns == 0 || self.upload_preview_columns == 0 {
            return Err("preview column counts must be > 0".to_string());
        }
        if self.chart_series == 0 {
            return Err("chart_series must be > 0".to_string());
        }
        if self.log_filter.trim().is_empty() {
            return Err("log_filter must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.image_delay_ms, 2000);
        assert_eq!(config.ai_delay_ms, 3000);
        assert_eq!(config.numeric_inference, NumericInference::FirstRow);
    }

    #[test]
    fn test_rejects_zero_cell_width() {
        let config = DashboardConfig {
            table_cell_width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
