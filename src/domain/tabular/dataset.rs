// ============================================================
// DATASET
// ============================================================
// The in-memory table produced from one ingested file

use serde::{Deserialize, Serialize};

use super::{truncate_cell, FileFormat, TabularRow, SYNTHETIC_ID_COLUMN};

/// Rows of one ingested file plus the header row that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Name of the uploaded file
    pub file_name: String,

    pub format: FileFormat,

    /// Delimiter the rows were split on
    pub delimiter: u8,

    /// Header row, as written in the file
    pub headers: Vec<String>,

    pub rows: Vec<TabularRow>,
}

/// Small excerpt shown right after an upload succeeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPreview {
    pub file_name: String,
    pub format_label: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

impl Dataset {
    pub fn new(
        file_name: impl Into<String>,
        format: FileFormat,
        delimiter: u8,
        headers: Vec<String>,
        rows: Vec<TabularRow>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            format,
            delimiter,
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_row(&self) -> Option<&TabularRow> {
        self.rows.first()
    }

    /// Distinct headers in order, without the synthetic id column
    pub fn data_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::with_capacity(self.headers.len());
        for header in &self.headers {
            if header != SYNTHETIC_ID_COLUMN && !columns.contains(&header.as_str()) {
                columns.push(header);
            }
        }
        columns
    }

    /// First `max_columns` data columns of the first `max_rows` rows, with
    /// cells cut to `cell_width` characters
    pub fn excerpt(
        &self,
        max_rows: usize,
        max_columns: usize,
        cell_width: usize,
    ) -> (Vec<String>, Vec<Vec<String>>) {
        let columns: Vec<&str> = self.data_columns().into_iter().take(max_columns).collect();
        let rows = self
            .rows
            .iter()
            .take(max_rows)
            .map(|row| {
                columns
                    .iter()
                    .map(|column| truncate_cell(row.get(column).unwrap_or_default(), cell_width))
                    .collect()
            })
            .collect();

        (columns.into_iter().map(str::to_string).collect(), rows)
    }

    pub fn preview(&self, max_rows: usize, max_columns: usize, cell_width: usize) -> DatasetPreview {
        let (columns, rows) = self.excerpt(max_rows, max_columns, cell_width);
        DatasetPreview {
            file_name: self.file_name.clone(),
            format_label: self.format.label().to_string(),
            columns,
            rows,
            total_rows: self.len(),
        }
    }
}
