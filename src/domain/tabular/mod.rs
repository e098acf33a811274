// ============================================================
// TABULAR DOMAIN LAYER
// ============================================================
// Rows, datasets and numeric column sets produced by ingestion
// No I/O, no async

mod dataset;
mod file_format;
mod numeric_columns;
mod tabular_row;

pub use dataset::{Dataset, DatasetPreview};
pub use file_format::FileFormat;
pub use numeric_columns::NumericColumnSet;
pub use tabular_row::{RowField, TabularRow};

/// Key of the synthetic row identifier; a header with this name is shadowed by it
pub const SYNTHETIC_ID_COLUMN: &str = "id";

/// Cut a cell to `width` characters, marking the cut with "..."
pub fn truncate_cell(value: &str, width: usize) -> String {
    let mut chars = value.chars();
    let head: String = chars.by_ref().take(width).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_cell() {
        assert_eq!(truncate_cell("short", 20), "short");
        assert_eq!(truncate_cell("abcdef", 3), "abc...");
        assert_eq!(truncate_cell("abc", 3), "abc");
        assert_eq!(truncate_cell("數據預覽表格", 2), "數據...");
    }
}
