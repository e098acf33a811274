// ============================================================
// TABULAR ROW TYPES
// ============================================================
// One ingested line mapped onto the header row

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SYNTHETIC_ID_COLUMN;

/// A single cell keyed by its header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowField {
    /// Header name
    pub name: String,

    /// Cell value, empty when the line was short
    pub value: String,
}

/// A single row of a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularRow {
    /// Row id (0-based, ingestion order)
    pub id: usize,

    /// One field per header, in header order
    pub fields: Vec<RowField>,
}

impl TabularRow {
    /// Map `cells` onto `headers`: missing trailing cells become empty
    /// strings, cells beyond the header width are dropped.
    pub fn from_cells<S: AsRef<str>>(id: usize, headers: &[String], cells: &[S]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| RowField {
                name: header.clone(),
                value: cells
                    .get(idx)
                    .map(|cell| cell.as_ref().to_string())
                    .unwrap_or_default(),
            })
            .collect();

        Self { id, fields }
    }

    /// Value of `column`; for repeated headers the later cell wins
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.name == column)
            .map(|f| f.value.as_str())
    }

    /// Row as a flat JSON object with the synthetic id under `"id"`
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(SYNTHETIC_ID_COLUMN.to_string(), Value::from(self.id));
        for field in self
            .fields
            .iter()
            .filter(|f| f.name != SYNTHETIC_ID_COLUMN)
        {
            object.insert(field.name.clone(), Value::String(field.value.clone()));
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn test_short_line_fills_empty_cells() {
        let row = TabularRow::from_cells(0, &headers(&["a", "b", "c"]), &["1", "2"]);
        assert_eq!(row.get("a"), Some("1"));
        assert_eq!(row.get("b"), Some("2"));
        assert_eq!(row.get("c"), Some(""));
        assert_eq!(row.get("d"), None);
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let row = TabularRow::from_cells(3, &headers(&["a"]), &["1", "2", "3"]);
        assert_eq!(row.fields.len(), 1);
        assert_eq!(row.id, 3);
    }

    #[test]
    fn test_repeated_header_later_cell_wins() {
        let row = TabularRow::from_cells(0, &headers(&["x", "x"]), &["first", "second"]);
        assert_eq!(row.get("x"), Some("second"));
    }

    #[test]
    fn test_to_json_keeps_synthetic_id() {
        let row = TabularRow::from_cells(7, &headers(&["id", "name"]), &["abc", "Alice"]);
        let json = row.to_json();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Alice");
    }
}
