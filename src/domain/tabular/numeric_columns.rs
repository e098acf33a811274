use serde::{Deserialize, Serialize};

/// Columns judged numeric for a dataset, in header order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericColumnSet {
    columns: Vec<String>,
}

impl NumericColumnSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.columns
    }
}
