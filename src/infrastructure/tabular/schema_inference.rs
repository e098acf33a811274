// ============================================================
// SCHEMA INFERENCE
// ============================================================
// Decide which dataset columns hold numbers

use crate::domain::dashboard_config::NumericInference;
use crate::domain::tabular::{Dataset, NumericColumnSet};

/// Numeric column detector for ingested datasets
pub struct SchemaInspector {
    policy: NumericInference,
}

impl SchemaInspector {
    pub fn new(policy: NumericInference) -> Self {
        Self { policy }
    }

    /// Columns considered numeric, in header order. The synthetic id is
    /// never a candidate.
    pub fn numeric_columns(&self, dataset: &Dataset) -> NumericColumnSet {
        let Some(first_row) = dataset.first_row() else {
            return NumericColumnSet::default();
        };

        let columns = dataset
            .data_columns()
            .into_iter()
            .filter(|column| match self.policy {
                NumericInference::FirstRow => first_row
                    .get(column)
                    .map(Self::is_numeric_value)
                    .unwrap_or(false),
                NumericInference::FullScan => {
                    let mut seen_value = false;
                    let all_numeric = dataset.rows.iter().all(|row| {
                        let value = row.get(column).unwrap_or_default();
                        if value.trim().is_empty() {
                            return true;
                        }
                        seen_value = true;
                        Self::is_numeric_value(value)
                    });
                    all_numeric && seen_value
                }
            })
            .map(str::to_string)
            .collect();

        NumericColumnSet::new(columns)
    }

    /// Non-empty and reads as a finite number. A whitespace-only cell reads
    /// as zero, so it counts.
    pub fn is_numeric_value(value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        let trimmed = value.trim();
        trimmed.is_empty() || trimmed.parse::<f64>().map(f64::is_finite).unwrap_or(false)
    }

    /// Value as plotted: unparsable cells count as zero
    pub fn plot_value(value: &str) -> f64 {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

impl Default for SchemaInspector {
    fn default() -> Self {
        Self::new(NumericInference::FirstRow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tabular::DelimitedParser;

    fn dataset(content: &str) -> Dataset {
        DelimitedParser::new().parse_content("t.csv", content).unwrap()
    }

    #[test]
    fn test_first_row_only() {
        let data = dataset("name,age,id\nAlice,30,0\nBob,unknown,1\n");
        let numeric = SchemaInspector::default().numeric_columns(&data);

        assert_eq!(numeric.as_slice(), &["age".to_string()]);
    }

    #[test]
    fn test_blank_first_value_is_not_numeric() {
        let data = dataset("score,total\n,5\n10,6\n");
        let numeric = SchemaInspector::default().numeric_columns(&data);

        assert!(!numeric.contains("score"));
        assert!(numeric.contains("total"));
    }

    #[test]
    fn test_whitespace_first_value_counts_as_numeric() {
        let data = dataset("a,b\n  ,5\n");
        let numeric = SchemaInspector::default().numeric_columns(&data);

        assert_eq!(numeric.as_slice(), &["a".to_string(), "b".to_string()]);
        assert_eq!(SchemaInspector::plot_value("  "), 0.0);
    }

    #[test]
    fn test_full_scan_skips_whitespace_cells() {
        let data = dataset("a,b\n  ,5\n2,  \n");
        let numeric = SchemaInspector::new(NumericInference::FullScan).numeric_columns(&data);

        assert_eq!(numeric.as_slice(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_full_scan_policy() {
        let data = dataset("score,age,blank\n,30,\n10,x,\n");
        let numeric = SchemaInspector::new(NumericInference::FullScan).numeric_columns(&data);

        assert!(numeric.contains("score"));
        assert!(!numeric.contains("age"));
        assert!(!numeric.contains("blank"));
    }

    #[test]
    fn test_empty_dataset_has_no_numeric_columns() {
        let data = dataset("a,b\n");
        assert!(SchemaInspector::default().numeric_columns(&data).is_empty());
    }

    #[test]
    fn test_numeric_values() {
        assert!(SchemaInspector::is_numeric_value("42"));
        assert!(SchemaInspector::is_numeric_value(" -3.5e2 "));
        assert!(!SchemaInspector::is_numeric_value(""));
        assert!(SchemaInspector::is_numeric_value("   "));
        assert!(!SchemaInspector::is_numeric_value("NaN"));
        assert!(!SchemaInspector::is_numeric_value("inf"));
        assert!(!SchemaInspector::is_numeric_value("1,000"));
        assert_eq!(SchemaInspector::plot_value("abc"), 0.0);
        assert_eq!(SchemaInspector::plot_value("2.5"), 2.5);
    }
}
