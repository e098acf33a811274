//! Panel view models handed to the shell for rendering.

use serde::{Deserialize, Serialize};

use super::tabular::NumericColumnSet;
use super::traffic_metrics::MetricSource;

/// Color band of a metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAccent {
    Blue,
    Green,
    Purple,
    Orange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    /// Stable key, e.g. "users"
    pub key: String,
    pub label: String,
    pub value: String,
    pub accent: CardAccent,
}

impl MetricCard {
    pub fn new(key: &str, label: &str, value: impl Into<String>, accent: CardAccent) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value: value.into(),
            accent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: u64,
}

/// GA4-style overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficPanel {
    pub source: MetricSource,
    pub cards: Vec<MetricCard>,
    pub bars: Vec<BarDatum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub column: String,
    pub values: Vec<f64>,
}

/// Numeric columns over the leading rows; x labels are 1-based row numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub x_labels: Vec<usize>,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularPanel {
    pub record_count: usize,
    pub column_count: usize,
    pub numeric_columns: NumericColumnSet,
    pub cards: Vec<MetricCard>,

    /// `None` when no column is numeric
    pub chart: Option<LineChart>,

    pub table: TablePreview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTopic {
    Traffic,
    Tabular,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub topic: RecommendationTopic,
    pub title: String,
    pub content: String,
}

/// Which panels are visible and what they show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub no_data: bool,
    pub traffic: Option<TrafficPanel>,
    pub tabular: Option<TabularPanel>,

    /// `None` exactly when `no_data` holds
    pub recommendations: Option<Vec<Recommendation>>,
}
