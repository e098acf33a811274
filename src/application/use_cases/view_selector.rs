// ============================================================
// VIEW SELECTOR
// ============================================================
// Decide which panels the dashboard shows and assemble their content.
// Pure over AnalysisState: the same state always yields the same view.

use crate::domain::analysis_state::AnalysisState;
use crate::domain::dashboard_config::DashboardConfig;
use crate::domain::tabular::Dataset;
use crate::domain::traffic_metrics::{MetricSource, MockMetricBundle};
use crate::domain::view::{
    BarDatum, CardAccent, ChartSeries, DashboardView, LineChart, MetricCard, Recommendation,
    RecommendationTopic, TablePreview, TabularPanel, TrafficPanel,
};
use crate::infrastructure::tabular::SchemaInspector;

pub struct ViewSelector {
    inspector: SchemaInspector,
    chart_rows: usize,
    chart_series: usize,
    table_rows: usize,
    table_columns: usize,
    table_cell_width: usize,
}

impl ViewSelector {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            inspector: SchemaInspector::new(config.numeric_inference),
            chart_rows: config.chart_rows,
            chart_series: config.chart_series,
            table_rows: config.table_preview_rows,
            table_columns: config.table_preview_columns,
            table_cell_width: config.table_cell_width,
        }
    }

    pub fn select(&self, state: &AnalysisState) -> DashboardView {
        if state.is_empty() {
            return DashboardView {
                no_data: true,
                traffic: None,
                tabular: None,
                recommendations: None,
            };
        }

        DashboardView {
            no_data: false,
            traffic: state.traffic_source().map(traffic_panel),
            tabular: state.dataset.as_ref().map(|d| self.tabular_panel(d)),
            recommendations: Some(recommendations(state)),
        }
    }

    fn tabular_panel(&self, dataset: &Dataset) -> TabularPanel {
        let numeric_columns = self.inspector.numeric_columns(dataset);
        let column_count = dataset.data_columns().len();

        let cards = vec![
            MetricCard::new("records", "Total records", dataset.len().to_string(), CardAccent::Blue),
            MetricCard::new("columns", "Columns", column_count.to_string(), CardAccent::Green),
            MetricCard::new(
                "numeric_columns",
                "Numeric columns",
                numeric_columns.len().to_string(),
                CardAccent::Purple,
            ),
        ];

        let chart = if numeric_columns.is_empty() {
            None
        } else {
            let rows: Vec<_> = dataset.rows.iter().take(self.chart_rows).collect();
            let series = numeric_columns
                .iter()
                .take(self.chart_series)
                .map(|column| ChartSeries {
                    column: column.to_string(),
                    values: rows
                        .iter()
                        .map(|row| SchemaInspector::plot_value(row.get(column).unwrap_or_default()))
                        .collect(),
                })
                .collect();

            Some(LineChart {
                x_labels: (1..=rows.len()).collect(),
                series,
            })
        };

        let (columns, rows) =
            dataset.excerpt(self.table_rows, self.table_columns, self.table_cell_width);

        TabularPanel {
            record_count: dataset.len(),
            column_count,
            numeric_columns,
            cards,
            chart,
            table: TablePreview { columns, rows },
        }
    }
}

impl Default for ViewSelector {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

fn traffic_panel(bundle: &MockMetricBundle) -> TrafficPanel {
    let metrics = &bundle.metrics;

    let fourth = match bundle.source {
        MetricSource::AiEnhanced => MetricCard::new(
            "conversion_rate",
            "Conversion rate",
            metrics.conversion_rate_display().unwrap_or_default(),
            CardAccent::Orange,
        ),
        MetricSource::ImageDerived => MetricCard::new(
            "bounce_rate",
            "Bounce rate",
            metrics.bounce_rate_display(),
            CardAccent::Orange,
        ),
    };

    TrafficPanel {
        source: bundle.source,
        cards: vec![
            MetricCard::new("users", "Users", metrics.users_display(), CardAccent::Blue),
            MetricCard::new("sessions", "Sessions", metrics.sessions_display(), CardAccent::Green),
            MetricCard::new("pageviews", "Pageviews", metrics.pageviews_display(), CardAccent::Purple),
            fourth,
        ],
        bars: vec![
            BarDatum { label: "Users".to_string(), value: metrics.users },
            BarDatum { label: "Sessions".to_string(), value: metrics.sessions },
            BarDatum { label: "Pageviews".to_string(), value: metrics.pageviews },
        ],
    }
}

fn recommendations(state: &AnalysisState) -> Vec<Recommendation> {
    let mut blocks = Vec::new();

    if state.has_traffic_data() {
        let content = match state.ai_metrics.as_ref().and_then(|b| b.pain_points()) {
            Some(pain_points) => format!(
                "Based on your pain point \"{}\", the AI has provided a professional analysis. \
                 Keep monitoring how the key metrics change.",
                pain_points
            ),
            None => "Based on the figures extracted from the screenshot, keep monitoring how \
                     these key metrics trend over time."
                .to_string(),
        };
        blocks.push(Recommendation {
            topic: RecommendationTopic::Traffic,
            title: "GA4 data insights".to_string(),
            content,
        });
    }

    if let Some(dataset) = &state.dataset {
        blocks.push(Recommendation {
            topic: RecommendationTopic::Tabular,
            title: "CSV data analysis".to_string(),
            content: format!(
                "Your dataset contains {} records. Consider cleaning the data further and \
                 exploring relationships between variables.",
                dataset.len()
            ),
        });
    }

    blocks
}
