// ============================================================
// TRAFFIC METRIC BUNDLES
// ============================================================
// Placeholder GA4-style metrics standing in for screenshot
// extraction and AI analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ai_request::{AiProvider, AnalysisCategory};
use crate::shared::number_format::format_thousands;

/// Where a metric bundle claims to come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricSource {
    ImageDerived,
    AiEnhanced,
}

impl std::fmt::Display for MetricSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricSource::ImageDerived => write!(f, "image-derived"),
            MetricSource::AiEnhanced => write!(f, "ai-enhanced"),
        }
    }
}

/// Traffic numbers; the last two are only produced by AI analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficMetrics {
    pub users: u64,
    pub sessions: u64,
    pub pageviews: u64,

    /// Percent, two decimals
    pub bounce_rate: f64,

    pub avg_session_duration_secs: u64,

    /// Percent, two decimals
    pub conversion_rate: Option<f64>,

    /// Percent, one decimal
    pub revenue_growth: Option<f64>,
}

impl TrafficMetrics {
    pub fn users_display(&self) -> String {
        format_thousands(self.users)
    }

    pub fn sessions_display(&self) -> String {
        format_thousands(self.sessions)
    }

    pub fn pageviews_display(&self) -> String {
        format_thousands(self.pageviews)
    }

    pub fn bounce_rate_display(&self) -> String {
        format!("{:.2}%", self.bounce_rate)
    }

    pub fn avg_session_duration_display(&self) -> String {
        format!("{}s", self.avg_session_duration_secs)
    }

    pub fn conversion_rate_display(&self) -> Option<String> {
        self.conversion_rate.map(|rate| format!("{:.2}%", rate))
    }

    pub fn revenue_growth_display(&self) -> Option<String> {
        self.revenue_growth.map(|growth| format!("{:.1}%", growth))
    }
}

/// User-supplied context echoed back with the numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricContext {
    Screenshot {
        file_name: String,
        note: String,
    },
    AiAnalysis {
        provider: AiProvider,
        pain_points: String,
        category: AnalysisCategory,
        insights: String,
    },
}

/// One generated set of traffic metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockMetricBundle {
    pub source: MetricSource,
    pub metrics: TrafficMetrics,
    pub context: MetricContext,
    pub generated_at: DateTime<Utc>,
}

impl MockMetricBundle {
    /// Pain-point text when the bundle came from an AI request
    pub fn pain_points(&self) -> Option<&str> {
        match &self.context {
            MetricContext::AiAnalysis { pain_points, .. } => Some(pain_points.as_str()),
            MetricContext::Screenshot { .. } => None,
        }
    }
}
