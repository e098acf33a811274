// ============================================================
// ANALYSIS STATE
// ============================================================
// The three independent data slots the dashboard renders from

use serde::{Deserialize, Serialize};

use super::tabular::Dataset;
use super::traffic_metrics::{MetricSource, MockMetricBundle};

/// One of the independent data sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Tabular,
    ImageDerived,
    AiEnhanced,
}

impl From<MetricSource> for Slot {
    fn from(source: MetricSource) -> Self {
        match source {
            MetricSource::ImageDerived => Slot::ImageDerived,
            MetricSource::AiEnhanced => Slot::AiEnhanced,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Tabular => write!(f, "tabular"),
            Slot::ImageDerived => write!(f, "image-derived"),
            Slot::AiEnhanced => write!(f, "ai-enhanced"),
        }
    }
}

/// Current data of the dashboard; any subset of slots may be filled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisState {
    pub dataset: Option<Dataset>,
    pub image_metrics: Option<MockMetricBundle>,
    pub ai_metrics: Option<MockMetricBundle>,
}

impl AnalysisState {
    pub fn is_empty(&self) -> bool {
        self.dataset.is_none() && self.image_metrics.is_none() && self.ai_metrics.is_none()
    }

    pub fn has_traffic_data(&self) -> bool {
        self.image_metrics.is_some() || self.ai_metrics.is_some()
    }

    /// Bundle backing the traffic panel: AI results shadow screenshot ones
    pub fn traffic_source(&self) -> Option<&MockMetricBundle> {
        self.ai_metrics.as_ref().or(self.image_metrics.as_ref())
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Install `bundle` in the slot matching its source, replacing any previous one
    pub fn with_metrics(mut self, bundle: MockMetricBundle) -> Self {
        match bundle.source {
            MetricSource::ImageDerived => self.image_metrics = Some(bundle),
            MetricSource::AiEnhanced => self.ai_metrics = Some(bundle),
        }
        self
    }

    pub fn cleared(mut self, slot: Slot) -> Self {
        match slot {
            Slot::Tabular => self.dataset = None,
            Slot::ImageDerived => self.image_metrics = None,
            Slot::AiEnhanced => self.ai_metrics = None,
        }
        self
    }

    pub fn is_filled(&self, slot: Slot) -> bool {
        match slot {
            Slot::Tabular => self.dataset.is_some(),
            Slot::ImageDerived => self.image_metrics.is_some(),
            Slot::AiEnhanced => self.ai_metrics.is_some(),
        }
    }
}

/// Progress indicator of one upload/connection panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStatuses {
    pub tabular: SourceStatus,
    pub image: SourceStatus,
    pub ai: SourceStatus,
}

impl SourceStatuses {
    pub fn get(&self, slot: Slot) -> &SourceStatus {
        match slot {
            Slot::Tabular => &self.tabular,
            Slot::ImageDerived => &self.image,
            Slot::AiEnhanced => &self.ai,
        }
    }

    pub fn set(&mut self, slot: Slot, status: SourceStatus) {
        match slot {
            Slot::Tabular => self.tabular = status,
            Slot::ImageDerived => self.image = status,
            Slot::AiEnhanced => self.ai = status,
        }
    }
}

/// State plus panel statuses, as handed to the shell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub state: AnalysisState,
    pub statuses: SourceStatuses,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traffic_metrics::{MetricContext, TrafficMetrics};

    fn screenshot_bundle() -> MockMetricBundle {
        MockMetricBundle {
            source: MetricSource::ImageDerived,
            metrics: TrafficMetrics {
                users: 1500,
                sessions: 2500,
                pageviews: 6000,
                bounce_rate: 25.0,
                avg_session_duration_secs: 90,
                conversion_rate: None,
                revenue_growth: None,
            },
            context: MetricContext::Screenshot {
                file_name: "ga4.png".to_string(),
                note: String::new(),
            },
            generated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_empty_state() {
        let state = AnalysisState::default();
        assert!(state.is_empty());
        assert!(!state.has_traffic_data());
        assert!(state.traffic_source().is_none());
    }

    #[test]
    fn test_metrics_land_in_matching_slot() {
        let state = AnalysisState::default().with_metrics(screenshot_bundle());
        assert!(state.is_filled(Slot::ImageDerived));
        assert!(!state.is_filled(Slot::AiEnhanced));
        assert!(!state.is_empty());

        let state = state.cleared(Slot::ImageDerived);
        assert!(state.is_empty());
    }

    #[test]
    fn test_statuses_by_slot() {
        let mut statuses = SourceStatuses::default();
        statuses.set(
            Slot::Tabular,
            SourceStatus::Failed {
                message: "bad".to_string(),
            },
        );
        assert_eq!(statuses.get(Slot::ImageDerived), &SourceStatus::Idle);
        assert!(matches!(statuses.get(Slot::Tabular), SourceStatus::Failed { .. }));
    }
}
