// ============================================================
// MOCK METRICS GENERATOR
// ============================================================
// Placeholder numbers standing in for screenshot extraction
// and AI analysis. Ranges are lower-inclusive, upper-exclusive.

use chrono::Utc;
use rand::Rng;

use super::insights::insight_text;
use crate::domain::ai_request::AiAnalysisRequest;
use crate::domain::traffic_metrics::{MetricContext, MetricSource, MockMetricBundle, TrafficMetrics};

/// Attached to every screenshot bundle
pub const SCREENSHOT_NOTE: &str = "Simulated data generated from the image file name. \
Extracting real figures requires an OCR or image recognition service.";

/// Generator for placeholder traffic metrics
pub struct MockMetricsGenerator;

impl MockMetricsGenerator {
    /// Metrics "extracted" from a GA4 screenshot
    pub fn screenshot<R: Rng + ?Sized>(rng: &mut R, file_name: &str) -> MockMetricBundle {
        let metrics = TrafficMetrics {
            users: rng.gen_range(1_000..11_000),
            sessions: rng.gen_range(2_000..17_000),
            pageviews: rng.gen_range(5_000..35_000),
            bounce_rate: hundredths(rng, 2_000..5_000),
            avg_session_duration_secs: rng.gen_range(60..360),
            conversion_rate: None,
            revenue_growth: None,
        };

        MockMetricBundle {
            source: MetricSource::ImageDerived,
            metrics,
            context: MetricContext::Screenshot {
                file_name: file_name.to_string(),
                note: SCREENSHOT_NOTE.to_string(),
            },
            generated_at: Utc::now(),
        }
    }

    /// Metrics of a mocked AI analysis, echoing the request context
    pub fn ai_enhanced<R: Rng + ?Sized>(rng: &mut R, request: &AiAnalysisRequest) -> MockMetricBundle {
        let pain_points = request.trimmed_pain_points().to_string();

        let metrics = TrafficMetrics {
            users: rng.gen_range(10_000..60_000),
            sessions: rng.gen_range(15_000..90_000),
            pageviews: rng.gen_range(30_000..180_000),
            bounce_rate: hundredths(rng, 2_500..5_000),
            avg_session_duration_secs: rng.gen_range(120..360),
            conversion_rate: Some(hundredths(rng, 100..600)),
            revenue_growth: Some(rng.gen_range(50..250) as f64 / 10.0),
        };

        MockMetricBundle {
            source: MetricSource::AiEnhanced,
            metrics,
            context: MetricContext::AiAnalysis {
                provider: request.provider,
                insights: insight_text(request.category, &pain_points),
                pain_points,
                category: request.category,
            },
            generated_at: Utc::now(),
        }
    }
}

/// Percentage with two decimals, drawn on a hundredths grid so rounding
/// cannot reach the upper bound
fn hundredths<R: Rng + ?Sized>(rng: &mut R, range: std::ops::Range<u32>) -> f64 {
    rng.gen_range(range) as f64 / 100.0
}
