// ============================================================
// DASHBOARD CONTROLLER
// ============================================================
// Owns the AnalysisState and per-slot generation tokens.
// A completion is installed only if its token is still the newest
// one issued for its slot; otherwise it is reported as superseded.
// State and tokens share one lock.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::mock_metrics::MockMetricsGenerator;
use super::tabular_ingestion::{IngestedDataset, TabularIngestion};
use super::view_selector::ViewSelector;
use crate::domain::ai_request::AiAnalysisRequest;
use crate::domain::analysis_state::{
    AnalysisState, DashboardSnapshot, Slot, SourceStatus, SourceStatuses,
};
use crate::domain::dashboard_config::DashboardConfig;
use crate::domain::error::{AppError, Result};
use crate::domain::traffic_metrics::MockMetricBundle;
use crate::domain::upload::{ImagePreview, UploadedFile};
use crate::domain::view::DashboardView;
use crate::infrastructure::file_source::{FileSource, TokioFileSource};
use crate::infrastructure::image_preview::build_preview;

/// Outcome of a request that ran to completion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "result", rename_all = "snake_case")]
pub enum Completion<T> {
    /// The result was installed in its slot
    Applied(T),

    /// A newer request (or a reset) took the slot first; nothing changed
    Superseded,
}

impl<T> Completion<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Completion::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Completion::Applied(value) => Some(value),
            Completion::Superseded => None,
        }
    }
}

/// Screenshot upload result: the inline preview plus the generated metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAnalysis {
    pub preview: ImagePreview,
    pub metrics: MockMetricBundle,
}

/// Newest generation token issued per slot
#[derive(Debug, Default)]
struct SlotTokens {
    tabular: u64,
    image: u64,
    ai: u64,
}

impl SlotTokens {
    fn issue(&mut self, slot: Slot) -> u64 {
        let token = match slot {
            Slot::Tabular => &mut self.tabular,
            Slot::ImageDerived => &mut self.image,
            Slot::AiEnhanced => &mut self.ai,
        };
        *token += 1;
        *token
    }

    fn is_current(&self, slot: Slot, token: u64) -> bool {
        let current = match slot {
            Slot::Tabular => self.tabular,
            Slot::ImageDerived => self.image,
            Slot::AiEnhanced => self.ai,
        };
        current == token
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: AnalysisState,
    statuses: SourceStatuses,
    tokens: SlotTokens,
}

pub struct DashboardController {
    config: DashboardConfig,
    ingestion: TabularIngestion,
    selector: ViewSelector,
    files: Arc<dyn FileSource>,
    inner: RwLock<Inner>,
}

impl DashboardController {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_file_source(config, Arc::new(TokioFileSource))
    }

    pub fn with_file_source(config: DashboardConfig, files: Arc<dyn FileSource>) -> Self {
        Self {
            ingestion: TabularIngestion::new(&config),
            selector: ViewSelector::new(&config),
            config,
            files,
            inner: RwLock::new(Inner::default()),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let inner = self.inner.read().await;
        DashboardSnapshot {
            state: inner.state.clone(),
            statuses: inner.statuses.clone(),
        }
    }

    /// Panels for the current state
    pub async fn view(&self) -> DashboardView {
        let inner = self.inner.read().await;
        self.selector.select(&inner.state)
    }

    /// Replace the dataset with the parsed upload. On failure the previous
    /// dataset stays in place.
    pub async fn ingest_tabular_file(
        &self,
        upload: UploadedFile,
    ) -> Result<Completion<IngestedDataset>> {
        let token = self.begin(Slot::Tabular).await;
        self.finish_tabular(token, Ok(upload)).await
    }

    pub async fn ingest_tabular_path(&self, path: &Path) -> Result<Completion<IngestedDataset>> {
        let token = self.begin(Slot::Tabular).await;
        let upload = self.files.read(path).await;
        self.finish_tabular(token, upload).await
    }

    async fn finish_tabular(
        &self,
        token: u64,
        upload: Result<UploadedFile>,
    ) -> Result<Completion<IngestedDataset>> {
        let ingested = match upload.and_then(|upload| self.ingestion.ingest(&upload)) {
            Ok(ingested) => ingested,
            Err(err) => return Err(self.fail(Slot::Tabular, token, err).await),
        };

        let mut inner = self.inner.write().await;
        if !inner.tokens.is_current(Slot::Tabular, token) {
            debug!(token, "Tabular ingestion superseded");
            return Ok(Completion::Superseded);
        }

        inner.state = std::mem::take(&mut inner.state).with_dataset(ingested.dataset.clone());
        inner.statuses.set(Slot::Tabular, SourceStatus::Ready);
        Ok(Completion::Applied(ingested))
    }

    /// Generate screenshot metrics for the upload after the configured delay
    pub async fn ingest_image_file(&self, upload: UploadedFile) -> Result<Completion<ImageAnalysis>> {
        let token = self.begin(Slot::ImageDerived).await;
        self.finish_image(token, upload).await
    }

    pub async fn ingest_image_path(&self, path: &Path) -> Result<Completion<ImageAnalysis>> {
        let token = self.begin(Slot::ImageDerived).await;
        let upload = match self.files.read(path).await {
            Ok(upload) => upload,
            Err(err) => return Err(self.fail(Slot::ImageDerived, token, err).await),
        };
        self.finish_image(token, upload).await
    }

    async fn finish_image(&self, token: u64, upload: UploadedFile) -> Result<Completion<ImageAnalysis>> {
        let preview = build_preview(&upload);
        debug!(
            file_name = %upload.file_name,
            delay_ms = self.config.image_delay_ms,
            "Screenshot metrics scheduled"
        );

        tokio::time::sleep(Duration::from_millis(self.config.image_delay_ms)).await;
        let metrics = generate_screenshot(&upload.file_name);

        let completion = self.complete(token, metrics.clone()).await;
        Ok(match completion {
            Completion::Applied(()) => Completion::Applied(ImageAnalysis { preview, metrics }),
            Completion::Superseded => Completion::Superseded,
        })
    }

    /// Run the mocked AI analysis. Incomplete input is rejected before any
    /// work starts and leaves the state untouched.
    pub async fn request_ai_analysis(
        &self,
        request: AiAnalysisRequest,
    ) -> Result<Completion<MockMetricBundle>> {
        if let Err(err) = request.ensure_valid() {
            warn!(error = %err, "AI analysis request rejected");
            let mut inner = self.inner.write().await;
            inner.statuses.set(
                Slot::AiEnhanced,
                SourceStatus::Failed {
                    message: err.message().to_string(),
                },
            );
            return Err(err);
        }

        let token = self.begin(Slot::AiEnhanced).await;
        debug!(
            provider = ?request.provider,
            category = ?request.category,
            delay_ms = self.config.ai_delay_ms,
            "AI analysis scheduled"
        );

        tokio::time::sleep(Duration::from_millis(self.config.ai_delay_ms)).await;
        let metrics = generate_ai(&request);

        let completion = self.complete(token, metrics.clone()).await;
        Ok(match completion {
            Completion::Applied(()) => Completion::Applied(metrics),
            Completion::Superseded => Completion::Superseded,
        })
    }

    /// Drop the AI results. A request still in flight is discarded when it
    /// completes.
    pub async fn reset_ai_connection(&self) {
        let mut inner = self.inner.write().await;
        inner.tokens.issue(Slot::AiEnhanced);
        inner.state = std::mem::take(&mut inner.state).cleared(Slot::AiEnhanced);
        inner.statuses.set(Slot::AiEnhanced, SourceStatus::Idle);
        info!("AI connection reset");
    }

    async fn begin(&self, slot: Slot) -> u64 {
        let mut inner = self.inner.write().await;
        let token = inner.tokens.issue(slot);
        inner.statuses.set(slot, SourceStatus::Loading);
        debug!(%slot, token, "Request started");
        token
    }

    /// Install a metric bundle if `token` is still current for its slot
    async fn complete(&self, token: u64, bundle: MockMetricBundle) -> Completion<()> {
        let slot = Slot::from(bundle.source);
        let mut inner = self.inner.write().await;
        if !inner.tokens.is_current(slot, token) {
            debug!(%slot, token, "Completion superseded");
            return Completion::Superseded;
        }

        inner.state = std::mem::take(&mut inner.state).with_metrics(bundle);
        inner.statuses.set(slot, SourceStatus::Ready);
        info!(%slot, token, "Metrics installed");
        Completion::Applied(())
    }

    /// Record a failure against the slot's panel; the slot's data is kept
    async fn fail(&self, slot: Slot, token: u64, err: AppError) -> AppError {
        warn!(%slot, token, error = %err, "Request failed");
        let mut inner = self.inner.write().await;
        if inner.tokens.is_current(slot, token) {
            inner.statuses.set(
                slot,
                SourceStatus::Failed {
                    message: err.message().to_string(),
                },
            );
        }
        err
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

fn generate_screenshot(file_name: &str) -> MockMetricBundle {
    MockMetricsGenerator::screenshot(&mut rand::thread_rng(), file_name)
}

fn generate_ai(request: &AiAnalysisRequest) -> MockMetricBundle {
    MockMetricsGenerator::ai_enhanced(&mut rand::thread_rng(), request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ai_request::{AiProvider, AnalysisCategory, MISSING_INPUT_MESSAGE};
    use crate::domain::traffic_metrics::MetricSource;
    use async_trait::async_trait;
    use std::io::Write;

    const SALES_CSV: &str = "region,units,revenue\nNorth,12,340.5\nSouth,8,120\n";

    fn ai_request(pain_points: &str) -> AiAnalysisRequest {
        AiAnalysisRequest::new(
            pain_points,
            AnalysisCategory::Conversion,
            AiProvider::Google,
            "test-key",
        )
    }

    fn delayed(image_delay_ms: u64, ai_delay_ms: u64) -> DashboardController {
        DashboardController::new(DashboardConfig {
            image_delay_ms,
            ai_delay_ms,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_panels_fill_in_as_sources_arrive() {
        let controller = DashboardController::new(DashboardConfig::immediate());
        assert!(controller.view().await.no_data);

        let ingested = controller
            .ingest_tabular_file(UploadedFile::from_text("sales.csv", SALES_CSV))
            .await
            .unwrap()
            .applied()
            .unwrap();
        assert_eq!(ingested.dataset.len(), 2);

        let view = controller.view().await;
        assert!(!view.no_data);
        assert!(view.tabular.is_some());
        assert!(view.traffic.is_none());

        let image = controller
            .ingest_image_file(UploadedFile::new("ga4.png", b"not an image".to_vec()))
            .await
            .unwrap()
            .applied()
            .unwrap();
        assert_eq!(image.metrics.source, MetricSource::ImageDerived);
        assert_eq!(
            controller.view().await.traffic.unwrap().source,
            MetricSource::ImageDerived
        );

        controller
            .request_ai_analysis(ai_request("checkout drop-off"))
            .await
            .unwrap();

        let view = controller.view().await;
        assert_eq!(view.traffic.unwrap().source, MetricSource::AiEnhanced);
        assert_eq!(view.recommendations.unwrap().len(), 2);

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.statuses.tabular, SourceStatus::Ready);
        assert_eq!(snapshot.statuses.image, SourceStatus::Ready);
        assert_eq!(snapshot.statuses.ai, SourceStatus::Ready);
    }

    #[tokio::test]
    async fn test_blank_pain_points_rejected_without_state_change() {
        let controller = DashboardController::new(DashboardConfig::immediate());

        let err = controller.request_ai_analysis(ai_request("   ")).await.unwrap_err();

        assert_eq!(err, AppError::ValidationError(MISSING_INPUT_MESSAGE.to_string()));
        let snapshot = controller.snapshot().await;
        assert!(snapshot.state.is_empty());
        assert_eq!(
            snapshot.statuses.ai,
            SourceStatus::Failed {
                message: MISSING_INPUT_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_blank_request_keeps_existing_ai_results() {
        let controller = DashboardController::new(DashboardConfig::immediate());
        controller
            .request_ai_analysis(ai_request("checkout drop-off"))
            .await
            .unwrap();
        let before = controller.snapshot().await.state;

        let err = controller.request_ai_analysis(ai_request("")).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(controller.snapshot().await.state, before);
        assert_eq!(
            controller.view().await.traffic.unwrap().source,
            MetricSource::AiEnhanced
        );
    }

    /// Reads `slow.csv` after a pause, anything else at once
    struct StaggeredFiles;

    #[async_trait]
    impl FileSource for StaggeredFiles {
        async fn read(&self, path: &Path) -> Result<UploadedFile> {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            if file_name == "slow.csv" {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            Ok(UploadedFile::from_text(file_name, SALES_CSV))
        }
    }

    #[tokio::test]
    async fn test_newer_tabular_path_wins() {
        let controller = DashboardController::with_file_source(
            DashboardConfig::immediate(),
            Arc::new(StaggeredFiles),
        );

        let (first, second) = tokio::join!(
            controller.ingest_tabular_path(Path::new("slow.csv")),
            controller.ingest_tabular_path(Path::new("fast.csv")),
        );

        assert_eq!(first.unwrap(), Completion::Superseded);
        assert!(second.unwrap().is_applied());

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.state.dataset.unwrap().file_name, "fast.csv");
        assert_eq!(snapshot.statuses.tabular, SourceStatus::Ready);
    }

    #[tokio::test]
    async fn test_reset_falls_back_to_screenshot_metrics() {
        let controller = DashboardController::new(DashboardConfig::immediate());
        controller
            .ingest_image_file(UploadedFile::new("ga4.png", b"png".to_vec()))
            .await
            .unwrap();
        controller
            .request_ai_analysis(ai_request("low engagement"))
            .await
            .unwrap();

        controller.reset_ai_connection().await;

        let snapshot = controller.snapshot().await;
        assert!(snapshot.state.ai_metrics.is_none());
        assert!(snapshot.state.image_metrics.is_some());
        assert_eq!(snapshot.statuses.ai, SourceStatus::Idle);
        assert_eq!(
            controller.view().await.traffic.unwrap().source,
            MetricSource::ImageDerived
        );
    }

    #[tokio::test]
    async fn test_parse_failure_keeps_previous_dataset() {
        let controller = DashboardController::new(DashboardConfig::immediate());
        controller
            .ingest_tabular_file(UploadedFile::from_text("sales.csv", SALES_CSV))
            .await
            .unwrap();

        let result = controller
            .ingest_tabular_file(UploadedFile::from_text("broken.csv", "a,b\n\"1,2\n"))
            .await;

        assert!(matches!(result, Err(AppError::ParseError(_))));
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.state.dataset.unwrap().file_name, "sales.csv");
        assert!(matches!(snapshot.statuses.tabular, SourceStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_ai_result() {
        let controller = delayed(0, 50);

        let (completion, ()) = tokio::join!(
            controller.request_ai_analysis(ai_request("slow checkout")),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                controller.reset_ai_connection().await;
            }
        );

        assert_eq!(completion.unwrap(), Completion::Superseded);
        let snapshot = controller.snapshot().await;
        assert!(snapshot.state.ai_metrics.is_none());
        assert_eq!(snapshot.statuses.ai, SourceStatus::Idle);
    }

    #[tokio::test]
    async fn test_newer_image_upload_wins() {
        let controller = delayed(30, 0);

        let (first, second) = tokio::join!(
            controller.ingest_image_file(UploadedFile::new("old.png", b"a".to_vec())),
            controller.ingest_image_file(UploadedFile::new("new.png", b"b".to_vec())),
        );

        assert_eq!(first.unwrap(), Completion::Superseded);
        assert!(second.unwrap().is_applied());

        let state = controller.snapshot().await.state;
        let bundle = state.image_metrics.unwrap();
        assert!(matches!(
            bundle.context,
            crate::domain::traffic_metrics::MetricContext::Screenshot { ref file_name, .. }
                if file_name == "new.png"
        ));
    }

    #[tokio::test]
    async fn test_ingest_from_paths() {
        let controller = DashboardController::new(DashboardConfig::immediate());
        let dir = tempfile::tempdir().unwrap();

        let missing = controller
            .ingest_tabular_path(&dir.path().join("missing.csv"))
            .await;
        assert!(matches!(missing, Err(AppError::ReadError(_))));

        let path = dir.path().join("sales.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SALES_CSV.as_bytes()).unwrap();

        let ingested = controller
            .ingest_tabular_path(&path)
            .await
            .unwrap()
            .applied()
            .unwrap();
        assert_eq!(ingested.dataset.file_name, "sales.csv");
        assert_eq!(
            ingested.numeric_columns.as_slice(),
            &["units".to_string(), "revenue".to_string()]
        );

        let image = controller
            .ingest_image_path(&dir.path().join("missing.png"))
            .await;
        assert!(matches!(image, Err(AppError::ReadError(_))));
        assert!(matches!(
            controller.snapshot().await.statuses.image,
            SourceStatus::Failed { .. }
        ));
    }
}
