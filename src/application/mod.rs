pub mod use_cases;

pub use use_cases::dashboard_controller::{Completion, DashboardController, ImageAnalysis};
pub use use_cases::mock_metrics::MockMetricsGenerator;
pub use use_cases::tabular_ingestion::{IngestedDataset, TabularIngestion};
pub use use_cases::view_selector::ViewSelector;
