pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use app::{bootstrap, bootstrap_from};
pub use application::{Completion, DashboardController, ImageAnalysis};
pub use domain::ai_request::{AiAnalysisRequest, AiProvider, AnalysisCategory};
pub use domain::analysis_state::{AnalysisState, DashboardSnapshot, SourceStatus};
pub use domain::dashboard_config::{DashboardConfig, NumericInference};
pub use domain::error::{AppError, Result};
pub use domain::upload::UploadedFile;
pub use domain::view::DashboardView;
