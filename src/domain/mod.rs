pub mod ai_request;
pub mod analysis_state;
pub mod dashboard_config;
pub mod error;
pub mod traffic_metrics;
pub mod upload;
pub mod view;

// Tabular ingestion model
pub mod tabular;
