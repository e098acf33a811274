pub mod dashboard_controller;
pub mod insights;
pub mod mock_metrics;
pub mod tabular_ingestion;
pub mod view_selector;
