use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

use crate::domain::error::AppError;

/// Shown when the connect form is submitted incomplete
pub const MISSING_INPUT_MESSAGE: &str = "Please enter an API key and describe your pain points";

/// Focus area picked in the AI connection form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisCategory {
    Conversion,
    Traffic,
    Engagement,
    #[default]
    #[serde(other)]
    Unset,
}

impl AnalysisCategory {
    /// Selector values other than the three known ones fall back to `Unset`
    pub fn from_selector(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "conversion" => AnalysisCategory::Conversion,
            "traffic" => AnalysisCategory::Traffic,
            "engagement" => AnalysisCategory::Engagement,
            _ => AnalysisCategory::Unset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AiProvider {
    #[default]
    #[serde(rename = "google")]
    Google,
    #[serde(rename = "openai")]
    OpenAi,
}

impl AiProvider {
    pub fn display_name(&self) -> &'static str {
        match self {
            AiProvider::Google => "Google AI",
            AiProvider::OpenAi => "OpenAI",
        }
    }

    /// Status badge text once the mock connection succeeds
    pub fn connected_label(&self) -> String {
        format!("{} connected", self.display_name())
    }
}

/// Input of the "connect to AI" form. The API key is accepted but never
/// stored in results, logged or sent anywhere.
#[derive(Clone, Deserialize, Validate)]
pub struct AiAnalysisRequest {
    #[validate(custom(function = "not_blank"))]
    pub pain_points: String,

    #[serde(default)]
    pub category: AnalysisCategory,

    #[serde(default)]
    pub provider: AiProvider,

    #[validate(custom(function = "not_blank"))]
    pub api_key: String,
}

impl AiAnalysisRequest {
    pub fn new(
        pain_points: impl Into<String>,
        category: AnalysisCategory,
        provider: AiProvider,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            pain_points: pain_points.into(),
            category,
            provider,
            api_key: api_key.into(),
        }
    }

    /// Check required inputs, mapping failures to the user-facing message
    pub fn ensure_valid(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|_| AppError::ValidationError(MISSING_INPUT_MESSAGE.to_string()))
    }

    /// Pain-point text as echoed into results
    pub fn trimmed_pain_points(&self) -> &str {
        self.pain_points.trim()
    }
}

impl fmt::Debug for AiAnalysisRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiAnalysisRequest")
            .field("pain_points", &self.pain_points)
            .field("category", &self.category)
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_pain_points_rejected() {
        let request = AiAnalysisRequest::new("   ", AnalysisCategory::Unset, AiProvider::Google, "key");
        assert_eq!(
            request.ensure_valid(),
            Err(AppError::ValidationError(MISSING_INPUT_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let request =
            AiAnalysisRequest::new("slow checkout", AnalysisCategory::Traffic, AiProvider::OpenAi, "");
        assert!(request.ensure_valid().is_err());
    }

    #[test]
    fn test_complete_request_accepted() {
        let request =
            AiAnalysisRequest::new(" slow checkout ", AnalysisCategory::Conversion, AiProvider::Google, "k");
        assert!(request.ensure_valid().is_ok());
        assert_eq!(request.trimmed_pain_points(), "slow checkout");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let request =
            AiAnalysisRequest::new("x", AnalysisCategory::Unset, AiProvider::Google, "sk-secret");
        assert!(!format!("{:?}", request).contains("sk-secret"));
    }

    #[test]
    fn test_category_selector_fallback() {
        assert_eq!(AnalysisCategory::from_selector("traffic"), AnalysisCategory::Traffic);
        assert_eq!(AnalysisCategory::from_selector(""), AnalysisCategory::Unset);
        assert_eq!(AnalysisCategory::from_selector("revenue"), AnalysisCategory::Unset);
        let parsed: AnalysisCategory = serde_json::from_str("\"seo\"").unwrap();
        assert_eq!(parsed, AnalysisCategory::Unset);
    }

    #[test]
    fn test_provider_labels() {
        assert_eq!(AiProvider::Google.connected_label(), "Google AI connected");
        assert_eq!(AiProvider::OpenAi.display_name(), "OpenAI");
    }
}
