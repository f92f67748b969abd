//! Data models and structures
//!
//! Defines the reference image and generation result types exchanged with
//! the AI service layer, plus process configuration.

use serde::{Deserialize, Serialize};

/// A user-supplied image used as visual grounding input for generation.
///
/// Immutable once constructed; the generation client borrows it read-only
/// for the duration of one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// Base64-encoded file contents (standard alphabet, no data URL prefix).
    pub base64: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Original file name, for logging and display.
    pub name: String,
}

/// Normalized output of one generation call.
///
/// Both fields may be present, or only one. A result with neither is never
/// returned; the client fails with a descriptive error instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Ready-to-render data URL (`data:<mime>;base64,<payload>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Concatenation, in response order, of every text fragment returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl GenerationResult {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.text.is_none()
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-image";

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_image_serialization() {
        let reference = ReferenceImage {
            base64: "aGVsbG8=".to_string(),
            mime_type: "image/png".to_string(),
            name: "sketch.png".to_string(),
        };

        let json = serde_json::to_string(&reference).unwrap();
        assert!(json.contains("\"mimeType\":\"image/png\""));

        let deserialized: ReferenceImage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.name, "sketch.png");
        assert_eq!(deserialized.base64, "aGVsbG8=");
    }

    #[test]
    fn test_generation_result_is_empty() {
        assert!(GenerationResult::default().is_empty());

        let with_text = GenerationResult {
            image: None,
            text: Some("a caption".to_string()),
        };
        assert!(!with_text.is_empty());

        let with_image = GenerationResult {
            image: Some("data:image/png;base64,AAAA".to_string()),
            text: None,
        };
        assert!(!with_image.is_empty());
    }

    #[test]
    fn test_generation_result_skips_absent_fields() {
        let result = GenerationResult {
            image: None,
            text: Some("hello".to_string()),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("image"));
        assert!(json.contains("\"text\":\"hello\""));
    }
}
