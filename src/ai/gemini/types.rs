//! Gemini `generateContent` payload types.

use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding. `Other` must be
/// last: it absorbs part kinds this crate does not consume (thought
/// signatures, function calls) so they can be skipped rather than failing
/// the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Other(serde_json::Value),
}

/// Base64 inline payload carrying image bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// Absent in some responses; consumers fall back to `image/png`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub data: String,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
///
/// `content` is absent when generation was halted before any part was
/// produced (safety blocks in particular).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub safety_ratings: Vec<SafetyRating>,
}

/// Per-category safety assessment attached to a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct SafetyRating {
    pub category: String,
    #[serde(default)]
    pub blocked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_decodes_text_and_inline_data() {
        let parts: Vec<Part> = serde_json::from_str(
            r#"[
                {"text": "hello"},
                {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
            ]"#,
        )
        .unwrap();

        assert!(matches!(&parts[0], Part::Text { text } if text == "hello"));
        assert!(matches!(
            &parts[1],
            Part::InlineData { inline_data }
                if inline_data.mime_type.as_deref() == Some("image/png")
        ));
    }

    #[test]
    fn test_unknown_part_kind_decodes_as_other() {
        let part: Part = serde_json::from_str(r#"{"functionCall": {"name": "noop"}}"#).unwrap();
        assert!(matches!(part, Part::Other(_)));
    }

    #[test]
    fn test_inline_data_without_mime_type() {
        let part: Part = serde_json::from_str(r#"{"inlineData": {"data": "AAAA"}}"#).unwrap();
        assert!(matches!(
            part,
            Part::InlineData { inline_data } if inline_data.mime_type.is_none()
        ));
    }

    #[test]
    fn test_candidate_without_content() {
        let candidate: Candidate = serde_json::from_str(
            r#"{
                "finishReason": "SAFETY",
                "safetyRatings": [{"category": "HARM_CATEGORY_HATE", "blocked": true}]
            }"#,
        )
        .unwrap();

        assert!(candidate.content.is_none());
        assert_eq!(candidate.finish_reason.as_deref(), Some("SAFETY"));
        assert!(candidate.safety_ratings[0].blocked);
    }

    #[test]
    fn test_inline_data_request_serialization_omits_absent_mime() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: Some("image/jpeg".to_string()),
                data: "AAAA".to_string(),
            },
        };

        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"mimeType\":\"image/jpeg\""));
    }
}
