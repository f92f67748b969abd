use super::client::GeminiHttpClient;
use super::types::{Candidate, Content, GenerateContentResponse, InlineData, Part};
use crate::ai::GenerationService;
use crate::image::data_url;
use crate::models::{GenerationResult, ReferenceImage};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

const HARM_CATEGORY_PREFIX: &str = "HARM_CATEGORY_";

pub struct GeminiGenerationClient {
    http: GeminiHttpClient,
}

impl GeminiGenerationClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(120),
                client,
            ),
        }
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiGenerationClient);

/// One inline-data part per reference image, in input order, then exactly
/// one text part holding the prompt.
fn build_request(prompt: &str, images: &[ReferenceImage]) -> GenerateRequest {
    let mut parts: Vec<Part> = images
        .iter()
        .map(|image| Part::InlineData {
            inline_data: InlineData {
                mime_type: Some(image.mime_type.clone()),
                data: image.base64.clone(),
            },
        })
        .collect();

    parts.push(Part::Text {
        text: prompt.to_string(),
    });

    GenerateRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
        },
    }
}

/// Single ordered pass over the candidate's parts: the last inline-data part
/// wins, text fragments are concatenated, anything else is skipped.
fn collect_result(candidate: &Candidate) -> GenerationResult {
    let mut image = None;
    let mut text = String::new();

    if let Some(content) = &candidate.content {
        for part in &content.parts {
            match part {
                Part::InlineData { inline_data } => {
                    let mime_type = inline_data
                        .mime_type
                        .as_deref()
                        .unwrap_or(data_url::DEFAULT_IMAGE_MIME);
                    image = Some(data_url::encode(mime_type, &inline_data.data));
                }
                Part::Text { text: fragment } => text.push_str(fragment),
                Part::Other(_) => {}
            }
        }
    }

    GenerationResult {
        image,
        text: (!text.is_empty()).then_some(text),
    }
}

/// Classify a well-formed response that yielded no usable content.
fn classify_empty(candidate: Option<&Candidate>) -> Error {
    let Some(candidate) = candidate else {
        return Error::EmptyResponse;
    };

    match candidate.finish_reason.as_deref() {
        Some("SAFETY" | "IMAGE_SAFETY") => {
            let categories = candidate
                .safety_ratings
                .iter()
                .filter(|rating| rating.blocked)
                .map(|rating| {
                    rating
                        .category
                        .strip_prefix(HARM_CATEGORY_PREFIX)
                        .unwrap_or(&rating.category)
                        .to_string()
                })
                .collect();
            Error::Blocked(categories)
        }
        _ => Error::EmptyResponse,
    }
}

#[async_trait]
impl GenerationService for GeminiGenerationClient {
    async fn generate(
        &self,
        prompt: &str,
        images: &[ReferenceImage],
    ) -> Result<GenerationResult> {
        tracing::debug!(
            "Requesting generation from {} with {} reference image(s)",
            self.http.model(),
            images.len()
        );

        let request = build_request(prompt, images);
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        // Only the first candidate is consumed.
        let candidate = response.candidates.first();
        let result = candidate.map(collect_result).unwrap_or_default();

        if result.is_empty() {
            return Err(classify_empty(candidate));
        }

        Ok(result)
    }
}
