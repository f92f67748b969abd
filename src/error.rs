//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Missing or invalid process configuration. Fatal at startup: the
    /// generation client cannot be constructed without a credential.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The model halted generation for a safety/policy reason. Carries the
    /// blocked categories (with the `HARM_CATEGORY_` prefix stripped) when
    /// the response enumerated any.
    #[error("{}", blocked_message(.0))]
    Blocked(Vec<String>),

    /// A well-formed call produced neither image nor text.
    #[error("The model returned an empty response. Try rephrasing your prompt.")]
    EmptyResponse,

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Invalid image data: {0}")]
    InvalidData(String),
}

fn blocked_message(categories: &[String]) -> String {
    if categories.is_empty() {
        "Image generation was blocked by safety settings".to_string()
    } else {
        format!(
            "Image generation was blocked by safety settings: {}",
            categories.join(", ")
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
