//! AI service integration for reference-guided image generation
//!
//! Defines the generation service seam and the Gemini implementation behind
//! it, plus a mock client for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiGenerationClient;
pub use mock::MockGenerationClient;

use crate::models::{GenerationResult, ReferenceImage};
use crate::Result;
use async_trait::async_trait;

/// One-shot generation: a prompt plus ordered reference images in, a single
/// normalized result (or a descriptive error) out.
///
/// Implementations perform at most one network call per invocation, hold no
/// state across calls, and trust their inputs; non-empty prompts and the
/// presence of reference images are the caller's responsibility.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        images: &[ReferenceImage],
    ) -> Result<GenerationResult>;
}
