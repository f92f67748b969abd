use super::GenerationService;
use crate::models::{GenerationResult, ReferenceImage};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory [`GenerationService`] for tests: replays queued results (or
/// errors) in order, cycling when exhausted.
pub struct MockGenerationClient {
    responses: Arc<Mutex<Vec<Result<GenerationResult>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_result(self, result: GenerationResult) -> Self {
        self.responses.lock().unwrap().push(Ok(result));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGenerationClient {
    async fn generate(
        &self,
        prompt: &str,
        _images: &[ReferenceImage],
    ) -> Result<GenerationResult> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response: a 1x1 transparent PNG plus an echo of
            // the prompt.
            return Ok(GenerationResult {
                image: Some(concat!(
                    "data:image/png;base64,",
                    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR4",
                    "nGNgYAAAAAMAASsJTYQAAAAASUVORK5CYII="
                )
                .to_string()),
                text: Some(format!("Generated from: {}", prompt)),
            });
        }

        let index = (*count - 1) % responses.len();
        match &responses[index] {
            Ok(result) => Ok(result.clone()),
            Err(err) => Err(Error::AiProvider(err.to_string())),
        }
    }
}
