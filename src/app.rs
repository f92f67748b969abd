//! Application orchestration: load references, run one generation call,
//! persist the result.

use crate::ai::{GeminiGenerationClient, GenerationService};
use crate::image::{data_url, load_reference};
use crate::models::Config;
use crate::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Coordinates reference loading, a single generation call, and output
/// writing. Holds no state across runs; each `run` is independent.
pub struct App {
    generator: Box<dyn GenerationService>,
    output_dir: PathBuf,
}

/// Outcome of one run: where the image landed (if any) and the model's
/// accompanying text (if any).
#[derive(Debug)]
pub struct RunSummary {
    pub image_path: Option<PathBuf>,
    pub text: Option<String>,
}

impl App {
    /// Build an app backed by the live Gemini client.
    ///
    /// Fails immediately when the `GEMINI_API_KEY` credential is absent; a
    /// process without it refuses to construct the generation client at all.
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        let config = Config::from_env()?;
        let generator =
            GeminiGenerationClient::new(config.gemini_api_key, config.gemini_model);

        Ok(Self::with_services(Box::new(generator), output_dir))
    }

    /// Build an app from an injected generation service, for tests and
    /// local harnesses.
    pub fn with_services(generator: Box<dyn GenerationService>, output_dir: PathBuf) -> Self {
        Self {
            generator,
            output_dir,
        }
    }

    /// Load the reference images in order, perform one generation call, and
    /// write any returned image into the output directory.
    ///
    /// On failure nothing partial is retained; the error message is the one
    /// the generation layer produced.
    pub async fn run(&self, prompt: &str, image_paths: &[PathBuf]) -> Result<RunSummary> {
        let references = image_paths
            .iter()
            .map(|path| load_reference(path))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Generating with {} reference image(s)",
            references.len()
        );

        let result = self.generator.generate(prompt, &references).await?;

        let image_path = match &result.image {
            Some(url) => Some(self.write_image(url)?),
            None => None,
        };

        if let Some(text) = &result.text {
            info!("Model text: {}", text);
        }

        Ok(RunSummary {
            image_path,
            text: result.text,
        })
    }

    fn write_image(&self, url: &str) -> Result<PathBuf> {
        let (mime_type, bytes) = data_url::decode(url)?;

        fs::create_dir_all(&self.output_dir)?;
        let filename = format!(
            "refmix_{}.{}",
            Local::now().format("%Y%m%d_%H%M%S"),
            data_url::extension_for_mime(&mime_type)
        );
        let path = self.output_dir.join(filename);
        fs::write(&path, bytes)?;

        info!("Wrote generated image to {}", path.display());
        Ok(path)
    }

    /// Directory generated images are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
