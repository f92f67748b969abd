use anyhow::Result;
use clap::Parser;
use refmix::app::App;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "refmix")]
#[command(about = "Generate an image from a prompt and reference images")]
struct CliArgs {
    /// Text prompt describing the desired image.
    #[arg(value_name = "PROMPT", value_parser = parse_prompt_arg)]
    prompt: String,

    /// Reference image file, in the order it should be sent. Repeatable.
    #[arg(short, long = "image", value_name = "FILE", required = true)]
    images: Vec<PathBuf>,

    /// Directory the generated image is written into.
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    output_dir: PathBuf,
}

fn parse_prompt_arg(input: &str) -> std::result::Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Prompt must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "refmix=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    match App::new(args.output_dir) {
        Ok(app) => match app.run(&args.prompt, &args.images).await {
            Ok(summary) => {
                if let Some(path) = &summary.image_path {
                    println!("{}", path.display());
                }
                if let Some(text) = &summary.text {
                    println!("{}", text);
                }
                info!("Generation completed successfully");
                Ok(())
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
