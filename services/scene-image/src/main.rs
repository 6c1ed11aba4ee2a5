//! Scene color block image service.
//!
//! Loads a scene configuration, renders its colors to a 500x100 PNG of
//! proportional blocks and writes the image to disk.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scene_common::SceneConfig;
use scene_image::{write_image, ImageSummary, SceneImageEntity};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "scene-image")]
#[command(about = "Render a scene's colors to a color block PNG")]
struct Args {
    /// Scene configuration file (JSON, or YAML by extension)
    #[arg(short, long, env = "SCENE_CONFIG")]
    config: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "color_block.png")]
    output: PathBuf,

    /// Config entry id used to build the entity's unique id
    #[arg(long, default_value = "scene")]
    entry_id: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = SceneConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load scene config {}", args.config.display()))?;
    info!(scene = %config.name, path = %args.config.display(), "Loaded scene configuration");

    let entity = SceneImageEntity::new(config, args.entry_id);
    let image = entity
        .on_added()
        .with_context(|| format!("Failed to render {}", entity.name()))?;

    write_image(&image, &args.output)?;

    let summary = ImageSummary::new(&entity, &image);
    info!(
        name = %summary.name,
        content_type = %summary.content_type,
        size_bytes = summary.size_bytes,
        last_updated = %summary.last_updated,
        output = %args.output.display(),
        "Wrote color block image"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
