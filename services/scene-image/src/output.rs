//! Writing rendered images and describing them.

use std::path::Path;

use anyhow::{Context, Result};
use renderer::RenderedImage;
use scene_common::time;
use serde::Serialize;

use crate::entity::SceneImageEntity;

/// Machine-readable description of a rendered image.
#[derive(Debug, Clone, Serialize)]
pub struct ImageSummary {
    pub name: String,
    pub unique_id: String,
    pub content_type: String,
    pub size_bytes: usize,
    pub last_updated: String,
}

impl ImageSummary {
    pub fn new(entity: &SceneImageEntity, image: &RenderedImage) -> Self {
        Self {
            name: entity.name(),
            unique_id: entity.unique_id(),
            content_type: image.content_type.to_string(),
            size_bytes: image.bytes.len(),
            last_updated: time::format_rfc3339(&image.last_updated),
        }
    }
}

/// Write the encoded image to `path`, creating parent directories.
pub fn write_image(image: &RenderedImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, &image.bytes)
        .with_context(|| format!("Failed to write image to {}", path.display()))?;
    Ok(())
}
