//! Rendered color block image and its single-slot cache.
//!
//! [`BlockImageRenderer`] is the only writer. Each render lays out, draws and
//! encodes a complete image before swapping it into the slot, so readers see
//! either the previous image or the new one, never a partial one. A failed
//! render leaves the slot untouched.

use std::sync::{Arc, RwLock};

use scene_common::time::{self, Timestamp};
use scene_common::{ColorEntry, SceneError, SceneResult};
use tracing::{debug, warn};

use crate::blocks::{
    compute_layout, draw_blocks, resolve_entries, BACKGROUND, BLOCK_IMAGE_HEIGHT,
    BLOCK_IMAGE_WIDTH,
};
use crate::png::{create_png_auto, PNG_CONTENT_TYPE};

/// An encoded block image with its generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub last_updated: Timestamp,
}

/// Renders color lists to PNG and caches the latest result.
pub struct BlockImageRenderer {
    slot: RwLock<Option<Arc<RenderedImage>>>,
    created_at: Timestamp,
}

impl Default for BlockImageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockImageRenderer {
    /// Create a renderer with an empty cache.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            created_at: time::now(),
        }
    }

    /// Render `colors` and replace the cached image.
    pub fn render(&self, colors: &[ColorEntry]) -> SceneResult<Arc<RenderedImage>> {
        match self.build(colors) {
            Ok((bytes, blocks, covered)) => {
                let previous = self.last_updated();
                let image = Arc::new(RenderedImage {
                    bytes,
                    content_type: PNG_CONTENT_TYPE,
                    last_updated: time::refreshed_after(previous),
                });

                *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::clone(&image));

                debug!(
                    entries = colors.len(),
                    blocks = blocks,
                    covered_width = covered,
                    bytes = image.bytes.len(),
                    "Rendered color block image"
                );
                Ok(image)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    has_previous = self.image().is_some(),
                    "Color block render failed, keeping previous image"
                );
                Err(e)
            }
        }
    }

    /// Latest complete image, if any render has succeeded.
    pub fn image(&self) -> Option<Arc<RenderedImage>> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Time of the latest successful render, or construction time before
    /// the first one.
    pub fn last_updated(&self) -> Timestamp {
        self.image()
            .map(|img| img.last_updated)
            .unwrap_or(self.created_at)
    }

    fn build(&self, colors: &[ColorEntry]) -> SceneResult<(Vec<u8>, usize, u32)> {
        let resolved = resolve_entries(colors)?;
        let layout = compute_layout(&resolved, BLOCK_IMAGE_WIDTH);
        let pixels = draw_blocks(&layout, BLOCK_IMAGE_HEIGHT, BACKGROUND);
        let bytes = create_png_auto(
            &pixels,
            BLOCK_IMAGE_WIDTH as usize,
            BLOCK_IMAGE_HEIGHT as usize,
        )
        .map_err(SceneError::Encode)?;

        Ok((bytes, layout.blocks.len(), layout.covered_width()))
    }
}
