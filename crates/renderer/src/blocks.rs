//! Proportional color block layout and drawing.
//!
//! The canvas width is split into contiguous horizontal blocks, one per
//! color entry, left to right in input order. Each block's width is
//! `floor(weight / total_weight * canvas_width)`:
//! - a zero total weight is replaced by 1, so nothing divides by zero
//! - weights whose sum overflows are rescaled by the largest weight first
//! - entries that floor to zero width are skipped and do not move the cursor
//! - width lost to flooring stays background on the right edge

use scene_common::{ColorEntry, ResolvedColor, Rgb, SceneResult};

/// Fixed canvas width in pixels.
pub const BLOCK_IMAGE_WIDTH: u32 = 500;

/// Fixed canvas height in pixels.
pub const BLOCK_IMAGE_HEIGHT: u32 = 100;

/// Canvas fill for any width not covered by a block.
pub const BACKGROUND: Rgb = Rgb::BLACK;

/// One drawn block covering columns `x..x + width` at full height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub x: u32,
    pub width: u32,
    pub color: Rgb,
    /// Position of the source entry in the color list
    pub entry_index: usize,
}

impl Block {
    pub fn end(&self) -> u32 {
        self.x + self.width
    }
}

/// Result of laying out a color list on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub canvas_width: u32,
    pub blocks: Vec<Block>,
    /// Number of entries dropped because they floored to zero width
    pub skipped: usize,
}

impl BlockLayout {
    /// Total width covered by blocks.
    pub fn covered_width(&self) -> u32 {
        self.blocks.iter().map(|b| b.width).sum()
    }

    /// Width left as background on the right edge.
    pub fn slack(&self) -> u32 {
        self.canvas_width - self.covered_width()
    }
}

/// Resolve every entry, failing on the first malformed one.
pub fn resolve_entries(entries: &[ColorEntry]) -> SceneResult<Vec<ResolvedColor>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| entry.resolve(index))
        .collect()
}

/// Compute block positions for `colors` on a canvas `canvas_width` wide.
pub fn compute_layout(colors: &[ResolvedColor], canvas_width: u32) -> BlockLayout {
    let scale = weight_scale(colors);
    let mut total_weight: f64 = colors.iter().map(|c| c.weight / scale).sum();
    if total_weight == 0.0 {
        total_weight = 1.0;
    }

    let mut blocks = Vec::with_capacity(colors.len());
    let mut skipped = 0;
    let mut cursor: u32 = 0;

    for (entry_index, resolved) in colors.iter().enumerate() {
        let share = (resolved.weight / scale / total_weight) * canvas_width as f64;
        // Clamp guards against float error pushing the sum past the edge
        let width = (share.floor() as u32).min(canvas_width - cursor);
        if width == 0 {
            skipped += 1;
            continue;
        }

        blocks.push(Block {
            x: cursor,
            width,
            color: resolved.color,
            entry_index,
        });
        cursor += width;
    }

    BlockLayout {
        canvas_width,
        blocks,
        skipped,
    }
}

/// Divisor applied to every weight before summing.
///
/// 1 unless the raw sum overflows to infinity, in which case the largest
/// weight is used so the scaled sum is at most the entry count.
fn weight_scale(colors: &[ResolvedColor]) -> f64 {
    let total: f64 = colors.iter().map(|c| c.weight).sum();
    if total.is_finite() {
        return 1.0;
    }
    colors.iter().map(|c| c.weight).fold(1.0, f64::max)
}

/// Draw a layout into a fresh RGB buffer of `layout.canvas_width` × `height`.
///
/// Every row is identical, so one row is painted and then repeated.
pub fn draw_blocks(layout: &BlockLayout, height: u32, background: Rgb) -> Vec<u8> {
    let width = layout.canvas_width as usize;

    let mut row = background.to_array().repeat(width);
    for block in &layout.blocks {
        let start = block.x as usize * 3;
        let end = block.end() as usize * 3;
        for pixel in row[start..end].chunks_exact_mut(3) {
            pixel.copy_from_slice(&block.color.to_array());
        }
    }

    row.repeat(height as usize)
}
