//! Color block image rendering.
//!
//! Turns a weighted color list into a 500×100 PNG of proportional
//! horizontal blocks:
//! - `blocks`: layout computation and drawing
//! - `png`: indexed/truecolor PNG encoding
//! - `cache`: the renderer and its single-slot image cache

pub mod blocks;
pub mod cache;
pub mod png;

pub use blocks::{Block, BlockLayout, BLOCK_IMAGE_HEIGHT, BLOCK_IMAGE_WIDTH};
pub use cache::{BlockImageRenderer, RenderedImage};
