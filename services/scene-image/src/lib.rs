//! Scene image entity and its output helpers.
//!
//! Exposed as a library so the binary and integration tests share one
//! implementation.

pub mod entity;
pub mod output;

pub use entity::SceneImageEntity;
pub use output::{write_image, ImageSummary};
