//! Common types shared by the scene color block renderer and its service.

pub mod activity;
pub mod color;
pub mod config;
pub mod error;
pub mod time;

pub use activity::{ActivitySnapshot, AnimationRegistry};
pub use color::{ColorEntry, ResolvedColor, Rgb, COLOR_TYPE_RGB};
pub use config::{normalize, CanonicalColorList, ColorMap, ColorSelectorMode, ColorSource, SceneConfig};
pub use error::{SceneError, SceneResult};
pub use time::Timestamp;
