//! Weighted color entries as authored in scene configuration.
//!
//! Entries are kept loosely typed (`color` and `weight` as raw JSON values)
//! so that a badly written entry survives normalization untouched and is only
//! rejected when the renderer resolves it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{SceneError, SceneResult};

/// Type tag stamped on entries that came from the RGB selector mapping.
pub const COLOR_TYPE_RGB: &str = "rgb_color";

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse a JSON `[r, g, b]` array of integers in 0..=255.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        let arr = value
            .as_array()
            .ok_or_else(|| format!("color must be an [r, g, b] array, got {}", value))?;
        if arr.len() != 3 {
            return Err(format!(
                "color must have exactly 3 components, got {}",
                arr.len()
            ));
        }

        let mut channels = [0u8; 3];
        for (slot, component) in channels.iter_mut().zip(arr) {
            *slot = component
                .as_u64()
                .and_then(|c| u8::try_from(c).ok())
                .ok_or_else(|| {
                    format!("color component {} is not an integer in 0..=255", component)
                })?;
        }

        let [r, g, b] = channels;
        Ok(Rgb::new(r, g, b))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// One weighted color before rendering.
///
/// Keys other than `color`, `weight` and `color_type` (brightness, nearby
/// color counts, UI flags) are kept in `extra` and carried through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColorEntry {
    /// Build a well-formed entry.
    pub fn new(color: Rgb, weight: f64) -> Self {
        Self {
            color: Some(Value::from(color.to_array().to_vec())),
            weight: Some(Value::from(weight)),
            color_type: None,
            extra: Map::new(),
        }
    }

    pub fn with_color_type(mut self, color_type: impl Into<String>) -> Self {
        self.color_type = Some(color_type.into());
        self
    }

    /// Resolve the raw fields into a typed color and weight.
    ///
    /// `index` is the entry's position in its list and is reported back in
    /// the error.
    pub fn resolve(&self, index: usize) -> SceneResult<ResolvedColor> {
        let color = self
            .color
            .as_ref()
            .ok_or_else(|| SceneError::malformed(index, "missing color"))?;
        let color = Rgb::from_json(color).map_err(|reason| SceneError::malformed(index, reason))?;

        let weight = self
            .weight
            .as_ref()
            .ok_or_else(|| SceneError::malformed(index, "missing weight"))?;
        let weight = weight
            .as_f64()
            .ok_or_else(|| SceneError::malformed(index, format!("weight {} is not numeric", weight)))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(SceneError::malformed(
                index,
                format!("weight {} must be a non-negative number", weight),
            ));
        }

        Ok(ResolvedColor { color, weight })
    }
}

/// A color entry whose fields have been validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor {
    pub color: Rgb,
    pub weight: f64,
}
