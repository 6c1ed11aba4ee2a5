//! Scene configuration and color normalization.
//!
//! A scene's colors can be authored two ways:
//! - a `colors` list of `{color, weight, color_type}` entries (YAML mode)
//! - a `color_rgb_dict` mapping of opaque ids to entries (RGB selector UI)
//!
//! `normalize` resolves either form into one ordered [`CanonicalColorList`].

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::color::{ColorEntry, COLOR_TYPE_RGB};
use crate::error::SceneResult;

/// UI-only key asking the selector flow for another color.
pub const KEY_ADD_COLOR: &str = "add_color";

/// UI-only key marking an entry for removal.
pub const KEY_DELETE_COLOR: &str = "delete_color";

/// Normalized, ordered color entries ready for rendering.
pub type CanonicalColorList = Vec<ColorEntry>;

/// How the user chose to author colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSelectorMode {
    /// Colors picked one by one in the RGB selector, stored in `color_rgb_dict`
    RgbUi,
    /// Colors written as a list under `colors`
    Yaml,
}

/// Raw scene configuration as stored by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Display name of the scene
    pub name: String,

    /// List-shaped colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ColorEntry>>,

    /// Mapping-shaped colors, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_rgb_dict: Option<ColorMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_selector_mode: Option<ColorSelectorMode>,

    /// Everything else the host stores (lights, transition, priority, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SceneConfig {
    /// Load configuration from a file; `.yaml`/`.yml` is read as YAML,
    /// anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> SceneResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolve which of the two color shapes this configuration uses.
    pub fn color_source(&self) -> ColorSource<'_> {
        ColorSource::from_config(self)
    }
}

/// Insertion-ordered mapping of opaque ids to color entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMap(Vec<(String, ColorEntry)>);

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `key`; new keys go to the end.
    pub fn insert(&mut self, key: impl Into<String>, entry: ColorEntry) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.0.push((key, entry)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ColorEntry> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &ColorEntry> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<K: Into<String>> FromIterator<(K, ColorEntry)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (K, ColorEntry)>>(iter: I) -> Self {
        let mut map = ColorMap::new();
        for (key, entry) in iter {
            map.insert(key, entry);
        }
        map
    }
}

impl Serialize for ColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, entry) in &self.0 {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorMapVisitor;

        impl<'de> Visitor<'de> for ColorMapVisitor {
            type Value = ColorMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of ids to color entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ColorMap, A::Error> {
                let mut map = ColorMap(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((key, entry)) = access.next_entry::<String, ColorEntry>()? {
                    map.insert(key, entry);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ColorMapVisitor)
    }
}

/// The color shape selected from a [`SceneConfig`].
#[derive(Debug, Clone, Copy)]
pub enum ColorSource<'a> {
    /// Entries used as-is
    List(&'a [ColorEntry]),
    /// Entries taken in map order and tagged as RGB-origin
    Map(&'a ColorMap),
    /// No colors configured
    Absent,
}

impl<'a> ColorSource<'a> {
    /// The RGB selector mode always reads the mapping. Without an explicit
    /// mode the list wins, and the mapping is used only when no list exists.
    pub fn from_config(config: &'a SceneConfig) -> Self {
        static EMPTY: ColorMap = ColorMap(Vec::new());

        match config.color_selector_mode {
            Some(ColorSelectorMode::RgbUi) => {
                ColorSource::Map(config.color_rgb_dict.as_ref().unwrap_or(&EMPTY))
            }
            Some(ColorSelectorMode::Yaml) => match &config.colors {
                Some(colors) => ColorSource::List(colors),
                None => ColorSource::Absent,
            },
            None => match (&config.colors, &config.color_rgb_dict) {
                (Some(colors), _) => ColorSource::List(colors),
                (None, Some(map)) => ColorSource::Map(map),
                (None, None) => ColorSource::Absent,
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ColorSource::List(_) => "list",
            ColorSource::Map(_) => "map",
            ColorSource::Absent => "absent",
        }
    }
}

/// Produce the canonical color list for a scene configuration.
///
/// The stored configuration is never touched: every entry is cloned before
/// it is tagged or cleaned.
pub fn normalize(config: &SceneConfig) -> CanonicalColorList {
    let source = config.color_source();
    let colors = match source {
        ColorSource::List(entries) => entries.to_vec(),
        ColorSource::Map(map) => map
            .values()
            .filter(|entry| !is_marked_deleted(entry))
            .cloned()
            .map(|mut entry| {
                entry.extra.remove(KEY_ADD_COLOR);
                entry.extra.remove(KEY_DELETE_COLOR);
                entry.color_type = Some(COLOR_TYPE_RGB.to_string());
                entry
            })
            .collect(),
        ColorSource::Absent => Vec::new(),
    };

    debug!(
        scene = %config.name,
        source = source.kind(),
        entries = colors.len(),
        "Normalized scene colors"
    );
    colors
}

fn is_marked_deleted(entry: &ColorEntry) -> bool {
    entry
        .extra
        .get(KEY_DELETE_COLOR)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
