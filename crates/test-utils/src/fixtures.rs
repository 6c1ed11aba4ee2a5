//! Common test fixtures for scene color block tests.
//!
//! Configurations are plain JSON/YAML text so each crate parses them with
//! its own loader.

/// Colors used across the fixtures.
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const BACKGROUND: [u8; 3] = [0, 0, 0];
}

/// Scene configurations in both accepted color shapes.
pub mod configs {
    /// List shape: red weighted 3, blue weighted 1.
    pub const LIST_RED_BLUE: &str = r#"{
        "name": "Sunset",
        "colors": [
            {"color": [255, 0, 0], "weight": 3, "color_type": "rgb_color"},
            {"color": [0, 0, 255], "weight": 1, "color_type": "rgb_color"}
        ]
    }"#;

    /// Mapping shape: red and green, equal weights.
    pub const MAP_RED_GREEN: &str = r#"{
        "name": "Garden",
        "color_selector_mode": "rgb_ui",
        "color_rgb_dict": {
            "a": {"color": [255, 0, 0], "weight": 1},
            "b": {"color": [0, 255, 0], "weight": 1}
        }
    }"#;

    /// Mapping shape still carrying selector UI flags.
    pub const MAP_WITH_UI_FLAGS: &str = r#"{
        "name": "Edited",
        "color_selector_mode": "rgb_ui",
        "color_rgb_dict": {
            "5f1c": {"color": [255, 0, 0], "weight": 2, "brightness": 80, "add_color": true, "delete_color": false},
            "9a2e": {"color": [0, 255, 0], "weight": 5, "delete_color": true},
            "c413": {"color": [0, 0, 255], "weight": 1, "add_color": false}
        }
    }"#;

    /// Empty list.
    pub const EMPTY_LIST: &str = r#"{"name": "Blank", "colors": []}"#;

    /// No color data at all.
    pub const NO_COLORS: &str = r#"{"name": "Bare", "lights": ["light.kitchen"]}"#;

    /// Every weight zero.
    pub const ALL_ZERO_WEIGHTS: &str = r#"{
        "name": "Zero",
        "colors": [
            {"color": [255, 0, 0], "weight": 0},
            {"color": [0, 255, 0], "weight": 0}
        ]
    }"#;

    /// Second entry lacks a weight.
    pub const MISSING_WEIGHT: &str = r#"{
        "name": "Broken",
        "colors": [
            {"color": [255, 0, 0], "weight": 1},
            {"color": [0, 255, 0]}
        ]
    }"#;

    /// The list-shaped fixture written as YAML.
    pub const LIST_RED_BLUE_YAML: &str = "\
name: Sunset
colors:
  - color: [255, 0, 0]
    weight: 3
  - color: [0, 0, 255]
    weight: 1
transition: 2
";

    /// The mapping-shaped fixture written as YAML, keys out of lexical order.
    pub const MAP_YAML: &str = "\
name: Garden
color_selector_mode: rgb_ui
color_rgb_dict:
  zz:
    color: [0, 255, 0]
    weight: 1
  aa:
    color: [255, 0, 0]
    weight: 1
";
}
