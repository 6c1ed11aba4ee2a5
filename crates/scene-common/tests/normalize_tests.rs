//! Tests for scene configuration loading and color normalization.

use scene_common::config::{KEY_ADD_COLOR, KEY_DELETE_COLOR};
use scene_common::{normalize, ColorSelectorMode, SceneConfig, SceneError, COLOR_TYPE_RGB};
use serde_json::json;
use std::io::Write;
use test_utils::fixtures::configs;

// ============================================================================
// List shape
// ============================================================================

#[test]
fn test_list_shape_used_as_is() {
    let config = SceneConfig::from_json(configs::LIST_RED_BLUE).unwrap();
    let colors = normalize(&config);

    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0].color, Some(json!([255, 0, 0])));
    assert_eq!(colors[0].weight, Some(json!(3)));
    assert_eq!(colors[1].color, Some(json!([0, 0, 255])));
    assert_eq!(colors.as_slice(), config.colors.as_deref().unwrap());
}

#[test]
fn test_list_shape_keeps_own_type_tags() {
    let config = SceneConfig::from_json(
        r#"{"name": "t", "colors": [{"color": [1, 2, 3], "weight": 1, "color_type": "hs_color"}]}"#,
    )
    .unwrap();
    assert_eq!(normalize(&config)[0].color_type.as_deref(), Some("hs_color"));
}

#[test]
fn test_absent_colors_normalize_to_empty() {
    let config = SceneConfig::from_json(configs::NO_COLORS).unwrap();
    assert!(normalize(&config).is_empty());

    let config = SceneConfig::from_json(configs::EMPTY_LIST).unwrap();
    assert!(normalize(&config).is_empty());
}

// ============================================================================
// Mapping shape
// ============================================================================

#[test]
fn test_map_shape_order_and_tag() {
    let config = SceneConfig::from_json(configs::MAP_RED_GREEN).unwrap();
    assert_eq!(config.color_selector_mode, Some(ColorSelectorMode::RgbUi));

    let colors = normalize(&config);
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0].color, Some(json!([255, 0, 0])));
    assert_eq!(colors[1].color, Some(json!([0, 255, 0])));
    assert!(colors
        .iter()
        .all(|c| c.color_type.as_deref() == Some(COLOR_TYPE_RGB)));
}

#[test]
fn test_map_shape_follows_document_order_not_key_order() {
    let config = SceneConfig::from_yaml(configs::MAP_YAML).unwrap();
    let colors = normalize(&config);
    assert_eq!(colors[0].color, Some(json!([0, 255, 0])));
    assert_eq!(colors[1].color, Some(json!([255, 0, 0])));
}

#[test]
fn test_map_shape_strips_ui_flags_and_deleted_entries() {
    let config = SceneConfig::from_json(configs::MAP_WITH_UI_FLAGS).unwrap();
    let colors = normalize(&config);

    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0].color, Some(json!([255, 0, 0])));
    assert_eq!(colors[1].color, Some(json!([0, 0, 255])));
    for entry in &colors {
        assert!(!entry.extra.contains_key(KEY_ADD_COLOR));
        assert!(!entry.extra.contains_key(KEY_DELETE_COLOR));
    }
    // Other user keys survive
    assert_eq!(colors[0].extra.get("brightness"), Some(&json!(80)));
}

#[test]
fn test_normalize_does_not_touch_stored_config() {
    let config = SceneConfig::from_json(configs::MAP_WITH_UI_FLAGS).unwrap();
    let before = serde_json::to_value(&config).unwrap();

    let mut colors = normalize(&config);
    colors[0].weight = Some(json!(99));
    colors[0].extra.insert("brightness".to_string(), json!(1));

    let stored = config.color_rgb_dict.as_ref().unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.values().all(|e| e.color_type.is_none()));
    assert_eq!(stored.get("5f1c").unwrap().weight, Some(json!(2)));
    assert_eq!(serde_json::to_value(&config).unwrap(), before);
}

#[test]
fn test_normalize_is_fresh_each_call() {
    let config = SceneConfig::from_json(configs::MAP_RED_GREEN).unwrap();
    let mut first = normalize(&config);
    first.clear();
    assert_eq!(normalize(&config).len(), 2);
}

// ============================================================================
// Malformed entries pass through
// ============================================================================

#[test]
fn test_malformed_entries_are_not_validated_here() {
    let config = SceneConfig::from_json(configs::MISSING_WEIGHT).unwrap();
    let colors = normalize(&config);
    assert_eq!(colors.len(), 2);
    assert!(colors[1].weight.is_none());
    assert!(colors[1].resolve(1).is_err());
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_yaml_list_matches_json_list() {
    let yaml = SceneConfig::from_yaml(configs::LIST_RED_BLUE_YAML).unwrap();
    let json = SceneConfig::from_json(configs::LIST_RED_BLUE).unwrap();

    let from_yaml: Vec<_> = normalize(&yaml).iter().map(|e| e.resolve(0).unwrap()).collect();
    let from_json: Vec<_> = normalize(&json).iter().map(|e| e.resolve(0).unwrap()).collect();
    assert_eq!(from_yaml, from_json);
    assert!(yaml.extra.contains_key("transition"));
}

#[test]
fn test_from_file_picks_parser_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let yaml_path = dir.path().join("scene.yaml");
    std::fs::File::create(&yaml_path)
        .unwrap()
        .write_all(configs::MAP_YAML.as_bytes())
        .unwrap();
    let json_path = dir.path().join("scene.json");
    std::fs::write(&json_path, configs::LIST_RED_BLUE).unwrap();

    assert_eq!(SceneConfig::from_file(&yaml_path).unwrap().name, "Garden");
    assert_eq!(SceneConfig::from_file(&json_path).unwrap().name, "Sunset");
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        SceneConfig::from_json("{not json"),
        Err(SceneError::InvalidConfig(_))
    ));
    assert!(matches!(
        SceneConfig::from_json(r#"{"name": "x", "color_selector_mode": "telepathy"}"#),
        Err(SceneError::InvalidConfig(_))
    ));
    assert!(matches!(
        SceneConfig::from_file("/definitely/not/here.json"),
        Err(SceneError::Io(_))
    ));
}
