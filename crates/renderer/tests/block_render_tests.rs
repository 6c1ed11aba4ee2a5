//! End-to-end tests for color block rendering.
//!
//! Colors go through `normalize` (where a config is involved), the
//! renderer, and are then decoded back into pixels for checking.

use renderer::blocks::{compute_layout, resolve_entries};
use renderer::{BlockImageRenderer, BLOCK_IMAGE_HEIGHT, BLOCK_IMAGE_WIDTH};
use scene_common::{normalize, ColorEntry, SceneConfig, SceneError};
use serde_json::json;
use test_utils::fixtures::{colors, configs};
use test_utils::{assert_approx_eq, assert_run, decode_png, entries_json, painted_width, row_runs, rows_identical};

// ============================================================================
// Helper functions
// ============================================================================

fn entries(value: serde_json::Value) -> Vec<ColorEntry> {
    serde_json::from_value(value).unwrap()
}

fn render_config(json: &str) -> image::RgbImage {
    let config = SceneConfig::from_json(json).unwrap();
    let renderer = BlockImageRenderer::new();
    let image = renderer.render(&normalize(&config)).unwrap();
    decode_png(&image.bytes)
}

// ============================================================================
// Scenario tests
// ============================================================================

#[test]
fn test_red_blue_three_to_one() {
    let img = render_config(configs::LIST_RED_BLUE);
    assert_eq!((img.width(), img.height()), (500, 100));
    assert!(rows_identical(&img));

    let runs = row_runs(&img, 0);
    assert_eq!(runs.len(), 2);
    assert_run!(runs[0], 0, 375, colors::RED);
    assert_run!(runs[1], 375, 500, colors::BLUE);
}

#[test]
fn test_empty_list_is_background() {
    let img = render_config(configs::EMPTY_LIST);
    let runs = row_runs(&img, 0);
    assert_eq!(runs.len(), 1);
    assert_run!(runs[0], 0, 500, colors::BACKGROUND);
}

#[test]
fn test_no_color_config_is_background() {
    let img = render_config(configs::NO_COLORS);
    assert_eq!(painted_width(&img, 0, colors::BACKGROUND), 0);
}

#[test]
fn test_all_zero_weights_is_background() {
    let img = render_config(configs::ALL_ZERO_WEIGHTS);
    assert_eq!(painted_width(&img, 0, colors::BACKGROUND), 0);
    assert_eq!(painted_width(&img, 99, colors::BACKGROUND), 0);
}

#[test]
fn test_map_shape_renders_in_map_order() {
    let img = render_config(configs::MAP_RED_GREEN);
    let runs = row_runs(&img, 50);
    assert_eq!(runs.len(), 2);
    assert_run!(runs[0], 0, 250, colors::RED);
    assert_run!(runs[1], 250, 500, colors::GREEN);
}

#[test]
fn test_tiny_weight_entry_is_dropped() {
    let colors_list = entries(json!([
        {"color": [255, 0, 0], "weight": 10},
        {"color": [0, 255, 0], "weight": 0.001},
        {"color": [0, 0, 255], "weight": 10}
    ]));

    let renderer = BlockImageRenderer::new();
    let img = decode_png(&renderer.render(&colors_list).unwrap().bytes);
    let runs = row_runs(&img, 0);

    // Green never appears, blue starts where red ends, flooring leaves 2 px
    assert!(runs.iter().all(|r| r.rgb != colors::GREEN));
    assert_eq!(runs.len(), 3);
    assert_run!(runs[0], 0, 249, colors::RED);
    assert_run!(runs[1], 249, 498, colors::BLUE);
    assert_run!(runs[2], 498, 500, colors::BACKGROUND);
}

// ============================================================================
// Property tests
// ============================================================================

#[test]
fn test_covered_width_within_slack() {
    for seed in 0..50u64 {
        let n = 1 + (seed as usize % 12);
        let weights = test_utils::seeded_weights(seed, n, 5.0);
        if weights.iter().sum::<f64>() == 0.0 {
            continue;
        }

        let resolved = resolve_entries(&entries(entries_json(&weights))).unwrap();
        let layout = compute_layout(&resolved, BLOCK_IMAGE_WIDTH);
        let covered = layout.covered_width();
        assert!(covered <= BLOCK_IMAGE_WIDTH, "seed {}: covered {}", seed, covered);
        assert!(
            BLOCK_IMAGE_WIDTH - covered <= n as u32,
            "seed {}: slack {} exceeds {} entries",
            seed,
            BLOCK_IMAGE_WIDTH - covered,
            n
        );
    }
}

#[test]
fn test_block_widths_track_weight_share() {
    for seed in 0..20u64 {
        let weights = test_utils::seeded_weights(seed, 6, 4.0);
        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            continue;
        }

        let resolved = resolve_entries(&entries(entries_json(&weights))).unwrap();
        let layout = compute_layout(&resolved, BLOCK_IMAGE_WIDTH);
        for block in &layout.blocks {
            let share = weights[block.entry_index] / total * BLOCK_IMAGE_WIDTH as f64;
            assert_approx_eq!(block.width, share, 1.0);
        }
    }
}

#[test]
fn test_overflowing_weight_sum_still_covers_canvas() {
    let colors_list = entries(json!([
        {"color": [255, 0, 0], "weight": 1e308},
        {"color": [0, 0, 255], "weight": 1e308}
    ]));

    let resolved = resolve_entries(&colors_list).unwrap();
    let layout = compute_layout(&resolved, BLOCK_IMAGE_WIDTH);
    assert_eq!(layout.skipped, 0);
    assert!(layout.covered_width() >= BLOCK_IMAGE_WIDTH - 2);

    let img = decode_png(&BlockImageRenderer::new().render(&colors_list).unwrap().bytes);
    let runs = row_runs(&img, 0);
    assert_eq!(runs.len(), 2);
    assert_run!(runs[0], 0, 250, colors::RED);
    assert_run!(runs[1], 250, 500, colors::BLUE);
}

#[test]
fn test_blocks_are_contiguous_from_zero() {
    for seed in 0..20u64 {
        let weights = test_utils::seeded_weights(seed, 8, 3.0);
        let resolved = resolve_entries(&entries(entries_json(&weights))).unwrap();
        let layout = compute_layout(&resolved, BLOCK_IMAGE_WIDTH);

        let mut cursor = 0;
        for block in &layout.blocks {
            assert_eq!(block.x, cursor);
            assert!(block.width > 0);
            cursor = block.end();
        }
    }
}

#[test]
fn test_single_entry_spans_full_width() {
    for weight in [0.01, 1.0, 7.5, 1e6] {
        let colors_list = entries(json!([{"color": [10, 200, 30], "weight": weight}]));
        let img = decode_png(&BlockImageRenderer::new().render(&colors_list).unwrap().bytes);
        let painted = painted_width(&img, 0, colors::BACKGROUND);
        assert!(painted >= BLOCK_IMAGE_WIDTH - 1, "weight {}: painted {}", weight, painted);
    }
}

#[test]
fn test_render_is_idempotent() {
    let colors_list = entries(entries_json(&test_utils::linear_weights(6)));
    let renderer = BlockImageRenderer::new();

    let first = renderer.render(&colors_list).unwrap();
    let second = renderer.render(&colors_list).unwrap();

    assert_eq!(first.bytes, second.bytes);
    assert!(second.last_updated >= first.last_updated);
    assert_eq!(renderer.last_updated(), second.last_updated);
}

#[test]
fn test_full_height_blocks() {
    let colors_list = entries(entries_json(&test_utils::equal_weights(4)));
    let img = decode_png(&BlockImageRenderer::new().render(&colors_list).unwrap().bytes);
    assert_eq!(img.height(), BLOCK_IMAGE_HEIGHT);
    assert!(rows_identical(&img));
}

// ============================================================================
// Error handling tests
// ============================================================================

#[test]
fn test_missing_weight_fails_with_index() {
    let config = SceneConfig::from_json(configs::MISSING_WEIGHT).unwrap();
    let colors_list = normalize(&config);
    assert_eq!(colors_list.len(), 2);

    match BlockImageRenderer::new().render(&colors_list) {
        Err(SceneError::MalformedEntry { index, reason }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("weight"));
        }
        other => panic!("Expected MalformedEntry, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_failed_render_keeps_last_good_image() {
    let renderer = BlockImageRenderer::new();
    let good = renderer
        .render(&entries(json!([{"color": [1, 2, 3], "weight": 1}])))
        .unwrap();

    let bad = entries(json!([{"color": [1, 2], "weight": 1}]));
    assert!(renderer.render(&bad).is_err());

    let cached = renderer.image().unwrap();
    assert_eq!(cached.bytes, good.bytes);
    assert_eq!(cached.last_updated, good.last_updated);
}
