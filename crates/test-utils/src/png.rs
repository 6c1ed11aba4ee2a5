//! Helpers for inspecting rendered PNG bytes.

use image::RgbImage;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// A maximal horizontal run of one color: pixels `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: u32,
    pub end: u32,
    pub rgb: [u8; 3],
}

impl Run {
    pub fn width(&self) -> u32 {
        self.end - self.start
    }
}

/// Decode PNG bytes into an 8-bit RGB image, panicking on failure.
pub fn decode_png(bytes: &[u8]) -> RgbImage {
    assert_eq!(&bytes[0..8], &PNG_SIGNATURE, "missing PNG signature");
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .expect("rendered bytes should decode as PNG")
        .to_rgb8()
}

/// Collapse row `y` into runs of identical color, left to right.
pub fn row_runs(img: &RgbImage, y: u32) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for x in 0..img.width() {
        let rgb = img.get_pixel(x, y).0;
        match runs.last_mut() {
            Some(last) if last.rgb == rgb => last.end = x + 1,
            _ => runs.push(Run {
                start: x,
                end: x + 1,
                rgb,
            }),
        }
    }
    runs
}

/// True when every row is identical to row 0 (blocks span full height).
pub fn rows_identical(img: &RgbImage) -> bool {
    let first = row_runs(img, 0);
    (1..img.height()).all(|y| row_runs(img, y) == first)
}

/// Number of pixels in row `y` that differ from `background`.
pub fn painted_width(img: &RgbImage, y: u32, background: [u8; 3]) -> u32 {
    (0..img.width())
        .filter(|&x| img.get_pixel(x, y).0 != background)
        .count() as u32
}
