//! PNG encoding for RGB image data.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: Used when image has ≤256 unique colors.
//!   Block images always land here: one palette slot per drawn block plus
//!   the background.
//! - **RGB PNG (color type 2)**: Fallback for images with >256 colors.
//!
//! Use `create_png_auto` for automatic mode selection, or `create_png` for
//! explicit truecolor encoding. Output is a pure function of the pixels:
//! palettes are built in first-occurrence order so identical input always
//! yields identical bytes.

use std::collections::HashMap;
use std::io::Write;

/// MIME type of everything this module produces.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Bytes per RGB pixel
const RGB_CHANNELS: usize = 3;

/// Create a PNG image with automatic format selection.
///
/// Analyzes the pixel data and chooses the most efficient encoding:
/// - If ≤256 unique colors: uses indexed PNG (smaller, faster)
/// - Otherwise: uses RGB PNG (full color)
///
/// # Arguments
/// - `pixels`: RGB pixel data (3 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png_auto(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, String> {
    check_dimensions(pixels, width, height)?;

    match extract_palette(pixels) {
        Some((palette, indices)) => create_png_indexed(width, height, &palette, &indices),
        None => create_png(pixels, width, height),
    }
}

fn check_dimensions(pixels: &[u8], width: usize, height: usize) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("Invalid image dimensions {}x{}", width, height));
    }
    let expected = width * height * RGB_CHANNELS;
    if pixels.len() != expected {
        return Err(format!(
            "Pixel buffer holds {} bytes, expected {} for {}x{} RGB",
            pixels.len(),
            expected,
            width,
            height
        ));
    }
    Ok(())
}

/// Pack RGB bytes into a u32 for faster hashing and comparison
#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// Build a palette in first-occurrence order plus one index per pixel.
///
/// Returns `None` as soon as a 257th color shows up.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<(u8, u8, u8)>, Vec<u8>)> {
    // Use u32 keys for faster hashing
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<(u8, u8, u8)> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / RGB_CHANNELS);

    for chunk in pixels.chunks_exact(RGB_CHANNELS) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2]);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push((chunk[0], chunk[1], chunk[2]));
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Create an indexed PNG (color type 3) from palette and indices.
///
/// This is more efficient than RGB when the image has few unique colors:
/// - 1 byte per pixel instead of 3
/// - Less data to compress
/// - Smaller output file
pub fn create_png_indexed(
    width: usize,
    height: usize,
    palette: &[(u8, u8, u8)],
    indices: &[u8],
) -> Result<Vec<u8>, String> {
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(format!("Palette must hold 1..=256 colors, got {}", palette.len()));
    }
    if indices.len() != width * height {
        return Err(format!(
            "Index buffer holds {} entries, expected {}",
            indices.len(),
            width * height
        ));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let ihdr_data = ihdr(width, height, 3)?;
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // PLTE chunk (palette)
    let mut plte_data = Vec::with_capacity(palette.len() * RGB_CHANNELS);
    for (r, g, b) in palette {
        plte_data.extend_from_slice(&[*r, *g, *b]);
    }
    write_chunk(&mut png, b"PLTE", &plte_data);

    // IDAT chunk (image data)
    let idat_data = deflate_scanlines(indices, width, height)
        .map_err(|e| format!("IDAT compression failed: {}", e))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Create a PNG image from RGB pixel data (color type 2).
///
/// This is the fallback for images with >256 unique colors.
///
/// # Arguments
/// - `pixels`: RGB pixel data (3 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, String> {
    check_dimensions(pixels, width, height)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let ihdr_data = ihdr(width, height, 2)?;
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_scanlines(pixels, width * RGB_CHANNELS, height)
        .map_err(|e| format!("IDAT compression failed: {}", e))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Build IHDR data for an 8-bit, non-interlaced image.
fn ihdr(width: usize, height: usize, color_type: u8) -> Result<Vec<u8>, String> {
    let width = u32::try_from(width).map_err(|_| format!("Width {} too large", width))?;
    let height = u32::try_from(height).map_err(|_| format!("Height {} too large", height))?;

    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&width.to_be_bytes());
    ihdr_data.extend_from_slice(&height.to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(color_type);
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    Ok(ihdr_data)
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    // Write length
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());

    // Write chunk type
    png.extend_from_slice(chunk_type);

    // Write data
    png.extend_from_slice(data);

    // Write CRC over type and data
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate scanlines for the IDAT chunk.
///
/// `row_bytes` is the byte length of one unfiltered row.
fn deflate_scanlines(
    data: &[u8],
    row_bytes: usize,
    height: usize,
) -> Result<Vec<u8>, std::io::Error> {
    // Add filter byte (0 = no filter) to each scanline
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));
    for row in data.chunks_exact(row_bytes).take(height) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    // Compress with flate2
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}
