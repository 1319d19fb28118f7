//! PNG and data-URL encoding for rendered canvases.
//!
//! Two encoding modes:
//! - **Indexed PNG (color type 3)** when the image has ≤256 unique
//!   colors, which is the common case for palette-driven styles.
//! - **RGBA PNG (color type 6)** as the fallback.
//!
//! [`png_auto`] selects the mode automatically.

use std::collections::HashMap;
use std::io::Write;

use art_common::{ArtError, ArtResult};
use base64::Engine as _;

/// Maximum colors for indexed PNG (PNG8).
const MAX_PALETTE_SIZE: usize = 256;

/// Encode RGBA pixels as PNG with automatic format selection.
pub fn png_auto(pixels: &[u8], width: u32, height: u32) -> ArtResult<Vec<u8>> {
    match extract_palette(pixels) {
        Some((palette, indices)) => png_indexed(width, height, &palette, &indices),
        None => png_rgba(pixels, width, height),
    }
}

/// Wrap PNG bytes as a base64 data URL.
pub fn data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

/// Pack RGBA bytes into a u32 for faster hashing and comparison.
#[inline(always)]
fn pack_color(px: &[u8]) -> u32 {
    (px[0] as u32) | ((px[1] as u32) << 8) | ((px[2] as u32) << 16) | ((px[3] as u32) << 24)
}

/// Map pixels to a ≤256-entry palette, or None if they do not fit.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 4]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 4);

    for px in pixels.chunks_exact(4) {
        let packed = pack_color(px);
        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push([px[0], px[1], px[2], px[3]]);
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Encode an indexed PNG (color type 3) from a palette and indices.
fn png_indexed(
    width: u32,
    height: u32,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> ArtResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let mut plte = Vec::with_capacity(palette.len() * 3);
    for [r, g, b, _] in palette {
        plte.extend_from_slice(&[*r, *g, *b]);
    }
    write_chunk(&mut png, b"PLTE", &plte);

    // tRNS only when some palette entry is non-opaque
    if palette.iter().any(|[_, _, _, a]| *a < 255) {
        let trns: Vec<u8> = palette.iter().map(|[_, _, _, a]| *a).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width as usize, height as usize, 1)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode an RGBA PNG (color type 6).
pub fn png_rgba(pixels: &[u8], width: u32, height: u32) -> ArtResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));

    let idat = deflate_scanlines(pixels, width as usize, height as usize, 4)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn ihdr(width: u32, height: u32, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Prefix each scanline with filter byte 0 and zlib-compress for IDAT.
fn deflate_scanlines(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> ArtResult<Vec<u8>> {
    let stride = width * bytes_per_pixel;
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));

    for y in 0..height {
        uncompressed.push(0); // filter type: none
        let row = y * stride;
        uncompressed.extend_from_slice(&data[row..row + stride]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&uncompressed)
        .map_err(|e| ArtError::Encode(format!("IDAT compression failed: {e}")))?;
    encoder
        .finish()
        .map_err(|e| ArtError::Encode(format!("IDAT compression failed: {e}")))
}

/// Write one PNG chunk: length, type, data, CRC.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_palette_small_image() {
        // red, green, blue, red again: 3 unique colors
        let pixels = [
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 0, 0, 255,
        ];
        let (palette, indices) = extract_palette(&pixels).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(indices.len(), 4);
        assert_eq!(indices[0], indices[3]);
    }

    #[test]
    fn test_extract_palette_overflow() {
        // 300 unique colors cannot fit an 8-bit palette
        let mut pixels = Vec::with_capacity(300 * 4);
        for i in 0u32..300 {
            pixels.extend_from_slice(&[(i % 256) as u8, (i / 256) as u8, 7, 255]);
        }
        assert!(extract_palette(&pixels).is_none());
    }

    #[test]
    fn test_png_signature_and_ihdr() {
        let pixels = [1, 2, 3, 255, 4, 5, 6, 255];
        let png = png_auto(&pixels, 2, 1).unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        // IHDR length (13) and type follow the signature
        assert_eq!(&png[8..12], &13u32.to_be_bytes());
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(&png[16..20], &2u32.to_be_bytes());
        assert_eq!(&png[20..24], &1u32.to_be_bytes());
    }

    #[test]
    fn test_indexed_smaller_than_rgba_for_flat_image() {
        let mut pixels = Vec::with_capacity(64 * 64 * 4);
        for i in 0..(64 * 64) {
            let c = if i % 2 == 0 { 10 } else { 200 };
            pixels.extend_from_slice(&[c, c, c, 255]);
        }
        let auto = png_auto(&pixels, 64, 64).unwrap();
        let rgba = png_rgba(&pixels, 64, 64).unwrap();
        assert!(auto.len() < rgba.len());
    }

    #[test]
    fn test_data_url_prefix() {
        let pixels = [9, 9, 9, 255];
        let png = png_auto(&pixels, 1, 1).unwrap();
        let url = data_url(&png);
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.len() > "data:image/png;base64,".len());
    }
}
