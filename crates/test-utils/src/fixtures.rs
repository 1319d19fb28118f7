//! Palette fixtures and pixel-buffer helpers.

use palette::PaletteTable;

/// Two-row table with distinctive channel values for assertions.
pub fn tiny_table() -> PaletteTable {
    PaletteTable::from_json(
        r##"{
            "version": "1.0",
            "rows": [
                {"name": "Primary", "colors": [[255,0,0],[0,255,0],[0,0,255],[255,255,0],[0,255,255]]},
                {"name": "Gray", "colors": [[0,0,0],[64,64,64],[128,128,128],[192,192,192],[255,255,255]]}
            ]
        }"##,
    )
    .expect("fixture table is valid")
}

/// Offset of the first differing byte between two pixel buffers.
pub fn first_diff(a: &[u8], b: &[u8]) -> Option<usize> {
    if a.len() != b.len() {
        return Some(a.len().min(b.len()));
    }
    a.iter().zip(b.iter()).position(|(x, y)| x != y)
}
