//! Tests for the style registry and session dispatcher.

use art_common::{ArtError, Seed};
use palette::PaletteTable;
use renderer::{
    assign_sketch, assign_sketch_or_default, list_styles, Canvas, Redraw, StyleKind,
};
use test_utils::tiny_table;

#[test]
fn test_list_styles_stable_and_duplicate_free() {
    let names = list_styles();
    assert!(!names.is_empty());

    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len(), "style names must be unique");

    // Selector order is part of the contract
    assert_eq!(names, list_styles());
}

#[test]
fn test_every_listed_style_assigns() {
    let table = PaletteTable::standard();
    let seed = Seed::new("8");
    for name in list_styles() {
        let renderer = assign_sketch(64, 64, table, &seed, name).unwrap();
        assert_eq!(renderer.style().name(), name);
    }
}

#[test]
fn test_unknown_style_fails() {
    let table = PaletteTable::standard();
    let err = assign_sketch(64, 64, table, &Seed::new("8"), "no-such-style").unwrap_err();
    assert!(matches!(err, ArtError::UnknownStyle(ref name) if name == "no-such-style"));
    assert!(err.is_recoverable());
}

#[test]
fn test_unknown_style_falls_back_to_default() {
    let table = PaletteTable::standard();
    let renderer =
        assign_sketch_or_default(64, 64, table, &Seed::new("8"), "no-such-style").unwrap();
    assert_eq!(renderer.style(), StyleKind::DEFAULT);

    // Known styles are untouched by the fallback path
    let renderer =
        assign_sketch_or_default(64, 64, table, &Seed::new("8"), "palette-swatch").unwrap();
    assert_eq!(renderer.style(), StyleKind::PaletteSwatch);
}

#[test]
fn test_zero_dimensions_rejected() {
    let table = PaletteTable::standard();
    let err = assign_sketch(0, 64, table, &Seed::new("8"), "grid-blocks").unwrap_err();
    assert!(matches!(err, ArtError::InvalidDimensions { .. }));
}

#[test]
fn test_assign_touches_no_pixels() {
    let table = PaletteTable::standard();
    let mut canvas = Canvas::new(32, 32).unwrap();
    let before = canvas.pixels().to_vec();

    let _renderer = assign_sketch(32, 32, table, &Seed::new("8"), "colored-triangles").unwrap();
    assert_eq!(canvas.pixels(), &before[..], "assign must not draw");

    // setup alone also leaves the surface untouched for layout-only styles
    let mut renderer = assign_sketch(32, 32, table, &Seed::new("8"), "colored-triangles").unwrap();
    renderer.setup(&mut canvas).unwrap();
    assert_eq!(canvas.pixels(), &before[..]);
}

#[test]
fn test_palette_index_derived_from_seed() {
    let table = tiny_table();

    // Equal seeds resolve equal rows regardless of style
    let a = assign_sketch(16, 16, &table, &Seed::new("8"), "grid-blocks").unwrap();
    let b = assign_sketch(16, 16, &table, &Seed::new("8"), "palette-swatch").unwrap();
    assert_eq!(a.palette_index(), b.palette_index());
    assert!(a.palette_index() < table.row_count());

    // The index is the explicit modulo of the seed state
    assert_eq!(
        a.palette_index(),
        table.index_for_state(Seed::new("8").state())
    );
}

#[test]
fn test_redraw_policy_is_declared_per_style() {
    assert_eq!(StyleKind::PaletteSwatch.redraw(), Redraw::Static);
    assert_eq!(StyleKind::ColoredTriangles.redraw(), Redraw::Static);
    assert_eq!(StyleKind::GridBlocks.redraw(), Redraw::Static);
    assert_eq!(StyleKind::DriftGrid.redraw(), Redraw::Animated);
}

#[test]
fn test_renderer_debug_identifies_session() {
    let table = PaletteTable::standard();
    let renderer = assign_sketch(64, 48, table, &Seed::new("8"), "grid-blocks").unwrap();
    let repr = format!("{renderer:?}");
    assert!(repr.contains("GridBlocks"), "debug output names the style: {repr}");
    assert!(repr.contains("64") && repr.contains("48"));
}

#[test]
fn test_style_name_roundtrip() {
    for style in StyleKind::ALL {
        assert_eq!(StyleKind::from_name(style.name()).unwrap(), style);
    }
    assert!(StyleKind::from_name("Palette-Swatch").is_err(), "names are case-sensitive");
}
