//! Palette dataset for block-canvas rendering sessions.
//!
//! The dataset is a fixed, ordered set of named rows, each holding
//! exactly [`COLORS_PER_ROW`] colors. It is embedded at compile time,
//! parsed once per process, and shared read-only by every session, so
//! no locking is involved.

mod table;

pub use table::{PaletteRow, PaletteTable, COLORS_PER_ROW};
