//! Deterministic generative-art rendering from block-hash seeds.
//!
//! The same (seed, style, dimensions) always produces a byte-identical
//! pixel buffer, so any verifier can re-derive a minted image from its
//! block hash alone. The pipeline:
//!
//! 1. Normalize the seed ([`art_common::Seed`]).
//! 2. Resolve one palette row from the seed state.
//! 3. Build the named style's sketch with its own seeded RNG
//!    ([`assign_sketch`]).
//! 4. Run `setup` once, then `draw`, against a [`Canvas`].
//! 5. Encode the canvas as PNG bytes or a base64 data URL.
//!
//! Registered styles:
//! - `palette-swatch` (static): vertical bands of the resolved row.
//! - `colored-triangles` (static): scattered triangles over a wash.
//! - `grid-blocks` (static): grid of filled and outlined cells.
//! - `drift-grid` (animated): grid whose cells re-jitter every draw.

pub mod canvas;
pub mod encode;
pub mod rng;
pub mod sketch;

pub use canvas::Canvas;
pub use rng::SeededRng;
pub use sketch::{
    assign_sketch, assign_sketch_or_default, list_styles, render_png, Redraw, Renderer, StyleKind,
};
