//! Style sketches and the session dispatcher.
//!
//! Each style implements the two-phase [`Sketch`] lifecycle: `setup`
//! derives everything random once and caches it as a layout, `draw`
//! paints. Whether repeated `draw` calls replay the cached layout or
//! consume fresh randomness is the style's declared [`Redraw`] policy,
//! never an accident of implementation.

mod blocks;
mod drift;
mod swatch;
mod triangles;

use std::fmt;

use art_common::{ArtError, ArtResult, Seed};
use palette::PaletteTable;
use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::rng::SeededRng;

/// Redraw policy declared by every style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// `draw` replays the layout cached during `setup`; repeated draws
    /// are pixel-identical.
    Static,
    /// `draw` consumes fresh randomness on every call; repeated draws
    /// vary, but the whole draw sequence is still seed-determined.
    Animated,
}

/// Registered drawing styles, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    PaletteSwatch,
    ColoredTriangles,
    GridBlocks,
    DriftGrid,
}

impl StyleKind {
    /// Every registered style, in the order selectors should list them.
    pub const ALL: [StyleKind; 4] = [
        StyleKind::PaletteSwatch,
        StyleKind::ColoredTriangles,
        StyleKind::GridBlocks,
        StyleKind::DriftGrid,
    ];

    /// Fallback for unrecognized style names.
    pub const DEFAULT: StyleKind = StyleKind::GridBlocks;

    pub fn name(self) -> &'static str {
        match self {
            StyleKind::PaletteSwatch => "palette-swatch",
            StyleKind::ColoredTriangles => "colored-triangles",
            StyleKind::GridBlocks => "grid-blocks",
            StyleKind::DriftGrid => "drift-grid",
        }
    }

    pub fn from_name(name: &str) -> ArtResult<Self> {
        StyleKind::ALL
            .iter()
            .copied()
            .find(|s| s.name() == name)
            .ok_or_else(|| ArtError::UnknownStyle(name.to_string()))
    }

    /// The style's declared redraw policy.
    pub fn redraw(self) -> Redraw {
        match self {
            StyleKind::DriftGrid => Redraw::Animated,
            _ => Redraw::Static,
        }
    }
}

/// Registered style names, in stable selector order.
pub fn list_styles() -> Vec<&'static str> {
    StyleKind::ALL.iter().map(|s| s.name()).collect()
}

/// One style's drawing algorithm behind the common two-phase contract.
pub(crate) trait Sketch {
    /// One-time derivations from the RNG, cached for `draw`.
    fn setup(&mut self, canvas: &mut Canvas) -> ArtResult<()>;

    /// Paint the picture onto the surface.
    fn draw(&mut self, canvas: &mut Canvas) -> ArtResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Constructed,
    SetupDone,
}

/// Stateful renderer for one session: one seed, one style, one surface
/// size, one exclusively-owned RNG.
pub struct Renderer {
    style: StyleKind,
    width: u32,
    height: u32,
    palette_index: usize,
    sketch: Box<dyn Sketch>,
    phase: Phase,
}

// Manual impl: the boxed sketch is opaque, everything else identifies
// the session.
impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("style", &self.style)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("palette_index", &self.palette_index)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    pub fn style(&self) -> StyleKind {
        self.style
    }

    pub fn redraw(&self) -> Redraw {
        self.style.redraw()
    }

    /// Palette row index resolved for this session.
    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bind the renderer to its surface and derive the layout.
    ///
    /// Runs the one-time derivations exactly once; calling `setup`
    /// again is a no-op that keeps the already-derived layout.
    pub fn setup(&mut self, canvas: &mut Canvas) -> ArtResult<()> {
        self.check_surface(canvas)?;
        if self.phase == Phase::SetupDone {
            return Ok(());
        }
        self.sketch.setup(canvas)?;
        self.phase = Phase::SetupDone;
        Ok(())
    }

    /// Paint onto the surface. Fails with `NotReady` before `setup`.
    pub fn draw(&mut self, canvas: &mut Canvas) -> ArtResult<()> {
        if self.phase == Phase::Constructed {
            return Err(ArtError::NotReady);
        }
        self.check_surface(canvas)?;
        self.sketch.draw(canvas)
    }

    fn check_surface(&self, canvas: &Canvas) -> ArtResult<()> {
        if canvas.width() != self.width || canvas.height() != self.height {
            return Err(ArtError::InvalidDimensions {
                width: canvas.width(),
                height: canvas.height(),
            });
        }
        Ok(())
    }
}

/// Build a ready-to-run renderer for a session.
///
/// Resolves the palette row from the seed, constructs the session RNG,
/// and instantiates the named style. Touches no pixels; the surface is
/// only written by `setup`/`draw`.
pub fn assign_sketch(
    width: u32,
    height: u32,
    table: &PaletteTable,
    seed: &Seed,
    style_name: &str,
) -> ArtResult<Renderer> {
    if width == 0 || height == 0 {
        return Err(ArtError::InvalidDimensions { width, height });
    }

    let style = StyleKind::from_name(style_name)?;
    let palette_index = table.index_for_state(seed.state());
    let row = table.row(palette_index)?.clone();
    let rng = SeededRng::new(seed);

    debug!(
        style = style.name(),
        palette = row.name(),
        palette_index,
        width,
        height,
        "Assigned sketch"
    );

    let sketch: Box<dyn Sketch> = match style {
        StyleKind::PaletteSwatch => Box::new(swatch::PaletteSwatch::new(width, height, row, rng)),
        StyleKind::ColoredTriangles => {
            Box::new(triangles::ColoredTriangles::new(width, height, row, rng))
        }
        StyleKind::GridBlocks => Box::new(blocks::GridBlocks::new(width, height, row, rng)),
        StyleKind::DriftGrid => Box::new(drift::DriftGrid::new(width, height, row, rng)),
    };

    Ok(Renderer {
        style,
        width,
        height,
        palette_index,
        sketch,
        phase: Phase::Constructed,
    })
}

/// Like [`assign_sketch`], but an unknown style name falls back to
/// [`StyleKind::DEFAULT`] with a warning instead of failing.
pub fn assign_sketch_or_default(
    width: u32,
    height: u32,
    table: &PaletteTable,
    seed: &Seed,
    style_name: &str,
) -> ArtResult<Renderer> {
    match assign_sketch(width, height, table, seed, style_name) {
        Err(ArtError::UnknownStyle(name)) => {
            warn!(
                style = %name,
                fallback = StyleKind::DEFAULT.name(),
                "Unknown style, using fallback"
            );
            assign_sketch(width, height, table, seed, StyleKind::DEFAULT.name())
        }
        other => other,
    }
}

/// Full pipeline: assign, setup, draw once, encode as PNG bytes.
pub fn render_png(
    width: u32,
    height: u32,
    table: &PaletteTable,
    seed: &Seed,
    style_name: &str,
) -> ArtResult<Vec<u8>> {
    let mut renderer = assign_sketch(width, height, table, seed, style_name)?;
    let mut canvas = Canvas::new(width, height)?;
    renderer.setup(&mut canvas)?;
    renderer.draw(&mut canvas)?;
    canvas.encode_png()
}
