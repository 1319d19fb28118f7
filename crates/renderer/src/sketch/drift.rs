//! Drift grid style: a dot grid whose cells wander between draws.
//!
//! Redraw policy: animated. `setup` fixes the grid size and per-cell
//! colors; every `draw` consumes fresh randomness for the offsets, so
//! consecutive frames differ while the whole frame sequence is still
//! fully determined by the seed.

use art_common::{ArtError, ArtResult, Rgb};
use palette::PaletteRow;

use super::Sketch;
use crate::canvas::Canvas;
use crate::rng::SeededRng;

const MIN_BOXES: i64 = 8;
const MAX_BOXES: i64 = 14;

/// Maximum wander distance as a fraction of the cell size.
const DRIFT_AMPLITUDE: f32 = 0.35;

struct Layout {
    background: Rgb,
    boxes_per_side: usize,
    colors: Vec<Rgb>,
}

pub(crate) struct DriftGrid {
    width: u32,
    height: u32,
    row: PaletteRow,
    rng: SeededRng,
    layout: Option<Layout>,
}

impl DriftGrid {
    pub(crate) fn new(width: u32, height: u32, row: PaletteRow, rng: SeededRng) -> Self {
        DriftGrid {
            width,
            height,
            row,
            rng,
            layout: None,
        }
    }
}

impl Sketch for DriftGrid {
    fn setup(&mut self, _canvas: &mut Canvas) -> ArtResult<()> {
        let background = self.row.color(0)?;
        let boxes_per_side = self.rng.int(MIN_BOXES, MAX_BOXES + 1) as usize;

        let foreground = &self.row.colors()[1..];
        let colors = (0..boxes_per_side * boxes_per_side)
            .map(|_| *self.rng.pick(foreground))
            .collect();

        self.layout = Some(Layout {
            background,
            boxes_per_side,
            colors,
        });
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas) -> ArtResult<()> {
        let layout = self.layout.as_ref().ok_or(ArtError::NotReady)?;

        canvas.fill(layout.background);

        let n = layout.boxes_per_side;
        let cell_w = self.width as f32 / n as f32;
        let cell_h = self.height as f32 / n as f32;
        let radius = cell_w.min(cell_h) * 0.32;

        // Fresh offsets each frame
        let offsets: Vec<(f32, f32)> = (0..n * n)
            .map(|_| {
                (
                    (self.rng.next_f32() * 2.0 - 1.0) * cell_w * DRIFT_AMPLITUDE,
                    (self.rng.next_f32() * 2.0 - 1.0) * cell_h * DRIFT_AMPLITUDE,
                )
            })
            .collect();

        for (i, (color, &(dx, dy))) in layout.colors.iter().zip(offsets.iter()).enumerate() {
            let cx = ((i % n) as f32 + 0.5) * cell_w + dx;
            let cy = ((i / n) as f32 + 0.5) * cell_h + dy;
            canvas.fill_circle(cx, cy, radius, *color);
        }
        Ok(())
    }
}
