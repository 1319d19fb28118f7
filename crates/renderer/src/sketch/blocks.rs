//! Grid blocks style: an n-by-n grid of filled and outlined cells.
//!
//! Redraw policy: static. The grid size, per-cell colors, and which
//! cells stay unfilled are derived once in `setup`.

use art_common::{ArtError, ArtResult, Rgb};
use palette::PaletteRow;

use super::Sketch;
use crate::canvas::Canvas;
use crate::rng::SeededRng;

const MIN_BOXES: i64 = 6;
const MAX_BOXES: i64 = 12;

/// Fraction of each cell left as breathing room on every side.
const CELL_INSET: f32 = 0.08;

/// Probability a cell is outlined instead of filled.
const UNFILLED_CHANCE: f64 = 0.2;

struct Cell {
    filled: bool,
    color: Rgb,
}

struct Layout {
    background: Rgb,
    boxes_per_side: usize,
    cells: Vec<Cell>,
}

pub(crate) struct GridBlocks {
    width: u32,
    height: u32,
    row: PaletteRow,
    rng: SeededRng,
    layout: Option<Layout>,
}

impl GridBlocks {
    pub(crate) fn new(width: u32, height: u32, row: PaletteRow, rng: SeededRng) -> Self {
        GridBlocks {
            width,
            height,
            row,
            rng,
            layout: None,
        }
    }
}

impl Sketch for GridBlocks {
    fn setup(&mut self, _canvas: &mut Canvas) -> ArtResult<()> {
        let background = self.row.color(0)?;
        let boxes_per_side = self.rng.int(MIN_BOXES, MAX_BOXES + 1) as usize;

        // Foreground cells draw from the non-background colors
        let foreground = &self.row.colors()[1..];
        let mut cells = Vec::with_capacity(boxes_per_side * boxes_per_side);
        for _ in 0..boxes_per_side * boxes_per_side {
            cells.push(Cell {
                filled: !self.rng.chance(UNFILLED_CHANCE),
                color: *self.rng.pick(foreground),
            });
        }

        self.layout = Some(Layout {
            background,
            boxes_per_side,
            cells,
        });
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas) -> ArtResult<()> {
        let layout = self.layout.as_ref().ok_or(ArtError::NotReady)?;

        canvas.fill(layout.background);

        let n = layout.boxes_per_side;
        let cell_w = self.width as f32 / n as f32;
        let cell_h = self.height as f32 / n as f32;
        let inset_x = cell_w * CELL_INSET;
        let inset_y = cell_h * CELL_INSET;

        for (i, cell) in layout.cells.iter().enumerate() {
            let col = (i % n) as f32;
            let row = (i / n) as f32;
            let x = col * cell_w + inset_x;
            let y = row * cell_h + inset_y;
            let w = cell_w - 2.0 * inset_x;
            let h = cell_h - 2.0 * inset_y;

            if cell.filled {
                canvas.fill_rect(x, y, w, h, cell.color);
            } else {
                canvas.stroke_rect(x, y, w, h, (cell_w * 0.06).max(1.0), cell.color);
            }
        }
        Ok(())
    }
}
