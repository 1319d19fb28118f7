//! Colored triangles style: scattered filled triangles over a wash.
//!
//! Redraw policy: static. Triangle count, geometry, and colors are all
//! derived once in `setup` and replayed by every `draw`.

use art_common::{ArtError, ArtResult, Rgb};
use palette::PaletteRow;

use super::Sketch;
use crate::canvas::Canvas;
use crate::rng::SeededRng;

const MIN_TRIANGLES: i64 = 18;
const MAX_TRIANGLES: i64 = 42;

struct Triangle {
    points: [(f32, f32); 3],
    color: Rgb,
}

struct Layout {
    background: Rgb,
    triangles: Vec<Triangle>,
}

pub(crate) struct ColoredTriangles {
    width: u32,
    height: u32,
    row: PaletteRow,
    rng: SeededRng,
    layout: Option<Layout>,
}

impl ColoredTriangles {
    pub(crate) fn new(width: u32, height: u32, row: PaletteRow, rng: SeededRng) -> Self {
        ColoredTriangles {
            width,
            height,
            row,
            rng,
            layout: None,
        }
    }
}

impl Sketch for ColoredTriangles {
    fn setup(&mut self, _canvas: &mut Canvas) -> ArtResult<()> {
        let background = self.row.color(0)?;
        let w = self.width as f32;
        let h = self.height as f32;
        let reach = w.min(h) * 0.22;

        let count = self.rng.int(MIN_TRIANGLES, MAX_TRIANGLES + 1);
        let mut triangles = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let cx = self.rng.next_f32() * w;
            let cy = self.rng.next_f32() * h;
            let mut points = [(0.0f32, 0.0f32); 3];
            for p in &mut points {
                *p = (
                    cx + (self.rng.next_f32() * 2.0 - 1.0) * reach,
                    cy + (self.rng.next_f32() * 2.0 - 1.0) * reach,
                );
            }
            let color = *self.rng.pick(self.row.colors());
            triangles.push(Triangle { points, color });
        }

        self.layout = Some(Layout {
            background,
            triangles,
        });
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas) -> ArtResult<()> {
        let layout = self.layout.as_ref().ok_or(ArtError::NotReady)?;

        canvas.fill(layout.background);
        for tri in &layout.triangles {
            canvas.fill_triangle(tri.points, tri.color);
        }
        Ok(())
    }
}
