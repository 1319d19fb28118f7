//! Palette swatch style: one vertical band per row color.
//!
//! Redraw policy: static. Band widths are derived once in `setup`.

use art_common::{ArtError, ArtResult};
use palette::PaletteRow;

use super::Sketch;
use crate::canvas::Canvas;
use crate::rng::SeededRng;

pub(crate) struct PaletteSwatch {
    width: u32,
    height: u32,
    row: PaletteRow,
    rng: SeededRng,
    /// Band edges in pixels, `colors + 1` entries, derived by `setup`.
    layout: Option<Vec<f32>>,
}

impl PaletteSwatch {
    pub(crate) fn new(width: u32, height: u32, row: PaletteRow, rng: SeededRng) -> Self {
        PaletteSwatch {
            width,
            height,
            row,
            rng,
            layout: None,
        }
    }
}

impl Sketch for PaletteSwatch {
    fn setup(&mut self, _canvas: &mut Canvas) -> ArtResult<()> {
        // Jittered band weights, normalized to the surface width
        let weights: Vec<f64> = (0..self.row.colors().len())
            .map(|_| 0.6 + self.rng.next_f64())
            .collect();
        let total: f64 = weights.iter().sum();

        let mut edges = Vec::with_capacity(weights.len() + 1);
        let mut x = 0.0f64;
        edges.push(0.0);
        for w in &weights {
            x += w / total * self.width as f64;
            edges.push(x as f32);
        }
        // The last edge lands exactly on the right border
        if let Some(last) = edges.last_mut() {
            *last = self.width as f32;
        }

        self.layout = Some(edges);
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas) -> ArtResult<()> {
        let edges = self.layout.as_ref().ok_or(ArtError::NotReady)?;

        for (i, color) in self.row.colors().iter().enumerate() {
            let x0 = edges[i];
            let x1 = edges[i + 1];
            canvas.fill_rect(x0, 0.0, x1 - x0, self.height as f32, *color);
        }
        Ok(())
    }
}
