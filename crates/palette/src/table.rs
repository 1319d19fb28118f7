//! Palette table parsing and row resolution.

use std::sync::OnceLock;

use art_common::{ArtError, ArtResult, Rgb};
use serde::Deserialize;
use tracing::info;

/// Number of colors in every palette row. Styles index colors by
/// position; this constant is the only place the arity lives.
pub const COLORS_PER_ROW: usize = 5;

const STANDARD_DATA: &str = include_str!("../data/palettes.json");

static STANDARD: OnceLock<PaletteTable> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct RawTable {
    #[serde(default = "default_version")]
    version: String,
    rows: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    colors: Vec<Rgb>,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Ordered, immutable collection of palette rows.
#[derive(Debug, Clone)]
pub struct PaletteTable {
    version: String,
    rows: Vec<PaletteRow>,
}

/// One selectable set of colors for a rendering session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    name: String,
    colors: [Rgb; COLORS_PER_ROW],
}

impl PaletteTable {
    /// The process-wide table parsed from the embedded dataset.
    ///
    /// Parsed exactly once; the embedded dataset is covered by tests,
    /// so a parse failure here is a build defect.
    pub fn standard() -> &'static PaletteTable {
        STANDARD.get_or_init(|| {
            PaletteTable::from_json(STANDARD_DATA).expect("embedded palette dataset is valid")
        })
    }

    /// Parse and validate a palette table from JSON.
    ///
    /// Fails fast with `Config` on an empty table, a wrong-arity row,
    /// or a duplicate row name.
    pub fn from_json(json: &str) -> ArtResult<Self> {
        let raw: RawTable =
            serde_json::from_str(json).map_err(|e| ArtError::Config(e.to_string()))?;

        if raw.rows.is_empty() {
            return Err(ArtError::Config("palette table has no rows".to_string()));
        }

        let mut rows = Vec::with_capacity(raw.rows.len());
        for row in raw.rows {
            let colors: [Rgb; COLORS_PER_ROW] = row.colors.try_into().map_err(|v: Vec<Rgb>| {
                ArtError::Config(format!(
                    "row '{}' has {} colors, expected {}",
                    row.name,
                    v.len(),
                    COLORS_PER_ROW
                ))
            })?;

            if rows.iter().any(|r: &PaletteRow| r.name == row.name) {
                return Err(ArtError::Config(format!("duplicate row name '{}'", row.name)));
            }

            rows.push(PaletteRow {
                name: row.name,
                colors,
            });
        }

        info!(version = %raw.version, rows = rows.len(), "Loaded palette table");

        Ok(PaletteTable {
            version: raw.version,
            rows,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[PaletteRow] {
        &self.rows
    }

    /// Resolve a row by index.
    ///
    /// Callers derive `index` from the seed, which cannot exceed the
    /// row count; an out-of-range index is a defect and fails loudly
    /// instead of clamping.
    pub fn row(&self, index: usize) -> ArtResult<&PaletteRow> {
        self.rows.get(index).ok_or(ArtError::OutOfRange {
            index,
            count: self.rows.len(),
        })
    }

    /// Palette index for a normalized seed state (explicit modulo, so
    /// the resolution never consumes the session's RNG stream).
    pub fn index_for_state(&self, state: u64) -> usize {
        (state % self.rows.len() as u64) as usize
    }
}

impl PaletteRow {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional color access.
    pub fn color(&self, index: usize) -> ArtResult<Rgb> {
        self.colors
            .get(index)
            .copied()
            .ok_or(ArtError::OutOfRange {
                index,
                count: COLORS_PER_ROW,
            })
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_parses() {
        let table = PaletteTable::standard();
        assert!(table.row_count() > 0);
        assert_eq!(table.version(), "1.0");
        for row in table.rows() {
            assert_eq!(row.colors().len(), COLORS_PER_ROW);
            assert!(!row.name().is_empty());
        }
    }

    #[test]
    fn test_standard_is_cached() {
        let a = PaletteTable::standard() as *const PaletteTable;
        let b = PaletteTable::standard() as *const PaletteTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let json = r##"{"rows":[{"name":"Short","colors":[[1,2,3],[4,5,6]]}]}"##;
        let err = PaletteTable::from_json(json).unwrap_err();
        assert!(matches!(err, ArtError::Config(_)), "got {err:?}");
        assert!(err.to_string().contains("expected 5"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let json = r##"{"rows":[
            {"name":"Twin","colors":[[0,0,0],[1,1,1],[2,2,2],[3,3,3],[4,4,4]]},
            {"name":"Twin","colors":[[9,9,9],[8,8,8],[7,7,7],[6,6,6],[5,5,5]]}
        ]}"##;
        let err = PaletteTable::from_json(json).unwrap_err();
        assert!(matches!(err, ArtError::Config(_)));
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = PaletteTable::from_json(r##"{"rows":[]}"##).unwrap_err();
        assert!(matches!(err, ArtError::Config(_)));
    }

    #[test]
    fn test_row_resolution_bounds() {
        let table = PaletteTable::standard();
        assert!(table.row(0).is_ok());
        assert!(table.row(table.row_count() - 1).is_ok());

        let err = table.row(table.row_count()).unwrap_err();
        assert!(matches!(err, ArtError::OutOfRange { .. }));
    }

    #[test]
    fn test_index_for_state_in_range() {
        let table = PaletteTable::standard();
        for state in [0u64, 1, 7, 8, 9, u64::MAX, 0xdeadbeef] {
            let index = table.index_for_state(state);
            assert!(index < table.row_count());
        }
    }

    #[test]
    fn test_positional_color_access() {
        let table = PaletteTable::standard();
        let row = table.row(0).unwrap();
        for i in 0..COLORS_PER_ROW {
            row.color(i).unwrap();
        }
        let err = row.color(COLORS_PER_ROW).unwrap_err();
        assert!(matches!(err, ArtError::OutOfRange { index: 5, count: 5 }));
    }
}
