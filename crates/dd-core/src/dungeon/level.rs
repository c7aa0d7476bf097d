//! Grid levels
//!
//! A `GridLevel` is the immutable layout of one dungeon level. It is built
//! once from static content and never mutated; everything that changes
//! during play (position, encounters) lives elsewhere.

use serde::{Deserialize, Serialize};

use crate::dungeon::CellKind;
use crate::error::GameError;
use crate::position::Position;

/// Immutable rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLevel {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
}

impl GridLevel {
    /// Build a level from row literals, e.g. `&["WWW", "WEX", "WWW"]`.
    ///
    /// Fails on an empty grid, ragged rows, or unknown symbols — all of
    /// which indicate corrupt static content.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GameError::config("level grid is empty"));
        }

        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GameError::config(format!(
                    "level row {r} has width {} but expected {width}",
                    row.chars().count()
                )));
            }
            for (c, symbol) in row.chars().enumerate() {
                let kind = CellKind::from_symbol(symbol).ok_or_else(|| {
                    GameError::config(format!("unknown map symbol {symbol:?} at ({r}, {c})"))
                })?;
                cells.push(kind);
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds check for signed candidate coordinates.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Cell lookup, failing with `OutOfBounds` past the grid edges.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellKind, GameError> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[row * self.cols + col])
    }

    pub fn cell(&self, pos: Position) -> Result<CellKind, GameError> {
        self.cell_at(pos.row, pos.col)
    }

    /// Iterate all cells with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        self.cells.iter().enumerate().map(|(i, &kind)| {
            (
                Position {
                    row: i / self.cols,
                    col: i % self.cols,
                },
                kind,
            )
        })
    }

    /// Locate the level entrance. Missing entrance is corrupt content.
    pub fn find_entrance(&self) -> Result<Position, GameError> {
        self.find(CellKind::Entrance)
            .ok_or_else(|| GameError::config("level has no entrance"))
    }

    /// Locate the level exit. Missing exit is corrupt content.
    pub fn find_exit(&self) -> Result<Position, GameError> {
        self.find(CellKind::Exit)
            .ok_or_else(|| GameError::config("level has no exit"))
    }

    fn find(&self, kind: CellKind) -> Option<Position> {
        self.iter().find(|&(_, k)| k == kind).map(|(pos, _)| pos)
    }

    /// Render the grid as text rows with `[P]` marking the given position.
    /// Used by the Vision Potion's map reveal.
    pub fn render_with_marker(&self, marker: Position) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| {
                        if (Position { row: r, col: c }) == marker {
                            "[P]".to_string()
                        } else {
                            format!(" {} ", self.cells[r * self.cols + c].symbol())
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect()
    }
}
