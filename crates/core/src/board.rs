//! Board module - manages the tile grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds a tile
//! kind. Uses a flat vector in row-major order (`row * cols + col`).
//! Cells only ever go from occupied to empty (via a successful match).

use crate::types::{Cell, Coord, TileKind};

/// The game board - flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; usize::from(rows) * usize::from(cols)],
        }
    }

    /// Lay out `cells` row-major. Missing trailing cells stay empty, surplus
    /// cells are ignored.
    pub fn from_cells(rows: u16, cols: u16, cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut board = Self::new(rows, cols);
        for (slot, cell) in board.cells.iter_mut().zip(cells) {
            *slot = cell;
        }
        board
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if at.row >= self.rows || at.col >= self.cols {
            return None;
        }
        Some(usize::from(at.row) * usize::from(self.cols) + usize::from(at.col))
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major cell slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at coordinate
    /// Returns None if out of bounds
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|idx| self.cells[idx])
    }

    /// Tile kind at coordinate, `None` if empty or out of bounds.
    pub fn kind_at(&self, at: Coord) -> Option<TileKind> {
        self.get(at).flatten()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.index(at).is_some()
    }

    /// Check if coordinate is in bounds and holds a tile
    pub fn is_occupied(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Some(_)))
    }

    /// Empty a cell. Returns the kind it held, if any.
    pub fn clear(&mut self, at: Coord) -> Option<TileKind> {
        let idx = self.index(at)?;
        self.cells[idx].take()
    }

    /// True when every cell is empty.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// How many cells hold `kind`.
    pub fn count(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(kind)).count()
    }

    /// Iterate over occupied cells with their coordinates.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, TileKind)> + '_ {
        let cols = usize::from(self.cols.max(1));
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|kind| (Coord::new((i / cols) as u16, (i % cols) as u16), kind))
        })
    }

    /// Copy cells into a reusable row-major buffer.
    pub fn write_cells(&self, out: &mut Vec<Cell>) {
        out.clear();
        out.extend_from_slice(&self.cells);
    }
}
