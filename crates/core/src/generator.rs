//! Board generation policies
//!
//! - **Paired**: `per_kind = floor(rows*cols / kinds)`, rounded down to even;
//!   `per_kind` copies of every kind are shuffled and laid out row-major.
//!   Cells past `per_kind * kinds` (when the division is not exact) are left
//!   empty at the end of the grid, so the board stays fully clearable.
//! - **Flood**: a `floor(width/tile) x floor(height/tile)` grid with every
//!   cell drawn independently and uniformly. No parity guarantee.

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::rng::SimpleRng;
use crate::types::{BoardLayout, TileKind};

/// Copies of each kind on a paired board. Always even, possibly zero.
pub fn per_kind_count(cells: usize, kinds: usize) -> usize {
    if kinds == 0 {
        return 0;
    }
    let per_kind = cells / kinds;
    per_kind - per_kind % 2
}

/// Build a paired board.
pub fn generate_paired(
    rows: u16,
    cols: u16,
    catalog: &[TileKind],
    rng: &mut SimpleRng,
) -> Result<Board, ConfigError> {
    if catalog.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }

    let cells = usize::from(rows) * usize::from(cols);
    let per_kind = per_kind_count(cells, catalog.len());

    let mut tiles: Vec<TileKind> = Vec::with_capacity(per_kind * catalog.len());
    for &kind in catalog {
        tiles.extend(std::iter::repeat(kind).take(per_kind));
    }
    rng.shuffle(&mut tiles);

    Ok(Board::from_cells(rows, cols, tiles.into_iter().map(Some)))
}

/// Build a flood-fill board; every cell drawn independently.
///
/// Callers size it to the window with [`GameConfig::flood_dims`].
pub fn generate_flood(
    rows: u16,
    cols: u16,
    catalog: &[TileKind],
    rng: &mut SimpleRng,
) -> Result<Board, ConfigError> {
    if catalog.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }

    let cells = usize::from(rows) * usize::from(cols);
    let tiles = (0..cells).map(|_| rng.choose(catalog).copied());

    Ok(Board::from_cells(rows, cols, tiles))
}

/// Build a board for `layout` from a validated config.
pub fn generate(
    layout: BoardLayout,
    config: &GameConfig,
    rng: &mut SimpleRng,
) -> Result<Board, ConfigError> {
    match layout {
        BoardLayout::Paired => generate_paired(config.rows, config.cols, config.catalog(), rng),
        BoardLayout::Flood => {
            let (rows, cols) = config.flood_dims();
            generate_flood(rows, cols, config.catalog(), rng)
        }
    }
}
