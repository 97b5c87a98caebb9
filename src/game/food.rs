use std::collections::HashSet;

use rand::Rng;
use tracing::warn;

use super::{
    error::GameError,
    grid::{Cell, Grid},
};

/// Random draws tried before falling back to a full scan
pub const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Pick a cell for the next food item that is not in `occupied`
///
/// Samples up to [`MAX_SAMPLE_ATTEMPTS`] random cells, then scans the grid in
/// row-major order for the first free one. Fails only when the grid is full.
pub fn place_food<R: Rng + ?Sized>(
    occupied: &HashSet<Cell>,
    grid: &Grid,
    rng: &mut R,
) -> Result<Cell, GameError> {
    if occupied.len() < grid.cell_count() {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let cell = grid.random_cell(rng);
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
        }
    }

    let free = grid.cells().find(|cell| !occupied.contains(cell));
    match free {
        Some(cell) => {
            warn!(
                occupied = occupied.len(),
                cells = grid.cell_count(),
                "food sampling exhausted its attempts, used scan fallback"
            );
            Ok(cell)
        }
        None => Err(GameError::FoodPlacementExhausted {
            cells: grid.cell_count(),
        }),
    }
}
