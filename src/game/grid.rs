use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{config::GameConfig, error::GameError};

/// A cell on the grid, addressed by its top-left corner in world units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset the cell by a delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Geometry of the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    scale: i32,
}

impl Grid {
    /// Build the grid for a configuration, failing if it is not a valid one
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let as_coord = |value: u32| {
            i32::try_from(value).map_err(|_| GameError::invalid(format!("{value} is out of range")))
        };

        Ok(Self {
            width: as_coord(config.width)?,
            height: as_coord(config.height)?,
            scale: as_coord(config.scale)?,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Number of cells per row
    pub fn columns(&self) -> usize {
        (self.width / self.scale) as usize
    }

    /// Number of cells per column
    pub fn rows(&self) -> usize {
        (self.height / self.scale) as usize
    }

    pub fn cell_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Check whether a cell lies inside `[0, width) x [0, height)`
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Sample a uniformly random scale-aligned cell
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let column = rng.gen_range(0..self.width / self.scale);
        let row = rng.gen_range(0..self.height / self.scale);
        Cell::new(column * self.scale, row * self.scale)
    }

    /// All cells of the grid in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let scale = self.scale;
        (0..self.height / scale).flat_map(move |row| {
            (0..self.width / scale).map(move |column| Cell::new(column * scale, row * scale))
        })
    }

    /// Column and row index of an in-bounds cell
    pub fn index_of(&self, cell: Cell) -> Option<(usize, usize)> {
        self.is_in_bounds(cell)
            .then(|| ((cell.x / self.scale) as usize, (cell.y / self.scale) as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid(width: u32, height: u32) -> Grid {
        Grid::from_config(&GameConfig::new(width, height)).unwrap()
    }

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(40, 40);
        assert_eq!(cell.moved_by(20, 0), Cell::new(60, 40));
        assert_eq!(cell.moved_by(0, -60), Cell::new(40, -20));
    }

    #[test]
    fn test_bounds() {
        let grid = grid(100, 60);
        assert!(grid.is_in_bounds(Cell::new(0, 0)));
        assert!(grid.is_in_bounds(Cell::new(80, 40)));
        assert!(!grid.is_in_bounds(Cell::new(100, 0)));
        assert!(!grid.is_in_bounds(Cell::new(0, 60)));
        assert!(!grid.is_in_bounds(Cell::new(-20, 0)));
        assert!(!grid.is_in_bounds(Cell::new(0, -20)));
    }

    #[test]
    fn test_dimensions() {
        let grid = grid(100, 60);
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cell_count(), 15);
        assert_eq!(grid.cells().count(), 15);
        assert_eq!(grid.cells().next(), Some(Cell::new(0, 0)));
        assert_eq!(grid.cells().last(), Some(Cell::new(80, 40)));
    }

    #[test]
    fn test_random_cells_are_aligned_and_in_bounds() {
        let grid = grid(100, 60);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.is_in_bounds(cell));
            assert_eq!(cell.x % 20, 0);
            assert_eq!(cell.y % 20, 0);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(Grid::from_config(&GameConfig::new(90, 100)).is_err());
    }

    #[test]
    fn test_index_of() {
        let grid = grid(100, 60);
        assert_eq!(grid.index_of(Cell::new(40, 20)), Some((2, 1)));
        assert_eq!(grid.index_of(Cell::new(100, 20)), None);
    }
}
