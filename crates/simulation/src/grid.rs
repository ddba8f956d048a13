use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Terrain {
    #[default]
    Ground,
    Water,
    Rock,
}

impl Terrain {
    /// Whether a structure can be placed on this terrain.
    pub fn is_buildable(self) -> bool {
        matches!(self, Terrain::Ground)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub elevation: f32,
    pub terrain: Terrain,
    pub structure: Option<Entity>,
}

impl Cell {
    /// Buildable terrain with nothing on it.
    pub fn is_open(&self) -> bool {
        self.terrain.is_buildable() && self.structure.is_none()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            elevation: 0.5,
            terrain: Terrain::Ground,
            structure: None,
        }
    }
}

#[derive(Resource)]
pub struct WorldGrid {
    pub cells: Vec<Cell>,
    pub width: usize,
    pub height: usize,
}

impl WorldGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Signed-coordinate bounds check, for callers working in `i32` space.
    #[inline]
    pub fn in_bounds_i32(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.in_bounds(x as usize, y as usize)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRID_HEIGHT, GRID_WIDTH};

    #[test]
    fn test_out_of_bounds() {
        let grid = WorldGrid::new(GRID_WIDTH, GRID_HEIGHT);
        assert!(grid.in_bounds(GRID_WIDTH - 1, GRID_HEIGHT - 1));
        assert!(!grid.in_bounds(GRID_WIDTH, 0));
        assert!(!grid.in_bounds(0, GRID_HEIGHT));
        assert!(!grid.in_bounds_i32(-1, 0));
        assert!(!grid.in_bounds_i32(0, -1));
        assert!(grid.in_bounds_i32(0, 0));
    }

    #[test]
    fn test_default_cell_is_open() {
        let mut grid = WorldGrid::new(8, 8);
        assert!(grid.get(3, 3).is_open());
        grid.get_mut(3, 3).terrain = Terrain::Water;
        assert!(!grid.get(3, 3).is_open());
        grid.get_mut(4, 4).structure = Some(Entity::PLACEHOLDER);
        assert!(!grid.get(4, 4).is_open());
    }

    #[test]
    fn test_index_is_row_major() {
        let grid = WorldGrid::new(16, 16);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(5, 0), 5);
        assert_eq!(grid.index(0, 1), 16);
        assert_eq!(grid.index(3, 2), 35);
    }
}
