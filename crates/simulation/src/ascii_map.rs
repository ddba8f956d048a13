//! ASCII rendering of the grid.
//!
//! Built on demand from `&WorldGrid`; no systems involved. The front end
//! prints the touched region of a deployment with it.

use crate::grid::{Cell, Terrain, WorldGrid};

/// Convert a single grid cell to its ASCII character.
///
/// Priority: structure > water > rock > open ground.
pub fn cell_to_char(cell: &Cell) -> char {
    if cell.structure.is_some() {
        return '@';
    }
    match cell.terrain {
        Terrain::Water => '~',
        Terrain::Rock => '^',
        Terrain::Ground => '.',
    }
}

/// Render the inclusive rectangle `(x0, y0)..=(x1, y1)`, clamped to the
/// grid, one row per line. Cells outside the grid are omitted entirely.
pub fn render_region(grid: &WorldGrid, x0: i32, y0: i32, x1: i32, y1: i32) -> String {
    let x0 = x0.max(0) as usize;
    let y0 = y0.max(0) as usize;
    if x0 >= grid.width || y0 >= grid.height || x1 < 0 || y1 < 0 {
        return String::new();
    }
    let x1 = (x1 as usize).min(grid.width - 1);
    let y1 = (y1 as usize).min(grid.height - 1);

    let mut out = String::with_capacity((x1 - x0 + 2) * (y1 - y0 + 1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            out.push(cell_to_char(grid.get(x, y)));
        }
        if y < y1 {
            out.push('\n');
        }
    }
    out
}
