//! World-mutation primitives for structures.
//!
//! These operate directly on `&mut World` so the action executor and the
//! deployment site observe their effects immediately (no deferred command
//! queue between a spawn and the next lookup). The grid is passed alongside
//! because callers hold it out of the world via `resource_scope`.

use bevy::prelude::*;

use crate::actions::ActionError;
use crate::config::ASSEMBLY_TICKS;
use crate::grid::{Terrain, WorldGrid};

use super::types::{Assembling, LogicScript, Owner, Structure, StructureKind};

/// Place a structure of `kind` at `(x, y)` for `owner`.
///
/// `finished` structures skip the assembly phase entirely; deployment
/// provisions processors this way. Script-capable kinds start with a blank
/// program.
pub fn place_structure(
    world: &mut World,
    grid: &mut WorldGrid,
    x: i32,
    y: i32,
    kind: StructureKind,
    owner: Owner,
    finished: bool,
) -> Result<Entity, ActionError> {
    if !grid.in_bounds_i32(x, y) {
        return Err(ActionError::OutOfBounds);
    }
    let (xu, yu) = (x as usize, y as usize);
    let cell = grid.get(xu, yu);
    match cell.terrain {
        Terrain::Water => return Err(ActionError::BlockedByWater),
        Terrain::Rock => return Err(ActionError::BlockedByRock),
        Terrain::Ground => {}
    }
    if cell.structure.is_some() {
        return Err(ActionError::CellOccupied);
    }

    let mut spawned = world.spawn(Structure {
        kind,
        grid_x: xu,
        grid_y: yu,
        owner,
    });
    if kind.accepts_script() {
        spawned.insert(LogicScript::default());
    }
    if !finished {
        spawned.insert(Assembling {
            ticks_remaining: ASSEMBLY_TICKS,
        });
    }
    let entity = spawned.id();

    grid.get_mut(xu, yu).structure = Some(entity);
    Ok(entity)
}

/// Replace the program on the structure at `(x, y)`.
pub fn upload_script(
    world: &mut World,
    grid: &WorldGrid,
    x: i32,
    y: i32,
    source: &str,
) -> Result<(), ActionError> {
    if !grid.in_bounds_i32(x, y) {
        return Err(ActionError::OutOfBounds);
    }
    let entity = grid
        .get(x as usize, y as usize)
        .structure
        .ok_or(ActionError::NotFound)?;
    set_script(world, entity, source)
}

/// Replace the program on an already-resolved structure handle.
pub fn set_script(world: &mut World, target: Entity, source: &str) -> Result<(), ActionError> {
    let kind = world
        .get::<Structure>(target)
        .ok_or(ActionError::NotFound)?
        .kind;
    if !kind.accepts_script() {
        return Err(ActionError::NotSupported);
    }
    let mut script = world
        .get_mut::<LogicScript>(target)
        .ok_or(ActionError::NotFound)?;
    script.source = source.to_string();
    Ok(())
}

/// Demolish every structure in the inclusive rectangle, returning how many
/// were removed. Coordinates are clamped to the grid.
pub fn demolish_rect(
    world: &mut World,
    grid: &mut WorldGrid,
    min: (i32, i32),
    max: (i32, i32),
) -> Result<u32, ActionError> {
    if min.0 > max.0 || min.1 > max.1 {
        return Err(ActionError::OutOfBounds);
    }
    let x0 = min.0.max(0) as usize;
    let y0 = min.1.max(0) as usize;
    if x0 >= grid.width || y0 >= grid.height {
        return Ok(0);
    }
    let x1 = (max.0 as usize).min(grid.width - 1);
    let y1 = (max.1 as usize).min(grid.height - 1);

    let mut removed = 0u32;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if let Some(entity) = grid.get_mut(x, y).structure.take() {
                world.despawn(entity);
                removed += 1;
            }
        }
    }
    Ok(removed)
}
