//! ECS-backed [`DeploySite`]: placements go through the same primitives as
//! queued game actions, so terrain and occupancy rules apply identically.

use bevy::prelude::*;

use crate::actions::ActionError;
use crate::grid::WorldGrid;
use crate::structures::{place_structure, set_script, Owner, StructureKind};

use super::engine::DeploySite;

/// Deploy site over the live world. Built by the deployment executor while
/// it holds the grid out of the world via `resource_scope`.
pub struct WorldSite<'a> {
    pub world: &'a mut World,
    pub grid: &'a mut WorldGrid,
}

impl DeploySite for WorldSite<'_> {
    fn create_structure(
        &mut self,
        x: i32,
        y: i32,
        kind: StructureKind,
        owner: Owner,
    ) -> Result<(), ActionError> {
        // Deployed structures come up finished; there is no assembly phase.
        place_structure(self.world, self.grid, x, y, kind, owner, true).map(|_| ())
    }

    fn structure_at(&self, x: i32, y: i32) -> Option<Entity> {
        if !self.grid.in_bounds_i32(x, y) {
            return None;
        }
        self.grid.get(x as usize, y as usize).structure
    }

    fn upload_script(&mut self, target: Entity, source: &str) -> Result<(), ActionError> {
        set_script(self.world, target, source)
    }
}
