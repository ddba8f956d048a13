use bevy::prelude::*;

use crate::simulation_sets::SimulationSet;

use super::assembly::progress_assembly;

pub struct StructuresPlugin;

impl Plugin for StructuresPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            progress_assembly.in_set(SimulationSet::Sim),
        );
    }
}
