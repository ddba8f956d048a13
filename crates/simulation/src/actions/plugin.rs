//! Plugin that wires up the action subsystem: queue, executor, and log.

use bevy::prelude::*;

use crate::simulation_sets::SimulationSet;

use super::executor::execute_queued_actions;
use super::result_log::ActionResultLog;
use super::ActionQueue;

pub struct GameActionsPlugin;

impl Plugin for GameActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionQueue>();
        app.init_resource::<ActionResultLog>();

        app.add_systems(
            FixedUpdate,
            execute_queued_actions.in_set(SimulationSet::PreSim),
        );
    }
}
