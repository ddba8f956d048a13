//! Plugin that wires up deployment: request queue, executor, outcome log.

use bevy::prelude::*;

use crate::actions::execute_queued_actions;
use crate::simulation_sets::SimulationSet;

use super::executor::process_deploy_requests;
use super::queue::{DeployLog, DeployQueue};

pub struct DeployPlugin;

impl Plugin for DeployPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeployQueue>();
        app.init_resource::<DeployLog>();

        // Deployments run after plain actions so a demolish queued the same
        // tick clears ground before the scan reaches it.
        app.add_systems(
            FixedUpdate,
            process_deploy_requests
                .after(execute_queued_actions)
                .in_set(SimulationSet::PreSim),
        );
    }
}
