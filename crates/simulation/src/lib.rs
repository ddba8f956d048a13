use bevy::prelude::*;

pub mod actions;
pub mod ascii_map;
pub mod config;
pub mod deploy;
pub mod grid;
pub mod sim_rng;
pub mod simulation_sets;
pub mod structures;
pub mod world_init;

#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

/// Global tick counter incremented each FixedUpdate, used for log
/// attribution of queued input.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn advance_tick(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickCounter>()
            .init_resource::<sim_rng::SimRng>()
            // 10 Hz fixed timestep; the harness and the front end advance
            // virtual time in 100 ms steps to drive exactly one tick.
            .insert_resource(Time::<Fixed>::from_hz(10.0))
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::PreSim,
                    SimulationSet::Sim,
                    SimulationSet::PostSim,
                )
                    .chain(),
            )
            .add_systems(Startup, world_init::init_world)
            .add_systems(FixedUpdate, advance_tick.in_set(SimulationSet::PreSim));

        app.add_plugins((
            actions::GameActionsPlugin,
            structures::StructuresPlugin,
            deploy::DeployPlugin,
        ));
    }
}
