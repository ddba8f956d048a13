//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! Every system in `FixedUpdate` belongs to one of these sets, configured as
//! a chain in [`crate::SimulationPlugin`]:
//!
//! ```text
//! PreSim  →  Sim  →  PostSim
//! ```
//!
//! * **PreSim** – tick counter and queued-input execution (game actions,
//!   script deployments). Everything that mutates the grid in response to
//!   external input runs here, so the rest of the tick observes a settled
//!   world.
//! * **Sim** – per-tick world logic: structure assembly progress.
//! * **PostSim** – read-only aggregation and reporting.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Plugins use `.in_set(SimulationSet::X)` when registering systems, which
/// gives them ordering relative to the other phases while keeping
/// fine-grained `.after()` constraints available within a phase.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Queued-input execution: game actions and script deployments.
    PreSim,
    /// Core per-tick logic: assembly progress.
    Sim,
    /// Read-only aggregation and reporting.
    PostSim,
}
