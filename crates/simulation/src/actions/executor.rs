//! Action executor system — drains the [`ActionQueue`] each fixed-update tick
//! and applies every queued [`GameAction`] to the world, recording results in
//! the [`ActionResultLog`].
//!
//! Runs as an exclusive system so that spawns are visible to later actions in
//! the same drain (an upload queued right after a place must find the
//! structure).

use bevy::prelude::*;

use crate::grid::WorldGrid;
use crate::structures::{demolish_rect, place_structure, upload_script};

use super::result_log::ActionResultLog;
use super::{ActionQueue, ActionResult, GameAction};

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(world: &mut World) {
    let actions = world.resource_mut::<ActionQueue>().drain();
    for queued in actions {
        let result = execute_single(world, &queued.action);
        if let ActionResult::Error(err) = &result {
            warn!("action from tick {} rejected: {err}", queued.tick);
        }
        world
            .resource_mut::<ActionResultLog>()
            .push(queued.action, result);
    }
}

fn execute_single(world: &mut World, action: &GameAction) -> ActionResult {
    world.resource_scope(|world, mut grid: Mut<WorldGrid>| match action {
        GameAction::PlaceStructure { pos, kind, owner } => {
            // Manual placement goes through the assembly phase.
            match place_structure(world, &mut grid, pos.0, pos.1, *kind, *owner, false) {
                Ok(_) => ActionResult::Success,
                Err(err) => ActionResult::Error(err),
            }
        }
        GameAction::UploadScript { pos, source } => {
            match upload_script(world, &grid, pos.0, pos.1, source) {
                Ok(()) => ActionResult::Success,
                Err(err) => ActionResult::Error(err),
            }
        }
        GameAction::DemolishRect { min, max } => {
            match demolish_rect(world, &mut grid, *min, *max) {
                Ok(_) => ActionResult::Success,
                Err(err) => ActionResult::Error(err),
            }
        }
    })
}
