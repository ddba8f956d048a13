//! Deployment executor system — drains the [`DeployQueue`] each fixed tick
//! and runs the engine against the live world, recording every outcome in
//! the [`DeployLog`].

use bevy::prelude::*;

use crate::grid::WorldGrid;

use super::engine::{deploy, DeployError, DeployReport, ScriptLibrary, SourceError};
use super::queue::{DeployLog, DeployQueue, DeployRequest};
use super::site::WorldSite;

pub fn process_deploy_requests(world: &mut World) {
    let requests = world.resource_mut::<DeployQueue>().drain();
    for request in requests {
        let outcome = run_single(world, &request);
        match &outcome {
            Ok(report) => info!(
                "deployed {} scripts into columns {}..={} from row {}",
                report.placed, request.region.min_x, request.region.max_x, request.region.min_y,
            ),
            Err(err) => warn!("deployment aborted: {err}"),
        }
        world.resource_mut::<DeployLog>().push(request, outcome);
    }
}

fn run_single(world: &mut World, request: &DeployRequest) -> Result<DeployReport, DeployError> {
    if !world.contains_resource::<ScriptLibrary>() {
        return Err(DeployError::Source(SourceError::Unavailable(
            "no script library configured".to_string(),
        )));
    }
    world.resource_scope(|world, library: Mut<ScriptLibrary>| {
        world.resource_scope(|world, mut grid: Mut<WorldGrid>| {
            let mut site = WorldSite {
                world,
                grid: &mut grid,
            };
            deploy(request.region, request.owner, &*library.0, &mut site)
        })
    })
}
