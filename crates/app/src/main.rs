//! Headless front end: generate a world, deploy a script bank onto a region
//! of it, and print the outcome with an ASCII map of the touched cells.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use scripts::ScriptBank;
use simulation::ascii_map;
use simulation::deploy::{DeployError, DeployLog, DeployQueue, DeployRequest, Region, ScriptLibrary};
use simulation::grid::WorldGrid;
use simulation::structures::{Owner, Team};
use simulation::SimulationPlugin;

struct Args {
    root: PathBuf,
    region: Region,
    team: u8,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let root = PathBuf::from(args.next().ok_or("missing <data-root>")?);
    let min_x = parse_int(args.next(), "<min-x>")?;
    let min_y = parse_int(args.next(), "<min-y>")?;
    let max_x = parse_int(args.next(), "<max-x>")?;
    let team = match args.next() {
        Some(raw) => raw
            .parse::<u8>()
            .map_err(|err| format!("bad [team] {raw:?}: {err}"))?,
        None => 0,
    };
    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument {extra:?}"));
    }
    Ok(Args {
        root,
        region: Region::new(min_x, min_y, max_x),
        team,
    })
}

fn parse_int(raw: Option<String>, name: &str) -> Result<i32, String> {
    let raw = raw.ok_or_else(|| format!("missing {name}"))?;
    raw.parse::<i32>()
        .map_err(|err| format!("bad {name} {raw:?}: {err}"))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: logicyard <data-root> <min-x> <min-y> <max-x> [team]");
            return ExitCode::FAILURE;
        }
    };

    let bank = match ScriptBank::open(&args.root) {
        Ok(bank) => bank,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    app.add_plugins(SimulationPlugin);
    app.insert_resource(ScriptLibrary::new(bank));

    // First update runs Startup, generating the world.
    app.update();

    let owner = Owner {
        unit: 0,
        team: Team(args.team),
    };
    app.world_mut().resource_mut::<DeployQueue>().push(DeployRequest {
        region: args.region,
        owner,
    });

    // One fixed tick at 10 Hz drains the queue.
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .advance_by(Duration::from_millis(100));
    app.update();

    let outcome = app
        .world()
        .resource::<DeployLog>()
        .latest()
        .cloned();
    let Some((request, outcome)) = outcome else {
        eprintln!("deployment never ran");
        return ExitCode::FAILURE;
    };

    let grid = app.world().resource::<WorldGrid>();
    match outcome {
        Ok(report) => {
            println!(
                "deployed {} scripts for team {} starting at ({}, {})",
                report.placed, args.team, request.region.min_x, request.region.min_y,
            );
            if report.placed > 0 {
                let (_, last_y) = request.region.cell(report.placed - 1);
                println!(
                    "{}",
                    ascii_map::render_region(
                        grid,
                        request.region.min_x,
                        request.region.min_y,
                        request.region.max_x,
                        last_y,
                    ),
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("deployment failed: {err}");
            if let DeployError::Placement { y, .. } = err {
                // Show what did land before the abort.
                eprintln!(
                    "{}",
                    ascii_map::render_region(
                        grid,
                        request.region.min_x,
                        request.region.min_y,
                        request.region.max_x,
                        y,
                    ),
                );
            }
            ExitCode::FAILURE
        }
    }
}
