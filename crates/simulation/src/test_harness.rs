//! # TestWorld — headless integration harness
//!
//! Wraps `bevy::app::App` + [`SimulationPlugin`](crate::SimulationPlugin)
//! for running tests without a window or renderer. World generation is
//! skipped, leaving a blank all-ground grid; builder methods shape the map,
//! then `tick()` advances the fixed-update schedule and the accessors
//! assert on the resulting ECS state.

use bevy::app::App;
use bevy::prelude::*;

use crate::actions::{ActionQueue, ActionResultLog, GameAction};
use crate::deploy::{
    DeployLog, DeployQueue, DeployRequest, Region, ScriptLibrary, ScriptSource, SourceError,
};
use crate::grid::{Cell, Terrain, WorldGrid};
use crate::structures::{place_structure, Assembling, LogicScript, Owner, Structure, StructureKind};
use crate::world_init::SkipWorldInit;
use crate::{SimulationPlugin, TickCounter};

/// In-memory script source serving numbered `print` programs.
pub struct SeqSource {
    pub scripts: Vec<String>,
}

impl SeqSource {
    pub fn numbered(n: usize) -> Self {
        Self {
            scripts: (0..n).map(|i| format!("print {i}\nstop")).collect(),
        }
    }
}

impl ScriptSource for SeqSource {
    fn script_count(&self) -> Result<usize, SourceError> {
        Ok(self.scripts.len())
    }

    fn read_script(&self, index: usize) -> Result<String, SourceError> {
        self.scripts
            .get(index)
            .cloned()
            .ok_or_else(|| SourceError::Missing {
                index,
                reason: "past end of source".to_string(),
            })
    }
}

pub struct TestWorld {
    app: App,
}

impl TestWorld {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// A blank world: all-ground grid, no structures, no script library.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert the marker BEFORE SimulationPlugin so init_world skips
        // terrain generation.
        app.insert_resource(SkipWorldInit);
        app.add_plugins(SimulationPlugin);

        // Drive time manually: each app.update() advances real (and thus
        // virtual) time by a fixed 100 ms, which the FixedUpdate accumulator
        // consumes as exactly one 10 Hz tick. Without this the default
        // Automatic strategy advances virtual time by the microsecond-scale
        // real frame delta, so the accumulator never reaches the tick
        // threshold and no FixedUpdate system ever runs.
        app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            std::time::Duration::from_millis(100),
        ));

        // Run one update so Startup systems execute.
        app.update();

        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_script_library(
        mut self,
        source: impl ScriptSource + Send + Sync + 'static,
    ) -> Self {
        self.app.insert_resource(ScriptLibrary::new(source));
        self
    }

    /// Flood the inclusive rectangle with water.
    pub fn with_water_rect(mut self, x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        let mut grid = self.app.world_mut().resource_mut::<WorldGrid>();
        for y in y0..=y1 {
            for x in x0..=x1 {
                if grid.in_bounds(x, y) {
                    grid.get_mut(x, y).terrain = Terrain::Water;
                }
            }
        }
        self
    }

    /// Place a finished structure directly, bypassing the action queue.
    pub fn with_structure(mut self, x: i32, y: i32, kind: StructureKind, owner: Owner) -> Self {
        self.app
            .world_mut()
            .resource_scope(|world, mut grid: Mut<WorldGrid>| {
                place_structure(world, &mut grid, x, y, kind, owner, true)
                    .expect("harness setup placement failed");
            });
        self
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub fn queue_action(&mut self, action: GameAction) {
        let tick = self.app.world().resource::<TickCounter>().0;
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(tick, action);
    }

    pub fn queue_deploy(&mut self, region: Region, owner: Owner) {
        self.app
            .world_mut()
            .resource_mut::<DeployQueue>()
            .push(DeployRequest { region, owner });
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks. The simulation runs at 10 Hz; each call
    /// advances virtual time by 100 ms and updates the app once.
    pub fn tick(&mut self, n: u32) {
        let dt = std::time::Duration::from_millis(100);
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Virtual>>()
                .advance_by(dt);
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn grid(&self) -> &WorldGrid {
        self.app.world().resource::<WorldGrid>()
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        self.grid().get(x, y)
    }

    pub fn action_log(&self) -> &ActionResultLog {
        self.app.world().resource::<ActionResultLog>()
    }

    pub fn deploy_log(&self) -> &DeployLog {
        self.app.world().resource::<DeployLog>()
    }

    /// Count all structure entities.
    pub fn structure_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<Structure>>()
            .iter(world)
            .count()
    }

    /// Program text of the structure at `(x, y)`, if one is there and holds
    /// a script slot.
    pub fn script_at(&self, x: usize, y: usize) -> Option<String> {
        let entity = self.grid().get(x, y).structure?;
        self.app
            .world()
            .get::<LogicScript>(entity)
            .map(|script| script.source.clone())
    }

    /// Whether the structure at `(x, y)` is still assembling.
    pub fn is_assembling(&self, x: usize, y: usize) -> bool {
        match self.grid().get(x, y).structure {
            Some(entity) => self.app.world().get::<Assembling>(entity).is_some(),
            None => false,
        }
    }
}
