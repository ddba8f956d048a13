//! World generation: FBm elevation, water basins, rock outcrops.

use bevy::prelude::*;
use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use rand::Rng;

use crate::config::{
    GRID_HEIGHT, GRID_WIDTH, ROCK_THRESHOLD, TERRAIN_BASE_FREQUENCY, TERRAIN_LACUNARITY,
    TERRAIN_OCTAVES, TERRAIN_PERSISTENCE, WATER_THRESHOLD,
};
use crate::grid::{Terrain, WorldGrid};
use crate::sim_rng::SimRng;

/// Marker resource that, when present, causes `init_world` to skip terrain
/// generation and leave an all-ground grid. Used by the test harness.
#[derive(Resource)]
pub struct SkipWorldInit;

pub fn init_world(
    mut commands: Commands,
    mut rng: ResMut<SimRng>,
    skip: Option<Res<SkipWorldInit>>,
) {
    let mut grid = WorldGrid::new(GRID_WIDTH, GRID_HEIGHT);
    if skip.is_none() {
        generate_terrain(&mut grid, &mut rng);
    }
    commands.insert_resource(grid);
}

fn generate_terrain(grid: &mut WorldGrid, rng: &mut SimRng) {
    let mut noise = FastNoiseLite::with_seed(rng.0.gen::<i32>());
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(TERRAIN_BASE_FREQUENCY));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(TERRAIN_OCTAVES));
    noise.set_fractal_gain(Some(TERRAIN_PERSISTENCE));
    noise.set_fractal_lacunarity(Some(TERRAIN_LACUNARITY));

    for y in 0..grid.height {
        for x in 0..grid.width {
            // get_noise_2d returns [-1, 1]; elevation is normalized to [0, 1].
            let raw = noise.get_noise_2d(x as f32, y as f32);
            let elevation = (raw + 1.0) * 0.5;

            let cell = grid.get_mut(x, y);
            cell.elevation = elevation;
            cell.terrain = if elevation < WATER_THRESHOLD {
                Terrain::Water
            } else if elevation > ROCK_THRESHOLD {
                Terrain::Rock
            } else {
                Terrain::Ground
            };
        }
    }

    // Scattered boulders on open ground.
    let boulders = (grid.width * grid.height) / 400;
    for _ in 0..boulders {
        let x = rng.0.gen_range(0..grid.width);
        let y = rng.0.gen_range(0..grid.height);
        let cell = grid.get_mut(x, y);
        if cell.terrain == Terrain::Ground {
            cell.terrain = Terrain::Rock;
        }
    }
}
