pub const GRID_WIDTH: usize = 128;
pub const GRID_HEIGHT: usize = 128;

/// Elevation below this is water; structures cannot be placed there.
pub const WATER_THRESHOLD: f32 = 0.32;
/// Elevation above this is bare rock; structures cannot be placed there either.
pub const ROCK_THRESHOLD: f32 = 0.85;

pub const TERRAIN_OCTAVES: i32 = 5;
pub const TERRAIN_PERSISTENCE: f32 = 0.45;
pub const TERRAIN_LACUNARITY: f32 = 2.0;
pub const TERRAIN_BASE_FREQUENCY: f32 = 0.012;

/// Fixed ticks a manually placed structure spends assembling before it
/// becomes operational (~4 seconds at 10 Hz). Deployed structures skip this.
pub const ASSEMBLY_TICKS: u32 = 40;
