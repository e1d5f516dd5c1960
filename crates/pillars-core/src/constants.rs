// Shared animation/shading tuning constants used by both web and native frontends.

// Grid layout
pub const GRID_ROWS: usize = 24;
pub const GRID_COLS: usize = 24;
pub const GRID_SPACING: f32 = 1.25; // world units between pillar centres
pub const MAX_HEIGHT: f32 = 14.0; // scales the [0, 1] wave mix into a height factor

// Per-pillar transition duration range (seconds), drawn once at creation
pub const DURATION_MIN_SEC: f32 = 0.35;
pub const DURATION_MAX_SEC: f32 = 1.1;

pub const DEFAULT_SEED: u64 = 42;

// Slow spatial wave
pub const WAVE1_SPATIAL: f32 = 0.5;
pub const WAVE1_SPEED: f32 = 3.0;
// Fast wave, scaled by the pointer-driven frequency multiplier
pub const WAVE2_X: f32 = 1.5;
pub const WAVE2_Z: f32 = 1.2;
pub const WAVE2_SPEED: f32 = 8.0;
// Cross wave, scaled by the pointer-driven amplitude multiplier
pub const WAVE3_Z: f32 = 0.7;
pub const WAVE3_SPEED: f32 = 5.0;
pub const WAVE3_AMPLITUDE: f32 = 0.3;

// Pointer mapping ranges
pub const FREQ_MULTIPLIER_MIN: f32 = 0.1;
pub const FREQ_MULTIPLIER_MAX: f32 = 3.0;
pub const AMP_MULTIPLIER_MIN: f32 = 0.1;
pub const AMP_MULTIPLIER_MAX: f32 = 1.0;

// Per-pillar spin: rotation = (x + z) * ROTATION_SPATIAL + now * ROTATION_SPEED + pointer_x * ROTATION_POINTER
pub const ROTATION_SPATIAL: f32 = 0.1;
pub const ROTATION_SPEED: f32 = 2.0;
pub const ROTATION_POINTER: f32 = 0.01;

// Geometry
pub const VERTICES_PER_PILLAR: usize = 36; // 6 faces * 2 triangles * 3 corners

// Default palette (0-255 RGB); slot 5 of the uniform array repeats slot 0
pub const DEFAULT_PALETTE: [[u8; 3]; 5] = [
    [255, 94, 120],  // coral
    [255, 196, 87],  // amber
    [82, 220, 196],  // mint
    [72, 140, 255],  // azure
    [168, 96, 255],  // violet
];
pub const PALETTE_SLOTS: usize = 9; // uniform array length, only 0..=5 are read

// Fresnel band panning
pub const FRESNEL_SPEED: f32 = 0.15;
pub const FRESNEL_TILE: f32 = 1.6;

// Lights
pub const LIGHT_DIR: [f32; 3] = [0.4, -1.0, 0.6];
pub const SUN_LIGHT_DIR: [f32; 3] = [-0.6, -0.8, 0.3];
pub const SUN_LIGHT_COLOR: [u8; 3] = [255, 236, 210];

// Material
pub const METALNESS: f32 = 0.35;
pub const ROUGHNESS: f32 = 0.45;

// Hemisphere ambient
pub const SKY_COLOR: [f32; 3] = [0.32, 0.42, 0.62];
pub const GROUND_COLOR: [f32; 3] = [0.12, 0.09, 0.08];
pub const AMBIENT_STRENGTH: f32 = 0.25;

// Pillar tips brighten toward a highlight over this many units of height
pub const TIP_TINT_HEIGHT: f32 = 50.0;

// Environment map is always resampled to this size
pub const ENV_MAP_WIDTH: u32 = 1024;
pub const ENV_MAP_HEIGHT: u32 = 512;

// Camera
pub const CAMERA_AZIMUTH: f32 = 0.785_398_2; // 45 degrees
pub const CAMERA_ELEVATION: f32 = 0.615_479_7; // isometric tilt, atan(1/sqrt(2))
pub const CAMERA_DISTANCE_SCALE: f32 = 2.0; // eye distance as a multiple of the grid diagonal
pub const CAMERA_ZOOM_MIN: f32 = 0.25; // orbit zoom bounds, relative to the fitted half-height
pub const CAMERA_ZOOM_MAX: f32 = 4.0;
pub const ORBIT_RADIANS_PER_PIXEL: f32 = 0.005;
pub const ORBIT_ELEVATION_LIMIT: f32 = 1.45; // stay short of the poles

pub const CLEAR_COLOR: [f64; 3] = [0.03, 0.035, 0.06];

#[inline]
pub fn rgb255(c: [u8; 3]) -> [f32; 3] {
    [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0]
}
