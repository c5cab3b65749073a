// Shared tuning constants for the starfield field, flashes and surface handling.

// Lattice
pub const BASE_SPACING: f32 = 35.0; // px between neighbouring points on desktop
pub const BASE_SIZE_FRACTION: f32 = 0.25; // idle point size as a fraction of spacing

// Ambient breathing wave
pub const BREATH_FREQ: f32 = 2.0; // temporal frequency (radians per unit of animation time)
pub const BREATH_KX: f32 = 0.01; // spatial phase per px along x
pub const BREATH_KY: f32 = 0.01; // spatial phase per px along y
pub const WAVE_WARMUP: f32 = 1.0; // animation time until the spatial phase is fully in
pub const ALPHA_BASE_MIN: f32 = 0.12;
pub const ALPHA_BASE_RANGE: f32 = 0.13; // ambient alpha lives in [MIN, MIN + RANGE]

// Animation time advanced per processed frame at 60 fps
pub const TIME_STEP_60FPS: f32 = 0.01;

// Pointer interaction
pub const POINTER_RADIUS: f32 = 180.0; // px falloff radius
pub const POINTER_SIZE_GAIN: f32 = 8.0;
pub const POINTER_ALPHA_GAIN: f32 = 0.4;
pub const FAR_AWAY: [f32; 2] = [-1000.0, -1000.0]; // "no interaction" sentinel

// Flash events
pub const FLASH_SIZE_GAIN: f32 = 5.0;
pub const FLASH_ALPHA_GAIN: f32 = 0.35;
pub const FLASH_MIN_AGE: u32 = 60; // ticks
pub const FLASH_MAX_AGE: u32 = 160; // ticks
pub const FLASH_MIN_SCALE: f32 = 1.0;
pub const FLASH_MAX_SCALE: f32 = 2.5;
pub const SPAWN_MARGIN: f32 = 120.0; // px added around the band when picking anchors

// Glow
pub const GLOW_THRESHOLD: f32 = 0.2; // alpha below which the glow is skipped
pub const GLOW_RADIUS_FACTOR: f32 = 1.5;
pub const GLOW_ALPHA_FACTOR: f32 = 0.5;

// Star outline
pub const STAR_INNER_FACTOR: f32 = 0.15;
pub const STAR_OUTER_FACTOR: f32 = 0.5;
pub const CIRCLE_RADIUS_FACTOR: f32 = 0.3; // plain disc used on constrained devices

// Static field variety (most constrained tier)
pub const STATIC_SIZE_MIN: f32 = 0.6; // multiples of the base size
pub const STATIC_SIZE_MAX: f32 = 1.2;

// Surface
pub const HEIGHT_NOISE_THRESHOLD: f32 = 100.0; // px; smaller document height deltas are ignored
pub const BAND_MARGIN: f32 = 100.0; // px drawn above and below the viewport
pub const MAX_SURFACE_EXTENT: f32 = 32_000.0; // px; browsers refuse larger canvases
pub const MAX_SURFACE_AREA: f32 = 16_777_216.0; // px²; iOS Safari canvas area limit (4096²)

// Frame pacing
pub const FRAME_TOLERANCE_MS: f64 = 1.0; // accept callbacks arriving this early
