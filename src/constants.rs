/// Narrative layout and scene tuning constants.
///
/// These express intended behavior (reveal windows, parallax factors,
/// particle counts) and keep magic numbers out of the scene code.
// Number of scenes partitioning the scrollable distance
pub const TOTAL_SCENES: usize = 6;

// Opening scene
pub const OPENING_TEXT_FADE_RATE: f64 = 3.0; // text gone by t = 1/3
pub const OPENING_BG_PARALLAX_PX: f64 = 50.0;
pub const OPENING_BG_SCALE_SPAN: f64 = 0.05;
pub const OPENING_HINT_CUTOFF: f64 = 0.1;

// Cloud parallax factors (percent of viewport per unit progress)
pub const CLOUD_DRIFT_BACK: f64 = 100.0;
pub const CLOUD_DRIFT_MID: f64 = 60.0;
pub const CLOUD_DRIFT_FRONT: f64 = 80.0;

// Sankranti scene
pub const SUN_ROTATE_SPAN_DEG: f64 = 30.0;
pub const SUN_SCALE_BASE: f64 = 0.8;
pub const SUN_SCALE_SPAN: f64 = 0.4;
pub const SUN_TRAVEL_FROM_PX: f64 = 100.0;
pub const SUN_TRAVEL_TO_PX: f64 = -50.0;
pub const SUN_RAY_COUNT: usize = 8;

// Transition scene
pub const STAR_COUNT: usize = 20;
pub const DARKNESS_MAX: f64 = 0.85;

// Lohri scene
pub const FIRE_RAMP_RATE: f64 = 1.5; // full intensity at t = 2/3
pub const EMBER_MAX: usize = 40;
pub const GLOW_PULSE_CYCLES: f64 = 4.0; // sine cycles across one scene

// Future scene
pub const MOTE_COUNT: usize = 12;
pub const END_MARKER_CUTOFF: f64 = 0.9;

// Particle field seed; fixed so reloads produce the same sky
pub const PARTICLE_SEED: u64 = 0x4c6f_6872_6921;
