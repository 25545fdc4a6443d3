// Simulation tuning constants shared by the scene, the mappers and the web frontend.

// Emitter motion (per animation frame)
pub const ROTATION_SPEED: f32 = 0.03; // radians per frame while a rotate/tilt key is held
pub const RADIUS_SPEED: f32 = 0.1; // distance units per frame while +/- is held

// Emitter distance bounds
pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 15.0;
pub const DEFAULT_RADIUS: f32 = 5.0;

// Air absorption low-pass mapping
pub const MAX_CUTOFF_HZ: f32 = 20_000.0; // effectively unfiltered
pub const MIN_CUTOFF_HZ: f32 = 800.0;
pub const DEFAULT_ABSORPTION_COEFF: f32 = 0.5;
pub const LOWPASS_Q: f32 = 0.7;
pub const CUTOFF_DISPLAY_NONE_ABOVE_HZ: f32 = 10_000.0;

// Reverb
pub const DEFAULT_REVERB_WET: f32 = 0.3;
pub const INITIAL_REVERB_DECAY_SEC: f32 = 2.0;
pub const INITIAL_REVERB_ROOM_SIZE: f32 = 2.0;
pub const IR_DECAY_RATE: f32 = 3.0; // envelope = exp(-rate * t / decay)
pub const IR_EARLY_WINDOW_PER_ROOM: f32 = 0.1; // seconds of early reflections per unit room size
pub const IR_EARLY_PROBABILITY_PER_ROOM: f32 = 0.02;
pub const IR_EARLY_MAX_AMPLITUDE: f32 = 0.3;
pub const IR_EARLY_GAIN: f32 = 2.0;
pub const IR_DAMPING_RATE: f32 = 2.0; // highFreqDamping = exp(-rate * t)
pub const IR_DAMPED_GAIN: f32 = 0.7;

// Smoothed parameter changes (seconds, used as setTargetAtTime time constant)
pub const PARAM_RAMP_TAU_SEC: f64 = 0.1;

// Sources
pub const DEFAULT_VOLUME: f32 = 0.5;
pub const DEFAULT_FREQUENCY_HZ: f32 = 440.0;
pub const NOISE_BUFFER_SECONDS: f32 = 2.0;

// Panner distance model parameters
pub const PANNER_REF_DISTANCE: f64 = 1.0;
pub const PANNER_MAX_DISTANCE: f64 = 50.0;
pub const PANNER_ROLLOFF: f64 = 1.0;

// Kernel swap: the outgoing convolver fades out while the new one fades in
pub const REVERB_CROSSFADE_TAU_SEC: f64 = 0.05;
pub const REVERB_SLOT_SILENT_GAIN: f32 = 0.01; // a slot below this may take a new kernel
