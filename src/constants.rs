// Presentation constants for the canvas views and the HUD.

// Canvas sizing
pub const CANVAS_MIN_HEIGHT_PX: f64 = 400.0;
pub const CANVAS_MAX_HEIGHT_PX: f64 = 600.0;
pub const CANVAS_VIEWPORT_HEIGHT_FRACTION: f64 = 0.5;

// Layout: top-down on the left, side view top-right, radar bottom-right
pub const TOP_DOWN_WIDTH_FRACTION: f64 = 0.55;
pub const SIDE_VIEW_HEIGHT_FRACTION: f64 = 0.5;
pub const RADAR_RADIUS_FRACTION: f64 = 0.35;
pub const RADAR_RINGS: u32 = 3;

// Palette
pub const BACKGROUND: &str = "#0a0a1a";
pub const GRID: &str = "rgba(0, 217, 255, 0.3)";
pub const GRID_FAINT: &str = "rgba(0, 217, 255, 0.1)";
pub const LABEL: &str = "#666";
pub const ACCENT: &str = "#00d9ff";
pub const LISTENER: &str = "#4ecdc4";
pub const LISTENER_EARS: &str = "#2a9d8f";
pub const EMITTER: &str = "#ff6b6b";
pub const EMITTER_SHADOW: &str = "rgba(255, 107, 107, 0.3)";
pub const CONNECTION: &str = "rgba(255, 230, 109, 0.4)";
pub const DISTANCE_TEXT: &str = "rgba(255, 230, 109, 0.9)";
pub const SIDE_BACKGROUND: &str = "rgba(0, 20, 40, 0.5)";
pub const RADAR_BACKGROUND: &str = "rgba(20, 0, 40, 0.5)";
pub const GROUND_LINE: &str = "rgba(100, 255, 100, 0.3)";
pub const FORWARD_LINE: &str = "rgba(100, 100, 255, 0.3)";

// Emitter marker
pub const EMITTER_BASE_SIZE: f64 = 12.0;
pub const EMITTER_HEIGHT_SIZE_GAIN: f64 = 0.05; // marker grows with +y in the top-down view
pub const PULSE_RATE: f64 = 5.0; // rad/s of the playing pulse
pub const PULSE_AMPLITUDE: f64 = 3.0;
pub const RIPPLE_COUNT: u32 = 3;
pub const RIPPLE_SPACING: f64 = 20.0;
pub const RIPPLE_DRIFT_PER_SEC: f64 = 30.0;
pub const LISTENER_SIZE: f64 = 15.0;

// Elevation rings drawn inside the top-down sphere (degrees)
pub const LATITUDE_RINGS_DEG: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];
pub const LONGITUDE_STEP_DEG: f64 = 45.0;

// HUD
pub const DIRECTION_BADGE_WIDTH: f64 = 135.0;
pub const DIRECTION_BADGE_HEIGHT: f64 = 35.0;
pub const STATUS_ON: &str = "Sound on";
pub const STATUS_OFF: &str = "Sound off";
pub const STATUS_UNAVAILABLE: &str = "Audio unavailable";
pub const DECODE_FAILED_MESSAGE: &str = "Could not load the audio file.";
