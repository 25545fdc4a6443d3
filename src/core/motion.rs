use super::constants::{DEFAULT_RADIUS, MAX_RADIUS, MIN_RADIUS, RADIUS_SPEED, ROTATION_SPEED};
use super::spatial::{wrap_angle, SphericalPosition};
use fnv::FnvHashSet;

/// Keyboard-held movement controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    RotateLeft,
    RotateRight,
    TiltUp,
    TiltDown,
    IncreaseDistance,
    DecreaseDistance,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::TiltUp,
        Control::RotateLeft,
        Control::TiltDown,
        Control::RotateRight,
        Control::IncreaseDistance,
        Control::DecreaseDistance,
    ];

    /// Text of the matching key cap in the on-screen legend.
    pub fn legend_label(self) -> &'static str {
        match self {
            Control::TiltUp => "W",
            Control::RotateLeft => "A",
            Control::TiltDown => "S",
            Control::RotateRight => "D",
            Control::IncreaseDistance => "+",
            Control::DecreaseDistance => "-",
        }
    }
}

/// Map a `KeyboardEvent` (`key`, `code`) pair to a movement control.
#[inline]
pub fn control_for_key(key: &str, code: &str) -> Option<Control> {
    match code {
        "NumpadAdd" => return Some(Control::IncreaseDistance),
        "NumpadSubtract" => return Some(Control::DecreaseDistance),
        _ => {}
    }
    match key {
        "w" | "W" => Some(Control::TiltUp),
        "a" | "A" => Some(Control::RotateLeft),
        "s" | "S" => Some(Control::TiltDown),
        "d" | "D" => Some(Control::RotateRight),
        "+" | "=" => Some(Control::IncreaseDistance),
        "-" | "_" => Some(Control::DecreaseDistance),
        _ => None,
    }
}

/// One-shot actions bound to a key press rather than a held key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlayback,
    ResetPosition,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::TogglePlayback),
        "Escape" => Some(KeyAction::ResetPosition),
        _ => None,
    }
}

/// Controls currently held down. Written by key events, read once per frame.
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    held: FnvHashSet<Control>,
}

impl KeyState {
    /// Returns true when the control was not already held.
    pub fn press(&mut self, control: Control) -> bool {
        self.held.insert(control)
    }

    /// Returns true when the control was held.
    pub fn release(&mut self, control: Control) -> bool {
        self.held.remove(&control)
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.held.is_empty()
    }
}

/// Per-frame motion tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub rotation_speed: f32,
    pub radius_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub default_radius: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            radius_speed: RADIUS_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            default_radius: DEFAULT_RADIUS,
        }
    }
}

impl MotionParams {
    pub fn home(&self) -> SphericalPosition {
        SphericalPosition::new(0.0, 0.0, self.default_radius)
    }

    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.clamp(self.min_radius, self.max_radius)
    }
}

#[inline]
fn axis(keys: &KeyState, positive: Control, negative: Control) -> f32 {
    let mut v = 0.0;
    if keys.is_held(positive) {
        v += 1.0;
    }
    if keys.is_held(negative) {
        v -= 1.0;
    }
    v
}

/// Integrate one frame of held keys into `position`, then wrap the angles and
/// clamp the radius.
pub fn step(position: &mut SphericalPosition, keys: &KeyState, params: &MotionParams) {
    position.azimuth +=
        params.rotation_speed * axis(keys, Control::RotateRight, Control::RotateLeft);
    position.elevation += params.rotation_speed * axis(keys, Control::TiltUp, Control::TiltDown);
    position.radius += params.radius_speed
        * axis(keys, Control::IncreaseDistance, Control::DecreaseDistance);

    position.azimuth = wrap_angle(position.azimuth);
    position.elevation = wrap_angle(position.elevation);
    position.radius = params.clamp_radius(position.radius);
}
