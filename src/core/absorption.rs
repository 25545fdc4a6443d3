use super::constants::{
    CUTOFF_DISPLAY_NONE_ABOVE_HZ, DEFAULT_ABSORPTION_COEFF, MAX_CUTOFF_HZ, MIN_CUTOFF_HZ,
};

/// Distance-driven low-pass used to fake high-frequency loss in air.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirAbsorption {
    pub enabled: bool,
    /// Curve exponent in [0, 1]; smaller values darken nearby sources sooner.
    pub coefficient: f32,
}

impl Default for AirAbsorption {
    fn default() -> Self {
        Self {
            enabled: true,
            coefficient: DEFAULT_ABSORPTION_COEFF,
        }
    }
}

impl AirAbsorption {
    pub fn set_coefficient(&mut self, coefficient: f32) {
        self.coefficient = coefficient.clamp(0.0, 1.0);
    }

    /// Low-pass cutoff for an emitter at `radius`, or the open cutoff when disabled.
    pub fn cutoff_hz(&self, radius: f32, max_radius: f32) -> f32 {
        if !self.enabled {
            return MAX_CUTOFF_HZ;
        }
        cutoff_for_distance(radius, max_radius, self.coefficient)
    }
}

/// cutoff = max - (max - min) * (radius / max_radius)^coefficient
#[inline]
pub fn cutoff_for_distance(radius: f32, max_radius: f32, coefficient: f32) -> f32 {
    let normalized = if max_radius > 0.0 {
        (radius / max_radius).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let damping = normalized.powf(coefficient);
    MAX_CUTOFF_HZ - (MAX_CUTOFF_HZ - MIN_CUTOFF_HZ) * damping
}

/// HUD text for a cutoff: "none" while the filter is practically open.
pub fn cutoff_label(cutoff_hz: f32) -> String {
    if cutoff_hz > CUTOFF_DISPLAY_NONE_ABOVE_HZ {
        "none".to_string()
    } else {
        format!("{:.0} Hz", cutoff_hz)
    }
}
