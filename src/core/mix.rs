use super::constants::DEFAULT_REVERB_WET;

/// Dry/wet split between the direct path and the convolver path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WetDryMix {
    pub enabled: bool,
    wet_amount: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixGains {
    pub dry: f32,
    pub wet: f32,
}

impl Default for WetDryMix {
    fn default() -> Self {
        Self {
            enabled: true,
            wet_amount: DEFAULT_REVERB_WET,
        }
    }
}

impl WetDryMix {
    pub fn new(enabled: bool, wet_amount: f32) -> Self {
        Self {
            enabled,
            wet_amount: wet_amount.clamp(0.0, 1.0),
        }
    }

    pub fn wet_amount(&self) -> f32 {
        self.wet_amount
    }

    pub fn set_wet_amount(&mut self, amount: f32) {
        self.wet_amount = amount.clamp(0.0, 1.0);
    }

    /// Dry always tracks `1 - wet_amount`; wet drops to zero while disabled.
    pub fn gains(&self) -> MixGains {
        MixGains {
            dry: 1.0 - self.wet_amount,
            wet: if self.enabled { self.wet_amount } else { 0.0 },
        }
    }
}
