use super::absorption::AirAbsorption;
use super::mix::{MixGains, WetDryMix};
use super::motion::{self, KeyState, MotionParams};
use super::spatial::{distance, wrap_angle, ListenerPose, SphericalPosition};
use glam::Vec3;

/// Tuning for a scene; the control surface mutates the runtime copies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub motion: MotionParams,
    pub absorption: AirAbsorption,
    pub mix: WetDryMix,
}

/// Read-only view of the scene handed to audio, canvas and HUD every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSnapshot {
    pub spherical: SphericalPosition,
    pub cartesian: Vec3,
    pub listener: ListenerPose,
    pub distance: f32,
    pub playing: bool,
    pub cutoff_hz: f32,
    pub mix: MixGains,
    pub max_radius: f32,
}

/// Owns all emitter and mix state. Nothing outside reaches into it except
/// through the setters and `step`.
#[derive(Clone, Debug)]
pub struct SpatialScene {
    motion: MotionParams,
    position: SphericalPosition,
    listener: ListenerPose,
    absorption: AirAbsorption,
    mix: WetDryMix,
    playing: bool,
}

impl Default for SpatialScene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl SpatialScene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            motion: config.motion,
            position: config.motion.home(),
            listener: ListenerPose::ORIGIN,
            absorption: config.absorption,
            mix: config.mix,
            playing: false,
        }
    }

    /// Advance one animation frame and return the resulting snapshot.
    pub fn step(&mut self, keys: &KeyState) -> SceneSnapshot {
        motion::step(&mut self.position, keys, &self.motion);
        self.snapshot()
    }

    /// Back to straight ahead at the default distance, whatever keys are held.
    pub fn reset(&mut self) -> SceneSnapshot {
        self.position = self.motion.home();
        self.snapshot()
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let cartesian = self.position.to_cartesian();
        SceneSnapshot {
            spherical: self.position,
            cartesian,
            listener: self.listener,
            distance: distance(cartesian, self.listener.position),
            playing: self.playing,
            cutoff_hz: self
                .absorption
                .cutoff_hz(self.position.radius, self.motion.max_radius),
            mix: self.mix.gains(),
            max_radius: self.motion.max_radius,
        }
    }

    /// Place the emitter directly; the radius is clamped and angles wrapped.
    pub fn set_position(&mut self, position: SphericalPosition) {
        self.position = SphericalPosition::new(
            wrap_angle(position.azimuth),
            wrap_angle(position.elevation),
            self.motion.clamp_radius(position.radius),
        );
    }

    pub fn position(&self) -> SphericalPosition {
        self.position
    }

    pub fn motion(&self) -> &MotionParams {
        &self.motion
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn mix(&self) -> WetDryMix {
        self.mix
    }

    pub fn set_reverb_enabled(&mut self, enabled: bool) {
        self.mix.enabled = enabled;
    }

    pub fn set_reverb_amount(&mut self, amount: f32) {
        self.mix.set_wet_amount(amount);
    }

    pub fn absorption(&self) -> AirAbsorption {
        self.absorption
    }

    pub fn set_air_absorption_enabled(&mut self, enabled: bool) {
        self.absorption.enabled = enabled;
    }

    pub fn set_absorption_coefficient(&mut self, coefficient: f32) {
        self.absorption.set_coefficient(coefficient);
    }
}
