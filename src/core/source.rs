use super::constants::{DEFAULT_FREQUENCY_HZ, DEFAULT_VOLUME, NOISE_BUFFER_SECONDS};
use super::reverb::{RoomPreset, RoomShape};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SoundType {
    #[default]
    Sine,
    Square,
    Noise,
    /// User-supplied decoded sample, looped.
    Custom,
}

impl SoundType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sine" => Some(SoundType::Sine),
            "square" => Some(SoundType::Square),
            "noise" => Some(SoundType::Noise),
            "custom" => Some(SoundType::Custom),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SoundType::Sine => "sine",
            SoundType::Square => "square",
            SoundType::Noise => "noise",
            SoundType::Custom => "custom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanningModel {
    #[default]
    Hrtf,
    EqualPower,
}

impl PanningModel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hrtf" => Some(PanningModel::Hrtf),
            "equalpower" => Some(PanningModel::EqualPower),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DistanceModel {
    Linear,
    #[default]
    Inverse,
    Exponential,
}

impl DistanceModel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Some(DistanceModel::Linear),
            "inverse" => Some(DistanceModel::Inverse),
            "exponential" => Some(DistanceModel::Exponential),
            _ => None,
        }
    }
}

/// Control-surface state for the source and the fixed-topology graph.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSettings {
    pub volume: f32,
    pub frequency_hz: f32,
    pub sound: SoundType,
    pub panning: PanningModel,
    pub distance: DistanceModel,
    /// `None` until a room is picked; the graph then starts on `RoomShape::INITIAL`.
    pub room: Option<RoomPreset>,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            sound: SoundType::default(),
            panning: PanningModel::default(),
            distance: DistanceModel::default(),
            room: None,
        }
    }
}

impl AudioSettings {
    /// Shape of the kernel the graph should be running.
    pub fn reverb_shape(&self) -> RoomShape {
        self.room.map_or(RoomShape::INITIAL, RoomPreset::shape)
    }
}

/// Mono white noise in [-1, 1), long enough to loop without an audible period.
pub fn white_noise<R: Rng>(sample_rate: f32, rng: &mut R) -> Vec<f32> {
    let len = (sample_rate * NOISE_BUFFER_SECONDS).round().max(0.0) as usize;
    (0..len).map(|_| rng.gen_range(-1.0_f32..1.0)).collect()
}
