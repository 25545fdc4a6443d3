use super::constants::{
    INITIAL_REVERB_DECAY_SEC, INITIAL_REVERB_ROOM_SIZE, IR_DAMPED_GAIN, IR_DAMPING_RATE,
    IR_DECAY_RATE, IR_EARLY_GAIN, IR_EARLY_MAX_AMPLITUDE, IR_EARLY_PROBABILITY_PER_ROOM,
    IR_EARLY_WINDOW_PER_ROOM, REVERB_SLOT_SILENT_GAIN,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoomPreset {
    Small,
    #[default]
    Medium,
    Large,
    Hall,
    Cathedral,
}

impl RoomPreset {
    pub const ALL: [RoomPreset; 5] = [
        RoomPreset::Small,
        RoomPreset::Medium,
        RoomPreset::Large,
        RoomPreset::Hall,
        RoomPreset::Cathedral,
    ];

    /// Unknown names fall back to `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => RoomPreset::Small,
            "medium" => RoomPreset::Medium,
            "large" => RoomPreset::Large,
            "hall" => RoomPreset::Hall,
            "cathedral" => RoomPreset::Cathedral,
            _ => RoomPreset::Medium,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoomPreset::Small => "small",
            RoomPreset::Medium => "medium",
            RoomPreset::Large => "large",
            RoomPreset::Hall => "hall",
            RoomPreset::Cathedral => "cathedral",
        }
    }

    /// (decay seconds, room size)
    pub fn shape(self) -> RoomShape {
        let (decay_sec, room_size) = match self {
            RoomPreset::Small => (0.8, 0.5),
            RoomPreset::Medium => (1.5, 1.0),
            RoomPreset::Large => (2.5, 2.0),
            RoomPreset::Hall => (4.0, 3.0),
            RoomPreset::Cathedral => (6.0, 5.0),
        };
        RoomShape {
            decay_sec,
            room_size,
        }
    }
}

/// Parameters of a synthetic impulse response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomShape {
    pub decay_sec: f32,
    pub room_size: f32,
}

impl RoomShape {
    /// Kernel installed before the user picks a room.
    pub const INITIAL: Self = Self {
        decay_sec: INITIAL_REVERB_DECAY_SEC,
        room_size: INITIAL_REVERB_ROOM_SIZE,
    };

    pub fn len_samples(&self, sample_rate: f32) -> usize {
        (sample_rate * self.decay_sec).round().max(0.0) as usize
    }
}

/// Stereo impulse response ready to be copied into an `AudioBuffer`.
#[derive(Clone, Debug)]
pub struct ImpulseResponse {
    pub sample_rate: f32,
    pub channels: [Vec<f32>; 2],
}

impl ImpulseResponse {
    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels[0].is_empty()
    }

    pub fn duration_sec(&self) -> f32 {
        if self.sample_rate > 0.0 {
            self.len() as f32 / self.sample_rate
        } else {
            0.0
        }
    }
}

/// Noise burst with an exponential tail, a sprinkle of early reflections sized
/// by the room, and random high-frequency damping that grows over time.
/// Channels are generated independently so the tail decorrelates left/right.
pub fn generate_impulse_response<R: Rng>(
    shape: RoomShape,
    sample_rate: f32,
    rng: &mut R,
) -> ImpulseResponse {
    let left = render_channel(shape, sample_rate, rng);
    let right = render_channel(shape, sample_rate, rng);
    ImpulseResponse {
        sample_rate,
        channels: [left, right],
    }
}

fn render_channel<R: Rng>(shape: RoomShape, sample_rate: f32, rng: &mut R) -> Vec<f32> {
    let len = shape.len_samples(sample_rate);
    let early_window_sec = IR_EARLY_WINDOW_PER_ROOM * shape.room_size;
    let early_probability =
        ((IR_EARLY_PROBABILITY_PER_ROOM * shape.room_size) as f64).clamp(0.0, 1.0);
    let decay = shape.decay_sec.max(f32::EPSILON);

    let mut buf = Vec::with_capacity(len);
    for i in 0..len {
        let t = i as f32 / sample_rate;
        let envelope = (-IR_DECAY_RATE * t / decay).exp();
        let mut sample = rng.gen_range(-1.0_f32..1.0) * envelope;

        if t < early_window_sec {
            let reflection = rng.gen_range(0.0_f32..IR_EARLY_MAX_AMPLITUDE);
            if rng.gen_bool(early_probability) {
                sample += reflection * envelope * IR_EARLY_GAIN;
            }
        }

        let high_freq_damping = (-t * IR_DAMPING_RATE).exp();
        if rng.gen::<f32>() > high_freq_damping {
            sample *= IR_DAMPED_GAIN;
        }
        buf.push(sample);
    }
    buf
}

/// Bookkeeping for two crossfading convolver slots.
///
/// A kernel may only be loaded into the idle slot once that slot has faded
/// out. Requests that arrive earlier wait, and a newer request replaces an
/// older waiting one.
#[derive(Clone, Debug)]
pub struct KernelCrossfade<K> {
    active: usize,
    pending: Option<K>,
}

impl<K> Default for KernelCrossfade<K> {
    fn default() -> Self {
        Self {
            active: 0,
            pending: None,
        }
    }
}

impl<K> KernelCrossfade<K> {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn idle(&self) -> usize {
        1 - self.active
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn request(&mut self, kernel: K) {
        self.pending = Some(kernel);
    }

    /// Hand back the waiting kernel once the idle slot is quiet. The idle slot
    /// becomes active; the caller loads the kernel there and fades it in.
    pub fn poll(&mut self, idle_gain: f32) -> Option<K> {
        if idle_gain > REVERB_SLOT_SILENT_GAIN {
            return None;
        }
        let kernel = self.pending.take()?;
        self.active = self.idle();
        Some(kernel)
    }
}
