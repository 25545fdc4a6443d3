pub mod absorption;
pub mod constants;
pub mod direction;
pub mod mix;
pub mod motion;
pub mod projection;
pub mod reverb;
pub mod scene;
pub mod source;
pub mod spatial;

pub use absorption::{cutoff_for_distance, cutoff_label, AirAbsorption};
pub use direction::{Altitude, Direction, Heading};
pub use mix::{MixGains, WetDryMix};
pub use motion::{action_for_key, control_for_key, Control, KeyAction, KeyState, MotionParams};
pub use reverb::{
    generate_impulse_response, ImpulseResponse, KernelCrossfade, RoomPreset, RoomShape,
};
pub use scene::{SceneConfig, SceneSnapshot, SpatialScene};
pub use source::{white_noise, AudioSettings, DistanceModel, PanningModel, SoundType};
pub use spatial::{wrap_angle, ListenerPose, SphericalPosition};
