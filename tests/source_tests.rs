// Host-side tests for source settings and the looped noise buffer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod spatial_core;

use rand::rngs::StdRng;
use rand::SeedableRng;
use spatial_core::{
    white_noise, AudioSettings, DistanceModel, PanningModel, RoomPreset, RoomShape, SoundType,
};

#[test]
fn sound_types_parse_from_select_values() {
    for sound in [
        SoundType::Sine,
        SoundType::Square,
        SoundType::Noise,
        SoundType::Custom,
    ] {
        assert_eq!(SoundType::from_name(sound.name()), Some(sound));
    }
    assert_eq!(SoundType::from_name("triangle"), None);
}

#[test]
fn panning_models_parse_case_insensitively() {
    assert_eq!(PanningModel::from_name("HRTF"), Some(PanningModel::Hrtf));
    assert_eq!(
        PanningModel::from_name("equalpower"),
        Some(PanningModel::EqualPower)
    );
    assert_eq!(PanningModel::from_name("stereo"), None);
}

#[test]
fn distance_models_parse() {
    assert_eq!(
        DistanceModel::from_name("linear"),
        Some(DistanceModel::Linear)
    );
    assert_eq!(
        DistanceModel::from_name("Inverse"),
        Some(DistanceModel::Inverse)
    );
    assert_eq!(
        DistanceModel::from_name("exponential"),
        Some(DistanceModel::Exponential)
    );
    assert_eq!(DistanceModel::from_name("log"), None);
}

#[test]
fn default_settings_match_control_surface() {
    let s = AudioSettings::default();
    assert_eq!(s.volume, 0.5);
    assert_eq!(s.frequency_hz, 440.0);
    assert_eq!(s.sound, SoundType::Sine);
    assert_eq!(s.panning, PanningModel::Hrtf);
    assert_eq!(s.distance, DistanceModel::Inverse);
    assert_eq!(s.room, None);
}

#[test]
fn reverb_shape_starts_on_initial_kernel() {
    assert_eq!(AudioSettings::default().reverb_shape(), RoomShape::INITIAL);
}

#[test]
fn room_picked_before_start_sets_first_kernel() {
    let settings = AudioSettings {
        room: Some(RoomPreset::Cathedral),
        ..AudioSettings::default()
    };
    let shape = settings.reverb_shape();
    assert_eq!(shape, RoomPreset::Cathedral.shape());
    assert_eq!(shape.len_samples(44_100.0), 264_600);
}

#[test]
fn noise_buffer_lasts_two_seconds_within_unit_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let noise = white_noise(44_100.0, &mut rng);
    assert_eq!(noise.len(), 88_200);
    assert!(noise.iter().all(|s| (-1.0..1.0).contains(s)));
    // Roughly zero mean
    let mean: f32 = noise.iter().sum::<f32>() / noise.len() as f32;
    assert!(mean.abs() < 0.05);
}
