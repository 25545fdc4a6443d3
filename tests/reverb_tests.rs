// Host-side tests for room presets and the synthetic impulse response.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod spatial_core;

use rand::rngs::StdRng;
use rand::SeedableRng;
use spatial_core::constants::{IR_DAMPED_GAIN, IR_DECAY_RATE, REVERB_SLOT_SILENT_GAIN};
use spatial_core::{generate_impulse_response, KernelCrossfade, RoomPreset, RoomShape};

fn mean(channels: &[Vec<f32>; 2], range: std::ops::Range<usize>) -> f64 {
    let n = (range.len() * 2) as f64;
    let sum: f64 = channels
        .iter()
        .flat_map(|ch| ch[range.clone()].iter())
        .map(|&s| s as f64)
        .sum();
    sum / n
}

fn rms(samples: &[f32]) -> f32 {
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

#[test]
fn preset_names_round_trip() {
    for preset in RoomPreset::ALL {
        assert_eq!(RoomPreset::from_name(preset.name()), preset);
    }
}

#[test]
fn preset_lookup_ignores_case_and_whitespace() {
    assert_eq!(RoomPreset::from_name(" Cathedral "), RoomPreset::Cathedral);
    assert_eq!(RoomPreset::from_name("HALL"), RoomPreset::Hall);
}

#[test]
fn unknown_preset_falls_back_to_medium() {
    assert_eq!(RoomPreset::from_name("bathroom"), RoomPreset::Medium);
    assert_eq!(RoomPreset::from_name(""), RoomPreset::Medium);
    assert_eq!(RoomPreset::default(), RoomPreset::Medium);
}

#[test]
fn preset_table_matches_expected_shapes() {
    let expected = [
        (RoomPreset::Small, 0.8, 0.5),
        (RoomPreset::Medium, 1.5, 1.0),
        (RoomPreset::Large, 2.5, 2.0),
        (RoomPreset::Hall, 4.0, 3.0),
        (RoomPreset::Cathedral, 6.0, 5.0),
    ];
    for (preset, decay, size) in expected {
        let shape = preset.shape();
        assert_eq!(shape.decay_sec, decay);
        assert_eq!(shape.room_size, size);
    }
}

#[test]
fn presets_grow_monotonically() {
    for pair in RoomPreset::ALL.windows(2) {
        assert!(pair[0].shape().decay_sec < pair[1].shape().decay_sec);
        assert!(pair[0].shape().room_size < pair[1].shape().room_size);
    }
}

#[test]
fn cathedral_length_tracks_sample_rate() {
    let mut rng = StdRng::seed_from_u64(7);
    let shape = RoomPreset::Cathedral.shape();

    let ir = generate_impulse_response(shape, 44_100.0, &mut rng);
    assert_eq!(ir.len(), 264_600);
    assert_eq!(ir.channels[1].len(), 264_600);

    let ir = generate_impulse_response(shape, 48_000.0, &mut rng);
    assert_eq!(ir.len(), 288_000);
    assert!((ir.duration_sec() - 6.0).abs() < 1e-4);
}

#[test]
fn initial_kernel_is_two_seconds() {
    assert_eq!(RoomShape::INITIAL.len_samples(44_100.0), 88_200);
}

#[test]
fn samples_stay_bounded() {
    let mut rng = StdRng::seed_from_u64(1);
    let ir = generate_impulse_response(RoomPreset::Hall.shape(), 8_000.0, &mut rng);
    for ch in &ir.channels {
        for s in ch {
            assert!(s.is_finite());
            // noise (1) plus the strongest early reflection (0.3 * 2)
            assert!(s.abs() <= 1.6);
        }
    }
}

#[test]
fn tail_decays() {
    let mut rng = StdRng::seed_from_u64(42);
    let sr = 8_000.0;
    let ir = generate_impulse_response(RoomPreset::Large.shape(), sr, &mut rng);
    let window = (0.2 * sr) as usize;
    for ch in &ir.channels {
        let early = rms(&ch[..window]);
        let late = rms(&ch[ch.len() - window..]);
        assert!(early > late * 4.0, "early={} late={}", early, late);
    }
}

#[test]
fn channels_are_decorrelated() {
    let mut rng = StdRng::seed_from_u64(3);
    let ir = generate_impulse_response(RoomPreset::Small.shape(), 8_000.0, &mut rng);
    assert_ne!(ir.channels[0], ir.channels[1]);
}

#[test]
fn same_seed_gives_same_kernel() {
    let shape = RoomPreset::Medium.shape();
    let a = generate_impulse_response(shape, 8_000.0, &mut StdRng::seed_from_u64(9));
    let b = generate_impulse_response(shape, 8_000.0, &mut StdRng::seed_from_u64(9));
    assert_eq!(a.channels, b.channels);
}

#[test]
fn early_reflections_bias_the_start_of_large_rooms() {
    // Reflections only ever add, so they lift the mean of the early window.
    let sr = 48_000.0;
    let early = 0..48_000; // 0.1 s per unit of room size
    let large = RoomShape {
        decay_sec: 4.0,
        room_size: 10.0,
    };
    let ir = generate_impulse_response(large, sr, &mut StdRng::seed_from_u64(5));
    let with_reflections = mean(&ir.channels, early.clone());
    assert!(with_reflections > 0.02, "mean={}", with_reflections);

    let dry = RoomShape {
        decay_sec: 4.0,
        room_size: 0.0,
    };
    let ir = generate_impulse_response(dry, sr, &mut StdRng::seed_from_u64(5));
    let without = mean(&ir.channels, early);
    assert!(without.abs() < 0.01, "mean={}", without);
}

#[test]
fn late_tail_is_damped() {
    let shape = RoomShape {
        decay_sec: 20.0,
        room_size: 0.0,
    };
    let sr = 4_000.0;
    let ir = generate_impulse_response(shape, sr, &mut StdRng::seed_from_u64(21));
    // From 5 s on exp(-2t) is below 5e-5, so almost every sample is scaled by 0.7.
    let start = (5.0 * sr) as usize;
    let mut checked = 0;
    let mut over = 0;
    for ch in &ir.channels {
        for (i, s) in ch.iter().enumerate().skip(start) {
            let t = i as f32 / sr;
            let envelope = (-IR_DECAY_RATE * t / shape.decay_sec).exp();
            checked += 1;
            if s.abs() > IR_DAMPED_GAIN * envelope + 1e-6 {
                over += 1;
            }
        }
    }
    assert!(checked > 100_000);
    assert!(over * 1_000 <= checked, "{} of {} undamped", over, checked);
}

#[test]
fn first_kernel_swaps_into_the_silent_slot() {
    let mut fade = KernelCrossfade::default();
    assert_eq!(fade.active(), 0);
    fade.request("hall");
    assert_eq!(fade.poll(0.0), Some("hall"));
    assert_eq!(fade.active(), 1);
    assert_eq!(fade.idle(), 0);
    assert!(!fade.is_pending());
}

#[test]
fn swap_waits_while_the_idle_slot_is_still_fading() {
    let mut fade = KernelCrossfade::default();
    fade.request("small");
    assert_eq!(fade.poll(0.0), Some("small"));

    // Slot 0 is fading out; a quick second change must not overwrite it yet.
    fade.request("large");
    assert_eq!(fade.poll(0.6), None);
    assert!(fade.is_pending());
    assert_eq!(fade.active(), 1);

    // A third change replaces the one still waiting.
    fade.request("cathedral");
    assert_eq!(fade.poll(REVERB_SLOT_SILENT_GAIN * 2.0), None);
    assert_eq!(fade.poll(REVERB_SLOT_SILENT_GAIN), Some("cathedral"));
    assert_eq!(fade.active(), 0);
    assert!(!fade.is_pending());
}

#[test]
fn poll_without_request_keeps_the_active_slot() {
    let mut fade: KernelCrossfade<u32> = KernelCrossfade::default();
    assert_eq!(fade.poll(0.0), None);
    assert_eq!(fade.active(), 0);
}
