// Host-side tests for distance-driven low-pass cutoff and the wet/dry mix.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod spatial_core;

use spatial_core::constants::{MAX_CUTOFF_HZ, MAX_RADIUS, MIN_CUTOFF_HZ};
use spatial_core::{
    cutoff_for_distance, cutoff_label, AirAbsorption, Control, KeyState, SpatialScene, WetDryMix,
};

#[test]
fn cutoff_is_open_at_the_listener() {
    assert_eq!(cutoff_for_distance(0.0, MAX_RADIUS, 0.5), MAX_CUTOFF_HZ);
}

#[test]
fn cutoff_reaches_floor_at_max_radius() {
    let hz = cutoff_for_distance(MAX_RADIUS, MAX_RADIUS, 1.0);
    assert!((hz - MIN_CUTOFF_HZ).abs() < 1e-2);
}

#[test]
fn cutoff_decreases_with_distance() {
    let mut prev = f32::INFINITY;
    let mut r = 0.0;
    while r <= MAX_RADIUS {
        let hz = cutoff_for_distance(r, MAX_RADIUS, 0.5);
        assert!(hz <= prev, "cutoff rose at r={}", r);
        assert!((MIN_CUTOFF_HZ..=MAX_CUTOFF_HZ).contains(&hz));
        prev = hz;
        r += 0.5;
    }
}

#[test]
fn cutoff_clamps_beyond_max_radius() {
    let at_max = cutoff_for_distance(MAX_RADIUS, MAX_RADIUS, 0.5);
    let beyond = cutoff_for_distance(MAX_RADIUS * 3.0, MAX_RADIUS, 0.5);
    assert_eq!(at_max, beyond);
}

#[test]
fn disabled_absorption_leaves_filter_open() {
    let absorption = AirAbsorption {
        enabled: false,
        ..AirAbsorption::default()
    };
    assert_eq!(absorption.cutoff_hz(MAX_RADIUS, MAX_RADIUS), MAX_CUTOFF_HZ);
}

#[test]
fn coefficient_is_clamped() {
    let mut absorption = AirAbsorption::default();
    absorption.set_coefficient(4.0);
    assert_eq!(absorption.coefficient, 1.0);
    absorption.set_coefficient(-1.0);
    assert_eq!(absorption.coefficient, 0.0);
}

#[test]
fn cutoff_label_hides_open_filter() {
    assert_eq!(cutoff_label(20_000.0), "none");
    assert_eq!(cutoff_label(10_001.0), "none");
    assert_eq!(cutoff_label(10_000.0), "10000 Hz");
    assert_eq!(cutoff_label(812.4), "812 Hz");
}

#[test]
fn dry_and_wet_sum_to_one_when_enabled() {
    for step in 0..=10 {
        let amount = step as f32 / 10.0;
        let g = WetDryMix::new(true, amount).gains();
        assert!((g.dry + g.wet - 1.0).abs() < 1e-6);
    }
}

#[test]
fn disabled_reverb_mutes_wet_but_keeps_dry() {
    let g = WetDryMix::new(false, 0.3).gains();
    assert_eq!(g.wet, 0.0);
    assert!((g.dry - 0.7).abs() < 1e-6);
}

#[test]
fn wet_amount_is_clamped() {
    let mut mix = WetDryMix::default();
    mix.set_wet_amount(1.5);
    assert_eq!(mix.wet_amount(), 1.0);
    mix.set_wet_amount(-0.2);
    assert_eq!(mix.wet_amount(), 0.0);
}

#[test]
fn snapshot_cutoff_follows_emitter_distance() {
    let mut scene = SpatialScene::default();
    let near = scene.snapshot().cutoff_hz;
    let mut keys = KeyState::default();
    keys.press(Control::IncreaseDistance);
    for _ in 0..30 {
        scene.step(&keys);
    }
    let far = scene.snapshot().cutoff_hz;
    assert!(far < near);

    scene.set_air_absorption_enabled(false);
    assert_eq!(scene.snapshot().cutoff_hz, MAX_CUTOFF_HZ);
}

#[test]
fn snapshot_mix_follows_reverb_toggle() {
    let mut scene = SpatialScene::default();
    scene.set_reverb_amount(0.4);
    let on = scene.snapshot().mix;
    assert!((on.wet - 0.4).abs() < 1e-6);

    scene.set_reverb_enabled(false);
    let off = scene.snapshot().mix;
    assert_eq!(off.wet, 0.0);
    assert!((off.dry - 0.6).abs() < 1e-6);
}
