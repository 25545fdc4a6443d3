// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    assert!(ROTATION_SPEED > 0.0);
    assert!(RADIUS_SPEED > 0.0);

    // Default distance must be reachable and inside the clamp range
    assert!(MIN_RADIUS > 0.0);
    assert!(MIN_RADIUS < MAX_RADIUS);
    assert!(DEFAULT_RADIUS >= MIN_RADIUS && DEFAULT_RADIUS <= MAX_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn filter_constants_are_ordered() {
    assert!(MIN_CUTOFF_HZ > 0.0);
    assert!(MIN_CUTOFF_HZ < MAX_CUTOFF_HZ);
    // "none" threshold sits between the two ends of the mapping
    assert!(CUTOFF_DISPLAY_NONE_ABOVE_HZ > MIN_CUTOFF_HZ);
    assert!(CUTOFF_DISPLAY_NONE_ABOVE_HZ < MAX_CUTOFF_HZ);
    assert!((0.0..=1.0).contains(&DEFAULT_ABSORPTION_COEFF));
    assert!(LOWPASS_Q > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reverb_constants_are_within_reasonable_bounds() {
    assert!((0.0..=1.0).contains(&DEFAULT_REVERB_WET));
    assert!(INITIAL_REVERB_DECAY_SEC > 0.0);
    assert!(INITIAL_REVERB_ROOM_SIZE > 0.0);
    assert!(IR_DECAY_RATE > 0.0);
    assert!(IR_DAMPING_RATE > 0.0);
    assert!(IR_DAMPED_GAIN > 0.0 && IR_DAMPED_GAIN < 1.0);
    assert!(IR_EARLY_MAX_AMPLITUDE > 0.0);

    // Even the largest preset must keep the early reflection chance a probability
    assert!(IR_EARLY_PROBABILITY_PER_ROOM * 5.0 <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ramp_time_constants_are_short() {
    assert!(PARAM_RAMP_TAU_SEC > 0.0 && PARAM_RAMP_TAU_SEC < 1.0);
    assert!(REVERB_CROSSFADE_TAU_SEC > 0.0);
    assert!(REVERB_CROSSFADE_TAU_SEC <= PARAM_RAMP_TAU_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn panner_constants_cover_emitter_range() {
    assert!(PANNER_REF_DISTANCE > 0.0);
    assert!(PANNER_MAX_DISTANCE > MAX_RADIUS as f64);
    assert!(PANNER_ROLLOFF > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_valid_fractions() {
    assert!(CANVAS_MIN_HEIGHT_PX < CANVAS_MAX_HEIGHT_PX);
    assert!(CANVAS_VIEWPORT_HEIGHT_FRACTION > 0.0 && CANVAS_VIEWPORT_HEIGHT_FRACTION <= 1.0);
    assert!(TOP_DOWN_WIDTH_FRACTION > 0.0 && TOP_DOWN_WIDTH_FRACTION < 1.0);
    assert!(SIDE_VIEW_HEIGHT_FRACTION > 0.0 && SIDE_VIEW_HEIGHT_FRACTION < 1.0);
    assert!(RADAR_RADIUS_FRACTION > 0.0 && RADAR_RADIUS_FRACTION < 0.5);
    assert!(RADAR_RINGS > 0);
}

#[test]
fn latitude_rings_are_sorted_and_symmetric() {
    let rings = LATITUDE_RINGS_DEG;
    for pair in rings.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    let n = rings.len();
    for i in 0..n {
        assert_eq!(rings[i], -rings[n - 1 - i]);
    }
    assert_eq!((360.0 / LONGITUDE_STEP_DEG).fract(), 0.0);
}

#[test]
fn status_strings_are_distinct() {
    assert_ne!(STATUS_ON, STATUS_OFF);
    assert_ne!(STATUS_OFF, STATUS_UNAVAILABLE);
    assert!(!DECODE_FAILED_MESSAGE.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reverb_slot_threshold_is_a_small_gain() {
    assert!(REVERB_SLOT_SILENT_GAIN > 0.0);
    assert!(REVERB_SLOT_SILENT_GAIN < 0.1);
}
