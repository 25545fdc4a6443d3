// Host-side tests for the spherical coordinate transform and angle wrapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod spatial_core;

use spatial_core::{wrap_angle, ListenerPose, SphericalPosition};
use std::f32::consts::{FRAC_PI_2, PI};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn straight_ahead_maps_to_positive_z() {
    let p = SphericalPosition::new(0.0, 0.0, 5.0).to_cartesian();
    assert!(approx(p.x, 0.0));
    assert!(approx(p.y, 0.0));
    assert!(approx(p.z, 5.0));
}

#[test]
fn quarter_turn_right_maps_to_positive_x() {
    let p = SphericalPosition::new(FRAC_PI_2, 0.0, 5.0).to_cartesian();
    assert!(approx(p.x, 5.0));
    assert!(approx(p.y, 0.0));
    assert!(approx(p.z, 0.0));
}

#[test]
fn full_tilt_up_maps_to_positive_y() {
    let p = SphericalPosition::new(1.2, FRAC_PI_2, 3.0).to_cartesian();
    assert!(approx(p.x, 0.0));
    assert!(approx(p.y, 3.0));
    assert!(approx(p.z, 0.0));
}

#[test]
fn cartesian_length_equals_radius() {
    let samples = [
        (0.3, -0.4, 1.0),
        (-2.9, 1.1, 7.5),
        (PI, -PI, 15.0),
        (1.7, 2.8, 4.2),
    ];
    for (az, el, r) in samples {
        let p = SphericalPosition::new(az, el, r).to_cartesian();
        assert!((p.length_squared() - r * r).abs() < 1e-3 * r * r);
    }
}

#[test]
fn degrees_accessors_convert() {
    let p = SphericalPosition::new(PI / 4.0, -PI / 6.0, 2.0);
    assert!(approx(p.azimuth_deg(), 45.0));
    assert!(approx(p.elevation_deg(), -30.0));
}

#[test]
fn wrap_angle_keeps_values_in_half_open_range() {
    let mut a = -20.0_f32;
    while a < 20.0 {
        let w = wrap_angle(a);
        assert!(w > -PI && w <= PI, "wrap({}) = {}", a, w);
        // Same direction on the circle
        assert!((w.sin() - a.sin()).abs() < 1e-3);
        assert!((w.cos() - a.cos()).abs() < 1e-3);
        a += 0.37;
    }
}

#[test]
fn wrap_angle_leaves_in_range_values_alone() {
    assert_eq!(wrap_angle(0.0), 0.0);
    assert!(approx(wrap_angle(1.0), 1.0));
    assert!(approx(wrap_angle(-3.0), -3.0));
}

#[test]
fn wrap_angle_maps_negative_pi_to_pi() {
    assert!(approx(wrap_angle(-PI), PI));
    assert!(wrap_angle(-PI) > 0.0);
}

#[test]
fn listener_sits_at_origin_facing_negative_z() {
    let pose = ListenerPose::default();
    assert_eq!(pose.position, glam::Vec3::ZERO);
    assert_eq!(pose.forward, glam::Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(pose.up, glam::Vec3::Y);
}
