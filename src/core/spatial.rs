use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Emitter position around the listener.
///
/// `azimuth` is the horizontal angle (0 = straight ahead, positive to the right),
/// `elevation` the vertical tilt (0 = level). Both live in (-PI, PI] and wrap
/// rather than clamp; `radius` is clamped by the owner of the position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphericalPosition {
    pub azimuth: f32,
    pub elevation: f32,
    pub radius: f32,
}

impl SphericalPosition {
    pub const fn new(azimuth: f32, elevation: f32, radius: f32) -> Self {
        Self {
            azimuth,
            elevation,
            radius,
        }
    }

    /// x = r cos(el) sin(az), y = r sin(el), z = r cos(el) cos(az)
    #[inline]
    pub fn to_cartesian(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        Vec3::new(
            self.radius * cos_el * sin_az,
            self.radius * sin_el,
            self.radius * cos_el * cos_az,
        )
    }

    pub fn azimuth_deg(&self) -> f32 {
        self.azimuth.to_degrees()
    }

    pub fn elevation_deg(&self) -> f32 {
        self.elevation.to_degrees()
    }
}

/// Listener pose handed to the audio listener. Fixed for the page's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListenerPose {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

impl ListenerPose {
    pub const ORIGIN: Self = Self {
        position: Vec3::ZERO,
        forward: Vec3::NEG_Z,
        up: Vec3::Y,
    };
}

impl Default for ListenerPose {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Wrap an angle into (-PI, PI].
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).length()
}
