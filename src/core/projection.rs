use glam::{Vec2, Vec3};

// Screen-space helpers for the 2D views. Offsets are relative to the view
// centre in canvas pixels with +y pointing down.

/// How much of the smaller view side the emitter sphere may occupy.
pub const VIEW_FILL: f32 = 0.8;
/// Extra world units of margin around the largest sphere.
pub const VIEW_MARGIN_UNITS: f32 = 4.0;
/// How far the radar marker is pulled towards the centre at full elevation.
pub const RADAR_ELEVATION_SHRINK: f32 = 0.7;

/// Pixels per world unit so a sphere of `max_radius` fits the view.
#[inline]
pub fn view_scale(view_width: f32, view_height: f32, max_radius: f32) -> f32 {
    let max_view = view_width.min(view_height) * VIEW_FILL;
    max_view / (max_radius * 2.0 + VIEW_MARGIN_UNITS)
}

/// Looking down from above: +x right, -z (the listener's forward) up.
#[inline]
pub fn top_down(position: Vec3, scale: f32) -> Vec2 {
    Vec2::new(position.x * scale, -position.z * scale)
}

/// Looking from the listener's right: +z right, +y up.
#[inline]
pub fn side(position: Vec3, scale: f32) -> Vec2 {
    Vec2::new(position.z * scale, -position.y * scale)
}

/// First-person radar: angle from azimuth, elevation pulls the marker inwards.
#[inline]
pub fn radar(azimuth: f32, elevation: f32, radar_radius: f32) -> Vec2 {
    let dist = radar_radius * (1.0 - elevation.sin().abs() * RADAR_ELEVATION_SHRINK);
    Vec2::new(azimuth.sin() * dist, -azimuth.cos() * dist)
}

/// Radius of the horizontal cross-section of the sphere at `elevation`.
#[inline]
pub fn ring_radius(radius: f32, elevation: f32) -> f32 {
    (radius * elevation.cos()).abs()
}
