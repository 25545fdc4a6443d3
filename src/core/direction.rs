use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Front,
    FrontRight,
    Right,
    BackRight,
    Back,
    BackLeft,
    Left,
    FrontLeft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Altitude {
    Level,
    Above,
    Below,
}

/// Where the emitter sits relative to the listener, in words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub heading: Heading,
    pub altitude: Altitude,
}

impl Heading {
    pub fn label(self) -> &'static str {
        match self {
            Heading::Front => "Front",
            Heading::FrontRight => "Front Right",
            Heading::Right => "Right",
            Heading::BackRight => "Back Right",
            Heading::Back => "Back",
            Heading::BackLeft => "Back Left",
            Heading::Left => "Left",
            Heading::FrontLeft => "Front Left",
        }
    }

    /// Eight 45° sectors, each half-open on its counter-clockwise edge.
    pub fn from_degrees(azimuth_deg: f32) -> Self {
        let a = azimuth_deg;
        if a > -22.5 && a <= 22.5 {
            Heading::Front
        } else if a > 22.5 && a <= 67.5 {
            Heading::FrontRight
        } else if a > 67.5 && a <= 112.5 {
            Heading::Right
        } else if a > 112.5 && a <= 157.5 {
            Heading::BackRight
        } else if a > 157.5 || a <= -157.5 {
            Heading::Back
        } else if a > -157.5 && a <= -112.5 {
            Heading::BackLeft
        } else if a > -112.5 && a <= -67.5 {
            Heading::Left
        } else {
            Heading::FrontLeft
        }
    }
}

impl Altitude {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Altitude::Level => None,
            Altitude::Above => Some("Up"),
            Altitude::Below => Some("Down"),
        }
    }

    pub fn from_degrees(elevation_deg: f32) -> Self {
        let e = elevation_deg;
        if e > 30.0 && e <= 150.0 {
            Altitude::Above
        } else if (-150.0..-30.0).contains(&e) {
            Altitude::Below
        } else {
            Altitude::Level
        }
    }
}

impl Direction {
    /// Tilting past vertical puts the emitter behind the listener, so the
    /// heading flips by 180°.
    pub fn classify(azimuth_deg: f32, elevation_deg: f32) -> Self {
        let mut effective = azimuth_deg;
        if !(-90.0..=90.0).contains(&elevation_deg) {
            effective += 180.0;
            if effective > 180.0 {
                effective -= 360.0;
            }
        }
        Self {
            heading: Heading::from_degrees(effective),
            altitude: Altitude::from_degrees(elevation_deg),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.altitude.label() {
            Some(alt) => write!(f, "{} {}", self.heading.label(), alt),
            None => f.write_str(self.heading.label()),
        }
    }
}
