use std::str::FromStr;

use crate::error::Error;
use crate::math::Vector2;

/// Canned starting configurations, laid out relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// A small moon circling a heavy planet at the center.
    Orbit,
    /// Two equal bodies passing each other in opposite directions.
    TwoBodies,
    /// Two light bodies starting at rest, one above the other.
    ThreeBodies,
}

/// Everything needed to place one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub position: Vector2,
    pub radius: f64,
    pub density: f64,
    pub velocity: Vector2,
}

impl BodySpec {
    fn at_rest(x: f64, y: f64, radius: f64, density: f64) -> Self {
        BodySpec {
            position: Vector2::new(x, y),
            radius,
            density,
            velocity: Vector2::zeros(),
        }
    }

    fn moving(self, vx: f64, vy: f64) -> Self {
        BodySpec {
            velocity: Vector2::new(vx, vy),
            ..self
        }
    }
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Orbit, Preset::TwoBodies, Preset::ThreeBodies];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Orbit => "orbit",
            Preset::TwoBodies => "twobodies",
            Preset::ThreeBodies => "threebodies",
        }
    }

    pub fn bodies(&self, width: f64, height: f64) -> Vec<BodySpec> {
        match self {
            Preset::Orbit => vec![
                BodySpec::at_rest(width / 2.0, height / 2.0, 50.0, 100.0),
                BodySpec::at_rest(width / 2.0 - 350.0, height / 2.0, 10.0, 1.0).moving(0.0, 7.0),
            ],
            Preset::TwoBodies => vec![
                BodySpec::at_rest(width * 0.3, height / 2.0, 25.0, 10.0).moving(0.0, 2.0),
                BodySpec::at_rest(width * 0.4, height / 2.0, 25.0, 10.0).moving(0.0, -2.0),
            ],
            // Despite the name, this one only has two bodies in it
            Preset::ThreeBodies => vec![
                BodySpec::at_rest(width * 0.25, height * 0.25, 10.0, 0.011),
                BodySpec::at_rest(width * 0.25, height * 0.25 + 100.0, 10.0, 0.00907),
            ],
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(&['-', '_'][..], "").as_str() {
            "orbit" => Ok(Preset::Orbit),
            "twobodies" => Ok(Preset::TwoBodies),
            "threebodies" => Ok(Preset::ThreeBodies),
            _ => Err(Error::UnknownPreset(s.to_owned())),
        }
    }
}
