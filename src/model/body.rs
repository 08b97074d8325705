use std::collections::VecDeque;

use nalgebra::Point3;
use rand::Rng;

use crate::error::{check_positive, Result};
use crate::math::Vector2;

pub const MAX_TRAIL_LENGTH: usize = 1000;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

/// Display color. The channels always sum to 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl Color {
    pub fn random(rng: &mut impl Rng) -> Self {
        let r = rng.gen_range(0..256);
        let b = rng.gen_range(0..256 - r);
        let g = 255 - r - b;
        Color { r, g, b }
    }

    pub fn to_point(&self) -> Point3<f32> {
        let channel = |c: i16| f32::from(c.clamp(0, 255)) / 255.0;
        Point3::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub(crate) position: Vector2,
    pub(crate) velocity: Vector2,
    pub(crate) radius: f64,
    mass: f64,
    color: Color,
    trail: VecDeque<Vector2>,
    pub(crate) marked_for_removal: bool,
}

impl Body {
    /// Mass is fixed here as `density * radius^2` and is never recomputed,
    /// not even when a merge grows the radius.
    pub fn new(
        id: BodyID,
        position: Vector2,
        radius: f64,
        density: f64,
        color: Color,
    ) -> Result<Self> {
        let radius = check_positive("radius", radius)?;
        let density = check_positive("density", density)?;
        Ok(Body {
            id,
            position,
            velocity: Vector2::zeros(),
            radius,
            mass: density * radius.powi(2),
            color,
            trail: VecDeque::with_capacity(MAX_TRAIL_LENGTH + 1),
            marked_for_removal: false,
        })
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Past positions, oldest first.
    pub fn trail(&self) -> impl ExactSizeIterator<Item = &Vector2> + '_ {
        self.trail.iter()
    }

    pub fn is_marked_for_removal(&self) -> bool {
        self.marked_for_removal
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Advances by one tick and records the new position in the trail.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.trail.push_back(self.position);
        if self.trail.len() > MAX_TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }
}
