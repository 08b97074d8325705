use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use nalgebra::{Point2, Vector2 as NaVector2};

use crate::error::{Error, Result};

/// A plain 2D vector in simulation space (pixels, y pointing down).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    pub const fn zeros() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }

    /// Returns `other - self`, i.e. the vector pointing from `self` to `other`.
    ///
    /// Note the argument order! This is the reverse of `self - other`.
    pub fn displacement_to(&self, other: &Vector2) -> Vector2 {
        Vector2::new(other.x - self.x, other.y - self.y)
    }

    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: &Vector2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Fails with `DivisionByZero` for the zero vector, rather than handing
    /// back NaNs.
    pub fn normalized(&self) -> Result<Vector2> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(*self / norm)
    }

    /// Unit vector pointing from `self` towards `other`.
    pub fn direction_to(&self, other: &Vector2) -> Result<Vector2> {
        self.displacement_to(other).normalized()
    }

    // Rendering is done in f32; the precision loss doesn't matter on screen
    pub fn to_point(&self) -> Point2<f32> {
        Point2::new(self.x as f32, self.y as f32)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, s: f64) -> Vector2 {
        Vector2::new(self.x * s, self.y * s)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, s: f64) -> Vector2 {
        Vector2::new(self.x / s, self.y / s)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<NaVector2<f64>> for Vector2 {
    fn from(v: NaVector2<f64>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for NaVector2<f64> {
    fn from(v: Vector2) -> Self {
        NaVector2::new(v.x, v.y)
    }
}
