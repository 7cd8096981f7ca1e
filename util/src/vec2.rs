//! Two dimensional vector value type
//!
//! A thin wrapper over `nalgebra::Vector2<f64>` which adds the polar
//! construction and heading extraction used by the drive software. Angles are
//! in degrees, measured counter-clockwise from the +X axis, and reported in
//! the window used by `maths::norm_angle_deg`.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

// Internal
use crate::maths::norm_angle_deg;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An immutable 2D vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2(Vector2<f64>);

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Vec2 {
    /// The zero vector.
    pub fn zero() -> Self {
        Self(Vector2::zeros())
    }

    /// Build a vector from cartesian components.
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// Build a vector from an angle and a magnitude.
    ///
    /// A negative magnitude produces a vector pointing in the opposite
    /// direction to `angle_deg`.
    pub fn from_polar(angle_deg: f64, magnitude: f64) -> Self {
        let angle_rad = angle_deg.to_radians();
        Self(Vector2::new(
            magnitude * angle_rad.cos(),
            magnitude * angle_rad.sin()
        ))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Sum of two vectors.
    pub fn add(&self, other: &Vec2) -> Self {
        Self(self.0 + other.0)
    }

    /// Vector multiplied by a scalar.
    pub fn scale(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Euclidian length of the vector, always positive or zero.
    ///
    /// Does not overflow for finite components, unlike squaring them.
    pub fn magnitude(&self) -> f64 {
        self.0.x.hypot(self.0.y)
    }

    /// True if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }

    /// Heading of the vector in degrees.
    ///
    /// The heading of a zero vector is arbitrary and must not be relied on.
    pub fn angle_deg(&self) -> f64 {
        norm_angle_deg(self.0.y.atan2(self.0.x).to_degrees())
    }

    /// A vector with the same heading as this one but the given magnitude.
    pub fn with_magnitude(&self, magnitude: f64) -> Self {
        Self::from_polar(self.angle_deg(), magnitude)
    }

}

impl Default for Vec2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(&self, &rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}
