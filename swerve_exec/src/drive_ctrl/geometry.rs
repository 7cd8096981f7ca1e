//! Robot geometry
//!
//! Two views of the same physical layout live here: `RobotGeometry`, the
//! half width and length used to compute module targets, and
//! `SwerveKinematics`, the metric module offsets handed to odometry. They are
//! checked against each other when the parameters are loaded.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector2;
use serde::Serialize;
use std::f64::consts::FRAC_1_SQRT_2;

// Internal
use util::vec2::Vec2;
use super::{Corner, Params, ParamsError, NUM_MODULES};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Half width and half length of the robot, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RobotGeometry {
    half_width: f64,
    half_length: f64
}

/// Module offsets from the robot centre for odometry consumers.
#[derive(Clone, Debug, PartialEq)]
pub struct SwerveKinematics {
    offsets_m: [Vector2<f64>; NUM_MODULES]
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl RobotGeometry {
    pub fn new(half_width: f64, half_length: f64) -> Self {
        Self {
            half_width,
            half_length
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(params.half_width, params.half_length)
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    /// Distance from the robot centre to each module.
    pub fn turn_radius(&self) -> f64 {
        self.half_width.hypot(self.half_length)
    }

    /// Linear speed of a module when the robot rotates about its centre at
    /// `turn_rate_degs`.
    pub fn turn_rate_to_speed(&self, turn_rate_degs: f64) -> f64 {
        turn_rate_degs.to_radians() * self.turn_radius()
    }
}

/// Unit vector of a module's velocity when the robot rotates
/// counter-clockwise about its centre.
///
/// ```text
///  FL ↙   ↖ FR
///  BL ↘   ↗ BR
/// ```
///
/// These are the tangents for a square robot. Front-right and back-left lie
/// on one diagonal, front-left and back-right on the other.
pub fn turn_unit_vec(corner: Corner) -> Vec2 {
    let s = FRAC_1_SQRT_2;
    match corner {
        Corner::FrontLeft => Vec2::new(-s, -s),
        Corner::FrontRight => Vec2::new(-s, s),
        Corner::BackLeft => Vec2::new(s, -s),
        Corner::BackRight => Vec2::new(s, s)
    }
}

impl SwerveKinematics {
    /// Build the kinematics from the parameters, checking the module offsets
    /// agree with the robot's half width and length.
    pub fn from_params(params: &Params) -> Result<Self, ParamsError> {
        let mut offsets_m = [Vector2::zeros(); NUM_MODULES];

        for &corner in Corner::ALL.iter() {
            let (sx, sy) = corner.signs();
            let expected = Vector2::new(
                sx * params.half_width * params.geometry_unit_m,
                sy * params.half_length * params.geometry_unit_m
            );
            let raw = params.module_offsets_m[corner.index()];
            let found = Vector2::new(raw[0], raw[1]);

            if (expected - found).norm() > params.geometry_tolerance_m {
                return Err(ParamsError::InconsistentGeometry {
                    corner,
                    expected_m: [expected.x, expected.y],
                    found_m: raw
                });
            }

            offsets_m[corner.index()] = found;
        }

        Ok(Self { offsets_m })
    }

    /// Offset of the given module from the robot centre in meters.
    pub fn offset_m(&self, corner: Corner) -> Vector2<f64> {
        self.offsets_m[corner.index()]
    }

    /// All module offsets, in module order.
    pub fn offsets_m(&self) -> &[Vector2<f64>; NUM_MODULES] {
        &self.offsets_m
    }
}
