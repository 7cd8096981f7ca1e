//! Parameters structure for DriveCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Deserialize;
use thiserror::Error;

// Internal
use super::{Corner, PdConstants, SwerveKinematics, NUM_MODULES};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for drive control.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Params {

    // ---- GEOMETRY ----

    /// Half the distance between the left and right modules.
    ///
    /// Units: geometry units (see `geometry_unit_m`)
    pub half_width: f64,

    /// Half the distance between the front and back modules.
    ///
    /// Units: geometry units (see `geometry_unit_m`)
    pub half_length: f64,

    /// Length of one geometry unit.
    ///
    /// Units: meters
    pub geometry_unit_m: f64,

    /// Position of each module relative to the robot centre, in module order
    /// (FL, FR, BL, BR). Used by the odometry-facing kinematics and checked
    /// against `half_width` and `half_length` on load.
    ///
    /// Units: meters,
    /// Frame: Robot body, X right, Y forward
    pub module_offsets_m: [[f64; 2]; NUM_MODULES],

    /// Allowed mismatch between the module offsets and the half width and
    /// length.
    ///
    /// Units: meters
    pub geometry_tolerance_m: f64,

    // ---- CONTROL ----

    /// Initial alignment threshold, in the range (0, 1].
    pub alignment_threshold: f64,

    /// Gains given to every module's steering controller on start up.
    pub steer_constants: PdConstants
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("Invalid robot geometry: {0}")]
    InvalidGeometry(String),

    #[error("Alignment threshold must be in the range (0, 1], found {0}")]
    InvalidAlignmentThreshold(f64),

    #[error(
        "Offset of the {corner:?} module ({found_m:?} m) does not match the robot \
        half width and length ({expected_m:?} m)"
    )]
    InconsistentGeometry {
        corner: Corner,
        expected_m: [f64; 2],
        found_m: [f64; 2]
    }
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {

    /// Determines if the parameters are valid.
    pub fn are_valid(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("half_width", self.half_width),
            ("half_length", self.half_length),
            ("geometry_unit_m", self.geometry_unit_m)
        ].iter() {
            if !(value.is_finite() && *value > 0.0) {
                return Err(ParamsError::InvalidGeometry(
                    format!("{} must be positive, found {}", name, value)
                ));
            }
        }

        if !(self.geometry_tolerance_m.is_finite() && self.geometry_tolerance_m >= 0.0) {
            return Err(ParamsError::InvalidGeometry(format!(
                "geometry_tolerance_m must not be negative, found {}",
                self.geometry_tolerance_m
            )));
        }

        if !super::threshold_in_range(self.alignment_threshold) {
            return Err(ParamsError::InvalidAlignmentThreshold(
                self.alignment_threshold
            ));
        }

        SwerveKinematics::from_params(self).map(|_| ())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// Parameters for a square 28 inch robot.
    pub(crate) fn square_robot() -> Params {
        Params {
            half_width: 14.0,
            half_length: 14.0,
            geometry_unit_m: 0.0254,
            module_offsets_m: [
                [-0.3556, 0.3556],
                [0.3556, 0.3556],
                [-0.3556, -0.3556],
                [0.3556, -0.3556]
            ],
            geometry_tolerance_m: 1e-3,
            alignment_threshold: 0.2,
            steer_constants: PdConstants {
                proportional: 0.2,
                derivative: 0.0
            }
        }
    }

    #[test]
    fn test_are_valid() {
        assert_eq!(square_robot().are_valid(), Ok(()));

        let mut p = square_robot();
        p.half_width = 0.0;
        assert!(matches!(p.are_valid(), Err(ParamsError::InvalidGeometry(_))));

        let mut p = square_robot();
        p.alignment_threshold = 0.0;
        assert_eq!(p.are_valid(), Err(ParamsError::InvalidAlignmentThreshold(0.0)));

        let mut p = square_robot();
        p.alignment_threshold = 1.5;
        assert_eq!(p.are_valid(), Err(ParamsError::InvalidAlignmentThreshold(1.5)));

        let mut p = square_robot();
        p.geometry_tolerance_m = -1.0;
        assert!(matches!(p.are_valid(), Err(ParamsError::InvalidGeometry(_))));
    }

    #[test]
    fn test_deserialise() {
        let p: Params = util::params::from_toml_str(
            r#"
            half_width = 14.0
            half_length = 12.0
            geometry_unit_m = 0.0254
            module_offsets_m = [
                [-0.3556, 0.3048],
                [0.3556, 0.3048],
                [-0.3556, -0.3048],
                [0.3556, -0.3048],
            ]
            geometry_tolerance_m = 0.001
            alignment_threshold = 0.7

            [steer_constants]
            proportional = 0.2
            derivative = 0.004
            "#
        ).unwrap();

        assert_eq!(p.half_length, 12.0);
        assert_eq!(p.steer_constants.derivative, 0.004);
        assert_eq!(p.are_valid(), Ok(()));
    }
}
