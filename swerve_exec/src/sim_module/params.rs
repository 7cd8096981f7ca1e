//! Parameters structure for the simulated swerve module

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the simulated module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Params {
    /// Rate at which the steering turns per volt applied to it.
    ///
    /// Units: degrees/second/volt
    pub steer_rate_degs_per_volt: f64,

    /// Steady state wheel speed per volt of drive.
    ///
    /// Units: meters/second/volt
    pub drive_speed_per_volt: f64,

    /// Time constant of the drive's response to a change in demand.
    ///
    /// Units: seconds
    pub drive_time_const_s: f64,

    /// Steering heading of every module at start up.
    ///
    /// Units: degrees
    pub initial_angle_deg: f64
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("Parameter {0} must be positive, found {1}")]
    NotPositive(&'static str, f64),

    #[error("Initial angle must be finite, found {0}")]
    InvalidInitialAngle(f64)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {

    /// Determines if the parameters are valid.
    pub fn are_valid(&self) -> Result<(), ParamsError> {
        for &(name, value) in [
            ("steer_rate_degs_per_volt", self.steer_rate_degs_per_volt),
            ("drive_speed_per_volt", self.drive_speed_per_volt),
            ("drive_time_const_s", self.drive_time_const_s)
        ].iter() {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::NotPositive(name, value));
            }
        }

        if !self.initial_angle_deg.is_finite() {
            return Err(ParamsError::InvalidInitialAngle(self.initial_angle_deg));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_are_valid() {
        let mut p: Params = util::params::from_toml_str(
            "steer_rate_degs_per_volt = 60.0\n\
            drive_speed_per_volt = 0.1\n\
            drive_time_const_s = 0.1\n\
            initial_angle_deg = 0.0\n"
        ).unwrap();
        assert_eq!(p.are_valid(), Ok(()));

        p.drive_time_const_s = 0.0;
        assert_eq!(
            p.are_valid(),
            Err(ParamsError::NotPositive("drive_time_const_s", 0.0))
        );
    }
}
