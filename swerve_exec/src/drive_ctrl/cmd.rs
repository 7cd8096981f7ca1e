//! Commands passed into DriveCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A demand to move the robot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerCmd {
    /// Translational speed of the robot, expressed as the drive voltage each
    /// module would need for it.
    ///
    /// Units: volts
    pub go_speed: f64,

    /// Direction to translate towards, counter-clockwise from the robot's
    /// +X (right) axis.
    ///
    /// Units: degrees
    pub go_direction_deg: f64,

    /// Rate at which the robot shall rotate about its centre, positive is
    /// counter-clockwise.
    ///
    /// Units: degrees/second
    pub turn_rate_degs: f64,

    /// If true the command is rejected when either the go speed or the turn
    /// rate exceed the supply ceiling, rather than being saturated.
    pub strict_voltage_check: bool
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PowerCmd {
    /// Create a new command with strict voltage checking enabled.
    pub fn new(go_speed: f64, go_direction_deg: f64, turn_rate_degs: f64) -> Self {
        Self {
            go_speed,
            go_direction_deg,
            turn_rate_degs,
            strict_voltage_check: true
        }
    }

    /// The same command with strict voltage checking disabled, so that
    /// oversized demands are saturated instead of rejected.
    pub fn lenient(self) -> Self {
        Self {
            strict_voltage_check: false,
            ..self
        }
    }

    /// True if every value in the command is finite.
    pub fn is_finite(&self) -> bool {
        self.go_speed.is_finite()
            && self.go_direction_deg.is_finite()
            && self.turn_rate_degs.is_finite()
    }
}
