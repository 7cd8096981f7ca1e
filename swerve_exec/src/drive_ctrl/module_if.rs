//! Swerve module interface
//!
//! DriveCtrl does not talk to motors directly. Each corner of the robot is
//! represented by something implementing `SwerveModule`, which owns its own
//! closed-loop steering and velocity control.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Proportional-derivative gains for a module's steering controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PdConstants {
    pub proportional: f64,
    pub derivative: f64
}

/// Cumulative telemetry from a module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ModulePosition {
    /// Distance driven by the module since start up.
    pub distance: f64,

    /// Current steering heading.
    ///
    /// Units: degrees
    pub angle_deg: f64
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A single independently steered and driven wheel unit.
pub trait SwerveModule {
    /// Command the translational drive effort.
    fn set_go_voltage(&mut self, voltage: f64);

    /// Command the steering heading the module shall move to.
    fn set_turn_target(&mut self, heading_deg: f64);

    /// Command a drive velocity. Used with zero to actively hold the module
    /// at rest.
    fn set_velocity(&mut self, velocity: f64);

    /// The current measured steering heading in degrees.
    fn angle_deg(&self) -> f64;

    /// Cumulative distance and angle telemetry. If `refresh` is true the
    /// module shall re-read its sensors before answering.
    fn get_position(&self, refresh: bool) -> ModulePosition;

    /// Set the gains of the module's steering controller.
    fn set_constants(&mut self, constants: PdConstants);

    /// Advance the module's own control loop by `dt_s` seconds.
    fn tick(&mut self, dt_s: f64);
}
