//! Drive control module
//!
//! Converts robot-relative motion demands (translational speed and direction
//! plus a turn rate) into per-module steering headings and drive voltages for
//! a four module swerve drivetrain. Translational voltage is only released
//! once the modules are sufficiently aligned with their target headings.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod alignment;
mod calc_targets;
mod cmd;
mod disable;
mod geometry;
mod module_if;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
pub use alignment::*;
pub use calc_targets::*;
pub use cmd::*;
pub use disable::*;
pub use geometry::*;
pub use module_if::*;
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of swerve modules on the robot.
pub const NUM_MODULES: usize = 4;

/// The supply voltage ceiling. No module is ever commanded above this.
///
/// Units: volts
pub const MAX_VOLTAGE: f64 = 12.0;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The corners of the robot, one module per corner.
///
/// The discriminant is the module's index in every per-module array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Corner {
    FrontLeft = 0,
    FrontRight = 1,
    BackLeft = 2,
    BackRight = 3
}

/// Possible errors that can occur during DriveCtrl operation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DriveCtrlError {
    #[error("Alignment threshold must be in the range (0, 1], found {0}")]
    InvalidAlignmentThreshold(f64),

    #[error("Illegally large {quantity} demand ({value}), the limit is {limit}")]
    VoltageOutOfRange {
        quantity: &'static str,
        value: f64,
        limit: f64
    },

    #[error("Received a power command containing a non-finite value: {0:?}")]
    NonFiniteCommand(PowerCmd),

    #[error("The power command produced module targets too large to represent")]
    NonFiniteTargets
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Corner {
    /// All corners in module order.
    pub const ALL: [Corner; NUM_MODULES] = [
        Corner::FrontLeft,
        Corner::FrontRight,
        Corner::BackLeft,
        Corner::BackRight
    ];

    /// Index of this corner's module in per-module arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign of the corner's position along the robot's X (right) and Y
    /// (forward) axes.
    pub fn signs(self) -> (f64, f64) {
        match self {
            Corner::FrontLeft => (-1.0, 1.0),
            Corner::FrontRight => (1.0, 1.0),
            Corner::BackLeft => (-1.0, -1.0),
            Corner::BackRight => (1.0, -1.0)
        }
    }
}
