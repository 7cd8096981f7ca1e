//! # Drive telecommand module
//!
//! Telecommands are the instructions given to the drive from outside, for
//! example from a drive script. They are carried as JSON objects whose `type`
//! field names the command.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Internal
use crate::drive_ctrl::{PdConstants, PowerCmd};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A drive telecommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DriveTc {
    /// Set the motion of the robot, see `PowerCmd`.
    Power {
        go_speed: f64,
        go_direction_deg: f64,
        turn_rate_degs: f64,

        #[serde(default = "default_strict")]
        strict: bool
    },

    /// Stop the drive.
    Stop,

    /// Change the alignment threshold.
    SetAlignmentThreshold {
        value: f64
    },

    /// Change the steering gains of every module.
    SetConstants {
        proportional: f64,
        derivative: f64
    },

    /// Assert the drive disable signal.
    Disable,

    /// Release the drive disable signal.
    Enable
}

/// Possible parsing errors.
#[derive(Debug, Error)]
pub enum TcParseError {
    #[error("TC contains invalid JSON or is not a recognised TC: {0}")]
    InvalidJson(serde_json::Error)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl DriveTc {

    /// Parse a new TC from a JSON packet
    pub fn from_json(json_str: &str) -> Result<Self, TcParseError> {
        serde_json::from_str(json_str).map_err(TcParseError::InvalidJson)
    }

    /// The power command carried by a `Power` TC.
    pub fn power_cmd(&self) -> Option<PowerCmd> {
        match *self {
            DriveTc::Power {
                go_speed,
                go_direction_deg,
                turn_rate_degs,
                strict
            } => {
                let cmd = PowerCmd::new(go_speed, go_direction_deg, turn_rate_degs);
                Some(if strict { cmd } else { cmd.lenient() })
            },
            _ => None
        }
    }

    /// The gains carried by a `SetConstants` TC.
    pub fn pd_constants(&self) -> Option<PdConstants> {
        match *self {
            DriveTc::SetConstants { proportional, derivative } => Some(PdConstants {
                proportional,
                derivative
            }),
            _ => None
        }
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn default_strict() -> bool {
    true
}
