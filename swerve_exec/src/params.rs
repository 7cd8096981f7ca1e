//! # Swerve Executable Parameters
//!
//! This module provide parameters for the swerve executable.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

// ---------------------------------------------------------------------------
// STRUCTS
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwerveExecParams {

    /// Target period of one cycle.
    ///
    /// Units: seconds
    pub cycle_period_s: f64,

    /// Parameter file for drive control, relative to the params directory
    pub drive_ctrl_params: String,

    /// Parameter file for the simulated modules, relative to the params
    /// directory
    pub sim_module_params: String
}

impl SwerveExecParams {
    /// Number of cycles per second
    pub fn cycle_frequency_hz(&self) -> f64 {
        1.0 / self.cycle_period_s
    }
}
