//! # Steering controller
//!
//! This module provides the PD controller used by the simulated module to
//! drive its steering towards the target heading.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use crate::drive_ctrl::PdConstants;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A PD controller
#[derive(Debug, Serialize, Clone)]
pub struct PdController {
    /// Proportional gain
    k_p: f64,

    /// Derivative gain
    k_d: f64,

    /// Previous error
    prev_error: Option<f64>
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PdController {

    /// Create a new controller with the given gains.
    pub fn new(constants: PdConstants) -> Self {
        Self {
            k_p: constants.proportional,
            k_d: constants.derivative,
            prev_error: None
        }
    }

    /// Replace the gains, keeping the error history.
    pub fn set_constants(&mut self, constants: PdConstants) {
        self.k_p = constants.proportional;
        self.k_d = constants.derivative;
    }

    /// Get the value of the controller for the given error, `dt` seconds
    /// after the previous one.
    pub fn get(&mut self, error: f64, dt: f64) -> f64 {
        // Calculate the derivative.
        //
        // Without a previous error or a time difference there is nothing to
        // differentiate, so no derivative term is applied. Differentiating
        // against zero would produce a large kick on the first call.
        let deriv = match self.prev_error {
            Some(e) if dt > 0.0 => (error - e) / dt,
            _ => 0f64
        };

        let out = self.k_p * error + self.k_d * deriv;

        self.prev_error = Some(error);

        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_proportional_only() {
        let mut ctrl = PdController::new(PdConstants {
            proportional: 0.5,
            derivative: 0.0
        });

        assert_eq!(ctrl.get(10.0, 0.1), 5.0);
        assert_eq!(ctrl.get(-4.0, 0.1), -2.0);
    }

    #[test]
    fn test_derivative() {
        let mut ctrl = PdController::new(PdConstants {
            proportional: 0.0,
            derivative: 1.0
        });

        // No kick on the first call
        assert_eq!(ctrl.get(10.0, 0.5), 0.0);
        assert_eq!(ctrl.get(8.0, 0.5), -4.0);

        // Zero time step produces no derivative
        assert_eq!(ctrl.get(2.0, 0.0), 0.0);
    }
}
