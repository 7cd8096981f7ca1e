//! Module alignment gating
//!
//! Translational voltage is only released once the modules are pointing close
//! enough to their targets. Closeness is measured as the heading error of each
//! module, scaled so that 90 degrees of error is 1.0, averaged with each
//! module's target voltage as its weight.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use util::maths::ang_delta_deg;
use super::{ModuleTargets, NUM_MODULES};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Heading error which counts as a normalised error of 1.
///
/// Units: degrees
pub const UNIT_HEADING_ERROR_DEG: f64 = 90.0;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// True if `threshold` is a valid alignment threshold, i.e. in (0, 1].
pub fn threshold_in_range(threshold: f64) -> bool {
    threshold > 0.0 && threshold <= 1.0
}

/// Magnitude weighted heading error of the modules, between 0 and 2.
///
/// If every target has zero magnitude there is nothing to weight the error
/// by, and the modules are treated as perfectly aligned (0).
pub fn normalised_error(
    targets: &ModuleTargets,
    current_angles_deg: &[f64; NUM_MODULES]
) -> f64 {
    let mut error_sum = 0.0;
    let mut magnitude_sum = 0.0;

    for (target, current_deg) in targets.vectors.iter().zip(current_angles_deg.iter()) {
        let magnitude = target.magnitude();
        let heading_error = ang_delta_deg(*current_deg, target.angle_deg()).abs()
            / UNIT_HEADING_ERROR_DEG;

        error_sum += magnitude * heading_error;
        magnitude_sum += magnitude;
    }

    if magnitude_sum > 0.0 {
        error_sum / magnitude_sum
    }
    else {
        0.0
    }
}

/// Decide whether translational voltage may be applied this cycle.
///
/// The decision applies to all modules together.
pub fn drive_permitted(normalised_error: f64, alignment_threshold: f64) -> bool {
    normalised_error < 1.0 - alignment_threshold
}
