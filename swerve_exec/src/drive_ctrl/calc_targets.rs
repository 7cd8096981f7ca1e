//! Module target calculations
//!
//! Each module's target is the sum of the robot's translational ("go") vector
//! and that module's share of the rotation ("turn") vector. The magnitude of
//! the result is the drive voltage and its heading is the steering target.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use util::{maths::norm_angle_deg, vec2::Vec2};
use super::{
    turn_unit_vec,
    Corner, DriveCtrlError, PowerCmd, RobotGeometry,
    MAX_VOLTAGE, NUM_MODULES};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The target vector of every module, produced by a single power command.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ModuleTargets {
    /// Target vectors in module order.
    pub vectors: [Vec2; NUM_MODULES],

    /// True if the vectors were scaled down to respect `MAX_VOLTAGE`.
    pub saturated: bool
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ModuleTargets {
    /// The target vector of the given module.
    pub fn get(&self, corner: Corner) -> Vec2 {
        self.vectors[corner.index()]
    }

    /// Drive voltage for the given module.
    pub fn voltage(&self, corner: Corner) -> f64 {
        self.get(corner).magnitude()
    }

    /// Steering heading for the given module.
    pub fn heading_deg(&self, corner: Corner) -> f64 {
        self.get(corner).angle_deg()
    }

    /// Largest target magnitude.
    pub fn max_magnitude(&self) -> f64 {
        self.vectors
            .iter()
            .map(|v| v.magnitude())
            .fold(0.0, f64::max)
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Check a power command can be executed.
///
/// Non-finite values are always rejected. Oversized go speeds and turn rates
/// are only rejected if the command asks for strict checking.
pub fn validate_power_cmd(cmd: &PowerCmd) -> Result<(), DriveCtrlError> {
    if !cmd.is_finite() {
        return Err(DriveCtrlError::NonFiniteCommand(*cmd));
    }

    if cmd.strict_voltage_check {
        if cmd.go_speed.abs() > MAX_VOLTAGE {
            return Err(DriveCtrlError::VoltageOutOfRange {
                quantity: "go speed",
                value: cmd.go_speed,
                limit: MAX_VOLTAGE
            });
        }
        if cmd.turn_rate_degs.abs() > MAX_VOLTAGE {
            return Err(DriveCtrlError::VoltageOutOfRange {
                quantity: "turn rate",
                value: cmd.turn_rate_degs,
                limit: MAX_VOLTAGE
            });
        }
    }

    Ok(())
}

/// Calculate the target of every module for the given command.
///
/// The command is validated first, no targets are produced if it is invalid.
/// Commands which are finite but so large that a module's raw target
/// overflows are rejected too.
pub fn calc_targets(
    geometry: &RobotGeometry,
    cmd: &PowerCmd
) -> Result<ModuleTargets, DriveCtrlError> {
    validate_power_cmd(cmd)?;

    // Linear speed of each module due to the rotation demand
    let turn_speed = geometry.turn_rate_to_speed(cmd.turn_rate_degs);

    let go_vec = Vec2::from_polar(norm_angle_deg(cmd.go_direction_deg), cmd.go_speed);

    let mut vectors = [Vec2::zero(); NUM_MODULES];
    for &corner in Corner::ALL.iter() {
        vectors[corner.index()] = go_vec + turn_unit_vec(corner) * turn_speed;
    }

    if !vectors.iter().all(Vec2::is_finite) {
        return Err(DriveCtrlError::NonFiniteTargets);
    }

    let saturated = saturate(&mut vectors);

    Ok(ModuleTargets {
        vectors,
        saturated
    })
}

/// Scale all vectors by the same factor so that none exceeds `MAX_VOLTAGE`.
///
/// Scaling every module together keeps the ratio between them, and therefore
/// the direction the robot moves in. Returns true if scaling was applied.
pub fn saturate(vectors: &mut [Vec2; NUM_MODULES]) -> bool {
    let largest = vectors
        .iter()
        .map(|v| v.magnitude())
        .fold(0.0, f64::max);

    if largest <= MAX_VOLTAGE {
        return false;
    }

    let factor = MAX_VOLTAGE / largest;
    for v in vectors.iter_mut() {
        *v = v.scale(factor);
    }

    true
}
