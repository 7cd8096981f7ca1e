//! Simulated swerve module
//!
//! Stands in for the hardware of one corner of the robot, so that drive
//! control can be exercised without motors attached. The steering is a PD
//! loop driving a rate-per-volt actuator, while the drive wheel follows its
//! voltage or velocity demand through a first order lag.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod controller;
mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;

// Internal
pub use controller::*;
pub use params::*;

use util::maths::{ang_delta_deg, clamp, norm_angle_deg};
use crate::drive_ctrl::{
    ModulePosition, PdConstants, SwerveModule, MAX_VOLTAGE};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A single simulated swerve module.
#[derive(Debug, Clone)]
pub struct SimModule {
    params: Params,

    steer_ctrl: PdController,

    /// Current steering heading
    ///
    /// Units: degrees
    angle_deg: f64,

    /// Heading the steering is moving towards
    ///
    /// Units: degrees
    turn_target_deg: f64,

    drive_demand: DriveDemand,

    /// Current wheel speed
    ///
    /// Units: meters/second
    speed_ms: f64,

    /// Distance travelled since start up
    ///
    /// Units: meters
    distance_m: f64
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// What the drive wheel is currently being asked to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveDemand {
    /// Open loop voltage
    Voltage(f64),

    /// Closed loop velocity, in meters/second
    Velocity(f64)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimModule {
    /// Create a new module at rest, pointing at the initial angle.
    pub fn new(params: &Params) -> Self {
        let angle_deg = norm_angle_deg(params.initial_angle_deg);

        Self {
            params: params.clone(),
            steer_ctrl: PdController::new(PdConstants::default()),
            angle_deg,
            turn_target_deg: angle_deg,
            drive_demand: DriveDemand::Velocity(0.0),
            speed_ms: 0.0,
            distance_m: 0.0
        }
    }

    pub fn speed_ms(&self) -> f64 {
        self.speed_ms
    }

    pub fn drive_demand(&self) -> DriveDemand {
        self.drive_demand
    }

    pub fn turn_target_deg(&self) -> f64 {
        self.turn_target_deg
    }
}

impl SwerveModule for SimModule {
    fn set_go_voltage(&mut self, voltage: f64) {
        self.drive_demand = DriveDemand::Voltage(voltage);
    }

    fn set_turn_target(&mut self, heading_deg: f64) {
        self.turn_target_deg = norm_angle_deg(heading_deg);
    }

    fn set_velocity(&mut self, velocity: f64) {
        self.drive_demand = DriveDemand::Velocity(velocity);
    }

    fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    fn get_position(&self, _refresh: bool) -> ModulePosition {
        // The simulated state is always fresh
        ModulePosition {
            distance: self.distance_m,
            angle_deg: self.angle_deg
        }
    }

    fn set_constants(&mut self, constants: PdConstants) {
        self.steer_ctrl.set_constants(constants);
    }

    fn tick(&mut self, dt_s: f64) {
        if dt_s <= 0.0 || !dt_s.is_finite() {
            return;
        }

        // ---- STEERING ----

        let error_deg = ang_delta_deg(self.turn_target_deg, self.angle_deg);
        let steer_voltage = clamp(
            &self.steer_ctrl.get(error_deg, dt_s),
            &-MAX_VOLTAGE,
            &MAX_VOLTAGE
        );

        self.angle_deg = norm_angle_deg(
            self.angle_deg
            + steer_voltage * self.params.steer_rate_degs_per_volt * dt_s
        );

        // ---- DRIVE ----

        let target_speed_ms = match self.drive_demand {
            DriveDemand::Voltage(v) => {
                clamp(&v, &-MAX_VOLTAGE, &MAX_VOLTAGE) * self.params.drive_speed_per_volt
            },
            DriveDemand::Velocity(v) => v
        };

        // Backward Euler step of the lag, stable for any time step
        let alpha = dt_s / (self.params.drive_time_const_s + dt_s);
        self.speed_ms += alpha * (target_speed_ms - self.speed_ms);

        self.distance_m += self.speed_ms * dt_s;

        trace!(
            "SimModule: angle {:.2} (target {:.2}, {:.2} V), speed {:.3} m/s",
            self.angle_deg,
            self.turn_target_deg,
            steer_voltage,
            self.speed_ms
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DT_S: f64 = 0.02;

    fn params() -> Params {
        Params {
            steer_rate_degs_per_volt: 60.0,
            drive_speed_per_volt: 0.1,
            drive_time_const_s: 0.1,
            initial_angle_deg: 0.0
        }
    }

    fn module() -> SimModule {
        let mut m = SimModule::new(&params());
        m.set_constants(PdConstants {
            proportional: 0.2,
            derivative: 0.0
        });
        m
    }

    #[test]
    fn test_steering_converges() {
        let mut m = module();

        // Across the +/-180 seam, so the short way round is negative
        m.set_turn_target(-135.0);
        for _ in 0..200 {
            m.tick(DT_S);
        }
        assert!(ang_delta_deg(m.angle_deg(), -135.0).abs() < 1e-3);

        m.set_turn_target(170.0);
        for _ in 0..200 {
            m.tick(DT_S);
        }
        assert!(ang_delta_deg(m.angle_deg(), 170.0).abs() < 1e-3);
        assert_eq!(m.get_position(true).angle_deg, m.angle_deg());
    }

    #[test]
    fn test_steering_is_rate_limited() {
        let mut m = module();
        m.set_turn_target(90.0);
        m.tick(DT_S);

        // Saturated at the supply ceiling
        let max_step = MAX_VOLTAGE * params().steer_rate_degs_per_volt * DT_S;
        assert!((m.angle_deg() - max_step).abs() < 1e-9);
    }

    #[test]
    fn test_drive_speeds_up_and_stops() {
        let mut m = module();

        m.set_go_voltage(6.0);
        for _ in 0..100 {
            m.tick(DT_S);
        }
        assert!((m.speed_ms() - 0.6).abs() < 1e-3);
        let driven = m.get_position(true).distance;
        assert!(driven > 0.0);

        m.set_velocity(0.0);
        for _ in 0..100 {
            m.tick(DT_S);
        }
        assert!(m.speed_ms().abs() < 1e-3);

        // Coasting down adds a little distance, but not much
        let stopped = m.get_position(true).distance;
        assert!(stopped > driven);
        assert!(stopped - driven < 0.1);
    }

    #[test]
    fn test_zero_dt_does_nothing() {
        let mut m = module();
        m.set_turn_target(45.0);
        m.set_go_voltage(12.0);
        m.tick(0.0);

        assert_eq!(m.angle_deg(), 0.0);
        assert_eq!(m.speed_ms(), 0.0);
    }
}
