//! Implementations for the DriveCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, trace};
use serde::Serialize;

// Internal
use super::{
    calc_targets, drive_permitted, normalised_error, threshold_in_range,
    validate_power_cmd,
    Corner, DisableSignal, DriveCtrlError, ModulePosition, ModuleTargets,
    Params, ParamsError, PdConstants, PowerCmd, RobotGeometry,
    SwerveKinematics, SwerveModule,
    NUM_MODULES};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Drive control module state
pub struct DriveCtrl<M: SwerveModule> {
    /// The modules, in `Corner` order.
    modules: [M; NUM_MODULES],

    geometry: RobotGeometry,
    kinematics: SwerveKinematics,

    alignment_threshold: f64,

    disable: DisableSignal,

    /// The current targets, or `None` if the drive shall be at rest.
    targets: Option<ModuleTargets>,

    report: StatusReport,
}

/// Status report for DriveCtrl processing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StatusReport {
    /// The disable signal was asserted this cycle.
    pub disabled: bool,

    /// There were targets to drive to this cycle.
    pub target_present: bool,

    /// The current targets were scaled down to the supply ceiling.
    pub targets_saturated: bool,

    /// Magnitude weighted heading error of the modules (0 to 2).
    pub normalised_error: f64,

    /// Translational voltage was applied this cycle.
    pub drive_permitted: bool
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<M: SwerveModule> DriveCtrl<M> {

    /// Create the controller from its four modules, in `Corner` order.
    ///
    /// The parameters are validated, and the steering gains in them are
    /// passed to every module.
    pub fn new(
        modules: [M; NUM_MODULES],
        params: &Params,
        disable: DisableSignal
    ) -> Result<Self, ParamsError> {
        params.are_valid()?;

        let mut ctrl = Self {
            modules,
            geometry: RobotGeometry::from_params(params),
            kinematics: SwerveKinematics::from_params(params)?,
            alignment_threshold: params.alignment_threshold,
            disable,
            targets: None,
            report: StatusReport::default()
        };

        ctrl.set_constants(params.steer_constants);

        info!(
            "DriveCtrl initialised, turn radius {:.3}, alignment threshold {}",
            ctrl.geometry.turn_radius(),
            ctrl.alignment_threshold
        );

        Ok(ctrl)
    }

    /// Set the motion the drive shall perform.
    ///
    /// On error the previous targets remain in effect. If the drive is
    /// disabled no targets are calculated and the drive is stopped instead,
    /// but the command is still validated.
    pub fn power(&mut self, cmd: &PowerCmd) -> Result<(), DriveCtrlError> {
        if self.disable.is_asserted() {
            self.stop();
            return validate_power_cmd(cmd);
        }

        let targets = calc_targets(&self.geometry, cmd)?;

        trace!("DriveCtrl targets for {:?}:\n    {:?}", cmd, targets.vectors);

        if targets.saturated {
            debug!(
                "DriveCtrl targets saturated for {:?}", cmd
            );
        }

        self.targets = Some(targets);

        Ok(())
    }

    /// Perform cyclic processing of drive control.
    ///
    /// Steering targets are always passed on to the modules, while the
    /// translational voltage is gated on the modules' alignment. Every
    /// module's own control loop is then advanced by `dt_s`.
    pub fn tick(&mut self, dt_s: f64) -> StatusReport {
        let disabled = self.disable.is_asserted();
        if disabled {
            self.stop();
        }

        let mut report = StatusReport {
            disabled,
            ..StatusReport::default()
        };

        match self.targets {
            None => {
                for module in self.modules.iter_mut() {
                    module.set_velocity(0.0);
                }
            },
            Some(targets) => {
                let mut current_angles_deg = [0f64; NUM_MODULES];
                for (angle, module) in current_angles_deg.iter_mut().zip(self.modules.iter()) {
                    *angle = module.angle_deg();
                }

                report.target_present = true;
                report.targets_saturated = targets.saturated;
                report.normalised_error = normalised_error(&targets, &current_angles_deg);
                report.drive_permitted = drive_permitted(
                    report.normalised_error,
                    self.alignment_threshold
                );

                if report.drive_permitted != self.report.drive_permitted {
                    debug!(
                        "Drive {} (normalised error {:.3}, threshold {})",
                        if report.drive_permitted { "released" } else { "gated" },
                        report.normalised_error,
                        self.alignment_threshold
                    );
                }

                for &corner in Corner::ALL.iter() {
                    let module = &mut self.modules[corner.index()];

                    if report.drive_permitted {
                        module.set_go_voltage(targets.voltage(corner));
                    }
                    else {
                        module.set_go_voltage(0.0);
                    }
                    module.set_turn_target(targets.heading_deg(corner));
                }
            }
        }

        for module in self.modules.iter_mut() {
            module.tick(dt_s);
        }

        trace!("DriveCtrl report: {:?}", report);

        self.report = report;
        report
    }

    /// Stop the drive.
    ///
    /// Clears the targets and zeros every module's translational effort.
    /// Steering targets are left as they were.
    pub fn stop(&mut self) {
        if self.targets.take().is_some() {
            debug!("DriveCtrl targets cleared");
        }

        for module in self.modules.iter_mut() {
            module.set_go_voltage(0.0);
            module.set_velocity(0.0);
        }
    }

    /// Set how closely the modules must be aligned before driving.
    ///
    /// Values outside (0, 1] are rejected and the previous threshold is kept.
    pub fn set_alignment_threshold(&mut self, threshold: f64) -> Result<(), DriveCtrlError> {
        if !threshold_in_range(threshold) {
            return Err(DriveCtrlError::InvalidAlignmentThreshold(threshold));
        }

        self.alignment_threshold = threshold;
        Ok(())
    }

    pub fn alignment_threshold(&self) -> f64 {
        self.alignment_threshold
    }

    /// Set the same steering gains on every module.
    pub fn set_constants(&mut self, constants: PdConstants) {
        for module in self.modules.iter_mut() {
            module.set_constants(constants);
        }
    }

    /// Cumulative telemetry of every module, in `Corner` order.
    pub fn positions(&self) -> [ModulePosition; NUM_MODULES] {
        let mut positions = [ModulePosition::default(); NUM_MODULES];
        for (pos, module) in positions.iter_mut().zip(self.modules.iter()) {
            *pos = module.get_position(true);
        }
        positions
    }

    /// The current targets, `None` if the drive is at rest.
    pub fn targets(&self) -> Option<&ModuleTargets> {
        self.targets.as_ref()
    }

    /// The report from the last call to `tick`.
    pub fn report(&self) -> StatusReport {
        self.report
    }

    pub fn geometry(&self) -> &RobotGeometry {
        &self.geometry
    }

    pub fn kinematics(&self) -> &SwerveKinematics {
        &self.kinematics
    }

    pub fn module(&self, corner: Corner) -> &M {
        &self.modules[corner.index()]
    }

    pub fn module_mut(&mut self, corner: Corner) -> &mut M {
        &mut self.modules[corner.index()]
    }
}
