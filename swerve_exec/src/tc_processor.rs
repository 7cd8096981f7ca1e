//! # Telecommand processor module
//!
//! The telecommand processor hands drive TCs on to drive control.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, warn};

// Internal
use crate::drive_ctrl::{DisableSignal, DriveCtrl, SwerveModule};
use crate::tc::DriveTc;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Execute a telecommand.
///
/// Rejected TCs are logged and otherwise ignored, leaving drive control as it
/// was.
pub fn exec<M: SwerveModule>(
    drive_ctrl: &mut DriveCtrl<M>,
    disable: &DisableSignal,
    tc: &DriveTc
) {

    // Handle different Tcs
    match tc {
        DriveTc::Power { .. } => {
            if let Some(cmd) = tc.power_cmd() {
                if let Err(e) = drive_ctrl.power(&cmd) {
                    warn!("Power command rejected: {}", e);
                }
            }
        },
        DriveTc::Stop => {
            debug!("Recieved Stop command");
            drive_ctrl.stop();
        },
        DriveTc::SetAlignmentThreshold { value } => {
            match drive_ctrl.set_alignment_threshold(*value) {
                Ok(()) => info!("Alignment threshold set to {}", value),
                Err(e) => warn!("Alignment threshold rejected: {}", e)
            }
        },
        DriveTc::SetConstants { .. } => {
            if let Some(constants) = tc.pd_constants() {
                info!("Steering constants set to {:?}", constants);
                drive_ctrl.set_constants(constants);
            }
        },
        DriveTc::Disable => {
            info!("Drive disabled");
            disable.assert();
        },
        DriveTc::Enable => {
            info!("Drive enabled");
            disable.release();
        }
    }

}

#[cfg(test)]
mod test {
    use super::*;
    use crate::drive_ctrl::{Corner, Params};
    use crate::sim_module::{self, SimModule};

    const DRIVE_CTRL_PARAMS: &str = r#"
        half_width = 14.0
        half_length = 14.0
        geometry_unit_m = 0.0254
        module_offsets_m = [
            [-0.3556, 0.3556],
            [0.3556, 0.3556],
            [-0.3556, -0.3556],
            [0.3556, -0.3556]
        ]
        geometry_tolerance_m = 0.001
        alignment_threshold = 0.2

        [steer_constants]
        proportional = 0.2
        derivative = 0.0
    "#;

    fn new_ctrl() -> (DriveCtrl<SimModule>, DisableSignal) {
        let params: Params = util::params::from_toml_str(DRIVE_CTRL_PARAMS).unwrap();
        let sim_params = sim_module::Params {
            steer_rate_degs_per_volt: 60.0,
            drive_speed_per_volt: 0.1,
            drive_time_const_s: 0.1,
            initial_angle_deg: 0.0
        };
        let modules = [
            SimModule::new(&sim_params),
            SimModule::new(&sim_params),
            SimModule::new(&sim_params),
            SimModule::new(&sim_params)
        ];

        let disable = DisableSignal::default();
        let ctrl = DriveCtrl::new(modules, &params, disable.clone()).unwrap();

        (ctrl, disable)
    }

    fn power(go_speed: f64, strict: bool) -> DriveTc {
        DriveTc::Power {
            go_speed,
            go_direction_deg: 90.0,
            turn_rate_degs: 0.0,
            strict
        }
    }

    #[test]
    fn test_power_and_stop() {
        let (mut ctrl, disable) = new_ctrl();

        exec(&mut ctrl, &disable, &power(6.0, true));
        assert!(ctrl.targets().is_some());

        exec(&mut ctrl, &disable, &DriveTc::Stop);
        assert!(ctrl.targets().is_none());
    }

    #[test]
    fn test_rejected_tcs_change_nothing() {
        let (mut ctrl, disable) = new_ctrl();

        exec(&mut ctrl, &disable, &power(20.0, true));
        assert!(ctrl.targets().is_none());

        exec(&mut ctrl, &disable, &power(20.0, false));
        assert!(ctrl.targets().unwrap().saturated);

        exec(&mut ctrl, &disable, &DriveTc::SetAlignmentThreshold { value: 2.0 });
        assert_eq!(ctrl.alignment_threshold(), 0.2);

        exec(&mut ctrl, &disable, &DriveTc::SetAlignmentThreshold { value: 0.5 });
        assert_eq!(ctrl.alignment_threshold(), 0.5);
    }

    #[test]
    fn test_disable_and_enable() {
        let (mut ctrl, disable) = new_ctrl();
        exec(&mut ctrl, &disable, &power(6.0, true));

        exec(&mut ctrl, &disable, &DriveTc::Disable);
        assert!(disable.is_asserted());
        assert!(ctrl.tick(0.02).disabled);
        assert!(ctrl.targets().is_none());

        exec(&mut ctrl, &disable, &DriveTc::Enable);
        assert!(!disable.is_asserted());
        exec(&mut ctrl, &disable, &power(6.0, true));
        assert!(ctrl.targets().is_some());
    }

    #[test]
    fn test_drives_to_target() {
        let (mut ctrl, disable) = new_ctrl();
        exec(&mut ctrl, &disable, &DriveTc::SetConstants {
            proportional: 0.3,
            derivative: 0.0
        });
        exec(&mut ctrl, &disable, &power(6.0, true));

        // Modules start at 0 degrees, a full 90 degrees off target, so the
        // drive is gated until they come round.
        assert!(!ctrl.tick(0.02).drive_permitted);

        for _ in 0..200 {
            ctrl.tick(0.02);
        }

        let report = ctrl.report();
        assert!(report.drive_permitted);
        assert!(report.normalised_error < 1e-3);

        for (i, pos) in ctrl.positions().iter().enumerate() {
            assert!(pos.distance > 0.0, "module {} did not move", i);
            assert!((pos.angle_deg - 90.0).abs() < 1e-3);
        }
        assert!(
            ctrl.module(Corner::FrontLeft).speed_ms() > 0.5,
            "front left module is too slow"
        );
    }
}
