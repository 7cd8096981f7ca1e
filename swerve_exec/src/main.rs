//! Main swerve drive executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the session, logging and parameters
//!     - Initialise the simulated modules and drive control
//!     - Load the drive script given on the command line
//!     - Main loop:
//!         - Telecommand processing from the script
//!         - Drive control processing
//!         - Archiving of the drive control status
//!     - Stop the drive once the script ends

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, warn};
use serde::Serialize;
use std::env;
use std::thread;
use std::time::{Duration, Instant};
use color_eyre::{Report, eyre::{WrapErr, eyre}};

// Internal
use swerve_lib::{
    drive_ctrl::{self, Corner, DisableSignal, DriveCtrl, StatusReport},
    params::SwerveExecParams,
    script_interpreter::{ScriptInterpreter, PendingTcs},
    sim_module::{self, SimModule},
    tc_processor
};
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter, DEFAULT_TARGET_LEVELS},
    session::{get_elapsed_seconds, Session}
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// One row of the drive control archive.
#[derive(Debug, Serialize)]
struct CycleRecord {
    cycle: u64,
    time_s: f64,
    disabled: bool,
    target_present: bool,
    targets_saturated: bool,
    normalised_error: f64,
    drive_permitted: bool,
    fl_angle_deg: f64,
    fr_angle_deg: f64,
    bl_angle_deg: f64,
    br_angle_deg: f64
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "swerve_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, &DEFAULT_TARGET_LEVELS, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Swerve Drive Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let exec_params: SwerveExecParams = util::params::load(
        "swerve_exec.toml"
    ).wrap_err("Could not load exec params")?;

    if !(exec_params.cycle_period_s.is_finite() && exec_params.cycle_period_s > 0.0) {
        return Err(eyre!(
            "The cycle period must be positive, found {}", exec_params.cycle_period_s
        ));
    }

    let drive_ctrl_params: drive_ctrl::Params = util::params::load(
        &exec_params.drive_ctrl_params
    ).wrap_err("Could not load DriveCtrl params")?;

    let sim_module_params: sim_module::Params = util::params::load(
        &exec_params.sim_module_params
    ).wrap_err("Could not load SimModule params")?;
    sim_module_params.are_valid()
        .wrap_err("SimModule params are invalid")?;

    info!(
        "Exec parameters loaded, running at {:.1} Hz",
        exec_params.cycle_frequency_hz()
    );

    // ---- LOAD SCRIPT ----

    // Collect all arguments
    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    if args.len() != 2 {
        return Err(eyre!(
            "Expected one argument (the drive script path), found {}", args.len() - 1)
        );
    }

    info!("Loading script from \"{}\"", &args[1]);

    let mut script = ScriptInterpreter::new(
        &args[1]).wrap_err("Failed to load script")?;

    info!(
        "Loaded script lasts {:.02} s and contains {} TCs\n",
        script.get_duration(),
        script.get_num_tcs()
    );

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    let disable = DisableSignal::default();

    let modules = [
        SimModule::new(&sim_module_params),
        SimModule::new(&sim_module_params),
        SimModule::new(&sim_module_params),
        SimModule::new(&sim_module_params)
    ];

    let mut drive_ctrl = DriveCtrl::new(
        modules,
        &drive_ctrl_params,
        disable.clone()
    ).wrap_err("Failed to initialise DriveCtrl")?;
    info!("DriveCtrl init complete");

    let mut arch = Archiver::from_path(
        &session,
        "drive_ctrl/status_report.csv"
    ).wrap_err("Failed to create the DriveCtrl archive")?;

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    let cycle_period = Duration::from_secs_f64(exec_params.cycle_period_s);
    let mut num_cycles: u64 = 0;

    loop {

        // Get cycle start time
        let cycle_start_instant = Instant::now();
        let time_s = get_elapsed_seconds();

        // ---- TELECOMMAND PROCESSING ----

        match script.get_pending_tcs(time_s) {
            PendingTcs::None => (),
            PendingTcs::Some(tcs) => {
                for tc in tcs.iter() {
                    debug!("Executing TC: {:?}", tc);
                    tc_processor::exec(&mut drive_ctrl, &disable, tc);
                }
            },
            PendingTcs::EndOfScript => {
                info!("End of script reached");
                break
            }
        }

        // ---- DRIVE CONTROL ----

        let report = drive_ctrl.tick(exec_params.cycle_period_s);

        arch.serialise(cycle_record(num_cycles, time_s, &report, &drive_ctrl))
            .wrap_err("Failed to archive DriveCtrl status")?;

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => thread::sleep(d),
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - cycle_period.as_secs_f64()
                );
            }
        }

        num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    drive_ctrl.stop();

    for (corner, pos) in Corner::ALL.iter().zip(drive_ctrl.positions().iter()) {
        info!(
            "{:?} module: {:.3} m driven, heading {:.1} deg",
            corner, pos.distance, pos.angle_deg
        );
    }

    info!("End of execution after {} cycles", num_cycles);

    Ok(())
}

/// Build the archive row for this cycle.
fn cycle_record(
    cycle: u64,
    time_s: f64,
    report: &StatusReport,
    drive_ctrl: &DriveCtrl<SimModule>
) -> CycleRecord {
    let positions = drive_ctrl.positions();

    CycleRecord {
        cycle,
        time_s,
        disabled: report.disabled,
        target_present: report.target_present,
        targets_saturated: report.targets_saturated,
        normalised_error: report.normalised_error,
        drive_permitted: report.drive_permitted,
        fl_angle_deg: positions[Corner::FrontLeft.index()].angle_deg,
        fr_angle_deg: positions[Corner::FrontRight.index()].angle_deg,
        bl_angle_deg: positions[Corner::BackLeft.index()].angle_deg,
        br_angle_deg: positions[Corner::BackRight.index()].angle_deg
    }
}
