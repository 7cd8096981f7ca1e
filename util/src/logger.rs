//! Logging setup for the swerve executables
//!
//! Records go to both stdout and the session log file, stamped with the time
//! elapsed since the session epoch. The per-cycle module simulation is very
//! chatty at trace level, so individual targets can be given their own level.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use log::{self, info};
use fern;
use colored::{ColoredString, Colorize};
use thiserror::Error;

// Internal imports
use crate::session;

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Crate path prefix removed from record targets when printing.
const LIB_TARGET_PREFIX: &str = "swerve_lib::";

/// Default per-target levels, keeping the module simulation out of debug logs.
pub const DEFAULT_TARGET_LEVELS: [(&str, LevelFilter); 1] = [
    ("swerve_lib::sim_module", LevelFilter::Info)
];

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("Expected a log level of at least `INFO`, found `{0}`")]
    InvalidMinLogLevel(log::LevelFilter),

    #[error("Target `{0}` is given a level more verbose than the overall level `{1}`")]
    TargetLevelTooVerbose(String, log::LevelFilter),

    #[error("Could not open the session log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("A logger has already been set: {0}")]
    FernInitError(log::SetLoggerError)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise the logger for this execution.
///
/// `target_levels` overrides `min_level` for the given targets and everything
/// below them, e.g. `("swerve_lib::sim_module", LevelFilter::Info)`.
///
/// # Notes
///
/// - `min_level` must be at least as verbose as `log::Level::Info`.
/// - A target may only be made quieter than `min_level`.
///
/// # Safety
///
/// - This function must only be called once to prevent corrupting logs.
pub fn logger_init(
    min_level: self::LevelFilter,
    target_levels: &[(&str, LevelFilter)],
    session: &session::Session
) -> Result<(), LoggerInitError> {

    check_levels(min_level, target_levels)?;

    let log_file = fern::log_file(session.log_file_path.clone())
        .map_err(LoggerInitError::LogFileInitError)?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {

            // Below info the (shortened) target is shown too
            if record.level() > log::Level::Info {
                out.finish(format_args!(
                    "[{:10.6} {}] {}: {}",
                    session::get_elapsed_seconds(),
                    level_to_str(record.level()),
                    short_target(record.target()),
                    message
                ))
            }
            else {
                out.finish(format_args!(
                    "[{:10.6} {}] {}",
                    session::get_elapsed_seconds(),
                    level_to_str(record.level()),
                    message
                ))
            }

        })
        .level(min_level);

    for (target, level) in target_levels.iter() {
        dispatch = dispatch.level_for(target.to_string(), *level);
    }

    dispatch
        .chain(std::io::stdout())
        .chain(log_file)
        .apply()
        .map_err(LoggerInitError::FernInitError)?;

    info!("Logging initialised");
    info!("    Session epoch: {}", session::get_epoch());
    info!("    Log level: {:?}", min_level);
    for (target, level) in target_levels.iter() {
        info!("    {} level: {:?}", target, level);
    }
    info!("    Log file path: {:?}", session.log_file_path);

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn check_levels(
    min_level: LevelFilter,
    target_levels: &[(&str, LevelFilter)]
) -> Result<(), LoggerInitError> {
    if min_level < log::Level::Info {
        return Err(LoggerInitError::InvalidMinLogLevel(min_level))
    }

    match target_levels.iter().find(|(_, level)| *level > min_level) {
        Some((target, _)) => Err(
            LoggerInitError::TargetLevelTooVerbose(target.to_string(), min_level)
        ),
        None => Ok(())
    }
}

/// Strip the library prefix so `swerve_lib::drive_ctrl::state` prints as
/// `drive_ctrl::state`.
fn short_target(target: &str) -> &str {
    target.strip_prefix(LIB_TARGET_PREFIX).unwrap_or(target)
}

/// Get the string representation of a log level
fn level_to_str(level: log::Level) -> ColoredString {
    match level {
        log::Level::Trace => "TRC".dimmed().italic(),
        log::Level::Debug => "DBG".dimmed(),
        log::Level::Info  => "INF".normal(),
        log::Level::Warn  => "WRN".yellow(),
        log::Level::Error => "ERR".red().bold()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_short_target() {
        assert_eq!(short_target("swerve_lib::drive_ctrl::state"), "drive_ctrl::state");
        assert_eq!(short_target("swerve_exec"), "swerve_exec");
        assert_eq!(short_target("util::session"), "util::session");
    }

    #[test]
    fn test_check_levels() {
        assert!(check_levels(LevelFilter::Debug, &DEFAULT_TARGET_LEVELS).is_ok());
        assert!(check_levels(LevelFilter::Info, &[]).is_ok());

        assert!(matches!(
            check_levels(LevelFilter::Warn, &[]),
            Err(LoggerInitError::InvalidMinLogLevel(LevelFilter::Warn))
        ));

        match check_levels(
            LevelFilter::Debug,
            &[("swerve_lib::sim_module", LevelFilter::Trace)]
        ) {
            Err(LoggerInitError::TargetLevelTooVerbose(target, level)) => {
                assert_eq!(target, "swerve_lib::sim_module");
                assert_eq!(level, LevelFilter::Debug);
            },
            r => panic!("Expected TargetLevelTooVerbose, got {:?}", r)
        }
    }
}
