//! # Drive script interpreter module
//!
//! This module provides an interpreter for drive scripts, allowing
//! telecommands to be executed at set times.
//!
//! A script is a list of `<time_s>: <json TC>;` entries, one per line. Lines
//! starting with `#` are comments.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::fs;
use regex::RegexBuilder;
use thiserror::Error;

// Internal
use crate::tc::{DriveTc, TcParseError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A command which is scripted to occur at a specific time.
#[derive(Debug, Clone)]
struct Command {
    /// The time the command is supposed to execute at
    exec_time_s: f64,

    /// The Telecommand to run
    tc: DriveTc
}

/// A script interpreter.
///
/// After initialising with the path to the script to run use
/// `.get_pending_tcs` to acquire a list of telecommands that need executing.
#[derive(Debug)]
pub struct ScriptInterpreter {
    script_path: Option<PathBuf>,
    cmds: VecDeque<Command>,
    duration_s: f64
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Could not find the script at {0}")]
    ScriptNotFound(String),

    #[error("Could not load the script: {0}")]
    ScriptLoadError(std::io::Error),

    #[error("The script is empty (or is so bad it can't be read)")]
    ScriptEmpty,

    #[error(
        "Script contains an invalid timestamp: {0}. \
        Should be a non-negative float (like 1.0)")]
    InvalidTimestamp(String),

    #[error("Script contains an invalid TC at {0} s: {1}")]
    InvalidTc(f64, TcParseError)
}

#[derive(Debug, PartialEq)]
pub enum PendingTcs {
    None,
    Some(Vec<DriveTc>),
    EndOfScript
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ScriptInterpreter {

    /// Create a new interpreter from the given script path.
    pub fn new<P: AsRef<Path>>(script_path: P) -> Result<Self, ScriptError> {

        // Get the path in a buffer
        let path = PathBuf::from(script_path.as_ref());

        // Check that the script file exists.
        if !path.exists() {
            return Err(
                ScriptError::ScriptNotFound(path.display().to_string()));
        }

        // Load the script into a string
        let script = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => return Err(ScriptError::ScriptLoadError(e))
        };

        let mut interp = Self::from_script_str(&script)?;
        interp.script_path = Some(path);

        Ok(interp)
    }

    /// Create a new interpreter from the contents of a script.
    pub fn from_script_str(script: &str) -> Result<Self, ScriptError> {

        // Drop comment lines before matching
        let script: String = script
            .lines()
            .filter(|l| !l.trim_start().starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        // Go through the script executing __the magic regex__.
        let re = RegexBuilder::
            new(r"^\s*([^:;\s]+)\s*:\s*([^;]*);")
            .multi_line(true)
            .build()
            .expect("script pattern is a valid regex");

        let mut cmds: Vec<Command> = vec![];

        for cap in re.captures_iter(&script) {
            // Parse the exec time
            let exec_time_s = match cap[1].parse::<f64>() {
                Ok(t) if t >= 0.0 && t.is_finite() => t,
                _ => return Err(
                    ScriptError::InvalidTimestamp(cap[1].to_string()))
            };

            // Parse the TC from the payload. The scripts contain JSON only.
            let tc = match DriveTc::from_json(&cap[2]) {
                Ok(c) => c,
                Err(e) => return Err(ScriptError::InvalidTc(
                    exec_time_s, e
                ))
            };

            cmds.push(Command {
                exec_time_s,
                tc
            });
        }

        if cmds.is_empty() {
            return Err(ScriptError::ScriptEmpty)
        }

        // Stable sort, so TCs at the same time keep their script order
        cmds.sort_by(|a, b| a.exec_time_s
            .partial_cmp(&b.exec_time_s)
            .unwrap_or(Ordering::Equal)
        );

        let duration_s = cmds
            .last()
            .map(|c| c.exec_time_s)
            .unwrap_or(0f64);

        Ok(ScriptInterpreter {
            script_path: None,
            cmds: cmds.into(),
            duration_s
        })
    }

    /// Return the TCs due at or before `now_s`, in execution order.
    pub fn get_pending_tcs(&mut self, now_s: f64) -> PendingTcs {

        // If the queue is empty the script is over and we return the end of
        // script variant
        if self.cmds.is_empty() {
            return PendingTcs::EndOfScript
        }

        let mut tc_vec: Vec<DriveTc> = vec![];

        // Pop items from the queue while the head's exec time has been
        // reached.
        while let Some(cmd) = self.cmds.front() {
            if cmd.exec_time_s > now_s {
                break;
            }
            if let Some(cmd) = self.cmds.pop_front() {
                tc_vec.push(cmd.tc);
            }
        }

        // If the vector is longer than 0 return Some, otherwise None
        if !tc_vec.is_empty() {
            PendingTcs::Some(tc_vec)
        }
        else {
            PendingTcs::None
        }
    }

    /// Get the number of TCs still to be executed
    pub fn get_num_tcs(&self) -> usize {
        self.cmds.len()
    }

    /// Get the length of the script in seconds
    pub fn get_duration(&self) -> f64 {
        self.duration_s
    }

    /// The path the script was loaded from, if any
    pub fn script_path(&self) -> Option<&Path> {
        self.script_path.as_deref()
    }
}
