//! # Swerve drive library
//!
//! Drive control for a four module swerve drivetrain, along with a simulated
//! module and the script handling used by the swerve executable.

pub mod drive_ctrl;
pub mod params;
pub mod script_interpreter;
pub mod sim_module;
pub mod tc;
pub mod tc_processor;
