//! ibscreen-cli library root.
//!
//! Argument parsing and intake loading live here so integration tests can
//! exercise them without running a model call.

pub mod args;
pub mod intake;
