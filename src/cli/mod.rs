//! Command-line front end helpers used by the `gtrace` binary.

pub mod commands;
