//! scribewise-cli library root.
//!
//! Exposes the host modules so integration tests can exercise config
//! migration and argument parsing without spawning the binary.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod notify;
