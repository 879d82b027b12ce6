//! Library surface of the packwright CLI.
//!
//! The binary in `main.rs` is a thin shell over these modules; keeping the
//! logic here makes the command plumbing testable without spawning a
//! process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod overrides;
pub mod ui;
