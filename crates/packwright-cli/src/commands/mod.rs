//! Task implementations for the packwright CLI.
//!
//! - [`build`] - compose the JIT or AOT build configuration
//! - [`serve`] - compose the development-server configuration
//! - [`test`] - compose the test-runner configuration
//! - [`default`] - the guidance banner printed when no task is named
//!
//! Each composing task is implemented in its own module and provides an
//! `execute` function that takes the parsed arguments and returns a Result.

pub mod build;
pub mod default;
pub mod serve;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use build::execute as build_execute;
pub use default::execute as default_task;
pub use serve::execute as serve_execute;
pub use test::execute as test_execute;
