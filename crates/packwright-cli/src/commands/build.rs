//! Build task implementation.

use packwright_config::ProjectLayout;
use packwright_presets::{aot, jit};

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::overrides;

/// Execute the build task.
///
/// Composes the JIT build configuration, or the AOT one when `--aot` is
/// given, and emits it as JSON.
pub fn execute(args: BuildArgs) -> Result<()> {
    let layout = ProjectLayout::new(&args.compose.root);
    let overrides = overrides::layered(&args.compose)?;

    let preset = if args.aot {
        aot(&layout, overrides)
    } else {
        jit(&layout, overrides)
    };

    utils::emit(&preset, &args.compose)
}
