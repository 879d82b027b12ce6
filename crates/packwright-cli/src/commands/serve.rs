//! Serve task implementation.

use packwright_config::ProjectLayout;
use packwright_presets::serve;

use crate::cli::ServeArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::overrides;

/// Execute the serve task.
///
/// Composes the development-server configuration (development defaults plus
/// the `devServer` block) and emits it as JSON.
pub fn execute(args: ServeArgs) -> Result<()> {
    let layout = ProjectLayout::new(&args.compose.root);
    let overrides = overrides::layered(&args.compose)?;

    utils::emit(&serve(&layout, overrides), &args.compose)
}
