//! Shared helpers for the composing tasks.

use std::fs;

use packwright_presets::Preset;
use tracing::debug;

use crate::cli::ComposeArgs;
use crate::error::{Result, TaskError};
use crate::ui;

/// Serialize the preset's configuration and deliver it.
///
/// The payload goes to `--out` when given, otherwise to stdout. Status
/// messages stay on stderr either way, so piped output is always valid
/// JSON.
pub(crate) fn emit(preset: &Preset, args: &ComposeArgs) -> Result<()> {
    let value = preset.config_value()?;
    let payload = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    match &args.out {
        Some(path) => {
            fs::write(path, payload.as_bytes()).map_err(|source| TaskError::Emit {
                path: path.clone(),
                source,
            })?;
            ui::success(&format!(
                "Wrote {} configuration to {}",
                preset.name(),
                path.display()
            ));
        }
        None => {
            debug!(variant = preset.name(), "emitting configuration to stdout");
            println!("{payload}");
        }
    }

    Ok(())
}
