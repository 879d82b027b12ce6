//! Override layering for the composing tasks.
//!
//! Sources, weakest first: the override file (`packwright.toml`, or
//! `--config`), `PACKWRIGHT_*` environment variables, then explicit flags.
//! The layered result becomes the explicit-override level of the option
//! precedence chain; variant defaults and the base record sit below it.
//!
//! Environment keys nest on a double underscore:
//! `PACKWRIGHT_BUILD__EXTRACT_CSS=true` sets `build.extract_css`.

use figment::providers::{Env, Format as _, Serialized, Toml};
use figment::Figment;
use std::path::Path;

use packwright_config::{BuildOverrides, ContextOverrides};

use crate::cli::ComposeArgs;
use crate::error::Result;

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_OVERRIDE_FILE: &str = "packwright.toml";

/// Prefix for override environment variables.
pub const ENV_PREFIX: &str = "PACKWRIGHT_";

/// Layer the override sources for one task invocation.
pub fn layered(args: &ComposeArgs) -> Result<ContextOverrides> {
    let mut figment = Figment::new().merge(Serialized::defaults(ContextOverrides::default()));

    let file = args.config.clone().or_else(|| {
        let default = Path::new(DEFAULT_OVERRIDE_FILE);
        default.exists().then(|| default.to_path_buf())
    });
    if let Some(path) = file {
        figment = figment.merge(Toml::file(path));
    }

    let overrides = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(from_args(args)))
        .extract()?;
    Ok(overrides)
}

/// Map explicit flags onto the override document.
///
/// Unset flags are absent from the serialized form, so they never shadow
/// file or environment values.
fn from_args(args: &ComposeArgs) -> ContextOverrides {
    ContextOverrides {
        build: BuildOverrides {
            env: args.env.map(Into::into),
            source_map: args.source_map,
            extract_css: args.extract_css,
            output_hash: args.output_hash.map(Into::into),
            https: args.https,
            hmr: args.hmr,
            deploy_path: args.deploy_path.clone(),
            main: args.main.clone(),
            ..BuildOverrides::default()
        },
        ..ContextOverrides::default()
    }
}
