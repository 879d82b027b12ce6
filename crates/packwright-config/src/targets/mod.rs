//! Per-target configuration fragments.
//!
//! Each builder takes the resolved [`WebpackContext`](crate::context::WebpackContext)
//! and returns one sparse [`WebpackConfig`](crate::webpack::WebpackConfig)
//! fragment. Variants pick an ordered subset of these and fold them with the
//! deep-merge semantics in [`crate::merge`]. Builders are pure: no file I/O,
//! no validation, no plugin instantiation.

mod aot;
mod browser;
mod common;
mod jit;
mod test;

pub use aot::aot;
pub use browser::browser;
pub use common::common;
pub use jit::jit;
pub use test::{test, test_jit};

use serde_json::json;

use crate::options::BuildOptions;
use crate::webpack::{OptimizationSpec, PluginSpec};

/// The minimizer block shared by the production build fragments.
///
/// `higher_compression` trades build time for extra compressor passes.
pub(crate) fn production_optimization(build: &BuildOptions) -> Option<OptimizationSpec> {
    if !build.build_optimization {
        return None;
    }
    let passes = if build.higher_compression { 3 } else { 1 };
    Some(OptimizationSpec {
        minimize: Some(true),
        minimizer: vec![PluginSpec::new(
            "terser-webpack-plugin",
            json!({
                "parallel": true,
                "sourceMap": build.source_map,
                "terserOptions": { "compress": { "passes": passes } },
            }),
        )],
    })
}

#[cfg(test)]
pub(crate) fn test_context(build: BuildOptions) -> crate::context::WebpackContext {
    use std::path::PathBuf;

    crate::context::WebpackContext {
        project_root: PathBuf::from("/work/site"),
        root: PathBuf::from("/work/site/src"),
        ts_config_path: PathBuf::from("/work/site/src/tsconfig.app.json"),
        es2015_support: false,
        build,
    }
}
