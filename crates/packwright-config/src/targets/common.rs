//! The base fragment every variant starts from: entry points, module
//! resolution, output layout, and asset copying.

use indexmap::IndexMap;
use path_clean::PathClean;
use serde_json::json;

use crate::context::WebpackContext;
use crate::hashing::hash_format;
use crate::options::Environment;
use crate::webpack::{OutputSpec, PerformanceSpec, PluginSpec, ResolveSpec, WebpackConfig};

/// Build the shared base fragment.
///
/// Relative paths in the build options (`main`, `output_path`, asset inputs,
/// `records_path`) all resolve against the source root, which also becomes
/// the bundler's working context.
pub fn common(context: &WebpackContext) -> WebpackConfig {
    let build = &context.build;
    let hash = hash_format(build.output_hash, build.output_hash_length);

    let mut entry = IndexMap::new();
    entry.insert("main".to_string(), vec![build.main.clone()]);
    entry.insert("polyfills".to_string(), vec![build.polyfills.clone()]);

    let devtool = if build.source_map {
        let flavor = if build.env == Environment::Production {
            "source-map"
        } else {
            "eval-source-map"
        };
        Some(flavor.to_string())
    } else {
        None
    };

    let main_fields = if context.es2015_support {
        vec!["es2015", "browser", "module", "main"]
    } else {
        vec!["browser", "module", "main"]
    };

    let mut plugins = Vec::new();
    if !build.assets.is_empty() {
        let patterns: Vec<_> = build
            .assets
            .iter()
            .map(|asset| {
                json!({
                    "input": context.root.join(&asset.input),
                    "output": asset.output,
                    "glob": asset.glob,
                })
            })
            .collect();
        plugins.push(PluginSpec::new("copy-webpack-plugin", json!({ "patterns": patterns })));
    }

    WebpackConfig {
        context: Some(context.root.clone()),
        mode: Some(build.env.as_mode().to_string()),
        devtool,
        entry,
        plugins,
        resolve: Some(ResolveSpec {
            extensions: vec![".ts".to_string(), ".js".to_string()],
            main_fields: main_fields.into_iter().map(str::to_string).collect(),
        }),
        output: Some(OutputSpec {
            path: Some(context.root.join(&build.output_path).clean()),
            public_path: Some(build.deploy_path.clone()),
            filename: Some(format!("[name]{}.js", hash.script)),
            chunk_filename: Some(format!("[id]{}.js", hash.bundle)),
        }),
        performance: build
            .build_optimization
            .then(|| PerformanceSpec { hints: Some(json!(false)) }),
        records_path: build
            .records_path
            .as_ref()
            .map(|records| context.root.join(records).clean()),
        ..WebpackConfig::default()
    }
}
