//! AOT compilation fragment: route TypeScript through the Angular compiler
//! so templates are code-generated ahead of time.

use serde_json::json;

use crate::context::WebpackContext;
use crate::targets::production_optimization;
use crate::webpack::{ModuleSpec, PluginSpec, RuleSpec, UseEntry, WebpackConfig};

pub fn aot(context: &WebpackContext) -> WebpackConfig {
    let build = &context.build;

    let rules = vec![RuleSpec {
        test: r"\.ts$".to_string(),
        use_chain: vec![UseEntry::bare("@ngtools/webpack")],
        ..RuleSpec::default()
    }];

    let plugins = vec![PluginSpec::new(
        "@ngtools/webpack.AngularCompilerPlugin",
        json!({
            "tsConfigPath": context.ts_config_path,
            "skipCodeGeneration": false,
            "sourceMap": build.source_map,
        }),
    )];

    WebpackConfig {
        module: Some(ModuleSpec { rules }),
        plugins,
        optimization: production_optimization(build),
        ..WebpackConfig::default()
    }
}
