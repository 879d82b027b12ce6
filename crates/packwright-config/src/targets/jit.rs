//! JIT compilation fragment: plain `ts-loader` compilation with the Angular
//! critical-dependency workaround.

use serde_json::json;

use crate::context::WebpackContext;
use crate::options::Environment;
use crate::targets::production_optimization;
use crate::webpack::{ModuleSpec, PluginSpec, RuleSpec, UseEntry, WebpackConfig};

pub fn jit(context: &WebpackContext) -> WebpackConfig {
    let build = &context.build;

    let rules = vec![RuleSpec {
        test: r"\.ts$".to_string(),
        use_chain: vec![UseEntry::with_options(
            "ts-loader",
            json!({
                "configFile": context.ts_config_path,
                "transpileOnly": build.env == Environment::Development,
            }),
        )],
        ..RuleSpec::default()
    }];

    // System.import inside @angular/core trips webpack's critical-dependency
    // analysis; pointing the context at the source root quiets it.
    let plugins = vec![PluginSpec::new(
        "webpack.ContextReplacementPlugin",
        json!({
            "resourceRegExp": r"@angular[\\/]core",
            "newContentPath": context.root,
        }),
    )];

    WebpackConfig {
        module: Some(ModuleSpec { rules }),
        plugins,
        optimization: production_optimization(build),
        ..WebpackConfig::default()
    }
}
