//! Test-runner fragments: transpile-only compilation against the spec
//! tsconfig, plus coverage instrumentation for application sources.

use serde_json::json;

use crate::context::WebpackContext;
use crate::webpack::{ModuleSpec, RuleSpec, UseEntry, WebpackConfig};

/// TypeScript compilation for the test bundle. Always transpile-only: the
/// test runner wants fast rebuilds, and type errors belong to the app build.
pub fn test_jit(context: &WebpackContext) -> WebpackConfig {
    let rules = vec![RuleSpec {
        test: r"\.ts$".to_string(),
        use_chain: vec![UseEntry::with_options(
            "ts-loader",
            json!({
                "configFile": context.ts_config_path,
                "transpileOnly": true,
            }),
        )],
        ..RuleSpec::default()
    }];

    WebpackConfig { module: Some(ModuleSpec { rules }), ..WebpackConfig::default() }
}

/// Runner-facing settings: inline source maps so stack traces point at
/// TypeScript, and coverage instrumentation unless the run is a debug
/// session.
pub fn test(context: &WebpackContext) -> WebpackConfig {
    let build = &context.build;

    let devtool = build.source_map.then(|| "inline-source-map".to_string());

    let mut rules = Vec::new();
    if !build.debug {
        rules.push(RuleSpec {
            test: r"\.ts$".to_string(),
            include: Some(context.app_dir()),
            enforce: Some("post".to_string()),
            use_chain: vec![UseEntry::with_options(
                "istanbul-instrumenter-loader",
                json!({ "esModules": true }),
            )],
            ..RuleSpec::default()
        });
    }

    WebpackConfig {
        devtool,
        module: (!rules.is_empty()).then(|| ModuleSpec { rules }),
        ..WebpackConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BuildOptions;
    use crate::targets::test_context;
    use std::path::PathBuf;

    #[test]
    fn test_compilation_is_always_transpile_only() {
        let config = test_jit(&test_context(BuildOptions::default()));
        let rules = config.module.unwrap().rules;

        let options = rules[0].use_chain[0].options.as_ref().unwrap();
        assert_eq!(options["transpileOnly"], json!(true));
        assert_eq!(options["configFile"], json!("/work/site/src/tsconfig.app.json"));
    }

    #[test]
    fn coverage_instruments_app_sources_after_compilation() {
        let config = test(&test_context(BuildOptions::default()));

        assert_eq!(config.devtool.as_deref(), Some("inline-source-map"));
        let rules = config.module.unwrap().rules;
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].include, Some(PathBuf::from("/work/site/src/app")));
        assert_eq!(rules[0].enforce.as_deref(), Some("post"));
        assert_eq!(rules[0].use_chain[0].loader, "istanbul-instrumenter-loader");
    }

    #[test]
    fn debug_sessions_skip_instrumentation() {
        let build = BuildOptions { debug: true, ..BuildOptions::default() };
        let config = test(&test_context(build));
        assert_eq!(config.module, None);
    }

    #[test]
    fn source_maps_off_means_no_devtool() {
        let build = BuildOptions { source_map: false, ..BuildOptions::default() };
        let config = test(&test_context(build));
        assert_eq!(config.devtool, None);
    }
}
