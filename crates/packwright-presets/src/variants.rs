//! The variant factories and their option defaults.

use packwright_config::targets;
use packwright_config::{
    styles, BuildOverrides, ContextOverrides, DevServerSpec, Environment, OutputHashing,
    ProjectLayout, WebpackConfig, WebpackContext,
};

use crate::preset::{FragmentFn, Preset};

/// Variant defaults shared by the production build presets.
fn production_defaults() -> BuildOverrides {
    BuildOverrides {
        env: Some(Environment::Production),
        build_optimization: Some(true),
        deploy_path: Some("/".to_string()),
        records_path: Some("records.json".to_string()),
        output_hash: Some(OutputHashing::All),
        extract_css: Some(true),
        higher_compression: Some(true),
        ..BuildOverrides::default()
    }
}

/// The dev-server fragment appended by [`serve`].
fn dev_server(context: &WebpackContext) -> WebpackConfig {
    let build = &context.build;
    WebpackConfig {
        dev_server: Some(DevServerSpec {
            public_path: "/".to_string(),
            https: build.https,
            host: "localhost".to_string(),
            history_api_fallback: true,
            port: 4200,
            hot: build.hmr,
        }),
        ..WebpackConfig::default()
    }
}

/// Optimized production build, templates compiled just in time in the
/// browser.
pub fn jit(layout: &ProjectLayout, overrides: ContextOverrides) -> Preset {
    let context = WebpackContext::for_layout(layout, &production_defaults(), &overrides);
    let fragments: Vec<FragmentFn> =
        vec![targets::common, targets::browser, styles, targets::jit];
    Preset::new("jit", context, fragments)
}

/// Optimized production build through the ahead-of-time template compiler.
pub fn aot(layout: &ProjectLayout, overrides: ContextOverrides) -> Preset {
    let context = WebpackContext::for_layout(layout, &production_defaults(), &overrides);
    let fragments: Vec<FragmentFn> =
        vec![targets::common, targets::browser, styles, targets::aot];
    Preset::new("aot", context, fragments)
}

/// Development server build: JIT compilation over development defaults plus
/// the dev-server block.
pub fn serve(layout: &ProjectLayout, overrides: ContextOverrides) -> Preset {
    let context = WebpackContext::for_layout(layout, &BuildOverrides::default(), &overrides);
    let fragments: Vec<FragmentFn> =
        vec![targets::common, targets::browser, styles, targets::jit, dev_server];
    Preset::new("serve", context, fragments)
}

/// Test-runner build for karma.
///
/// The spec tsconfig and the `./test.ts` entry are fixed by the variant;
/// caller overrides for either field are discarded.
pub fn karma(layout: &ProjectLayout, overrides: ContextOverrides) -> Preset {
    let mut overrides = overrides;
    overrides.ts_config_path = Some(layout.spec_ts_config());
    overrides.build.main = None;
    let variant =
        BuildOverrides { main: Some("./test.ts".to_string()), ..BuildOverrides::default() };
    let context = WebpackContext::for_layout(layout, &variant, &overrides);
    let fragments: Vec<FragmentFn> =
        vec![targets::common, styles, targets::test_jit, targets::test];
    Preset::new("karma", context, fragments)
}
