//! Style handling: entry points for global stylesheets and the loader rules
//! that route component styles and global styles through different chains.
//!
//! Styles under the application subtree (`<root>/app`) belong to components
//! and are embedded as strings for the view engine. Everything outside that
//! subtree is a global stylesheet, either injected at runtime through
//! `style-loader` or extracted to a `.css` asset when `extract_css` is on.

use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::context::WebpackContext;
use crate::hashing::hash_format;
use crate::webpack::{ModuleSpec, PluginSpec, RuleSpec, UseEntry, WebpackConfig};

/// Build the style entry map, loader rules, and extraction plugin for one
/// configuration variant.
pub fn styles(context: &WebpackContext) -> WebpackConfig {
    let build = &context.build;
    let app_dir = context.app_dir();
    let hash = hash_format(build.output_hash, build.output_hash_length);

    let mut entry = IndexMap::new();
    for style in &build.styles {
        entry.insert(style.name.clone(), vec![style.path.clone()]);
    }

    let base = preprocessor_rules(build.source_map);

    let component_rules = base.iter().map(|rule| RuleSpec {
        test: rule.test.clone(),
        include: Some(app_dir.clone()),
        use_chain: component_chain(build.source_map, &rule.use_chain),
        ..RuleSpec::default()
    });
    let global_rules = base.iter().map(|rule| RuleSpec {
        test: rule.test.clone(),
        exclude: Some(app_dir.clone()),
        use_chain: global_chain(build.extract_css, build.source_map, &rule.use_chain),
        ..RuleSpec::default()
    });
    let rules = component_rules.chain(global_rules).collect();

    let mut plugins = Vec::new();
    if build.extract_css {
        plugins.push(PluginSpec::new(
            "mini-css-extract-plugin",
            json!({ "filename": format!("[name]{}.css", hash.asset) }),
        ));
    }

    WebpackConfig {
        entry,
        module: Some(ModuleSpec { rules }),
        plugins,
        ..WebpackConfig::default()
    }
}

/// One base rule per stylesheet language, carrying only the preprocessor
/// stage of the chain.
fn preprocessor_rules(source_map: bool) -> Vec<RuleSpec> {
    vec![
        RuleSpec { test: r"\.css$".to_string(), ..RuleSpec::default() },
        RuleSpec {
            test: r"\.scss$".to_string(),
            use_chain: vec![UseEntry::with_options(
                "sass-loader",
                json!({ "sourceMap": source_map, "precision": 8 }),
            )],
            ..RuleSpec::default()
        },
        RuleSpec {
            test: r"\.styl$".to_string(),
            use_chain: vec![UseEntry::with_options(
                "stylus-loader",
                json!({ "sourceMap": source_map }),
            )],
            ..RuleSpec::default()
        },
    ]
}

/// Component styles become strings handed to the view engine.
fn component_chain(source_map: bool, preprocessor: &[UseEntry]) -> Vec<UseEntry> {
    let mut chain = vec![
        UseEntry::bare("raw-loader"),
        UseEntry::with_options("postcss-loader", postcss_options("embedded", source_map)),
    ];
    chain.extend_from_slice(preprocessor);
    chain
}

/// Global styles are either extracted to assets or injected into the page.
fn global_chain(extract_css: bool, source_map: bool, preprocessor: &[UseEntry]) -> Vec<UseEntry> {
    let (head, raw, ident) = if extract_css {
        ("mini-css-extract-plugin/loader", "css-raw-loader", "extracted")
    } else {
        ("style-loader", "raw-loader", "embedded")
    };
    let mut chain = vec![
        UseEntry::bare(head),
        UseEntry::bare(raw),
        UseEntry::with_options("postcss-loader", postcss_options(ident, source_map)),
    ];
    chain.extend_from_slice(preprocessor);
    chain
}

fn postcss_options(ident: &str, source_map: bool) -> Value {
    json!({
        "ident": ident,
        "plugins": [{ "plugin": "autoprefixer", "options": { "grid": true } }],
        "sourceMap": source_map,
    })
}
