//! Build option records and three-level layering.
//!
//! [`BuildOptions`] is the fully-populated record every configuration builder
//! reads from; [`BuildOverrides`] is its all-optional counterpart used for
//! variant defaults and caller-supplied overrides. Layering precedence is
//! explicit override > variant default > global default, applied field by
//! field — after layering no field can be unset, which the concrete record
//! type guarantees by construction.

use serde::{Deserialize, Serialize};

use crate::hashing::OutputHashing;

/// Build environment tag, mapped onto webpack's `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_mode(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Target platform for the emitted bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Browser single-page app (the only supported target today)
    #[default]
    Browser,
}

/// A named top-level stylesheet bundle.
///
/// Order within [`BuildOptions::styles`] defines bundle emission order.
/// Names are expected to be unique; a duplicate name silently overwrites the
/// earlier entry when the entry map is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub name: String,
    pub path: String,
}

impl StyleEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// One static-asset copy rule, relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPattern {
    pub input: String,
    pub output: String,
    pub glob: String,
}

/// The fully-populated build record.
///
/// `Default` is the process-wide base configuration; partial documents
/// deserialize against it thanks to the container-level `serde(default)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub env: Environment,
    pub build_optimization: bool,
    pub deploy_path: String,
    pub source_map: bool,
    pub higher_compression: bool,
    pub extract_css: bool,
    pub debug: bool,
    pub output_hash: OutputHashing,
    pub output_hash_length: u32,
    pub assets: Vec<AssetPattern>,
    pub ignore_paths: Vec<String>,
    pub index_html: String,
    pub platform: Platform,
    /// Output directory, relative to the source root.
    pub output_path: String,
    pub main: String,
    pub polyfills: String,
    pub https: bool,
    pub hmr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_path: Option<String>,
    pub styles: Vec<StyleEntry>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            build_optimization: false,
            deploy_path: "/".to_string(),
            source_map: true,
            higher_compression: false,
            extract_css: false,
            debug: false,
            output_hash: OutputHashing::None,
            output_hash_length: 20,
            assets: vec![AssetPattern {
                input: "assets".to_string(),
                output: "/assets".to_string(),
                glob: "**/*".to_string(),
            }],
            ignore_paths: Vec::new(),
            index_html: "index.html".to_string(),
            platform: Platform::Browser,
            output_path: "../build".to_string(),
            main: "./main.ts".to_string(),
            polyfills: "./polyfills.ts".to_string(),
            https: false,
            hmr: false,
            records_path: None,
            styles: vec![StyleEntry::new("styles", "./styles.scss")],
        }
    }
}

impl BuildOptions {
    /// Layer `variant` then `explicit` over the global defaults.
    ///
    /// Later layers win field by field; fields absent from both layers keep
    /// their default value, so the result is always fully populated.
    pub fn layered(variant: &BuildOverrides, explicit: &BuildOverrides) -> Self {
        Self::default().apply(variant).apply(explicit)
    }

    /// Apply one override layer, returning the updated record.
    pub fn apply(mut self, overrides: &BuildOverrides) -> Self {
        if let Some(env) = overrides.env {
            self.env = env;
        }
        if let Some(build_optimization) = overrides.build_optimization {
            self.build_optimization = build_optimization;
        }
        if let Some(deploy_path) = &overrides.deploy_path {
            self.deploy_path = deploy_path.clone();
        }
        if let Some(source_map) = overrides.source_map {
            self.source_map = source_map;
        }
        if let Some(higher_compression) = overrides.higher_compression {
            self.higher_compression = higher_compression;
        }
        if let Some(extract_css) = overrides.extract_css {
            self.extract_css = extract_css;
        }
        if let Some(debug) = overrides.debug {
            self.debug = debug;
        }
        if let Some(output_hash) = overrides.output_hash {
            self.output_hash = output_hash;
        }
        if let Some(output_hash_length) = overrides.output_hash_length {
            self.output_hash_length = output_hash_length;
        }
        if let Some(assets) = &overrides.assets {
            self.assets = assets.clone();
        }
        if let Some(ignore_paths) = &overrides.ignore_paths {
            self.ignore_paths = ignore_paths.clone();
        }
        if let Some(index_html) = &overrides.index_html {
            self.index_html = index_html.clone();
        }
        if let Some(platform) = overrides.platform {
            self.platform = platform;
        }
        if let Some(output_path) = &overrides.output_path {
            self.output_path = output_path.clone();
        }
        if let Some(main) = &overrides.main {
            self.main = main.clone();
        }
        if let Some(polyfills) = &overrides.polyfills {
            self.polyfills = polyfills.clone();
        }
        if let Some(https) = overrides.https {
            self.https = https;
        }
        if let Some(hmr) = overrides.hmr {
            self.hmr = hmr;
        }
        if let Some(records_path) = &overrides.records_path {
            self.records_path = Some(records_path.clone());
        }
        if let Some(styles) = &overrides.styles {
            self.styles = styles.clone();
        }
        self
    }
}

/// Partial build record: every field optional.
///
/// Used both for variant defaults and for caller-supplied overrides, and
/// deserializable from TOML/JSON/env fragments. `records_path` cannot be
/// reset to `None` through a layer, only replaced — the same limitation the
/// record-spread this models had.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Environment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_optimization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub higher_compression: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_css: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_hash: Option<OutputHashing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_hash_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<AssetPattern>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyfills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<StyleEntry>>,
}
