//! The webpack configuration object model.
//!
//! These types serialize to the camelCase JSON the external bundler expects.
//! Every optional field is skipped when absent so that fragment builders can
//! return sparse objects: merging then only touches the keys a fragment
//! actually set.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::merge;

/// One loader invocation within a rule's processing chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseEntry {
    pub loader: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl UseEntry {
    /// A loader with no options of its own.
    pub fn bare(loader: impl Into<String>) -> Self {
        Self { loader: loader.into(), options: None }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self { loader: loader.into(), options: Some(options) }
    }
}

/// A file-pattern-to-processing-chain mapping.
///
/// `test` carries the regex source matched against resolved file paths;
/// `include`/`exclude` scope the rule to a directory subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSpec {
    pub test: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce: Option<String>,
    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    pub use_chain: Vec<UseEntry>,
}

/// A named plugin request for the external bundler.
///
/// This layer never instantiates plugins; it only records which plugin to set
/// up and with what options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub plugin: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginSpec {
    pub fn new(plugin: impl Into<String>, options: Value) -> Self {
        Self { plugin: plugin.into(), options }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub main_fields: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimize: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minimizer: Vec<PluginSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSpec {
    /// `false` to silence size warnings, or `"warning"`/`"error"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Value>,
}

/// Dev-server settings for the serve variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSpec {
    pub public_path: String,
    pub https: bool,
    pub host: String,
    pub history_api_fallback: bool,
    pub port: u16,
    pub hot: bool,
}

/// A webpack configuration object, or a sparse fragment of one.
///
/// Fragment builders fill in only the keys they own; [`WebpackConfig::merge_fragments`]
/// folds a fragment list into the final object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebpackConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub entry: IndexMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve: Option<ResolveSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSpec>,
}

impl WebpackConfig {
    /// Serialize this fragment to its JSON representation.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(ConfigError::Serialize)
    }

    /// Deserialize a merged value back into the typed model.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(ConfigError::Deserialize)
    }

    /// Fold an ordered fragment list into one configuration value.
    ///
    /// Fragments are serialized and merged with [`merge::merge_all`] semantics:
    /// array keys (rules, plugins, entry path lists) concatenate in fragment
    /// order, scalar keys take the last fragment's value.
    pub fn merge_fragments<I>(fragments: I) -> Result<Value>
    where
        I: IntoIterator<Item = WebpackConfig>,
    {
        let mut merged = Value::Object(serde_json::Map::new());
        for fragment in fragments {
            merge::merge(&mut merged, &fragment.to_value()?);
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_fragment_serializes_only_owned_keys() {
        let mut entry = IndexMap::new();
        entry.insert("styles".to_string(), vec!["./styles.scss".to_string()]);
        let fragment = WebpackConfig { entry, ..WebpackConfig::default() };

        let value = fragment.to_value().unwrap();
        assert_eq!(value, json!({ "entry": { "styles": ["./styles.scss"] } }));
    }

    #[test]
    fn keys_serialize_in_webpack_casing() {
        let fragment = WebpackConfig {
            output: Some(OutputSpec {
                public_path: Some("/".to_string()),
                chunk_filename: Some("[id].js".to_string()),
                ..OutputSpec::default()
            }),
            records_path: Some(PathBuf::from("/tmp/records.json")),
            dev_server: Some(DevServerSpec {
                public_path: "/".to_string(),
                https: false,
                host: "localhost".to_string(),
                history_api_fallback: true,
                port: 4200,
                hot: false,
            }),
            ..WebpackConfig::default()
        };

        let value = fragment.to_value().unwrap();
        assert!(value.get("recordsPath").is_some());
        assert!(value.get("devServer").is_some());
        assert_eq!(value["output"]["publicPath"], json!("/"));
        assert_eq!(value["output"]["chunkFilename"], json!("[id].js"));
        assert_eq!(value["devServer"]["historyApiFallback"], json!(true));
    }

    #[test]
    fn rule_chain_serializes_under_use() {
        let rule = RuleSpec {
            test: r"\.css$".to_string(),
            use_chain: vec![UseEntry::bare("raw-loader")],
            ..RuleSpec::default()
        };
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value, json!({ "test": r"\.css$", "use": [{ "loader": "raw-loader" }] }));
    }

    #[test]
    fn fragments_merge_in_order() {
        let mut first_entry = IndexMap::new();
        first_entry.insert("main".to_string(), vec!["./main.ts".to_string()]);
        let first = WebpackConfig {
            mode: Some("development".to_string()),
            entry: first_entry,
            plugins: vec![PluginSpec::new("html-webpack-plugin", json!({}))],
            ..WebpackConfig::default()
        };
        let second = WebpackConfig {
            mode: Some("production".to_string()),
            plugins: vec![PluginSpec::new("mini-css-extract-plugin", json!({}))],
            ..WebpackConfig::default()
        };

        let merged = WebpackConfig::merge_fragments([first, second]).unwrap();
        assert_eq!(merged["mode"], json!("production"));
        assert_eq!(merged["entry"]["main"], json!(["./main.ts"]));
        assert_eq!(merged["plugins"][0]["plugin"], json!("html-webpack-plugin"));
        assert_eq!(merged["plugins"][1]["plugin"], json!("mini-css-extract-plugin"));
    }

    #[test]
    fn merged_value_round_trips_into_the_typed_model() {
        let merged = json!({
            "mode": "production",
            "entry": { "main": ["./main.ts"] },
            "module": { "rules": [{ "test": r"\.ts$", "use": [{ "loader": "ts-loader" }] }] },
            "devServer": {
                "publicPath": "/",
                "https": false,
                "host": "localhost",
                "historyApiFallback": true,
                "port": 4200,
                "hot": false
            }
        });

        let config = WebpackConfig::from_value(merged).unwrap();
        assert_eq!(config.mode.as_deref(), Some("production"));
        assert_eq!(config.entry["main"], vec!["./main.ts".to_string()]);
        let rules = config.module.unwrap().rules;
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].use_chain[0].loader, "ts-loader");
        assert_eq!(config.dev_server.unwrap().port, 4200);
    }
}
