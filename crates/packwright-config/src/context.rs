//! Project layout and the per-build context handed to fragment builders.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::options::{BuildOptions, BuildOverrides};

/// Compiler targets that ship native class syntax and module metadata.
const ES2015_TARGETS: [&str; 3] = ["es2015", "es6", "esnext"];

/// Well-known locations inside an Angular-style project checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub project_root: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into() }
    }

    /// The source root, conventionally `src/` under the project root.
    pub fn source_root(&self) -> PathBuf {
        self.project_root.join("src")
    }

    pub fn app_ts_config(&self) -> PathBuf {
        self.source_root().join("tsconfig.app.json")
    }

    pub fn spec_ts_config(&self) -> PathBuf {
        self.source_root().join("tsconfig.spec.json")
    }
}

/// Caller-supplied replacements for the derived context fields.
///
/// Everything is optional; unset fields fall back to the layout conventions.
/// Serializes sparsely so override documents can be layered through figment
/// without unset fields shadowing earlier layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_config_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es2015_support: Option<bool>,
    pub build: BuildOverrides,
}

/// The resolved inputs every fragment builder works from.
#[derive(Debug, Clone, PartialEq)]
pub struct WebpackContext {
    /// Project checkout root.
    pub project_root: PathBuf,
    /// Source root; relative entry points and output paths resolve against
    /// it, and it becomes the bundler's working context.
    pub root: PathBuf,
    /// TypeScript configuration driving compilation for this variant.
    pub ts_config_path: PathBuf,
    /// Whether the TypeScript target keeps es2015 output alive.
    pub es2015_support: bool,
    pub build: BuildOptions,
}

impl WebpackContext {
    /// Resolve a context from the layout, a variant's defaults, and the
    /// caller's overrides.
    ///
    /// Unset paths follow the layout conventions; `es2015_support` is probed
    /// from the resolved tsconfig unless the caller pinned it.
    pub fn for_layout(
        layout: &ProjectLayout,
        variant: &BuildOverrides,
        overrides: &ContextOverrides,
    ) -> Self {
        let project_root = overrides
            .project_root
            .clone()
            .unwrap_or_else(|| layout.project_root.clone());
        let root = overrides.root.clone().unwrap_or_else(|| project_root.join("src"));
        let ts_config_path = overrides
            .ts_config_path
            .clone()
            .unwrap_or_else(|| root.join("tsconfig.app.json"));
        let es2015_support = overrides
            .es2015_support
            .unwrap_or_else(|| supports_es2015(&ts_config_path));
        let build = BuildOptions::layered(variant, &overrides.build);

        Self { project_root, root, ts_config_path, es2015_support, build }
    }

    /// The application subtree whose styles are treated as component styles.
    pub fn app_dir(&self) -> PathBuf {
        self.root.join("app")
    }
}

/// Read the `compilerOptions.target` string out of a tsconfig file.
///
/// tsconfig files are JSON with comments and trailing commas, so they go
/// through a json5 parse rather than strict JSON. Returns `None` when the
/// file has no target key.
pub fn resolve_ts_config_target(path: &Path) -> Result<Option<String>> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::TsConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document: serde_json::Value =
        json5::from_str(&text).map_err(|source| ConfigError::TsConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(document
        .pointer("/compilerOptions/target")
        .and_then(serde_json::Value::as_str)
        .map(str::to_ascii_lowercase))
}

/// Whether the tsconfig at `path` targets an es2015-capable output.
///
/// Unreadable or malformed files count as no: builds against a broken
/// tsconfig fail later with a better error from the compiler itself.
pub fn supports_es2015(path: &Path) -> bool {
    match resolve_ts_config_target(path) {
        Ok(Some(target)) => ES2015_TARGETS.contains(&target.as_str()),
        Ok(None) => false,
        Err(error) => {
            debug!(path = %path.display(), %error, "tsconfig probe failed, assuming es5");
            false
        }
    }
}
