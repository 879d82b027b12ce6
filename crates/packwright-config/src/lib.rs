//! Declarative webpack configuration for Angular-style projects.
//!
//! This crate builds webpack configuration *fragments* — entry maps, module
//! rules, plugin descriptors — from a layered set of build options, and merges
//! them into one configuration object for an external webpack process to
//! consume. It performs no bundling, no loader execution, and no validation of
//! the paths it is handed: it is a best-effort assembler, and malformed input
//! surfaces downstream in the bundler itself.
//!
//! The building blocks:
//!
//! - [`BuildOptions`] / [`BuildOverrides`] — the fully-populated build record
//!   and its all-optional counterpart, layered explicit > variant > default.
//! - [`WebpackContext`] — one build's resolved paths plus the derived
//!   ES2015-support flag, immutable once constructed.
//! - fragment builders ([`styles`], [`targets`]) — pure functions from a
//!   context to a sparse [`WebpackConfig`].
//! - [`merge`] — the deep-merge used to fold fragments together (objects
//!   overlay, arrays concatenate, scalars take the later value).

pub mod context;
pub mod error;
pub mod hashing;
pub mod merge;
pub mod options;
pub mod styles;
pub mod targets;
pub mod webpack;

pub use context::{
    resolve_ts_config_target, supports_es2015, ContextOverrides, ProjectLayout, WebpackContext,
};
pub use error::{ConfigError, Result};
pub use hashing::{hash_format, HashFormat, OutputHashing};
pub use options::{AssetPattern, BuildOptions, BuildOverrides, Environment, Platform, StyleEntry};
pub use styles::styles;
pub use webpack::{
    DevServerSpec, ModuleSpec, OptimizationSpec, OutputSpec, PerformanceSpec, PluginSpec,
    ResolveSpec, RuleSpec, UseEntry, WebpackConfig,
};
