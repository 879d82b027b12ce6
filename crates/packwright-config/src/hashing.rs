//! Output filename hash templates.
//!
//! Hashed filenames are expressed as template placeholders (`[contenthash:20]`
//! and friends) that the external bundler substitutes at emit time — this
//! layer never computes a digest itself.

use serde::{Deserialize, Serialize};

/// Cache-busting mode for emitted filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputHashing {
    /// Plain filenames, no hash suffix.
    #[default]
    None,
    /// Hash every output: bundles, extracted assets, files and scripts.
    All,
}

/// Per-output-kind hash suffixes, ready to splice into filename templates.
///
/// Every field is either empty or a `.`-prefixed placeholder, so builders can
/// write `format!("[name]{}.css", format.asset)` unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashFormat {
    /// Lazy-loaded bundle chunks.
    pub bundle: String,
    /// Extracted stylesheet assets.
    pub asset: String,
    /// Copied media and other loose files.
    pub file: String,
    /// Script bundles.
    pub script: String,
}

/// Resolve the hash suffix set for a hashing mode and digest length.
pub fn hash_format(mode: OutputHashing, length: u32) -> HashFormat {
    match mode {
        OutputHashing::None => HashFormat {
            bundle: String::new(),
            asset: String::new(),
            file: String::new(),
            script: String::new(),
        },
        OutputHashing::All => HashFormat {
            bundle: format!(".[chunkhash:{length}]"),
            asset: format!(".[contenthash:{length}]"),
            file: format!(".[hash:{length}]"),
            script: format!(".[hash:{length}]"),
        },
    }
}
