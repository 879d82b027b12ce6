//! Named build variants for packwright.
//!
//! A variant is a factory function, not a hierarchy: it layers the variant's
//! own option defaults under the caller's overrides, resolves the
//! [`WebpackContext`](packwright_config::WebpackContext) once, and returns an
//! immutable [`Preset`] holding an ordered fragment list. [`Preset::config_value`]
//! folds that list into the final configuration.
//!
//! | variant | fragments |
//! |---|---|
//! | [`jit`] | common, browser, styles, jit |
//! | [`aot`] | common, browser, styles, aot |
//! | [`serve`] | common, browser, styles, jit, dev-server |
//! | [`karma`] | common, styles, test-jit, test |

mod preset;
mod variants;

pub use preset::{FragmentFn, Preset};
pub use variants::{aot, jit, karma, serve};
