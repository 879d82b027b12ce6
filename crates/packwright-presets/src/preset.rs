use serde_json::Value;
use tracing::debug;

use packwright_config::{Result, WebpackConfig, WebpackContext};

/// A configuration fragment builder: pure function from the resolved context
/// to one sparse configuration object.
pub type FragmentFn = fn(&WebpackContext) -> WebpackConfig;

/// One named build variant: a resolved context plus the ordered fragment
/// list that produces its configuration.
///
/// Immutable once constructed. Re-layering options means building a new
/// preset through its variant factory.
#[derive(Debug, Clone)]
pub struct Preset {
    name: &'static str,
    context: WebpackContext,
    fragments: Vec<FragmentFn>,
}

impl Preset {
    pub(crate) fn new(
        name: &'static str,
        context: WebpackContext,
        fragments: Vec<FragmentFn>,
    ) -> Self {
        Self { name, context, fragments }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn context(&self) -> &WebpackContext {
        &self.context
    }

    /// Compose the final configuration as a JSON value.
    ///
    /// Fragments are built against the shared context and folded left to
    /// right, so a later fragment's scalars win and its lists append.
    pub fn config_value(&self) -> Result<Value> {
        debug!(
            variant = self.name,
            fragments = self.fragments.len(),
            "composing configuration"
        );
        let built = self.fragments.iter().map(|fragment| fragment(&self.context));
        WebpackConfig::merge_fragments(built)
    }

    /// Compose the final configuration and read it back into the typed model.
    pub fn config(&self) -> Result<WebpackConfig> {
        self.config_value().and_then(WebpackConfig::from_value)
    }
}
