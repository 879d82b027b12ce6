//! Browser-platform fragment: the index page and module ignore descriptors.

use serde_json::json;

use crate::context::WebpackContext;
use crate::webpack::{PluginSpec, WebpackConfig};

pub fn browser(context: &WebpackContext) -> WebpackConfig {
    let build = &context.build;

    let mut plugins = vec![PluginSpec::new(
        "html-webpack-plugin",
        json!({
            "template": build.index_html,
            "filename": build.index_html,
            "baseHref": build.deploy_path,
        }),
    )];
    for ignored in &build.ignore_paths {
        plugins.push(PluginSpec::new(
            "webpack.IgnorePlugin",
            json!({ "resourceRegExp": ignored }),
        ));
    }

    WebpackConfig {
        target: Some("web".to_string()),
        plugins,
        ..WebpackConfig::default()
    }
}
