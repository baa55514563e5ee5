//! Per-language client bundles.
//!
//! Every acceptable language of a registry gets its own `bundle_<tag>.js`,
//! generated from the same catalog the server renders with. The script embeds
//! the catalog as JSON and rebuilds the component markup from the props the
//! server left in `#app[data-props]`.

use crate::i18n::{LanguageRegistry, Messages};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Client-side counterpart of `render::render_component`.
///
/// Expects a `messages` binding in scope.
pub const CLIENT_RUNTIME: &str = r##"
  function escapeText(text) {
    return String(text).replace(/&/g, "&amp;").replace(/</g, "&lt;").replace(/>/g, "&gt;");
  }

  function fill(template, key, value) {
    return template.split("{" + key + "}").join(value);
  }

  function greeting(name) {
    return fill(messages.greeting_template, "name", name === undefined ? messages.default_name : name);
  }

  function unreadNotification(count) {
    if (count === 0) {
      return messages.unread.none;
    }
    var template = messages.plural_rule === "one_other" && count === 1
      ? messages.unread.one
      : messages.unread.other;
    return fill(template, "count", String(count));
  }

  var parent = document.getElementById("app");
  if (!parent) {
    return;
  }
  var props = JSON.parse(parent.dataset.props || "{}");
  var name = props.name === null ? undefined : props.name;

  parent.innerHTML = "<div><h1>" + escapeText(messages.title) + "</h1>"
    + "<p>" + escapeText(greeting(name)) + "</p>"
    + "<p>" + escapeText(unreadNotification(props.unread || 0)) + "</p></div>";
"##;

/// File name of the bundle for `tag`.
pub fn bundle_file_name(tag: &str) -> String {
    format!("bundle_{}.js", tag)
}

/// Script source of the bundle for one catalog.
pub fn render_bundle(tag: &str, messages: &Messages) -> Result<String> {
    let catalog = serde_json::to_string(messages)
        .with_context(|| format!("Failed to serialize '{}' catalog", tag))?;

    Ok(format!(
        "/* {} */\n(function () {{\n  \"use strict\";\n  var messages = {};\n{}}})();\n",
        bundle_file_name(tag),
        catalog,
        CLIENT_RUNTIME
    ))
}

/// Write one bundle per acceptable language into `out_dir`.
///
/// The directory is created if needed. Returns the written paths in registry
/// order.
pub fn write_bundles(registry: &LanguageRegistry, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create bundle directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(registry.acceptable_languages().len());
    for config in registry.list_all() {
        let source = render_bundle(config.code, &config.messages)?;
        let path = out_dir.join(bundle_file_name(config.code));

        std::fs::write(&path, source)
            .with_context(|| format!("Failed to write bundle {}", path.display()))?;

        info!("Wrote {} ({})", path.display(), config.name);
        written.push(path);
    }

    Ok(written)
}
