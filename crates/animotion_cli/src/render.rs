//! Input parsing and terminal output

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use animotion_css::{generate_animation_property, generate_keyframes_css, AnimationConfig};
use animotion_store::HistoryItem;

/// Parse a config file; `.toml` files as TOML, everything else as JSON
pub fn read_config_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Keyframes block followed by the `animation:` rule on `selector`
pub fn animation_css(config: &AnimationConfig, selector: &str) -> String {
    format!(
        "{}\n\n{} {{\n  {};\n}}",
        generate_keyframes_css(&config.name, &config.keyframes),
        selector,
        generate_animation_property(config)
    )
}

/// One line per history entry: id, timestamp, label
pub fn history_line<C>(item: &HistoryItem<C>) -> String {
    let label = match &item.name {
        Some(name) => name.as_str(),
        None => item.css.lines().next().unwrap_or_default(),
    };
    format!("{}  {}  {}", item.id, item.created_at, label)
}
