//! Keyframes and the `@keyframes` block serializer

use serde::{Deserialize, Serialize};

use crate::format::format_number;
use crate::id::generate_id;
use crate::properties::{properties_to_css, AnimatableProperties};

/// A single keyframe: a percentage offset with the properties it sets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Opaque identity; positions may repeat, ids may not
    #[serde(default = "generate_id")]
    pub id: String,
    /// Offset within the timeline (0 to 100)
    pub position: f64,
    #[serde(default)]
    pub properties: AnimatableProperties,
}

impl Keyframe {
    /// Create a keyframe with a fresh identifier
    pub fn new(position: f64, properties: AnimatableProperties) -> Self {
        Self {
            id: generate_id(),
            position,
            properties,
        }
    }

    /// Create a keyframe with a fixed identifier (presets, fixtures)
    pub fn with_id(id: impl Into<String>, position: f64, properties: AnimatableProperties) -> Self {
        Self {
            id: id.into(),
            position,
            properties,
        }
    }

    /// Copy of this keyframe carrying a fresh identifier
    pub fn regenerated(&self) -> Self {
        Self {
            id: generate_id(),
            ..self.clone()
        }
    }

    /// Selector line for this keyframe, e.g. `  50% { opacity: 0.5; }`
    pub fn to_css_rule(&self) -> String {
        format!(
            "  {}% {{ {}; }}",
            format_number(self.position),
            properties_to_css(&self.properties)
        )
    }
}

/// Create an empty keyframe at `position` with a fresh identifier
pub fn create_default_keyframe(position: f64) -> Keyframe {
    Keyframe::new(position, AnimatableProperties::default())
}

/// Keyframes in ascending position order; ties keep their relative order
pub fn sorted_by_position(keyframes: &[Keyframe]) -> Vec<&Keyframe> {
    let mut sorted: Vec<&Keyframe> = keyframes.iter().collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    sorted
}

/// Emit a complete `@keyframes` block.
///
/// Duplicate positions become separate selectors and 0%/100% are not
/// required; an empty list yields an empty but well-formed block.
pub fn generate_keyframes_css(name: &str, keyframes: &[Keyframe]) -> String {
    let rules = sorted_by_position(keyframes)
        .into_iter()
        .map(Keyframe::to_css_rule)
        .collect::<Vec<_>>()
        .join("\n");

    format!("@keyframes {name} {{\n{rules}\n}}")
}
