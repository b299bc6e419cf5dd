//! Timing functions for the animation shorthand

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Animation timing function.
///
/// The five CSS keywords, or any other literal (typically `cubic-bezier(...)`)
/// passed through verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimingFunction {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Custom(String),
}

impl TimingFunction {
    /// Build a `cubic-bezier(x1, y1, x2, y2)` literal
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        use crate::format::format_number as n;
        Self::Custom(format!(
            "cubic-bezier({}, {}, {}, {})",
            n(x1),
            n(y1),
            n(x2),
            n(y2)
        ))
    }

    /// CSS text of the timing function
    pub fn as_css(&self) -> &str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Custom(css) => css,
        }
    }

    /// Whether this is one of the CSS keywords
    pub fn is_keyword(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<&str> for TimingFunction {
    fn from(css: &str) -> Self {
        match css {
            "linear" => Self::Linear,
            "ease" => Self::Ease,
            "ease-in" => Self::EaseIn,
            "ease-out" => Self::EaseOut,
            "ease-in-out" => Self::EaseInOut,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for TimingFunction {
    fn from(css: String) -> Self {
        Self::from(css.as_str())
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl Serialize for TimingFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_css())
    }
}

impl<'de> Deserialize<'de> for TimingFunction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// Labelled timing functions offered by the editor
pub fn timing_functions() -> Vec<(&'static str, TimingFunction)> {
    vec![
        ("Linear", TimingFunction::Linear),
        ("Ease", TimingFunction::Ease),
        ("Ease In", TimingFunction::EaseIn),
        ("Ease Out", TimingFunction::EaseOut),
        ("Ease In Out", TimingFunction::EaseInOut),
        ("Smooth", TimingFunction::cubic_bezier(0.4, 0.0, 0.2, 1.0)),
        ("Accelerate", TimingFunction::cubic_bezier(0.4, 0.0, 1.0, 1.0)),
        ("Decelerate", TimingFunction::cubic_bezier(0.0, 0.0, 0.2, 1.0)),
        ("Bouncy", TimingFunction::cubic_bezier(0.68, -0.55, 0.265, 1.55)),
        ("Back Out", TimingFunction::cubic_bezier(0.175, 0.885, 0.32, 1.275)),
        ("Back In", TimingFunction::cubic_bezier(0.6, -0.28, 0.735, 0.045)),
        ("Circular", TimingFunction::cubic_bezier(0.785, 0.135, 0.15, 0.86)),
        ("Exponential", TimingFunction::cubic_bezier(0.77, 0.0, 0.175, 1.0)),
        ("Elastic", TimingFunction::cubic_bezier(0.5, 1.5, 0.5, -0.5)),
        ("Swing", TimingFunction::cubic_bezier(0.02, 0.01, 0.47, 1.0)),
    ]
}
