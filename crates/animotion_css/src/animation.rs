//! Animation configuration and the `animation` shorthand

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::keyframe::{generate_keyframes_css, Keyframe};
use crate::properties::AnimatableProperties;
use crate::timing::TimingFunction;

/// Selector of the rule carrying the animation shorthand in the full output
pub const ANIMATED_ELEMENT_SELECTOR: &str = ".animated-element";

/// Playback direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationDirection {
    /// Play forward every iteration
    #[default]
    Normal,
    /// Play backward every iteration
    Reverse,
    /// Alternate forward and backward, starting forward
    Alternate,
    /// Alternate backward and forward, starting backward
    AlternateReverse,
}

impl AnimationDirection {
    pub const ALL: [AnimationDirection; 4] = [
        Self::Normal,
        Self::Reverse,
        Self::Alternate,
        Self::AlternateReverse,
    ];

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reverse => "reverse",
            Self::Alternate => "alternate",
            Self::AlternateReverse => "alternate-reverse",
        }
    }
}

/// Fill mode determines which keyframe styles apply outside the active period
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// No styles outside the active period
    #[default]
    None,
    /// Hold the final keyframe after the animation completes
    Forwards,
    /// Apply the first keyframe during the delay
    Backwards,
    /// Apply both forwards and backwards fill
    Both,
}

impl FillMode {
    pub const ALL: [FillMode; 4] = [Self::None, Self::Forwards, Self::Backwards, Self::Both];

    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forwards => "forwards",
            Self::Backwards => "backwards",
            Self::Both => "both",
        }
    }
}

/// Number of iterations, or the `infinite` sentinel.
///
/// On the wire this is a JSON number or the string `"infinite"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IterationCount {
    Count(u32),
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Infinite => f.write_str("infinite"),
        }
    }
}

impl Serialize for IterationCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(n) => serializer.serialize_u32(*n),
            Self::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for IterationCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(Self::Count(n)),
            Raw::Text(text) if text == "infinite" => Ok(Self::Infinite),
            Raw::Text(text) => text.parse().map(Self::Count).map_err(|_| {
                serde::de::Error::custom(format!("invalid iteration count: {text:?}"))
            }),
        }
    }
}

/// Element the live preview animates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewElement {
    #[default]
    Square,
    Circle,
    Text,
    Icon,
}

impl PreviewElement {
    pub const ALL: [PreviewElement; 4] = [Self::Square, Self::Circle, Self::Text, Self::Icon];
}

/// Complete animation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    pub name: String,
    /// Duration in milliseconds
    pub duration: i64,
    pub timing_function: TimingFunction,
    /// Delay in milliseconds
    pub delay: i64,
    pub iteration_count: IterationCount,
    pub direction: AnimationDirection,
    pub fill_mode: FillMode,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl AnimationConfig {
    /// Copy of this config where every keyframe carries a fresh identifier
    pub fn with_fresh_ids(&self) -> Self {
        Self {
            keyframes: self.keyframes.iter().map(Keyframe::regenerated).collect(),
            ..self.clone()
        }
    }

    pub fn keyframe(&self, id: &str) -> Option<&Keyframe> {
        self.keyframes.iter().find(|kf| kf.id == id)
    }

    pub fn keyframe_mut(&mut self, id: &str) -> Option<&mut Keyframe> {
        self.keyframes.iter_mut().find(|kf| kf.id == id)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        default_animation_config()
    }
}

/// The configuration a new session starts with
pub fn default_animation_config() -> AnimationConfig {
    AnimationConfig {
        name: "myAnimation".to_string(),
        duration: 1000,
        timing_function: TimingFunction::Ease,
        delay: 0,
        iteration_count: IterationCount::Infinite,
        direction: AnimationDirection::Alternate,
        fill_mode: FillMode::None,
        keyframes: vec![
            Keyframe::new(0.0, AnimatableProperties::scale(1.0).with_opacity(1.0)),
            Keyframe::new(100.0, AnimatableProperties::scale(1.2).with_opacity(0.7)),
        ],
    }
}

/// Emit the `animation:` shorthand declaration (without trailing semicolon).
///
/// All seven fields are always present, in CSS positional order.
pub fn generate_animation_property(config: &AnimationConfig) -> String {
    format!(
        "animation: {} {}ms {} {}ms {} {} {}",
        config.name,
        config.duration,
        config.timing_function,
        config.delay,
        config.iteration_count,
        config.direction.as_css(),
        config.fill_mode.as_css()
    )
}

/// The copy-to-clipboard output: keyframe block plus the shorthand rule
pub fn generate_css(config: &AnimationConfig) -> String {
    let keyframes = generate_keyframes_css(&config.name, &config.keyframes);
    let animation = generate_animation_property(config);

    format!("{keyframes}\n\n{ANIMATED_ELEMENT_SELECTOR} {{\n  {animation};\n}}")
}

/// Inline style the preview element receives
pub fn preview_style(config: &AnimationConfig, playing: bool) -> String {
    if playing {
        generate_animation_property(config)
    } else {
        "animation-play-state: paused".to_string()
    }
}
