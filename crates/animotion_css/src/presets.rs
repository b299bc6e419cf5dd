//! Animation presets for common entry, exit and attention animations
//!
//! Presets carry literal keyframe identifiers; loading one into an editing
//! session must regenerate them (see [`AnimationPreset::to_config`]).

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationConfig, AnimationDirection, FillMode, IterationCount};
use crate::keyframe::Keyframe;
use crate::properties::AnimatableProperties;
use crate::timing::TimingFunction;

/// An animation configuration without its name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfig {
    pub duration: i64,
    pub timing_function: TimingFunction,
    pub delay: i64,
    pub iteration_count: IterationCount,
    pub direction: AnimationDirection,
    pub fill_mode: FillMode,
    pub keyframes: Vec<Keyframe>,
}

/// A named, reusable animation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationPreset {
    pub id: String,
    pub name: String,
    pub config: PresetConfig,
}

impl AnimationPreset {
    /// Build the editable config for this preset: named after the preset, with
    /// every keyframe identifier regenerated.
    pub fn to_config(&self) -> AnimationConfig {
        AnimationConfig {
            name: self.name.clone(),
            duration: self.config.duration,
            timing_function: self.config.timing_function.clone(),
            delay: self.config.delay,
            iteration_count: self.config.iteration_count,
            direction: self.config.direction,
            fill_mode: self.config.fill_mode,
            keyframes: self
                .config
                .keyframes
                .iter()
                .map(Keyframe::regenerated)
                .collect(),
        }
    }
}

/// Built-in preset catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinPreset {
    FadeIn,
    FadeOut,
    SlideInLeft,
    SlideInRight,
    SlideInUp,
    SlideInDown,
    ZoomIn,
    ZoomOut,
    Bounce,
    Pulse,
    Shake,
    Spin,
    Flip,
    Swing,
    RubberBand,
    Heartbeat,
    ColorShift,
}

impl BuiltinPreset {
    /// Stable preset id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::FadeOut => "fade-out",
            Self::SlideInLeft => "slide-in-left",
            Self::SlideInRight => "slide-in-right",
            Self::SlideInUp => "slide-in-up",
            Self::SlideInDown => "slide-in-down",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::Bounce => "bounce",
            Self::Pulse => "pulse",
            Self::Shake => "shake",
            Self::Spin => "spin",
            Self::Flip => "flip",
            Self::Swing => "swing",
            Self::RubberBand => "rubber-band",
            Self::Heartbeat => "heartbeat",
            Self::ColorShift => "color-shift",
        }
    }

    /// Animation name the preset loads as (a valid CSS identifier)
    pub fn name(self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::FadeOut => "fadeOut",
            Self::SlideInLeft => "slideInLeft",
            Self::SlideInRight => "slideInRight",
            Self::SlideInUp => "slideInUp",
            Self::SlideInDown => "slideInDown",
            Self::ZoomIn => "zoomIn",
            Self::ZoomOut => "zoomOut",
            Self::Bounce => "bounce",
            Self::Pulse => "pulse",
            Self::Shake => "shake",
            Self::Spin => "spin",
            Self::Flip => "flip",
            Self::Swing => "swing",
            Self::RubberBand => "rubberBand",
            Self::Heartbeat => "heartbeat",
            Self::ColorShift => "colorShift",
        }
    }

    /// Full preset list
    pub fn all() -> &'static [BuiltinPreset] {
        const PRESETS: [BuiltinPreset; 17] = [
            BuiltinPreset::FadeIn,
            BuiltinPreset::FadeOut,
            BuiltinPreset::SlideInLeft,
            BuiltinPreset::SlideInRight,
            BuiltinPreset::SlideInUp,
            BuiltinPreset::SlideInDown,
            BuiltinPreset::ZoomIn,
            BuiltinPreset::ZoomOut,
            BuiltinPreset::Bounce,
            BuiltinPreset::Pulse,
            BuiltinPreset::Shake,
            BuiltinPreset::Spin,
            BuiltinPreset::Flip,
            BuiltinPreset::Swing,
            BuiltinPreset::RubberBand,
            BuiltinPreset::Heartbeat,
            BuiltinPreset::ColorShift,
        ];
        &PRESETS
    }

    /// Look up a preset by its id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Build the preset definition
    pub fn preset(self) -> AnimationPreset {
        let config = match self {
            // ================================================================
            // Fades
            // ================================================================
            Self::FadeIn => once(500, TimingFunction::EaseOut)
                .key(0.0, AnimatableProperties::opacity(0.0))
                .key(100.0, AnimatableProperties::opacity(1.0)),
            Self::FadeOut => once(500, TimingFunction::EaseIn)
                .key(0.0, AnimatableProperties::opacity(1.0))
                .key(100.0, AnimatableProperties::opacity(0.0)),

            // ================================================================
            // Slides
            // ================================================================
            Self::SlideInLeft => slide_in(AnimatableProperties::default().with_translate_x("-100%")),
            Self::SlideInRight => slide_in(AnimatableProperties::default().with_translate_x("100%")),
            Self::SlideInUp => slide_in(AnimatableProperties::default().with_translate_y("100%")),
            Self::SlideInDown => slide_in(AnimatableProperties::default().with_translate_y("-100%")),

            // ================================================================
            // Zooms
            // ================================================================
            Self::ZoomIn => once(500, TimingFunction::EaseOut)
                .key(0.0, AnimatableProperties::scale(0.0).with_opacity(0.0))
                .key(100.0, AnimatableProperties::scale(1.0).with_opacity(1.0)),
            Self::ZoomOut => once(500, TimingFunction::EaseIn)
                .key(0.0, AnimatableProperties::scale(1.0).with_opacity(1.0))
                .key(100.0, AnimatableProperties::scale(0.0).with_opacity(0.0)),

            // ================================================================
            // Attention seekers
            // ================================================================
            Self::Bounce => looping(1000, TimingFunction::EaseInOut)
                .key(0.0, AnimatableProperties::default().with_translate_y("0px"))
                .key(50.0, AnimatableProperties::default().with_translate_y("-30px"))
                .key(100.0, AnimatableProperties::default().with_translate_y("0px")),
            Self::Pulse => looping(1000, TimingFunction::EaseInOut)
                .key(0.0, AnimatableProperties::scale(1.0))
                .key(50.0, AnimatableProperties::scale(1.1))
                .key(100.0, AnimatableProperties::scale(1.0)),
            Self::Shake => looping(600, TimingFunction::EaseInOut)
                .key(0.0, AnimatableProperties::default().with_translate_x("0px"))
                .key(25.0, AnimatableProperties::default().with_translate_x("-10px"))
                .key(50.0, AnimatableProperties::default().with_translate_x("10px"))
                .key(75.0, AnimatableProperties::default().with_translate_x("-10px"))
                .key(100.0, AnimatableProperties::default().with_translate_x("0px")),
            Self::Spin => looping(1000, TimingFunction::Linear)
                .key(0.0, AnimatableProperties::rotation("0deg"))
                .key(100.0, AnimatableProperties::rotation("360deg")),
            Self::Flip => looping(1200, TimingFunction::EaseInOut)
                .key(
                    0.0,
                    AnimatableProperties::default()
                        .with_custom("transform: perspective(400px) rotateY(0deg)"),
                )
                .key(
                    100.0,
                    AnimatableProperties::default()
                        .with_custom("transform: perspective(400px) rotateY(360deg)"),
                ),
            Self::Swing => looping(1000, TimingFunction::EaseInOut)
                .key(0.0, AnimatableProperties::rotation("0deg"))
                .key(20.0, AnimatableProperties::rotation("15deg"))
                .key(40.0, AnimatableProperties::rotation("-10deg"))
                .key(60.0, AnimatableProperties::rotation("5deg"))
                .key(80.0, AnimatableProperties::rotation("-5deg"))
                .key(100.0, AnimatableProperties::rotation("0deg")),
            Self::RubberBand => looping(1000, TimingFunction::EaseInOut)
                .key(0.0, AnimatableProperties::scale(1.0))
                .key(30.0, AnimatableProperties::scale(1.25))
                .key(40.0, AnimatableProperties::scale(0.75))
                .key(50.0, AnimatableProperties::scale(1.15))
                .key(65.0, AnimatableProperties::scale(0.95))
                .key(75.0, AnimatableProperties::scale(1.05))
                .key(100.0, AnimatableProperties::scale(1.0)),
            Self::Heartbeat => looping(1300, TimingFunction::EaseInOut)
                .key(0.0, AnimatableProperties::scale(1.0))
                .key(14.0, AnimatableProperties::scale(1.3))
                .key(28.0, AnimatableProperties::scale(1.0))
                .key(42.0, AnimatableProperties::scale(1.3))
                .key(70.0, AnimatableProperties::scale(1.0))
                .key(100.0, AnimatableProperties::scale(1.0)),
            Self::ColorShift => looping(2000, TimingFunction::Ease)
                .alternate()
                .key(0.0, AnimatableProperties::default().with_background_color("#667EEA"))
                .key(50.0, AnimatableProperties::default().with_background_color("#764BA2"))
                .key(100.0, AnimatableProperties::default().with_background_color("#F093FB")),
        };

        AnimationPreset {
            id: self.id().to_string(),
            name: self.name().to_string(),
            config: config.build(self.id()),
        }
    }
}

/// Every built-in preset, in catalog order
pub fn presets() -> Vec<AnimationPreset> {
    BuiltinPreset::all().iter().map(|p| p.preset()).collect()
}

pub fn find_preset(id: &str) -> Option<AnimationPreset> {
    BuiltinPreset::from_id(id).map(BuiltinPreset::preset)
}

/// Accumulates preset keyframes before ids are assigned
struct PresetBuilder {
    duration: i64,
    timing_function: TimingFunction,
    iteration_count: IterationCount,
    direction: AnimationDirection,
    fill_mode: FillMode,
    keys: Vec<(f64, AnimatableProperties)>,
}

impl PresetBuilder {
    fn key(mut self, position: f64, properties: AnimatableProperties) -> Self {
        self.keys.push((position, properties));
        self
    }

    fn alternate(mut self) -> Self {
        self.direction = AnimationDirection::Alternate;
        self
    }

    fn build(self, id: &str) -> PresetConfig {
        PresetConfig {
            duration: self.duration,
            timing_function: self.timing_function,
            delay: 0,
            iteration_count: self.iteration_count,
            direction: self.direction,
            fill_mode: self.fill_mode,
            keyframes: self
                .keys
                .into_iter()
                .enumerate()
                .map(|(i, (position, properties))| {
                    Keyframe::with_id(format!("{id}-{i}"), position, properties)
                })
                .collect(),
        }
    }
}

/// Single-run preset holding its final frame
fn once(duration: i64, timing_function: TimingFunction) -> PresetBuilder {
    PresetBuilder {
        duration,
        timing_function,
        iteration_count: IterationCount::Count(1),
        direction: AnimationDirection::Normal,
        fill_mode: FillMode::Forwards,
        keys: Vec::new(),
    }
}

/// Endlessly repeating preset
fn looping(duration: i64, timing_function: TimingFunction) -> PresetBuilder {
    PresetBuilder {
        duration,
        timing_function,
        iteration_count: IterationCount::Infinite,
        direction: AnimationDirection::Normal,
        fill_mode: FillMode::None,
        keys: Vec::new(),
    }
}

fn slide_in(from: AnimatableProperties) -> PresetBuilder {
    let to = AnimatableProperties {
        translate_x: from.translate_x.as_ref().map(|_| "0".to_string()),
        translate_y: from.translate_y.as_ref().map(|_| "0".to_string()),
        ..Default::default()
    };
    once(600, TimingFunction::cubic_bezier(0.0, 0.0, 0.2, 1.0))
        .key(0.0, from.with_opacity(0.0))
        .key(100.0, to.with_opacity(1.0))
}
