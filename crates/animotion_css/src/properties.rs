//! Animatable visual properties
//!
//! A keyframe sets only the properties it names: an absent field means "this
//! keyframe does not touch the property", never "reset it to a default".

use serde::{Deserialize, Serialize};

use crate::format::format_number;

/// Sparse set of visual properties set by a single keyframe
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimatableProperties {
    /// Horizontal translation (length or percentage)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<String>,
    /// Vertical translation (length or percentage)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<String>,
    /// Unitless uniform scale factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Rotation angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<String>,
    /// Horizontal skew angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_x: Option<String>,
    /// Vertical skew angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_y: Option<String>,
    /// Opacity, nominally 0.0 to 1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    /// Raw declaration(s) appended verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

/// Property keys for dynamic access (editor rows, clearing a single field)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AnimatableProperty {
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    SkewX,
    SkewY,
    Opacity,
    BackgroundColor,
    Color,
    BorderColor,
    BorderRadius,
    BoxShadow,
    Custom,
}

impl AnimatableProperty {
    /// Every property, in serialization order
    pub const ALL: [AnimatableProperty; 13] = [
        Self::TranslateX,
        Self::TranslateY,
        Self::Scale,
        Self::Rotate,
        Self::SkewX,
        Self::SkewY,
        Self::Opacity,
        Self::BackgroundColor,
        Self::Color,
        Self::BorderColor,
        Self::BorderRadius,
        Self::BoxShadow,
        Self::Custom,
    ];

    /// Field name as it appears in persisted configs
    pub fn key(self) -> &'static str {
        match self {
            Self::TranslateX => "translateX",
            Self::TranslateY => "translateY",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::SkewX => "skewX",
            Self::SkewY => "skewY",
            Self::Opacity => "opacity",
            Self::BackgroundColor => "backgroundColor",
            Self::Color => "color",
            Self::BorderColor => "borderColor",
            Self::BorderRadius => "borderRadius",
            Self::BoxShadow => "boxShadow",
            Self::Custom => "custom",
        }
    }

    /// Whether the property folds into the `transform` declaration
    pub fn is_transform(self) -> bool {
        matches!(
            self,
            Self::TranslateX
                | Self::TranslateY
                | Self::Scale
                | Self::Rotate
                | Self::SkewX
                | Self::SkewY
        )
    }

    /// Look up a property by its persisted field name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl AnimatableProperties {
    /// Create properties with only opacity set
    pub fn opacity(value: f64) -> Self {
        Self {
            opacity: Some(value),
            ..Default::default()
        }
    }

    /// Create properties with only scale set
    pub fn scale(value: f64) -> Self {
        Self {
            scale: Some(value),
            ..Default::default()
        }
    }

    /// Create properties with translation
    pub fn translate(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            translate_x: Some(x.into()),
            translate_y: Some(y.into()),
            ..Default::default()
        }
    }

    /// Create properties with rotation
    pub fn rotation(angle: impl Into<String>) -> Self {
        Self {
            rotate: Some(angle.into()),
            ..Default::default()
        }
    }

    /// Builder: set opacity
    pub fn with_opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Builder: set scale
    pub fn with_scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    /// Builder: set horizontal translation
    pub fn with_translate_x(mut self, value: impl Into<String>) -> Self {
        self.translate_x = Some(value.into());
        self
    }

    /// Builder: set vertical translation
    pub fn with_translate_y(mut self, value: impl Into<String>) -> Self {
        self.translate_y = Some(value.into());
        self
    }

    /// Builder: set rotation
    pub fn with_rotate(mut self, angle: impl Into<String>) -> Self {
        self.rotate = Some(angle.into());
        self
    }

    /// Builder: set horizontal skew
    pub fn with_skew_x(mut self, angle: impl Into<String>) -> Self {
        self.skew_x = Some(angle.into());
        self
    }

    /// Builder: set vertical skew
    pub fn with_skew_y(mut self, angle: impl Into<String>) -> Self {
        self.skew_y = Some(angle.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn with_border_radius(mut self, radius: impl Into<String>) -> Self {
        self.border_radius = Some(radius.into());
        self
    }

    pub fn with_box_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.box_shadow = Some(shadow.into());
        self
    }

    /// Builder: append raw CSS declaration(s)
    pub fn with_custom(mut self, css: impl Into<String>) -> Self {
        self.custom = Some(css.into());
        self
    }

    /// Overlay every field set in `patch` onto `self`
    pub fn merge(&mut self, patch: &AnimatableProperties) {
        fn overlay<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
            if let Some(value) = src {
                *dst = Some(value.clone());
            }
        }

        overlay(&mut self.translate_x, &patch.translate_x);
        overlay(&mut self.translate_y, &patch.translate_y);
        overlay(&mut self.scale, &patch.scale);
        overlay(&mut self.rotate, &patch.rotate);
        overlay(&mut self.skew_x, &patch.skew_x);
        overlay(&mut self.skew_y, &patch.skew_y);
        overlay(&mut self.opacity, &patch.opacity);
        overlay(&mut self.background_color, &patch.background_color);
        overlay(&mut self.color, &patch.color);
        overlay(&mut self.border_color, &patch.border_color);
        overlay(&mut self.border_radius, &patch.border_radius);
        overlay(&mut self.box_shadow, &patch.box_shadow);
        overlay(&mut self.custom, &patch.custom);
    }

    /// Unset a single property
    pub fn clear(&mut self, property: AnimatableProperty) {
        match property {
            AnimatableProperty::TranslateX => self.translate_x = None,
            AnimatableProperty::TranslateY => self.translate_y = None,
            AnimatableProperty::Scale => self.scale = None,
            AnimatableProperty::Rotate => self.rotate = None,
            AnimatableProperty::SkewX => self.skew_x = None,
            AnimatableProperty::SkewY => self.skew_y = None,
            AnimatableProperty::Opacity => self.opacity = None,
            AnimatableProperty::BackgroundColor => self.background_color = None,
            AnimatableProperty::Color => self.color = None,
            AnimatableProperty::BorderColor => self.border_color = None,
            AnimatableProperty::BorderRadius => self.border_radius = None,
            AnimatableProperty::BoxShadow => self.box_shadow = None,
            AnimatableProperty::Custom => self.custom = None,
        }
    }

    /// Whether a property is set on this keyframe
    pub fn is_set(&self, property: AnimatableProperty) -> bool {
        match property {
            AnimatableProperty::TranslateX => self.translate_x.is_some(),
            AnimatableProperty::TranslateY => self.translate_y.is_some(),
            AnimatableProperty::Scale => self.scale.is_some(),
            AnimatableProperty::Rotate => self.rotate.is_some(),
            AnimatableProperty::SkewX => self.skew_x.is_some(),
            AnimatableProperty::SkewY => self.skew_y.is_some(),
            AnimatableProperty::Opacity => self.opacity.is_some(),
            AnimatableProperty::BackgroundColor => self.background_color.is_some(),
            AnimatableProperty::Color => self.color.is_some(),
            AnimatableProperty::BorderColor => self.border_color.is_some(),
            AnimatableProperty::BorderRadius => self.border_radius.is_some(),
            AnimatableProperty::BoxShadow => self.box_shadow.is_some(),
            AnimatableProperty::Custom => self.custom.is_some(),
        }
    }

    /// Number of properties this keyframe sets
    pub fn set_count(&self) -> usize {
        AnimatableProperty::ALL
            .into_iter()
            .filter(|p| self.is_set(*p))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }
}

/// String-valued properties count only when non-empty
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Serialize properties into `; `-joined CSS declarations.
///
/// Transform functions are emitted in a fixed order regardless of which subset
/// is set. `scale` and `opacity` are emitted whenever set, including zero.
pub fn properties_to_css(properties: &AnimatableProperties) -> String {
    let mut rules: Vec<String> = Vec::new();
    let mut transforms: Vec<String> = Vec::new();

    if let Some(x) = present(&properties.translate_x) {
        transforms.push(format!("translateX({x})"));
    }
    if let Some(y) = present(&properties.translate_y) {
        transforms.push(format!("translateY({y})"));
    }
    if let Some(scale) = properties.scale {
        transforms.push(format!("scale({})", format_number(scale)));
    }
    if let Some(angle) = present(&properties.rotate) {
        transforms.push(format!("rotate({angle})"));
    }
    if let Some(angle) = present(&properties.skew_x) {
        transforms.push(format!("skewX({angle})"));
    }
    if let Some(angle) = present(&properties.skew_y) {
        transforms.push(format!("skewY({angle})"));
    }

    if !transforms.is_empty() {
        rules.push(format!("transform: {}", transforms.join(" ")));
    }

    if let Some(opacity) = properties.opacity {
        rules.push(format!("opacity: {}", format_number(opacity)));
    }

    let visual = [
        ("background-color", &properties.background_color),
        ("color", &properties.color),
        ("border-color", &properties.border_color),
        ("border-radius", &properties.border_radius),
        ("box-shadow", &properties.box_shadow),
    ];
    for (name, value) in visual {
        if let Some(value) = present(value) {
            rules.push(format!("{name}: {value}"));
        }
    }

    if let Some(custom) = present(&properties.custom) {
        rules.push(custom.to_string());
    }

    rules.join("; ")
}
