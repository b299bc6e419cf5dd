//! Gradient configuration and the gradient function serializer

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::format::format_number;
use crate::id::generate_id;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientType {
    pub const ALL: [GradientType; 3] = [Self::Linear, Self::Radial, Self::Conic];

    /// CSS function name
    pub fn function_name(self) -> &'static str {
        match self {
            Self::Linear => "linear-gradient",
            Self::Radial => "radial-gradient",
            Self::Conic => "conic-gradient",
        }
    }

    /// Whether the angle takes part in the output
    pub fn uses_angle(self) -> bool {
        matches!(self, Self::Linear | Self::Conic)
    }

    /// Whether the center position takes part in the output
    pub fn uses_position(self) -> bool {
        matches!(self, Self::Radial | Self::Conic)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    #[default]
    Circle,
    Ellipse,
}

impl RadialShape {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
        }
    }
}

/// Gradient center, in percent of the element box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialPosition {
    pub x: f64,
    pub y: f64,
}

impl RadialPosition {
    pub const CENTER: RadialPosition = RadialPosition { x: 50.0, y: 50.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for RadialPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// A color anchored to a percentage along the gradient axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientColorStop {
    #[serde(default = "generate_id")]
    pub id: String,
    pub color: String,
    /// Offset along the axis (0 to 100)
    pub position: f64,
}

impl GradientColorStop {
    /// Create a stop with a fresh identifier
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            id: generate_id(),
            color: color.into(),
            position,
        }
    }

    pub fn with_id(id: impl Into<String>, color: impl Into<String>, position: f64) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            position,
        }
    }

    /// `<color> <position>%`
    pub fn to_css(&self) -> String {
        format!("{} {}%", self.color, format_number(self.position))
    }
}

/// Complete gradient configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientConfig {
    #[serde(rename = "type")]
    pub kind: GradientType,
    /// Degrees; used verbatim by linear and conic gradients
    pub angle: f64,
    pub radial_shape: RadialShape,
    pub radial_position: RadialPosition,
    pub color_stops: Vec<GradientColorStop>,
}

impl GradientConfig {
    /// Copy of this config where every stop carries a fresh identifier
    pub fn with_fresh_ids(&self) -> Self {
        Self {
            color_stops: self
                .color_stops
                .iter()
                .map(|stop| GradientColorStop {
                    id: generate_id(),
                    ..stop.clone()
                })
                .collect(),
            ..self.clone()
        }
    }

    pub fn color_stop_mut(&mut self, id: &str) -> Option<&mut GradientColorStop> {
        self.color_stops.iter_mut().find(|stop| stop.id == id)
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        default_gradient_config()
    }
}

/// The configuration a new gradient session starts with
pub fn default_gradient_config() -> GradientConfig {
    GradientConfig {
        kind: GradientType::Linear,
        angle: 90.0,
        radial_shape: RadialShape::Circle,
        radial_position: RadialPosition::CENTER,
        color_stops: vec![
            GradientColorStop::new("#667EEA", 0.0),
            GradientColorStop::new("#764BA2", 100.0),
        ],
    }
}

/// Serialize a gradient into its CSS function call.
///
/// Stops are stably sorted by position. The angle is never normalised and
/// fewer than two stops are not rejected.
pub fn generate_gradient_css(config: &GradientConfig) -> String {
    let mut stops: Vec<&GradientColorStop> = config.color_stops.iter().collect();
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    let stops = stops
        .into_iter()
        .map(GradientColorStop::to_css)
        .collect::<Vec<_>>()
        .join(", ");

    let function = config.kind.function_name();
    let angle = format_number(config.angle);
    let x = format_number(config.radial_position.x);
    let y = format_number(config.radial_position.y);

    match config.kind {
        GradientType::Linear => format!("{function}({angle}deg, {stops})"),
        GradientType::Radial => format!(
            "{function}({} at {x}% {y}%, {stops})",
            config.radial_shape.as_css()
        ),
        GradientType::Conic => format!("{function}(from {angle}deg at {x}% {y}%, {stops})"),
    }
}

/// The copy-to-clipboard output: a `background` declaration
pub fn generate_full_gradient_css(config: &GradientConfig) -> String {
    format!("background: {};", generate_gradient_css(config))
}

/// Random opaque color as uppercase `#RRGGBB`
pub fn random_color() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..=0xFF_FFFF);
    format!("#{value:06X}")
}

/// Random gradient with 2 to 4 stops spanning 0% to 100%
pub fn random_gradient_config() -> GradientConfig {
    let mut rng = rand::thread_rng();
    let kind = GradientType::ALL[rng.gen_range(0..GradientType::ALL.len())];
    let radial_shape = if rng.gen_bool(0.5) {
        RadialShape::Circle
    } else {
        RadialShape::Ellipse
    };

    let count = rng.gen_range(2..=4);
    let color_stops = (0..count)
        .map(|i| {
            let position = (i as f64 * 100.0 / (count - 1) as f64).round();
            GradientColorStop::new(random_color(), position)
        })
        .collect();

    GradientConfig {
        kind,
        angle: rng.gen_range(0..360) as f64,
        radial_shape,
        radial_position: RadialPosition::new(
            rng.gen_range(0..100) as f64,
            rng.gen_range(0..100) as f64,
        ),
        color_stops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(kind: GradientType, angle: f64, x: f64, y: f64) -> GradientConfig {
        GradientConfig {
            kind,
            angle,
            radial_shape: RadialShape::Circle,
            radial_position: RadialPosition::new(x, y),
            color_stops: vec![
                GradientColorStop::with_id("1", "red", 0.0),
                GradientColorStop::with_id("2", "blue", 100.0),
            ],
        }
    }

    #[test]
    fn linear_gradient() {
        assert_eq!(
            generate_gradient_css(&config(GradientType::Linear, 90.0, 50.0, 50.0)),
            "linear-gradient(90deg, red 0%, blue 100%)"
        );
    }

    #[test]
    fn radial_gradient_ignores_angle() {
        assert_eq!(
            generate_gradient_css(&config(GradientType::Radial, 123.0, 50.0, 50.0)),
            "radial-gradient(circle at 50% 50%, red 0%, blue 100%)"
        );
        let mut ellipse = config(GradientType::Radial, 0.0, 30.0, 70.0);
        ellipse.radial_shape = RadialShape::Ellipse;
        assert_eq!(
            generate_gradient_css(&ellipse),
            "radial-gradient(ellipse at 30% 70%, red 0%, blue 100%)"
        );
    }

    #[test]
    fn conic_gradient() {
        assert_eq!(
            generate_gradient_css(&config(GradientType::Conic, 45.0, 25.0, 75.0)),
            "conic-gradient(from 45deg at 25% 75%, red 0%, blue 100%)"
        );
    }

    #[test]
    fn stops_are_sorted_by_position() {
        let mut cfg = config(GradientType::Linear, 90.0, 50.0, 50.0);
        cfg.color_stops = vec![
            GradientColorStop::with_id("1", "#0000ff", 100.0),
            GradientColorStop::with_id("2", "#ff0000", 0.0),
            GradientColorStop::with_id("3", "#00ff00", 50.0),
        ];
        assert_eq!(
            generate_gradient_css(&cfg),
            "linear-gradient(90deg, #ff0000 0%, #00ff00 50%, #0000ff 100%)"
        );
    }

    #[test]
    fn angle_is_not_normalised() {
        assert_eq!(
            generate_gradient_css(&config(GradientType::Linear, 360.0, 50.0, 50.0)),
            "linear-gradient(360deg, red 0%, blue 100%)"
        );
        assert_eq!(
            generate_gradient_css(&config(GradientType::Linear, -30.0, 50.0, 50.0)),
            "linear-gradient(-30deg, red 0%, blue 100%)"
        );
    }

    #[test]
    fn single_stop_still_serializes() {
        let mut cfg = config(GradientType::Linear, 0.0, 50.0, 50.0);
        cfg.color_stops.truncate(1);
        assert_eq!(generate_gradient_css(&cfg), "linear-gradient(0deg, red 0%)");
    }

    #[test]
    fn full_css_wraps_in_background() {
        assert_eq!(
            generate_full_gradient_css(&config(GradientType::Linear, 90.0, 50.0, 50.0)),
            "background: linear-gradient(90deg, red 0%, blue 100%);"
        );
    }

    #[test]
    fn default_config_has_two_stops_at_ends() {
        let cfg = default_gradient_config();
        assert_eq!(cfg.kind, GradientType::Linear);
        assert_eq!(cfg.angle, 90.0);
        assert_eq!(cfg.radial_position, RadialPosition::CENTER);
        let positions: Vec<f64> = cfg.color_stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 100.0]);
        assert_ne!(cfg.color_stops[0].id, cfg.color_stops[1].id);
    }

    #[test]
    fn random_color_is_uppercase_hex() {
        for _ in 0..50 {
            let color = random_color();
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }
    }

    #[test]
    fn random_config_is_in_range() {
        for _ in 0..50 {
            let cfg = random_gradient_config();
            assert!((0.0..360.0).contains(&cfg.angle));
            assert!((0.0..100.0).contains(&cfg.radial_position.x));
            assert!((0.0..100.0).contains(&cfg.radial_position.y));
            assert!((2..=4).contains(&cfg.color_stops.len()));
            assert_eq!(cfg.color_stops.first().unwrap().position, 0.0);
            assert_eq!(cfg.color_stops.last().unwrap().position, 100.0);
            let mut ids: Vec<&str> = cfg.color_stops.iter().map(|s| s.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), cfg.color_stops.len());
        }
    }

    #[test]
    fn wire_format_uses_type_key() {
        let json = serde_json::to_value(config(GradientType::Conic, 10.0, 1.0, 2.0)).unwrap();
        assert_eq!(json["type"], "conic");
        assert_eq!(json["radialShape"], "circle");
        assert_eq!(json["radialPosition"]["x"], 1.0);
        assert_eq!(json["colorStops"][0]["color"], "red");
    }
}
