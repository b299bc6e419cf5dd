use animotion_css::{
    generate_gradient_css, generate_keyframes_css, AnimatableProperties, GradientColorStop,
    GradientConfig, GradientType, Keyframe, RadialPosition, RadialShape,
};
use proptest::prelude::*;

/// Pull the numeric percentages out of `N% {` selector lines
fn selector_positions(css: &str) -> Vec<f64> {
    css.lines()
        .filter_map(|line| line.trim_start().split_once("% {"))
        .map(|(pos, _)| pos.parse().unwrap())
        .collect()
}

proptest! {
    #[test]
    fn keyframe_selectors_are_non_decreasing(positions in prop::collection::vec(0u8..=100, 0..12)) {
        let keyframes: Vec<Keyframe> = positions
            .iter()
            .map(|p| Keyframe::new(*p as f64, AnimatableProperties::opacity(0.5)))
            .collect();

        let css = generate_keyframes_css("prop", &keyframes);
        let emitted = selector_positions(&css);

        prop_assert_eq!(emitted.len(), positions.len());
        prop_assert!(emitted.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn gradient_stops_are_non_decreasing(positions in prop::collection::vec(0u8..=100, 1..8)) {
        let config = GradientConfig {
            kind: GradientType::Linear,
            angle: 90.0,
            radial_shape: RadialShape::Circle,
            radial_position: RadialPosition::CENTER,
            color_stops: positions
                .iter()
                .map(|p| GradientColorStop::new("red", *p as f64))
                .collect(),
        };

        let css = generate_gradient_css(&config);
        let inner = css
            .strip_prefix("linear-gradient(90deg, ")
            .and_then(|s| s.strip_suffix(')'))
            .unwrap();
        let emitted: Vec<f64> = inner
            .split(", ")
            .map(|stop| stop.trim_start_matches("red ").trim_end_matches('%').parse().unwrap())
            .collect();

        prop_assert_eq!(emitted.len(), positions.len());
        prop_assert!(emitted.windows(2).all(|w| w[0] <= w[1]));
    }
}
