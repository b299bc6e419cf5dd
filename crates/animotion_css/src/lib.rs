//! Animotion CSS Core
//!
//! Structured animation and gradient configurations, and the canonical CSS
//! text generated from them.
//!
//! # Features
//!
//! - **Property serialization**: Sparse visual properties to declarations, with
//!   the transform family folded into a single `transform` declaration
//! - **Keyframe blocks**: `@keyframes` rules sorted by keyframe position
//! - **Animation shorthand**: The seven-field `animation:` declaration
//! - **Gradients**: `linear-gradient`, `radial-gradient` and `conic-gradient`
//! - **Presets**: A built-in catalog of common entry, exit and attention animations
//!
//! # Example
//!
//! ```rust
//! use animotion_css::{generate_animation_property, default_animation_config, IterationCount};
//!
//! let mut config = default_animation_config();
//! config.iteration_count = IterationCount::Count(3);
//!
//! assert_eq!(
//!     generate_animation_property(&config),
//!     "animation: myAnimation 1000ms ease 0ms 3 alternate none"
//! );
//! ```

pub mod animation;
pub mod format;
pub mod gradient;
pub mod id;
pub mod keyframe;
pub mod presets;
pub mod properties;
pub mod timing;

pub use animation::{
    default_animation_config, generate_animation_property, generate_css, preview_style,
    AnimationConfig, AnimationDirection, FillMode, IterationCount, PreviewElement,
    ANIMATED_ELEMENT_SELECTOR,
};
pub use format::format_number;
pub use gradient::{
    default_gradient_config, generate_full_gradient_css, generate_gradient_css, random_color,
    random_gradient_config, GradientColorStop, GradientConfig, GradientType, RadialPosition,
    RadialShape,
};
pub use id::generate_id;
pub use keyframe::{create_default_keyframe, generate_keyframes_css, Keyframe};
pub use presets::{find_preset, presets, AnimationPreset, BuiltinPreset, PresetConfig};
pub use properties::{properties_to_css, AnimatableProperties, AnimatableProperty};
pub use timing::{timing_functions, TimingFunction};
