//! Animation editing store
//!
//! Holds the animation being edited together with preview state. Mutators
//! never validate ranges: a negative duration is stored and emitted as-is.

use animotion_css::{
    create_default_keyframe, default_animation_config, generate_animation_property, generate_css,
    generate_keyframes_css, preview_style, AnimatableProperties, AnimatableProperty,
    AnimationConfig, AnimationDirection, AnimationPreset, FillMode, IterationCount, Keyframe,
    PreviewElement, TimingFunction,
};
use tracing::debug;

use crate::history::HistoryItem;
use crate::subscribers::{SubscriptionId, Subscribers};

/// Partial update of the animation config; `None` fields are left untouched
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationConfigPatch {
    pub name: Option<String>,
    pub duration: Option<i64>,
    pub timing_function: Option<TimingFunction>,
    pub delay: Option<i64>,
    pub iteration_count: Option<IterationCount>,
    pub direction: Option<AnimationDirection>,
    pub fill_mode: Option<FillMode>,
    pub keyframes: Option<Vec<Keyframe>>,
}

/// Partial update of a keyframe. Only `position` and `properties` can be
/// patched; a keyframe's id is fixed once created. `properties` replaces the
/// whole set; use [`AnimationStore::update_keyframe_properties`] to merge
/// instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyframePatch {
    pub position: Option<f64>,
    pub properties: Option<AnimatableProperties>,
}

impl KeyframePatch {
    pub fn position(position: f64) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }
}

/// The animation being edited
pub struct AnimationStore {
    config: AnimationConfig,
    preview_element: PreviewElement,
    playing: bool,
    subscribers: Subscribers<AnimationStore>,
}

impl AnimationStore {
    /// Start from the default config, playing, previewing a square
    pub fn new() -> Self {
        Self::with_config(default_animation_config())
    }

    pub fn with_config(config: AnimationConfig) -> Self {
        Self {
            config,
            preview_element: PreviewElement::default(),
            playing: true,
            subscribers: Subscribers::new(),
        }
    }

    // ========== Subscriptions ==========

    pub fn subscribe(&mut self, callback: impl Fn(&AnimationStore) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn changed(&self) {
        self.subscribers.notify(self);
    }

    // ========== Reads ==========

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn preview_element(&self) -> PreviewElement {
        self.preview_element
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Full copy-to-clipboard CSS
    pub fn css(&self) -> String {
        generate_css(&self.config)
    }

    /// The `@keyframes` block alone (injected into the preview document)
    pub fn keyframes_css(&self) -> String {
        generate_keyframes_css(&self.config.name, &self.config.keyframes)
    }

    pub fn animation_property(&self) -> String {
        generate_animation_property(&self.config)
    }

    /// Inline style for the preview element given the play state
    pub fn preview_style(&self) -> String {
        preview_style(&self.config, self.playing)
    }

    /// Whether the editor should offer removing a keyframe (more than two left).
    /// [`remove_keyframe`](Self::remove_keyframe) does not enforce this.
    pub fn can_remove_keyframe(&self) -> bool {
        self.config.keyframes.len() > 2
    }

    // ========== Config ==========

    /// Shallow overlay of every field set in `patch`
    pub fn set_config(&mut self, patch: AnimationConfigPatch) {
        let cfg = &mut self.config;
        if let Some(name) = patch.name {
            cfg.name = name;
        }
        if let Some(duration) = patch.duration {
            cfg.duration = duration;
        }
        if let Some(timing_function) = patch.timing_function {
            cfg.timing_function = timing_function;
        }
        if let Some(delay) = patch.delay {
            cfg.delay = delay;
        }
        if let Some(iteration_count) = patch.iteration_count {
            cfg.iteration_count = iteration_count;
        }
        if let Some(direction) = patch.direction {
            cfg.direction = direction;
        }
        if let Some(fill_mode) = patch.fill_mode {
            cfg.fill_mode = fill_mode;
        }
        if let Some(keyframes) = patch.keyframes {
            cfg.keyframes = keyframes;
        }
        self.changed();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.config.name = name.into();
        self.changed();
    }

    pub fn set_duration(&mut self, duration: i64) {
        self.config.duration = duration;
        self.changed();
    }

    pub fn set_timing_function(&mut self, timing_function: impl Into<TimingFunction>) {
        self.config.timing_function = timing_function.into();
        self.changed();
    }

    pub fn set_delay(&mut self, delay: i64) {
        self.config.delay = delay;
        self.changed();
    }

    pub fn set_iteration_count(&mut self, count: IterationCount) {
        self.config.iteration_count = count;
        self.changed();
    }

    pub fn set_direction(&mut self, direction: AnimationDirection) {
        self.config.direction = direction;
        self.changed();
    }

    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.config.fill_mode = fill_mode;
        self.changed();
    }

    // ========== Keyframes ==========

    /// Append an empty keyframe; positions are neither sorted nor deduplicated.
    /// Returns the new keyframe's id.
    pub fn add_keyframe(&mut self, position: f64) -> String {
        let keyframe = create_default_keyframe(position);
        let id = keyframe.id.clone();
        debug!("AnimationStore::add_keyframe - {} at {}%", id, position);
        self.config.keyframes.push(keyframe);
        self.changed();
        id
    }

    /// Remove a keyframe by id; unknown ids are ignored
    pub fn remove_keyframe(&mut self, id: &str) {
        let before = self.config.keyframes.len();
        self.config.keyframes.retain(|kf| kf.id != id);
        if self.config.keyframes.len() != before {
            debug!("AnimationStore::remove_keyframe - {}", id);
        }
        self.changed();
    }

    pub fn update_keyframe(&mut self, id: &str, patch: KeyframePatch) {
        if let Some(kf) = self.config.keyframe_mut(id) {
            if let Some(position) = patch.position {
                kf.position = position;
            }
            if let Some(properties) = patch.properties {
                kf.properties = properties;
            }
        }
        self.changed();
    }

    /// Merge `patch` into a keyframe's properties
    pub fn update_keyframe_properties(&mut self, id: &str, patch: &AnimatableProperties) {
        if let Some(kf) = self.config.keyframe_mut(id) {
            kf.properties.merge(patch);
        }
        self.changed();
    }

    /// Unset a single property on a keyframe
    pub fn clear_keyframe_property(&mut self, id: &str, property: AnimatableProperty) {
        if let Some(kf) = self.config.keyframe_mut(id) {
            kf.properties.clear(property);
        }
        self.changed();
    }

    // ========== Preview ==========

    pub fn set_preview_element(&mut self, element: PreviewElement) {
        self.preview_element = element;
        self.changed();
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        self.changed();
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
        self.changed();
    }

    // ========== Wholesale replacement ==========

    /// Replace the config with a preset; keyframe ids are always regenerated
    pub fn load_preset(&mut self, preset: &AnimationPreset) {
        debug!("AnimationStore::load_preset - {}", preset.id);
        self.config = preset.to_config();
        self.changed();
    }

    /// Replace the config with a deep copy of a history snapshot
    pub fn apply_history_item(&mut self, item: &HistoryItem<AnimationConfig>) {
        debug!("AnimationStore::apply_history_item - {}", item.id);
        self.config = item.config.with_fresh_ids();
        self.changed();
    }

    /// Back to the default config and playing
    pub fn reset(&mut self) {
        self.config = default_animation_config();
        self.playing = true;
        self.changed();
    }
}

impl Default for AnimationStore {
    fn default() -> Self {
        Self::new()
    }
}
