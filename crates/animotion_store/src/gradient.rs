//! Gradient editing store
//!
//! Unlike [`AnimationStore`](crate::AnimationStore), the serialized CSS is
//! cached and regenerated after every mutation, so reads never disagree with
//! the config.

use animotion_css::{
    default_gradient_config, generate_full_gradient_css, generate_gradient_css, random_color,
    random_gradient_config, GradientColorStop, GradientConfig, GradientType, RadialPosition,
    RadialShape,
};
use tracing::debug;

use crate::history::HistoryItem;
use crate::subscribers::{SubscriptionId, Subscribers};

/// Position given to stops created by [`GradientStore::add_color_stop`]
const NEW_STOP_POSITION: f64 = 50.0;

/// Partial update of a color stop
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorStopPatch {
    pub color: Option<String>,
    pub position: Option<f64>,
}

impl ColorStopPatch {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn position(position: f64) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }
}

/// The gradient being edited
pub struct GradientStore {
    config: GradientConfig,
    css: String,
    full_css: String,
    subscribers: Subscribers<GradientStore>,
}

impl GradientStore {
    pub fn new() -> Self {
        Self::with_config(default_gradient_config())
    }

    pub fn with_config(config: GradientConfig) -> Self {
        let mut store = Self {
            config,
            css: String::new(),
            full_css: String::new(),
            subscribers: Subscribers::new(),
        };
        store.regenerate();
        store
    }

    // ========== Subscriptions ==========

    pub fn subscribe(&mut self, callback: impl Fn(&GradientStore) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Refresh cached CSS, then notify
    fn changed(&mut self) {
        self.regenerate();
        self.subscribers.notify(self);
    }

    fn regenerate(&mut self) {
        self.css = generate_gradient_css(&self.config);
        self.full_css = generate_full_gradient_css(&self.config);
    }

    // ========== Reads ==========

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    /// The gradient function call, e.g. `linear-gradient(90deg, ...)`
    pub fn css(&self) -> &str {
        &self.css
    }

    /// `background: <css>;`
    pub fn full_css(&self) -> &str {
        &self.full_css
    }

    /// Whether the editor should offer removing a stop (more than two left)
    pub fn can_remove_color_stop(&self) -> bool {
        self.config.color_stops.len() > 2
    }

    // ========== Shape ==========

    pub fn set_type(&mut self, kind: GradientType) {
        self.config.kind = kind;
        self.changed();
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.config.angle = angle;
        self.changed();
    }

    pub fn set_radial_shape(&mut self, shape: RadialShape) {
        self.config.radial_shape = shape;
        self.changed();
    }

    pub fn set_radial_position(&mut self, x: f64, y: f64) {
        self.config.radial_position = RadialPosition::new(x, y);
        self.changed();
    }

    // ========== Color stops ==========

    /// Append a random-colored stop at 50%. Returns the new stop's id.
    pub fn add_color_stop(&mut self) -> String {
        let stop = GradientColorStop::new(random_color(), NEW_STOP_POSITION);
        let id = stop.id.clone();
        debug!("GradientStore::add_color_stop - {} ({})", id, stop.color);
        self.config.color_stops.push(stop);
        self.changed();
        id
    }

    /// Remove a stop by id. Does nothing when two or fewer stops remain.
    pub fn remove_color_stop(&mut self, id: &str) {
        if !self.can_remove_color_stop() {
            debug!("GradientStore::remove_color_stop - keeping minimum stops");
            return;
        }
        let before = self.config.color_stops.len();
        self.config.color_stops.retain(|stop| stop.id != id);
        if self.config.color_stops.len() != before {
            debug!("GradientStore::remove_color_stop - {}", id);
        }
        self.changed();
    }

    pub fn update_color_stop(&mut self, id: &str, patch: ColorStopPatch) {
        if let Some(stop) = self.config.color_stop_mut(id) {
            if let Some(color) = patch.color {
                stop.color = color;
            }
            if let Some(position) = patch.position {
                stop.position = position;
            }
        }
        self.changed();
    }

    // ========== Wholesale replacement ==========

    /// Replace the config verbatim; stop ids are kept
    pub fn apply_config(&mut self, config: GradientConfig) {
        self.config = config;
        self.changed();
    }

    /// Replace the config with a history snapshot; stop ids are regenerated
    pub fn apply_history_item(&mut self, item: &HistoryItem<GradientConfig>) {
        debug!("GradientStore::apply_history_item - {}", item.id);
        self.config = item.config.with_fresh_ids();
        self.changed();
    }

    pub fn randomize(&mut self) {
        self.config = random_gradient_config();
        debug!("GradientStore::randomize - {}", generate_gradient_css(&self.config));
        self.changed();
    }

    pub fn reset(&mut self) {
        self.config = default_gradient_config();
        self.changed();
    }
}

impl Default for GradientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn two_stop_config() -> GradientConfig {
        GradientConfig {
            kind: GradientType::Linear,
            angle: 45.0,
            radial_shape: RadialShape::Circle,
            radial_position: RadialPosition::CENTER,
            color_stops: vec![
                GradientColorStop::with_id("a", "#FF0000", 0.0),
                GradientColorStop::with_id("b", "#0000FF", 100.0),
            ],
        }
    }

    #[test]
    fn new_store_caches_default_css() {
        let store = GradientStore::new();
        assert_eq!(
            store.css(),
            "linear-gradient(90deg, #667EEA 0%, #764BA2 100%)"
        );
        assert_eq!(
            store.full_css(),
            "background: linear-gradient(90deg, #667EEA 0%, #764BA2 100%);"
        );
    }

    #[test]
    fn shape_setters_regenerate_css() {
        let mut store = GradientStore::with_config(two_stop_config());

        store.set_angle(180.0);
        assert_eq!(store.css(), "linear-gradient(180deg, #FF0000 0%, #0000FF 100%)");

        store.set_type(GradientType::Radial);
        store.set_radial_shape(RadialShape::Ellipse);
        store.set_radial_position(20.0, 80.0);
        assert_eq!(
            store.css(),
            "radial-gradient(ellipse at 20% 80%, #FF0000 0%, #0000FF 100%)"
        );

        store.set_type(GradientType::Conic);
        assert_eq!(
            store.full_css(),
            "background: conic-gradient(from 180deg at 20% 80%, #FF0000 0%, #0000FF 100%);"
        );
    }

    #[test]
    fn add_color_stop_appends_random_stop_at_middle() {
        let mut store = GradientStore::with_config(two_stop_config());
        let id = store.add_color_stop();

        let stops = &store.config().color_stops;
        assert_eq!(stops.len(), 3);
        let added = stops.last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.position, 50.0);
        assert_eq!(added.color.len(), 7);
        assert!(store.css().contains(&format!("{} 50%", added.color)));
    }

    #[test]
    fn remove_color_stop_keeps_two() {
        let mut store = GradientStore::with_config(two_stop_config());
        store.remove_color_stop("a");
        assert_eq!(store.config().color_stops.len(), 2);

        let id = store.add_color_stop();
        store.remove_color_stop("missing");
        assert_eq!(store.config().color_stops.len(), 3);

        store.remove_color_stop(&id);
        assert_eq!(store.config().color_stops.len(), 2);
        assert!(store.config().color_stops.iter().all(|s| s.id != id));
    }

    #[test]
    fn update_color_stop_patches_fields() {
        let mut store = GradientStore::with_config(two_stop_config());
        store.update_color_stop("a", ColorStopPatch::color("#00FF00"));
        store.update_color_stop("b", ColorStopPatch::position(75.0));
        store.update_color_stop("missing", ColorStopPatch::position(10.0));
        assert_eq!(store.css(), "linear-gradient(45deg, #00FF00 0%, #0000FF 75%)");
    }

    #[test]
    fn apply_config_keeps_ids_but_history_regenerates() {
        let mut store = GradientStore::new();
        store.apply_config(two_stop_config());
        let ids: Vec<&str> = store.config().color_stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let item = HistoryItem {
            id: "h1".to_string(),
            name: None,
            config: two_stop_config(),
            css: generate_gradient_css(&two_stop_config()),
            created_at: 0,
        };
        store.reset();
        store.apply_history_item(&item);
        assert_eq!(store.css(), item.css);
        assert!(store
            .config()
            .color_stops
            .iter()
            .all(|s| s.id != "a" && s.id != "b"));
    }

    #[test]
    fn randomize_and_reset() {
        let mut store = GradientStore::new();
        store.randomize();
        assert!((2..=4).contains(&store.config().color_stops.len()));
        assert_eq!(store.css(), generate_gradient_css(store.config()));

        store.reset();
        assert_eq!(store.config().angle, 90.0);
        assert_eq!(store.config().kind, GradientType::Linear);
    }

    #[test]
    fn subscribers_see_regenerated_css() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = GradientStore::with_config(two_stop_config());
        let log = seen.clone();
        let id = store.subscribe(move |s| log.borrow_mut().push(s.css().to_string()));

        store.set_angle(0.0);
        assert!(store.unsubscribe(id));
        store.set_angle(10.0);

        assert_eq!(
            *seen.borrow(),
            vec!["linear-gradient(0deg, #FF0000 0%, #0000FF 100%)".to_string()]
        );
    }
}
