//! Newest-first history of generated results
//!
//! Animation history keeps every entry;
//! gradient history skips CSS it already holds and keeps only the newest
//! [`MAX_GRADIENT_HISTORY`] entries.

use std::marker::PhantomData;
use std::time::{SystemTime, UNIX_EPOCH};

use animotion_css::{generate_id, AnimationConfig, GradientConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::subscribers::{SubscriptionId, Subscribers};

/// Gradient history keeps at most this many entries
pub const MAX_GRADIENT_HISTORY: usize = 20;

/// A frozen `(config, css)` snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem<C> {
    pub id: String,
    /// Animation name; gradients have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub config: C,
    pub css: String,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

/// Insertion rules for a history variant
pub trait HistoryPolicy {
    type Config: Clone + Serialize + DeserializeOwned;

    /// Label used in logs
    const LABEL: &'static str;
    /// Default key under which the list is persisted
    const STORAGE_KEY: &'static str;
    /// Keep only this many newest entries
    const MAX_ITEMS: Option<usize>;
    /// Skip insertion when any entry already has identical CSS
    const DEDUPLICATE_CSS: bool;
}

/// Uncapped, undeduplicated animation history
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationHistoryPolicy;

impl HistoryPolicy for AnimationHistoryPolicy {
    type Config = AnimationConfig;
    const LABEL: &'static str = "animation";
    const STORAGE_KEY: &'static str = crate::ANIMATION_HISTORY_KEY;
    const MAX_ITEMS: Option<usize> = None;
    const DEDUPLICATE_CSS: bool = false;
}

/// Gradient history: deduplicated by CSS, capped at [`MAX_GRADIENT_HISTORY`]
#[derive(Clone, Copy, Debug, Default)]
pub struct GradientHistoryPolicy;

impl HistoryPolicy for GradientHistoryPolicy {
    type Config = GradientConfig;
    const LABEL: &'static str = "gradient";
    const STORAGE_KEY: &'static str = crate::GRADIENT_HISTORY_KEY;
    const MAX_ITEMS: Option<usize> = Some(MAX_GRADIENT_HISTORY);
    const DEDUPLICATE_CSS: bool = true;
}

pub type AnimationHistory = History<AnimationHistoryPolicy>;
pub type GradientHistory = History<GradientHistoryPolicy>;

/// In-memory history list; mutators never reorder existing entries
pub struct History<P: HistoryPolicy> {
    items: Vec<HistoryItem<P::Config>>,
    subscribers: Subscribers<[HistoryItem<P::Config>]>,
    _policy: PhantomData<P>,
}

impl<P: HistoryPolicy> History<P> {
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Rehydrate from previously stored entries (newest first)
    pub fn from_items(items: Vec<HistoryItem<P::Config>>) -> Self {
        Self {
            items,
            subscribers: Subscribers::new(),
            _policy: PhantomData,
        }
    }

    pub fn subscribe(
        &mut self,
        callback: impl Fn(&[HistoryItem<P::Config>]) + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn changed(&self) {
        self.subscribers.notify(&self.items);
    }

    pub fn items(&self) -> &[HistoryItem<P::Config>] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem<P::Config>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend a snapshot with a fresh id and the current time.
    ///
    /// Returns false when the policy rejected the entry as a duplicate.
    pub fn add_item(&mut self, name: Option<String>, config: P::Config, css: String) -> bool {
        if P::DEDUPLICATE_CSS && self.items.iter().any(|item| item.css == css) {
            trace!("{} history: skipping duplicate css", P::LABEL);
            return false;
        }

        let item = HistoryItem {
            id: generate_id(),
            name,
            config,
            css,
            created_at: now_millis(),
        };
        debug!("{} history: add {}", P::LABEL, item.id);
        self.items.insert(0, item);

        if let Some(max) = P::MAX_ITEMS {
            if self.items.len() > max {
                debug!(
                    "{} history: dropping {} oldest entries",
                    P::LABEL,
                    self.items.len() - max
                );
                self.items.truncate(max);
            }
        }

        self.changed();
        true
    }

    /// Remove an entry; unknown ids are ignored. Returns whether one was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!("{} history: removed {}", P::LABEL, id);
            self.changed();
        }
        removed
    }

    pub fn clear_all(&mut self) {
        debug!("{} history: clear ({} entries)", P::LABEL, self.items.len());
        self.items.clear();
        self.changed();
    }
}

impl<P: HistoryPolicy> Default for History<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use animotion_css::{
        default_animation_config, default_gradient_config, generate_css, generate_gradient_css,
        AnimatableProperties, AnimationDirection, FillMode, IterationCount, Keyframe,
        TimingFunction,
    };
    use pretty_assertions::assert_eq;

    fn mock_config(name: &str) -> AnimationConfig {
        AnimationConfig {
            name: name.to_string(),
            duration: 1000,
            timing_function: TimingFunction::Ease,
            delay: 0,
            iteration_count: IterationCount::Count(1),
            direction: AnimationDirection::Normal,
            fill_mode: FillMode::Forwards,
            keyframes: vec![
                Keyframe::with_id("1", 0.0, AnimatableProperties::opacity(0.0)),
                Keyframe::with_id("2", 100.0, AnimatableProperties::opacity(1.0)),
            ],
        }
    }

    #[test]
    fn starts_empty() {
        assert!(AnimationHistory::new().is_empty());
    }

    #[test]
    fn add_item_keeps_snapshot() {
        let mut history = AnimationHistory::new();
        let config = mock_config("fadeIn");
        let css = generate_css(&config);
        assert!(history.add_item(Some("fadeIn".into()), config.clone(), css.clone()));

        let item = &history.items()[0];
        assert_eq!(item.name.as_deref(), Some("fadeIn"));
        assert_eq!(item.config, config);
        assert_eq!(item.css, css);
    }

    #[test]
    fn animation_history_keeps_duplicates_newest_first() {
        let mut history = AnimationHistory::new();
        for i in 0..30 {
            history.add_item(Some(format!("anim{i}")), mock_config("same"), "same css".into());
        }
        assert_eq!(history.len(), 30);
        assert_eq!(history.items()[0].name.as_deref(), Some("anim29"));
        assert_eq!(history.items()[29].name.as_deref(), Some("anim0"));
    }

    #[test]
    fn ids_are_unique_and_timestamps_current() {
        let before = now_millis();
        let mut history = AnimationHistory::new();
        history.add_item(Some("a".into()), mock_config("a"), "css1".into());
        history.add_item(Some("b".into()), mock_config("b"), "css2".into());
        let after = now_millis();

        assert_ne!(history.items()[0].id, history.items()[1].id);
        for item in history.items() {
            assert!(item.created_at >= before && item.created_at <= after);
        }
    }

    #[test]
    fn remove_item_by_id() {
        let mut history = AnimationHistory::new();
        history.add_item(Some("anim1".into()), mock_config("anim1"), "css1".into());
        history.add_item(Some("anim2".into()), mock_config("anim2"), "css2".into());

        assert!(!history.remove_item("non-existent-id"));
        assert_eq!(history.len(), 2);

        let newest = history.items()[0].id.clone();
        assert!(history.remove_item(&newest));
        assert_eq!(history.len(), 1);
        assert_eq!(history.items()[0].name.as_deref(), Some("anim1"));
    }

    #[test]
    fn removing_unknown_id_does_not_notify() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let mut history = AnimationHistory::new();
        history.add_item(None, mock_config("a"), "css".into());
        let seen = calls.clone();
        history.subscribe(move |_| seen.set(seen.get() + 1));

        assert!(!history.remove_item("missing"));
        assert_eq!(calls.get(), 0);

        let id = history.items()[0].id.clone();
        assert!(history.remove_item(&id));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clear_all_empties() {
        let mut history = AnimationHistory::new();
        history.clear_all();
        assert!(history.is_empty());
        for i in 0..5 {
            history.add_item(None, mock_config("x"), format!("css{i}"));
        }
        history.clear_all();
        assert!(history.is_empty());
    }

    #[test]
    fn gradient_history_skips_duplicate_css_anywhere_in_list() {
        let mut history = GradientHistory::new();
        let config = default_gradient_config();
        assert!(history.add_item(None, config.clone(), "a".into()));
        assert!(history.add_item(None, config.clone(), "b".into()));
        assert!(!history.add_item(None, config.clone(), "a".into()));
        assert_eq!(history.len(), 2);
        assert_eq!(history.items()[0].css, "b");
    }

    #[test]
    fn gradient_history_is_capped_to_newest() {
        let mut history = GradientHistory::new();
        let config = default_gradient_config();
        for i in 0..=MAX_GRADIENT_HISTORY {
            history.add_item(None, config.clone(), format!("css{i}"));
        }
        assert_eq!(history.len(), MAX_GRADIENT_HISTORY);
        assert_eq!(history.items()[0].css, format!("css{MAX_GRADIENT_HISTORY}"));
        assert!(history.items().iter().all(|item| item.css != "css0"));
    }

    #[test]
    fn gradient_items_have_no_name_on_the_wire() {
        let mut history = GradientHistory::new();
        let config = default_gradient_config();
        let css = generate_gradient_css(&config);
        history.add_item(None, config, css);

        let json = serde_json::to_value(&history.items()[0]).unwrap();
        assert!(json.get("name").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn subscribers_see_list_after_change() {
        use std::cell::Cell;
        use std::rc::Rc;

        let len = Rc::new(Cell::new(usize::MAX));
        let mut history = AnimationHistory::new();
        let seen = len.clone();
        history.subscribe(move |items| seen.set(items.len()));

        let config = default_animation_config();
        history.add_item(None, config.clone(), generate_css(&config));
        assert_eq!(len.get(), 1);
        history.clear_all();
        assert_eq!(len.get(), 0);
    }
}
