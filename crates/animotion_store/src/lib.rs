//! Animotion State
//!
//! Single-owner stores that hold the configuration being edited and a bounded
//! history of generated results.
//!
//! # Overview
//!
//! - [`AnimationStore`]: the animation being edited plus preview state; CSS is
//!   derived on read
//! - [`GradientStore`]: the gradient being edited; CSS is regenerated eagerly
//!   after every mutation
//! - [`History`]: newest-first list of `(config, css)` snapshots. The animation
//!   variant keeps everything, the gradient variant is capped at
//!   [`MAX_GRADIENT_HISTORY`] and skips duplicate CSS
//! - [`PersistentHistory`]: load-at-init / save-on-mutation around a
//!   [`History`] and a [`Storage`] backend
//!
//! # Quick Start
//!
//! ```rust
//! use animotion_store::{AnimationHistory, AnimationStore};
//!
//! let mut store = AnimationStore::new();
//! store.set_name("grow");
//! store.set_duration(750);
//!
//! let mut history = AnimationHistory::new();
//! history.add_item(Some(store.config().name.clone()), store.config().clone(), store.css());
//!
//! assert_eq!(history.len(), 1);
//! assert!(history.items()[0].css.contains("@keyframes grow"));
//! ```
//!
//! Every store accepts change subscriptions. Callbacks run synchronously after
//! the mutation has been applied:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use animotion_store::GradientStore;
//!
//! let changes = Rc::new(Cell::new(0));
//! let mut store = GradientStore::new();
//! let seen = changes.clone();
//! store.subscribe(move |_| seen.set(seen.get() + 1));
//!
//! store.set_angle(180.0);
//! assert_eq!(changes.get(), 1);
//! assert!(store.css().contains("180deg"));
//! ```

mod animation;
mod error;
mod gradient;
mod history;
mod persist;
mod storage;
mod subscribers;

pub use animation::{AnimationConfigPatch, AnimationStore, KeyframePatch};
pub use error::StoreError;
pub use gradient::{ColorStopPatch, GradientStore};
pub use history::{
    AnimationHistory, AnimationHistoryPolicy, GradientHistory, GradientHistoryPolicy, History,
    HistoryItem, HistoryPolicy, MAX_GRADIENT_HISTORY,
};
pub use persist::{PersistentAnimationHistory, PersistentGradientHistory, PersistentHistory};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use subscribers::{SubscriptionId, Subscribers};

/// Storage key of the animation history
pub const ANIMATION_HISTORY_KEY: &str = "animotion-history";

/// Storage key of the gradient history
pub const GRADIENT_HISTORY_KEY: &str = "animotion-gradient-history";
