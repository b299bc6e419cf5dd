//! History that survives restarts
//!
//! The list is loaded once when opened and written back after every
//! mutation, wrapped as `{"state":{"items":[...]},"version":0}`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::history::{
    AnimationHistoryPolicy, GradientHistoryPolicy, History, HistoryItem, HistoryPolicy,
};
use crate::storage::Storage;
use crate::subscribers::SubscriptionId;

const ENVELOPE_VERSION: u32 = 0;

#[derive(Serialize)]
struct EnvelopeRef<'a, C> {
    state: StateRef<'a, C>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a, C> {
    items: &'a [HistoryItem<C>],
}

#[derive(Deserialize)]
struct Envelope<C> {
    state: State<C>,
    #[serde(default)]
    version: u32,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "C: Deserialize<'de>"))]
struct State<C> {
    #[serde(default = "Vec::new")]
    items: Vec<HistoryItem<C>>,
}

pub type PersistentAnimationHistory<S> = PersistentHistory<AnimationHistoryPolicy, S>;
pub type PersistentGradientHistory<S> = PersistentHistory<GradientHistoryPolicy, S>;

/// A [`History`] bound to a storage key
pub struct PersistentHistory<P: HistoryPolicy, S: Storage> {
    history: History<P>,
    storage: S,
    key: String,
}

impl<P: HistoryPolicy, S: Storage> PersistentHistory<P, S> {
    /// Open under the policy's default key
    pub fn open(storage: S) -> Result<Self, StoreError> {
        Self::open_with_key(storage, P::STORAGE_KEY)
    }

    /// Load whatever is stored under `key`; a missing entry yields an empty list
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let items = match storage.load(&key)? {
            Some(raw) => {
                let envelope: Envelope<P::Config> = serde_json::from_str(&raw)
                    .map_err(|source| StoreError::Corrupt {
                        key: key.clone(),
                        source,
                    })?;
                if envelope.version != ENVELOPE_VERSION {
                    warn!(
                        "PersistentHistory::open - {} has version {}, reading as {}",
                        key, envelope.version, ENVELOPE_VERSION
                    );
                }
                envelope.state.items
            }
            None => Vec::new(),
        };
        debug!(
            "PersistentHistory::open - {} ({} {} entries)",
            key,
            items.len(),
            P::LABEL
        );

        Ok(Self {
            history: History::from_items(items),
            storage,
            key,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn history(&self) -> &History<P> {
        &self.history
    }

    pub fn items(&self) -> &[HistoryItem<P::Config>] {
        self.history.items()
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem<P::Config>> {
        self.history.get(id)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn subscribe(
        &mut self,
        callback: impl Fn(&[HistoryItem<P::Config>]) + 'static,
    ) -> SubscriptionId {
        self.history.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.history.unsubscribe(id)
    }

    /// See [`History::add_item`]; rejected duplicates are not written
    pub fn add_item(
        &mut self,
        name: Option<String>,
        config: P::Config,
        css: String,
    ) -> Result<bool, StoreError> {
        let added = self.history.add_item(name, config, css);
        if added {
            self.save()?;
        }
        Ok(added)
    }

    /// Unknown ids leave storage untouched
    pub fn remove_item(&mut self, id: &str) -> Result<bool, StoreError> {
        let removed = self.history.remove_item(id);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.history.clear_all();
        self.save()
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let envelope = EnvelopeRef {
            state: StateRef {
                items: self.history.items(),
            },
            version: ENVELOPE_VERSION,
        };
        let json = serde_json::to_string(&envelope)?;
        self.storage.save(&self.key, &json)
    }
}
