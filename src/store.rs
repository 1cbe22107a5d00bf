use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::snapshot::CertificateStatus;

/// Failure taxonomy of the storage boundary
///
/// Retried only by explicit caller action (re-invoking the triggering
/// operation), never automatically.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("fetch failed for key `{0}`")]
    FetchFailed(String),
    #[error("save failed for key `{0}`")]
    SaveFailed(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store has been disposed")]
    Disposed,
}

/// Caller-accessible key-value storage, local-storage shaped
///
/// Raw values are JSON strings; the typed helpers go through serde_json.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put_raw(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn put<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, raw)
    }
}

/// In-process key-value store backing tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_raw(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One holding in the investor's portfolio view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub id: Uuid,
    /// Investment group/package this holding belongs to
    pub group_id: String,
    pub package_name: String,
    pub amount: u64,
    pub certificate_status: Option<CertificateStatus>,
    pub updated_at: DateTime<Utc>,
}

/// Handle identifying one portfolio subscription
pub type SubscriptionId = u64;

type Observer = Box<dyn FnMut(&[PortfolioEntry])>;

/// Owned, observable store of portfolio entries
///
/// Explicit lifecycle: construct, subscribe/unsubscribe, mutate (observers
/// are notified synchronously on every mutation), dispose. A disposed store
/// drops its observers and rejects further subscriptions.
#[derive(Default)]
pub struct PortfolioStore {
    entries: Vec<PortfolioEntry>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
    disposed: bool,
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    /// Register an observer; it fires synchronously on every mutation
    pub fn subscribe<F>(&mut self, observer: F) -> Result<SubscriptionId, StoreError>
    where
        F: FnMut(&[PortfolioEntry]) + 'static,
    {
        if self.disposed {
            return Err(StoreError::Disposed);
        }
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        Ok(id)
    }

    /// Returns false when the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn replace_all(&mut self, entries: Vec<PortfolioEntry>) {
        self.entries = entries;
        self.notify();
    }

    /// Insert the entry, or replace an existing entry with the same id
    pub fn upsert(&mut self, entry: PortfolioEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self.notify();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.notify();
    }

    /// Drop all observers and reject any further subscriptions
    pub fn dispose(&mut self) {
        self.observers.clear();
        self.disposed = true;
        debug!("portfolio store disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.entries);
        }
    }
}

impl std::fmt::Debug for PortfolioStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioStore")
            .field("entries", &self.entries.len())
            .field("observers", &self.observers.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}
