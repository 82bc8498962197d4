//! # Archive: the persisted sequence of generated cards
//!
//! [`CardArchive`] owns every card generated so far, most recent first. It reads
//! the whole sequence from a [`CardStorage`] backend exactly once when loaded and
//! rewrites the whole sequence after every mutation. There is no incremental
//! persistence and no conflict handling: one archive owns one storage entry.
//!
//! ## [`CardStorage`] trait
//!
//! A synchronous key/value interface with `read` and `write` of a single text
//! entry. Implementations live in sibling modules:
//!
//! | Backend | Used by |
//! |---------|---------|
//! | [`crate::MemoryStorage`] | tests |
//! | [`crate::FileStorage`] | desktop (one JSON file per key under the app data directory) |
//! | `LocalStorage` | web (`window.localStorage`, wasm32 only) |
//!
//! ## Failure behaviour
//!
//! A missing entry loads as an empty archive. Records are decoded one at a
//! time, so a record with an unknown label is skipped and logged while the rest
//! load. Saved cards are never overwritten without a copy:
//!
//! | Load outcome | Next persist |
//! |--------------|--------------|
//! | entry decoded, some records skipped | raw entry copied to `<key>.bak`, then written |
//! | entry is not a JSON array | raw entry copied to `<key>.bak`, then written |
//! | storage read failed | refused; see [`CardArchive::load_error`] |
//!
//! A failed write after [`CardArchive::submit`] is logged; the new card stays in
//! memory for the rest of the session.

use crate::error::StoreError;
use crate::models::{CardDraft, CardId, CardRecord};

/// Durable text storage keyed by name.
pub trait CardStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Generated cards, most recent first, backed by a [`CardStorage`].
#[derive(Debug)]
pub struct CardArchive<S: CardStorage> {
    storage: S,
    key: String,
    cards: Vec<CardRecord>,
    /// Why the stored entry could not be read at all.
    load_error: Option<StoreError>,
    /// Raw entry that did not fully decode, copied aside before the next write.
    backup: Option<String>,
}

impl<S: CardStorage> CardArchive<S> {
    /// Read the stored sequence under `key`. Anything unreadable becomes an empty archive.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let loaded = read_cards(&storage, &key);
        Self {
            storage,
            key,
            cards: loaded.cards,
            load_error: loaded.error,
            backup: loaded.backup,
        }
    }

    /// Discard the in-memory sequence and read it again from storage.
    pub fn reload(&mut self) {
        let loaded = read_cards(&self.storage, &self.key);
        self.cards = loaded.cards;
        self.load_error = loaded.error;
        self.backup = loaded.backup;
    }

    /// Turn `draft` into a record created at `now_ms`, put it first, and persist.
    pub fn submit(&mut self, draft: CardDraft, now_ms: u64) -> CardRecord {
        let id = CardId::next(now_ms, self.newest_id());
        let record = draft.into_record(id);
        self.cards.insert(0, record.clone());
        tracing::info!(id = %record.id, total = self.cards.len(), "card generated");

        if let Err(e) = self.persist() {
            tracing::error!(key = %self.key, "failed to persist saved cards: {e}");
        }
        record
    }

    /// Serialize the whole sequence and overwrite the storage entry.
    ///
    /// A partially decoded entry is first copied to [`Self::backup_key`]. An
    /// entry that could not be read is never overwritten.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        if let Some(e) = &self.load_error {
            return Err(StoreError::Unavailable(format!(
                "saved cards under '{}' were not loaded, refusing to overwrite: {e}",
                self.key
            )));
        }
        if let Some(raw) = &self.backup {
            let backup_key = self.backup_key();
            self.storage.write(&backup_key, raw)?;
            tracing::warn!(key = %self.key, backup = %backup_key, "kept undecodable saved cards");
            self.backup = None;
        }

        let raw = serde_json::to_string(&self.cards)?;
        self.storage.write(&self.key, &raw)
    }

    /// Storage key the undecodable entry is copied to.
    pub fn backup_key(&self) -> String {
        format!("{}.bak", self.key)
    }

    /// Set when the stored entry could not be read; persisting is refused until
    /// a [`Self::reload`] succeeds.
    pub fn load_error(&self) -> Option<&StoreError> {
        self.load_error.as_ref()
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&CardRecord> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Largest id issued so far.
    pub fn newest_id(&self) -> Option<CardId> {
        self.cards.iter().map(|card| card.id).max()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[derive(Debug, Default)]
struct Loaded {
    cards: Vec<CardRecord>,
    error: Option<StoreError>,
    backup: Option<String>,
}

fn read_cards<S: CardStorage>(storage: &S, key: &str) -> Loaded {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Loaded::default(),
        Err(e) => {
            tracing::error!(key, "saved cards unreadable, archive is read-only: {e}");
            return Loaded {
                error: Some(e),
                ..Loaded::default()
            };
        }
    };

    let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(key, "saved cards corrupt, starting empty: {e}");
            return Loaded {
                backup: Some(raw),
                ..Loaded::default()
            };
        }
    };

    let total = entries.len();
    let cards: Vec<CardRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(card) => Some(card),
            Err(e) => {
                tracing::warn!(key, index, "skipping undecodable saved card: {e}");
                None
            }
        })
        .collect();
    tracing::info!(key, count = cards.len(), skipped = total - cards.len(), "loaded saved cards");

    let backup = (cards.len() < total).then_some(raw);
    Loaded {
        cards,
        error: None,
        backup,
    }
}

/// Milliseconds since the Unix epoch, from the platform clock.
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
