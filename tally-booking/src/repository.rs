//! Keyed repositories over a [`Storage`] backend

use crate::entity::Entity;
use crate::error::{BookingError, BookingResult};
use crate::storage::Storage;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// List, find, insert, upsert and delete records by natural key
pub trait Repository<E: Entity> {
    fn list(&self) -> &[E];

    fn find(&self, key: &str) -> Option<&E>;

    /// Add a new record; fails if the key is taken
    fn insert(&mut self, entity: E) -> BookingResult<()>;

    /// Add or replace; returns `true` when an existing record was replaced
    fn upsert(&mut self, entity: E) -> BookingResult<bool>;

    /// Remove by key, returning the removed record
    fn delete(&mut self, key: &str) -> BookingResult<Option<E>>;
}

/// Records kept in document order with a key -> position index.
///
/// Every change is written to storage before it is applied in memory,
/// so a failed write leaves the repository as it was.
#[derive(Debug)]
pub struct StoreRepository<E, S> {
    storage: S,
    records: Vec<E>,
    index: HashMap<String, usize>,
}

impl<E: Entity, S: Storage> StoreRepository<E, S> {
    /// Load the collection; a collection that was never written is empty
    pub fn open(storage: S) -> BookingResult<Self> {
        let records = match storage.read(E::COLLECTION)? {
            Some(text) => serde_json::from_str(&text).map_err(|source| BookingError::Json {
                collection: E::COLLECTION.to_string(),
                source,
            })?,
            None => Vec::new(),
        };

        let mut repo = Self {
            storage,
            records,
            index: HashMap::new(),
        };
        repo.reindex();
        debug!(collection = E::COLLECTION, records = repo.records.len(), "Opened repository");
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply `change` to the record under `key` and persist.
    /// Returns the updated record, or `None` if the key is unknown.
    /// A change that moves the record onto a key already in use fails
    /// with [`BookingError::DuplicateKey`] and leaves the record as it was.
    pub fn update<F>(&mut self, key: &str, change: F) -> BookingResult<Option<&E>>
    where
        F: FnOnce(&mut E),
    {
        let Some(&pos) = self.index.get(key) else {
            return Ok(None);
        };

        let mut changed = self.records[pos].clone();
        change(&mut changed);
        if changed.key() != key && self.index.contains_key(changed.key()) {
            return Err(duplicate::<E>(changed.key()));
        }

        let mut records = self.records.clone();
        records[pos] = changed;
        self.commit(records)?;
        Ok(self.records.get(pos))
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, record) in self.records.iter().enumerate() {
            if self.index.contains_key(record.key()) {
                warn!(
                    collection = E::COLLECTION,
                    key = record.key(),
                    "Duplicate key in stored data, keeping the first record"
                );
                continue;
            }
            self.index.insert(record.key().to_string(), pos);
        }
    }

    /// Write `records` to storage, then adopt them
    fn commit(&mut self, records: Vec<E>) -> BookingResult<()> {
        let text = to_indented_json(&records).map_err(|source| BookingError::Json {
            collection: E::COLLECTION.to_string(),
            source,
        })?;
        self.storage.write(E::COLLECTION, &text)?;
        self.records = records;
        self.reindex();
        Ok(())
    }
}

impl<E: Entity, S: Storage> Repository<E> for StoreRepository<E, S> {
    fn list(&self) -> &[E] {
        &self.records
    }

    fn find(&self, key: &str) -> Option<&E> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    fn insert(&mut self, entity: E) -> BookingResult<()> {
        if self.index.contains_key(entity.key()) {
            return Err(duplicate::<E>(entity.key()));
        }
        let mut records = self.records.clone();
        records.push(entity);
        self.commit(records)
    }

    fn upsert(&mut self, entity: E) -> BookingResult<bool> {
        let mut records = self.records.clone();
        let replaced = match self.index.get(entity.key()) {
            Some(&pos) => {
                records[pos] = entity;
                true
            }
            None => {
                records.push(entity);
                false
            }
        };
        self.commit(records)?;
        Ok(replaced)
    }

    fn delete(&mut self, key: &str) -> BookingResult<Option<E>> {
        let Some(pos) = self.index.get(key).copied() else {
            return Ok(None);
        };
        let mut records = self.records.clone();
        let removed = records.remove(pos);
        self.commit(records)?;
        Ok(Some(removed))
    }
}

fn duplicate<E: Entity>(key: &str) -> BookingError {
    BookingError::DuplicateKey {
        collection: E::COLLECTION.to_string(),
        key: key.to_string(),
    }
}

/// JSON array with four-space indentation
fn to_indented_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
