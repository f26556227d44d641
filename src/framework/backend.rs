//! # Persistence Backends
//!
//! A `ResourceActor` never touches storage directly; it talks to a [`Backend`], chosen when
//! the actor is constructed. Two backends ship with the crate:
//!
//! - [`MemoryBackend`]: insertion-ordered records with an id index. Lookups by id are O(1)
//!   so foreign-key checks stay cheap as collections grow.
//! - [`JsonFileBackend`]: the memory backend mirrored to one JSON document per collection.
//!   Every mutation writes the new snapshot first and only then applies it in memory, so a
//!   failed write leaves the collection untouched.
//!
//! The actor owns its backend exclusively, which is why the trait takes `&mut self` for
//! writes and needs no interior locking.

use crate::framework::entity::ActorEntity;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Errors raised by a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Record already stored: {0}")]
    Duplicate(String),
    #[error("Record not stored: {0}")]
    Missing(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Storage operations a `ResourceActor` needs from its collection.
///
/// `next_id` reports the id the next `insert` consumes; ids are never handed out twice,
/// even after the record holding them was removed.
pub trait Backend<T: ActorEntity>: Send + Sync {
    fn list_all(&self) -> Vec<T>;

    fn find_by_id(&self, id: &T::Id) -> Option<T>;

    fn exists_where(&self, predicate: &dyn Fn(&T) -> bool) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_id(&self) -> u32;

    /// Stores a new record and advances the id sequence.
    fn insert(&mut self, item: T) -> Result<(), BackendError>;

    /// Replaces a stored record in place, keeping its position in the listing.
    fn update(&mut self, item: T) -> Result<(), BackendError>;

    /// Removes a record, returning it if it was stored.
    fn remove(&mut self, id: &T::Id) -> Result<Option<T>, BackendError>;
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process collection: records ordered by insertion, indexed by id.
pub struct MemoryBackend<T: ActorEntity> {
    records: BTreeMap<u64, T>,
    index: HashMap<T::Id, u64>,
    seq: u64,
    next_id: u32,
}

impl<T: ActorEntity> Default for MemoryBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MemoryBackend<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            index: HashMap::new(),
            seq: 0,
            next_id: 1,
        }
    }

    /// Rebuilds a collection from previously stored records.
    ///
    /// A stale `next_id` that points at a stored record is moved past it, so the sequence
    /// never hands out an id that is already taken.
    pub fn from_records(records: Vec<T>, next_id: u32) -> Result<Self, BackendError> {
        let mut backend = Self::new();
        for item in records {
            backend.push(item)?;
        }
        backend.next_id = next_id.max(1);
        while backend.index.contains_key(&T::Id::from(backend.next_id)) {
            backend.next_id += 1;
        }
        Ok(backend)
    }

    fn push(&mut self, item: T) -> Result<(), BackendError> {
        let id = item.id().clone();
        if self.index.contains_key(&id) {
            return Err(BackendError::Duplicate(id.to_string()));
        }
        self.seq += 1;
        self.index.insert(id, self.seq);
        self.records.insert(self.seq, item);
        Ok(())
    }
}

impl<T: ActorEntity> Backend<T> for MemoryBackend<T> {
    fn list_all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    fn find_by_id(&self, id: &T::Id) -> Option<T> {
        self.index
            .get(id)
            .and_then(|slot| self.records.get(slot))
            .cloned()
    }

    fn exists_where(&self, predicate: &dyn Fn(&T) -> bool) -> bool {
        self.records.values().any(predicate)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn next_id(&self) -> u32 {
        self.next_id
    }

    fn insert(&mut self, item: T) -> Result<(), BackendError> {
        self.push(item)?;
        self.next_id += 1;
        Ok(())
    }

    fn update(&mut self, item: T) -> Result<(), BackendError> {
        let slot = *self
            .index
            .get(item.id())
            .ok_or_else(|| BackendError::Missing(item.id().to_string()))?;
        self.records.insert(slot, item);
        Ok(())
    }

    fn remove(&mut self, id: &T::Id) -> Result<Option<T>, BackendError> {
        Ok(self
            .index
            .remove(id)
            .and_then(|slot| self.records.remove(&slot)))
    }
}

// =============================================================================
// JSON SNAPSHOT FILE
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<T> {
    next_id: u32,
    records: Vec<T>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a, T> {
    next_id: u32,
    records: &'a [T],
}

/// Collection persisted as `{"nextId": n, "records": [...]}` in a single JSON file.
pub struct JsonFileBackend<T: ActorEntity> {
    path: PathBuf,
    inner: MemoryBackend<T>,
}

impl<T> JsonFileBackend<T>
where
    T: ActorEntity + Serialize + DeserializeOwned,
{
    /// Opens the snapshot at `path`, starting an empty collection if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let path = path.into();
        let inner = if path.exists() {
            let bytes = fs::read(&path).map_err(|source| BackendError::Io {
                path: path.clone(),
                source,
            })?;
            let snapshot: Snapshot<T> =
                serde_json::from_slice(&bytes).map_err(|source| BackendError::Snapshot {
                    path: path.clone(),
                    source,
                })?;
            MemoryBackend::from_records(snapshot.records, snapshot.next_id)?
        } else {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(|source| BackendError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
            MemoryBackend::new()
        };
        info!(path = %path.display(), records = inner.len(), "Snapshot opened");
        Ok(Self { path, inner })
    }

    fn write(&self, next_id: u32, records: &[T]) -> Result<(), BackendError> {
        let snapshot = SnapshotRef { next_id, records };
        let bytes =
            serde_json::to_vec_pretty(&snapshot).map_err(|source| BackendError::Snapshot {
                path: self.path.clone(),
                source,
            })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|source| BackendError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| BackendError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), records = records.len(), "Snapshot written");
        Ok(())
    }
}

impl<T> Backend<T> for JsonFileBackend<T>
where
    T: ActorEntity + Serialize + DeserializeOwned,
{
    fn list_all(&self) -> Vec<T> {
        self.inner.list_all()
    }

    fn find_by_id(&self, id: &T::Id) -> Option<T> {
        self.inner.find_by_id(id)
    }

    fn exists_where(&self, predicate: &dyn Fn(&T) -> bool) -> bool {
        self.inner.exists_where(predicate)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn next_id(&self) -> u32 {
        self.inner.next_id()
    }

    fn insert(&mut self, item: T) -> Result<(), BackendError> {
        if self.inner.find_by_id(item.id()).is_some() {
            return Err(BackendError::Duplicate(item.id().to_string()));
        }
        let mut records = self.inner.list_all();
        records.push(item.clone());
        self.write(self.inner.next_id() + 1, &records)?;
        self.inner.insert(item)
    }

    fn update(&mut self, item: T) -> Result<(), BackendError> {
        if self.inner.find_by_id(item.id()).is_none() {
            return Err(BackendError::Missing(item.id().to_string()));
        }
        let records: Vec<T> = self
            .inner
            .list_all()
            .into_iter()
            .map(|stored| {
                if stored.id() == item.id() {
                    item.clone()
                } else {
                    stored
                }
            })
            .collect();
        self.write(self.inner.next_id(), &records)?;
        self.inner.update(item)
    }

    fn remove(&mut self, id: &T::Id) -> Result<Option<T>, BackendError> {
        if self.inner.find_by_id(id).is_none() {
            return Ok(None);
        }
        let records: Vec<T> = self
            .inner
            .list_all()
            .into_iter()
            .filter(|stored| stored.id() != id)
            .collect();
        self.write(self.inner.next_id(), &records)?;
        self.inner.remove(id)
    }
}

// =============================================================================
// SELECTION
// =============================================================================

/// Which backend the collections are opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Memory,
    Json,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageKind::Memory),
            "json" => Ok(StorageKind::Json),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Memory => write!(f, "memory"),
            StorageKind::Json => write!(f, "json"),
        }
    }
}

/// Opens the backend for one collection. JSON snapshots live at `<data_dir>/<collection>.json`.
pub fn open_backend<T>(
    kind: StorageKind,
    data_dir: &Path,
    collection: &str,
) -> Result<Box<dyn Backend<T>>, BackendError>
where
    T: ActorEntity + Serialize + DeserializeOwned,
{
    match kind {
        StorageKind::Memory => Ok(Box::new(MemoryBackend::<T>::new())),
        StorageKind::Json => {
            let path = data_dir.join(format!("{}.json", collection));
            Ok(Box::new(JsonFileBackend::open(path)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::entity::UpdateMode;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = String;
        type Update = String;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, text: String) -> Result<Self, Self::Error> {
            Ok(Self { id, text })
        }

        async fn on_update(&mut self, text: String, _: UpdateMode, _: &()) -> Result<(), NoteError> {
            self.text = text;
            Ok(())
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn memory_backend_keeps_insertion_order() {
        let mut backend = MemoryBackend::new();
        backend.insert(note(1, "a")).unwrap();
        backend.insert(note(2, "b")).unwrap();
        backend.insert(note(3, "c")).unwrap();
        backend.remove(&2).unwrap();
        backend.update(note(1, "a2")).unwrap();

        let texts: Vec<String> = backend.list_all().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["a2", "c"]);
        assert_eq!(backend.next_id(), 4);
        assert_eq!(backend.find_by_id(&3), Some(note(3, "c")));
        assert_eq!(backend.find_by_id(&2), None);
    }

    #[test]
    fn memory_backend_rejects_duplicates_and_unknown_updates() {
        let mut backend = MemoryBackend::new();
        backend.insert(note(1, "a")).unwrap();
        assert!(matches!(
            backend.insert(note(1, "again")),
            Err(BackendError::Duplicate(id)) if id == "1"
        ));
        assert!(matches!(
            backend.update(note(9, "ghost")),
            Err(BackendError::Missing(id)) if id == "9"
        ));
        assert_eq!(backend.remove(&9).unwrap(), None);
        assert!(backend.exists_where(&|n: &Note| n.text == "a"));
        assert!(!backend.exists_where(&|n: &Note| n.text == "b"));
    }

    #[test]
    fn json_backend_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        {
            let mut backend = JsonFileBackend::<Note>::open(&path).unwrap();
            backend.insert(note(1, "first")).unwrap();
            backend.insert(note(2, "second")).unwrap();
            backend.update(note(1, "first, edited")).unwrap();
            backend.remove(&2).unwrap();
        }

        let reopened = JsonFileBackend::<Note>::open(&path).unwrap();
        assert_eq!(reopened.list_all(), vec![note(1, "first, edited")]);
        // the id of the removed record is not handed out again
        assert_eq!(reopened.next_id(), 3);
    }

    #[test]
    fn json_backend_reports_malformed_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, b"not json").unwrap();

        assert!(matches!(
            JsonFileBackend::<Note>::open(&path),
            Err(BackendError::Snapshot { .. })
        ));
    }

    #[test]
    fn stale_next_id_skips_stored_records() {
        let backend =
            MemoryBackend::from_records(vec![note(1, "a"), note(2, "b"), note(4, "d")], 1).unwrap();
        assert_eq!(backend.next_id(), 3);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(
            &path,
            br#"{"nextId": 1, "records": [{"id": 1, "text": "hand written"}]}"#,
        )
        .unwrap();
        let mut reopened = JsonFileBackend::<Note>::open(&path).unwrap();
        assert_eq!(reopened.next_id(), 2);
        reopened.insert(note(2, "next")).unwrap();
        assert_eq!(reopened.len(), 2);
    }

    #[test]
    fn failed_snapshot_write_leaves_collection_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut backend = JsonFileBackend::<Note>::open(&path).unwrap();
        backend.insert(note(1, "kept")).unwrap();

        // a directory where the temp file goes makes every write fail
        fs::create_dir(path.with_extension("json.tmp")).unwrap();

        assert!(matches!(
            backend.insert(note(2, "lost")),
            Err(BackendError::Io { .. })
        ));
        assert_eq!(backend.len(), 1);
        assert_eq!(backend.next_id(), 2);
        assert_eq!(backend.find_by_id(&2), None);

        assert!(matches!(
            backend.update(note(1, "edited")),
            Err(BackendError::Io { .. })
        ));
        assert_eq!(backend.find_by_id(&1), Some(note(1, "kept")));

        assert!(matches!(backend.remove(&1), Err(BackendError::Io { .. })));
        assert_eq!(backend.len(), 1);

        // the file on disk still holds the last good snapshot
        let reopened = JsonFileBackend::<Note>::open(&path).unwrap();
        assert_eq!(reopened.list_all(), vec![note(1, "kept")]);
        assert_eq!(reopened.next_id(), 2);
    }

    #[test]
    fn storage_kind_parses_case_insensitively() {
        assert_eq!("JSON".parse::<StorageKind>().unwrap(), StorageKind::Json);
        assert_eq!("memory".parse::<StorageKind>().unwrap(), StorageKind::Memory);
        assert!("mongo".parse::<StorageKind>().is_err());
    }
}
