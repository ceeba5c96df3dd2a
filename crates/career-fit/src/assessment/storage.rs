use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::session::{CompletedAssessment, ProgressSnapshot};

pub const PROGRESS_KEY: &str = "assessmentProgress";
pub const RESULT_KEY: &str = "assessmentResult";

/// Flat JSON key-value storage shared by the questionnaire and results screens.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid store key '{0}'")]
    InvalidKey(String),
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid json: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl InMemoryStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Value>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`. The directory is created on
/// first write; every write replaces the previous file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key)?;
        // invalid UTF-8 is a parse failure, not an io error
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, serde_json::to_vec_pretty(&value)?)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Typed access to the in-progress and completed assessment snapshots.
///
/// Snapshots that are not valid JSON, or do not match the expected shape, load
/// as absent. Transport failures still surface as errors.
#[derive(Debug)]
pub struct AssessmentStore<S> {
    store: S,
}

impl<S: KeyValueStore> AssessmentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn save_progress(&self, snapshot: &ProgressSnapshot) -> Result<(), StoreError> {
        self.save(PROGRESS_KEY, snapshot)
    }

    pub fn load_progress(&self) -> Result<Option<ProgressSnapshot>, StoreError> {
        self.load(PROGRESS_KEY)
    }

    pub fn save_completed(&self, completed: &CompletedAssessment) -> Result<(), StoreError> {
        self.save(RESULT_KEY, completed)?;
        info!(
            recommendation = completed.result.recommendation.label(),
            confidence = completed.result.confidence_score,
            "assessment result stored"
        );
        Ok(())
    }

    pub fn load_completed(&self) -> Result<Option<CompletedAssessment>, StoreError> {
        self.load(RESULT_KEY)
    }

    /// Clears both snapshots so the next session starts empty.
    pub fn restart(&self) -> Result<(), StoreError> {
        self.store.remove(RESULT_KEY)?;
        self.store.remove(PROGRESS_KEY)?;
        info!("assessment state cleared");
        Ok(())
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        self.store.set(key, serde_json::to_value(value)?)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(StoreError::Serialization(err)) => {
                warn!(key, error = %err, "discarding unreadable snapshot");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        match serde_json::from_value(raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                warn!(key, error = %err, "discarding malformed snapshot");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn in_memory_store_round_trips_and_removes() {
        let store = InMemoryStore::default();
        assert!(store.get("k").expect("get works").is_none());
        store.set("k", json!({"a": 1})).expect("set works");
        assert_eq!(store.get("k").expect("get works"), Some(json!({"a": 1})));
        store.set("k", json!(2)).expect("overwrite works");
        assert_eq!(store.get("k").expect("get works"), Some(json!(2)));
        store.remove("k").expect("remove works");
        store.remove("k").expect("removing a missing key is fine");
        assert!(store.get("k").expect("get works").is_none());
    }

    #[test]
    fn file_store_persists_between_instances() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("nested");
        JsonFileStore::new(&root)
            .set(PROGRESS_KEY, json!({"currentIndex": 3}))
            .expect("write succeeds");

        let reopened = JsonFileStore::new(&root);
        assert_eq!(
            reopened.get(PROGRESS_KEY).expect("read succeeds"),
            Some(json!({"currentIndex": 3}))
        );
        reopened.remove(PROGRESS_KEY).expect("remove succeeds");
        assert!(reopened.get(PROGRESS_KEY).expect("read succeeds").is_none());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.set("../escape", json!(1)),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn file_store_reports_corrupt_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("assessmentResult.json"), "{not json").expect("seed file");
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.get(RESULT_KEY),
            Err(StoreError::Serialization(_))
        ));
    }
}
