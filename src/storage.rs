use crate::errors::StorageError;
use crate::models::{MoodEntry, is_color_token};
use crate::mood_log::MoodLog;
use serde_json::Value;
use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::{error, warn};

/// Slot holding the serialized mood entries.
pub const ENTRIES_KEY: &str = "moodEntries";

/// A persistent key-value slot store holding text values.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        // Replace the slot atomically.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the log from `storage`. Anything unreadable counts as no data.
pub fn load_log(storage: &dyn Storage) -> MoodLog {
    let raw = match storage.get_item(ENTRIES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return MoodLog::new(),
        Err(err) => {
            error!("failed to read mood entries: {err}");
            return MoodLog::new();
        }
    };

    match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(values) => MoodLog::from_entries(decode_entries(values)),
        Err(err) => {
            error!("failed to parse mood entries: {err}");
            MoodLog::new()
        }
    }
}

pub fn persist_log(storage: &dyn Storage, log: &MoodLog) -> Result<(), StorageError> {
    let payload = serde_json::to_string(log.entries())?;
    storage.set_item(ENTRIES_KEY, &payload)
}

fn decode_entries(values: Vec<Value>) -> Vec<MoodEntry> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<MoodEntry>(value) {
            Ok(entry) if is_color_token(&entry.color) => Some(entry),
            Ok(entry) => {
                warn!("skipping mood entry #{index} with invalid color {:?}", entry.color);
                None
            }
            Err(err) => {
                warn!("skipping corrupted mood entry #{index}: {err}");
                None
            }
        })
        .collect()
}
