use crate::errors::{SaveWarning, StorageError};
use crate::models::{Mood, MoodEntry, ViewResponse};
use crate::mood_log::MoodLog;
use crate::storage::{Storage, load_log, persist_log};
use crate::view::build_view;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Result of a mutation. The in-memory log always holds the new state; a
/// failed write or an entry dropped by retention is reported in `warning`.
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    pub warning: Option<SaveWarning>,
}

/// Owns the session's mood log and mirrors every change to storage.
pub struct MoodTracker {
    log: MoodLog,
    storage: Box<dyn Storage>,
}

impl MoodTracker {
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let log = load_log(storage.as_ref());
        info!(entries = log.len(), "loaded mood log");
        Self { log, storage }
    }

    pub fn log(&self) -> &MoodLog {
        &self.log
    }

    pub fn view(&self, today: NaiveDate) -> ViewResponse {
        build_view(&self.log, today)
    }

    pub fn upsert(&mut self, mood: Mood, color: impl Into<String>, today: NaiveDate) -> Saved<MoodEntry> {
        let entry = self.log.upsert(mood, color, today);
        if self.log.entry_for(entry.date) != Some(&entry) {
            // Retention dropped it straight away; the log is unchanged.
            warn!(date = %entry.date, "mood entry older than the retention window");
            return Saved {
                value: entry,
                warning: Some(SaveWarning::NotRetained(today)),
            };
        }
        info!(date = %entry.date, mood = %entry.mood, "mood logged");
        Saved {
            value: entry,
            warning: self.persist(),
        }
    }

    pub fn reset(&mut self) -> Saved<()> {
        self.log.reset();
        info!("mood log reset");
        Saved {
            value: (),
            warning: self.persist(),
        }
    }

    fn persist(&self) -> Option<SaveWarning> {
        match persist_log(self.storage.as_ref(), &self.log) {
            Ok(()) => None,
            Err(err) => {
                warn!("failed to persist mood entries: {err}");
                Some(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ENTRIES_KEY, MemoryStorage};
    use chrono::Duration;
    use std::sync::Arc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct SharedStorage(Arc<MemoryStorage>);

    impl Storage for SharedStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set_item(key, value)
        }
    }

    struct FullStorage;

    impl Storage for FullStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(std::io::Error::other("quota exceeded").into())
        }
    }

    #[test]
    fn upsert_persists_and_reloads() {
        let backing = Arc::new(MemoryStorage::new());
        let today = day(2026, 1, 5);

        let mut tracker = MoodTracker::load(Box::new(SharedStorage(Arc::clone(&backing))));
        let saved = tracker.upsert(Mood::Happy, "#ffcc00", today);
        assert!(saved.warning.is_none());
        tracker.upsert(Mood::Calm, "#abc", today - Duration::days(1));

        let reloaded = MoodTracker::load(Box::new(SharedStorage(Arc::clone(&backing))));
        assert_eq!(reloaded.log(), tracker.log());
        assert_eq!(reloaded.log().len(), 2);

        let counts = reloaded.view(today).counts;
        assert_eq!(counts[&Mood::Happy], 1);
        assert_eq!(counts[&Mood::Calm], 1);
    }

    #[test]
    fn reset_persists_empty_state() {
        let backing = Arc::new(MemoryStorage::new());
        let mut tracker = MoodTracker::load(Box::new(SharedStorage(Arc::clone(&backing))));
        tracker.upsert(Mood::Sad, "#00f", day(2026, 1, 5));
        tracker.upsert(Mood::Sad, "#00f", day(2026, 1, 6));

        let saved = tracker.reset();
        assert!(saved.warning.is_none());
        assert!(tracker.log().is_empty());
        assert_eq!(backing.get_item(ENTRIES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_failure_is_a_warning() {
        let today = day(2026, 1, 5);
        let mut tracker = MoodTracker::load(Box::new(FullStorage));

        let saved = tracker.upsert(Mood::Angry, "#f00", today);
        assert!(saved.warning.is_some());
        assert_eq!(saved.value.mood, Mood::Angry);
        assert_eq!(tracker.log().entry_for(today), Some(&saved.value));

        assert!(tracker.reset().warning.is_some());
        assert!(tracker.log().is_empty());
    }

    #[test]
    fn upsert_older_than_retention_window_warns() {
        let backing = Arc::new(MemoryStorage::new());
        let today = day(2026, 3, 1);
        let mut tracker = MoodTracker::load(Box::new(SharedStorage(Arc::clone(&backing))));
        for offset in 0..30 {
            tracker.upsert(Mood::Calm, "#abc", today - Duration::days(offset));
        }
        let before = backing.get_item(ENTRIES_KEY).unwrap();

        let stale = today - Duration::days(30);
        let saved = tracker.upsert(Mood::Sad, "#00f", stale);

        assert!(matches!(saved.warning, Some(SaveWarning::NotRetained(date)) if date == stale));
        assert_eq!(tracker.log().len(), 30);
        assert!(tracker.log().entry_for(stale).is_none());
        assert_eq!(backing.get_item(ENTRIES_KEY).unwrap(), before);
    }
}
