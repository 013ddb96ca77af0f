use crate::models::{Mood, MoodEntry};
use chrono::NaiveDate;

/// Number of days kept in the log.
pub const MAX_ENTRIES: usize = 30;

/// Daily mood entries, at most one per day, ascending by date and never
/// longer than [`MAX_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from unordered entries. A later entry for a date replaces
    /// an earlier one, and only the most recent days are retained.
    pub fn from_entries(entries: impl IntoIterator<Item = MoodEntry>) -> Self {
        let mut log = Self::new();
        for entry in entries {
            log.put(entry);
        }
        log.retain_and_sort();
        log
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    /// Records `mood` for `today`, replacing any entry already logged that day.
    pub fn upsert(&mut self, mood: Mood, color: impl Into<String>, today: NaiveDate) -> MoodEntry {
        let entry = MoodEntry {
            date: today,
            mood,
            color: color.into(),
        };
        self.put(entry.clone());
        self.retain_and_sort();
        entry
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    fn put(&mut self, entry: MoodEntry) {
        match self.entries.iter_mut().find(|existing| existing.date == entry.date) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    fn retain_and_sort(&mut self) {
        self.entries.sort_by_key(|entry| entry.date);
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }
}
