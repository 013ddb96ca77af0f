use crate::models::{Mood, TimelineDay, ViewResponse};
use crate::mood_log::MoodLog;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

pub const WINDOW_DAYS: usize = 7;

/// Dot color for days without an entry.
pub const NO_DATA_COLOR: &str = "#e0e0e0";

pub fn build_view(log: &MoodLog, today: NaiveDate) -> ViewResponse {
    ViewResponse {
        today,
        timeline: timeline_view(log, today),
        counts: mood_counts(log, today),
    }
}

/// The seven days ending at `today`, oldest first.
pub fn last_7_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WINDOW_DAYS as i64)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

pub fn timeline_view(log: &MoodLog, today: NaiveDate) -> Vec<TimelineDay> {
    last_7_days(today)
        .into_iter()
        .map(|date| match log.entry_for(date) {
            Some(entry) => TimelineDay {
                date,
                has_entry: true,
                mood: Some(entry.mood),
                color: entry.color.clone(),
                label: format!("{} - {}", entry.mood.display_name(), long_label(date)),
                short_label: short_label(date),
            },
            None => TimelineDay {
                date,
                has_entry: false,
                mood: None,
                color: NO_DATA_COLOR.to_string(),
                label: format!("No mood logged - {}", long_label(date)),
                short_label: short_label(date),
            },
        })
        .collect()
}

/// Per-mood totals over the display window. Every mood is present.
pub fn mood_counts(log: &MoodLog, today: NaiveDate) -> BTreeMap<Mood, u32> {
    let window = last_7_days(today);
    let mut counts: BTreeMap<Mood, u32> = Mood::ALL.into_iter().map(|mood| (mood, 0)).collect();

    for entry in log.entries() {
        if window.contains(&entry.date) {
            *counts.entry(entry.mood).or_default() += 1;
        }
    }

    counts
}

fn long_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

fn short_label(date: NaiveDate) -> String {
    date.format("%-m/%-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_is_seven_consecutive_days_ending_today() {
        let today = day(2026, 3, 2);
        let days = last_7_days(today);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0], day(2026, 2, 24));
        assert_eq!(days[6], today);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn counts_for_single_entry() {
        let today = day(2026, 1, 5);
        let mut log = MoodLog::new();
        log.upsert(Mood::Happy, "#ffcc00", today);

        let counts = mood_counts(&log, today);
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[&Mood::Happy], 1);
        for mood in [Mood::Sad, Mood::Angry, Mood::Tired, Mood::Calm] {
            assert_eq!(counts[&mood], 0);
        }
    }

    #[test]
    fn counts_ignore_entries_outside_window() {
        let today = day(2026, 1, 31);
        let mut log = MoodLog::new();
        for offset in 0..20 {
            let mood = Mood::ALL[offset as usize % Mood::ALL.len()];
            log.upsert(mood, mood.color(), today - Duration::days(offset));
        }
        // Future entries are outside the window too.
        log.upsert(Mood::Calm, "#abc", today + Duration::days(1));

        let counts = mood_counts(&log, today);
        let total: u32 = counts.values().sum();
        let in_window = log
            .entries()
            .iter()
            .filter(|entry| last_7_days(today).contains(&entry.date))
            .count();
        assert_eq!(total as usize, in_window);
        assert_eq!(total, 7);
    }

    #[test]
    fn timeline_represents_missing_days() {
        let today = day(2026, 1, 5);
        let two_days_ago = today - Duration::days(2);
        let mut log = MoodLog::new();
        log.upsert(Mood::Sad, "#00f", two_days_ago);

        let timeline = timeline_view(&log, today);
        assert_eq!(timeline.len(), 7);

        let logged = timeline
            .iter()
            .find(|row| row.date == two_days_ago)
            .expect("missing day");
        assert!(logged.has_entry);
        assert_eq!(logged.mood, Some(Mood::Sad));
        assert_eq!(logged.color, "#00f");
        assert_eq!(logged.label, "Sad - Sat, Jan 3");
        assert_eq!(logged.short_label, "1/3");

        let empty = &timeline[6];
        assert!(!empty.has_entry);
        assert_eq!(empty.color, NO_DATA_COLOR);
        assert_eq!(empty.label, "No mood logged - Mon, Jan 5");
        assert_eq!(timeline.iter().filter(|row| row.has_entry).count(), 1);
    }

    #[test]
    fn build_view_bundles_today() {
        let today = day(2026, 1, 5);
        let view = build_view(&MoodLog::new(), today);
        assert_eq!(view.today, today);
        assert_eq!(view.timeline.len(), 7);
        assert!(view.counts.values().all(|count| *count == 0));
    }
}
