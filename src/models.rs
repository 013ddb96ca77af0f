use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use thiserror::Error;

/// The closed set of moods a day can be logged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Tired,
    Calm,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Happy, Mood::Sad, Mood::Angry, Mood::Tired, Mood::Calm];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
            Mood::Calm => "calm",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
            Mood::Calm => "Calm",
        }
    }

    /// Color submitted by this mood's button.
    pub fn color(self) -> &'static str {
        match self {
            Mood::Happy => "#ffd93d",
            Mood::Sad => "#6c9bd2",
            Mood::Angry => "#ff6b6b",
            Mood::Tired => "#a29bfe",
            Mood::Calm => "#6bcb77",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Tired => "😴",
            Mood::Calm => "😌",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{0}'")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == value)
            .ok_or_else(|| UnknownMood(value.to_string()))
    }
}

/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and named colors.
pub fn is_color_token(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|ch| ch.is_ascii_hexdigit()),
        None => (1..=32).contains(&value.len()) && value.chars().all(|ch| ch.is_ascii_alphabetic()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpsertResponse {
    pub entry: MoodEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub view: ViewResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<MoodEntry>,
}

/// One slot of the 7-day timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineDay {
    pub date: NaiveDate,
    pub has_entry: bool,
    pub mood: Option<Mood>,
    pub color: String,
    pub label: String,
    pub short_label: String,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub today: NaiveDate,
    pub timeline: Vec<TimelineDay>,
    pub counts: BTreeMap<Mood, u32>,
}
