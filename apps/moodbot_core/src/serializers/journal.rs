use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::journal_entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMood {
    Happy,
    Calm,
    Neutral,
    Sad,
    Anxious,
    Loved,
    Sleepy,
}

impl JournalMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalMood::Happy => "happy",
            JournalMood::Calm => "calm",
            JournalMood::Neutral => "neutral",
            JournalMood::Sad => "sad",
            JournalMood::Anxious => "anxious",
            JournalMood::Loved => "loved",
            JournalMood::Sleepy => "sleepy",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEntryReq {
    pub text: String,
    pub gratitude: Option<String>,
    pub mood: Option<JournalMood>,
    pub date: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateEntryReq {
    pub text: Option<String>,
    pub gratitude: Option<String>,
    pub mood: Option<JournalMood>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryOut {
    pub id: i64,
    pub user: i64,
    pub text: String,
    pub gratitude: Option<String>,
    pub mood: Option<String>,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl From<journal_entry::Model> for EntryOut {
    fn from(e: journal_entry::Model) -> Self {
        Self {
            id: e.id,
            user: e.user_id,
            text: e.text,
            gratitude: e.gratitude,
            mood: e.mood,
            date: e.date,
            created_at: e.created_at,
        }
    }
}
