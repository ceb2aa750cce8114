use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::note;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteMood {
    Happy,
    Neutral,
    Sad,
    Anxious,
    Calm,
}

impl NoteMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteMood::Happy => "happy",
            NoteMood::Neutral => "neutral",
            NoteMood::Sad => "sad",
            NoteMood::Anxious => "anxious",
            NoteMood::Calm => "calm",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNoteReq {
    pub mood: NoteMood,
    pub note: String,
    pub date: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateNoteReq {
    pub mood: Option<NoteMood>,
    pub note: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOut {
    pub id: i64,
    /// owner id
    pub user: i64,
    pub mood: String,
    pub note: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl From<note::Model> for NoteOut {
    fn from(n: note::Model) -> Self {
        Self {
            id: n.id,
            user: n.user_id,
            mood: n.mood,
            note: n.note,
            date: n.date,
            created_at: n.created_at,
        }
    }
}
