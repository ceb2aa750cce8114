use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::post;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTag {
    #[default]
    Positive,
    Neutral,
    Support,
    Celebrate,
}

impl MoodTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTag::Positive => "positive",
            MoodTag::Neutral => "neutral",
            MoodTag::Support => "support",
            MoodTag::Celebrate => "celebrate",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostReq {
    pub content: String,
    pub media: Option<String>,
    #[serde(default)]
    pub mood_tag: MoodTag,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOut {
    pub id: i64,
    pub user: i64,
    pub user_name: String,
    pub content: String,
    pub media: Option<String>,
    pub mood_tag: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<post::Model> for PostOut {
    fn from(p: post::Model) -> Self {
        Self {
            id: p.id,
            user: p.user_id,
            user_name: p.user_name,
            content: p.content,
            media: p.media,
            mood_tag: p.mood_tag,
            likes: p.likes,
            created_at: p.created_at,
        }
    }
}
