use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user;

/// What an admin sees of a user. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub journal_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for AdminUser {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            journal_name: u.journal_name,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub users_count: u64,
    pub posts_count: u64,
    pub recent_users: Vec<AdminUser>,
}
