use serde::{Deserialize, Serialize};

use crate::auth::Role;
use crate::models::user;

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupReq {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginReq {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub journal_name: String,
}

impl From<&user::Model> for UserPublic {
    fn from(u: &user::Model) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            journal_name: u.journal_name.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResp {
    pub message: String,
    pub user: UserPublic,
    pub role: Role,
    /// access token (JWT)
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub show_gif_bg: bool,
    pub notifications: bool,
    pub streak_goal: i32,
    pub auto_save_journal: bool,
    pub show_mood_type_reminder: bool,
}

impl From<&user::Model> for Settings {
    fn from(u: &user::Model) -> Self {
        Self {
            theme: u.theme.clone(),
            show_gif_bg: u.show_gif_bg,
            notifications: u.notifications,
            streak_goal: u.streak_goal,
            auto_save_journal: u.auto_save_journal,
            show_mood_type_reminder: u.show_mood_type_reminder,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub journal_name: String,
    pub settings: Settings,
}

impl From<&user::Model> for Profile {
    fn from(u: &user::Model) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            journal_name: u.journal_name.clone(),
            settings: Settings::from(u),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MeResp {
    pub user: Profile,
}

/// Also the response shape of a profile update.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResp {
    pub message: String,
    pub user: UserPublic,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileReq {
    pub name: Option<String>,
    pub email: Option<String>,
    pub journal_name: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsReq {
    pub theme: Option<String>,
    pub show_gif_bg: Option<bool>,
    pub notifications: Option<bool>,
    pub streak_goal: Option<i32>,
    pub auto_save_journal: Option<bool>,
    pub show_mood_type_reminder: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResp {
    pub message: String,
    pub settings: Settings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}
