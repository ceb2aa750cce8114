use sea_orm::entity::prelude::*;

use crate::auth::Role;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub password_hash: String,

    /// "user" | "admin"
    pub role: String,

    pub journal_name: String,

    // settings
    pub theme: String,
    pub show_gif_bg: bool,
    pub notifications: bool,
    pub streak_goal: i32,
    pub auto_save_journal: bool,
    pub show_mood_type_reminder: bool,

    pub created_at: ChronoDateTimeUtc,
}

impl Model {
    /// Persisted role. Unknown strings are treated as the unprivileged role.
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or(Role::User)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
