use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, Set, SqlErr,
};
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{Identity, Role};
use crate::errors::AppError;
use crate::models::user::{self, Column as UserCol, Entity as User};
use crate::serializers::user_auth::{
    AuthResp, LoginReq, MeResp, Profile, Settings, SettingsResp, SignupReq, UpdateProfileReq,
    UpdateSettingsReq, UserPublic, UserResp,
};
use crate::AppState;

const MIN_PASSWORD_LEN: usize = 6;
const EMAIL_TAKEN: &str = "User already exists.";

// ---------- handlers ----------
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupReq>,
) -> Result<(StatusCode, Json<AuthResp>), AppError> {
    let name = req.name.trim();
    let email = normalize_email(&req.email);
    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(AppError::bad("Name, email, and password are required."));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::bad("Password must be at least 6 characters."));
    }

    if find_by_email(&state.db, &email).await?.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.into()));
    }

    let hash = hash_password(&req.password)?;
    let first = name.split_whitespace().next().unwrap_or(name);

    let created = user::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email),
        password_hash: Set(hash),
        role: Set(Role::User.as_str().to_string()),
        journal_name: Set(format!("{first}'s Journal")),
        theme: Set("sakura".into()),
        show_gif_bg: Set(true),
        notifications: Set(true),
        streak_goal: Set(7),
        auto_save_journal: Set(true),
        show_mood_type_reminder: Set(true),
        created_at: Set(Utc::now()),
    }
    .insert(&state.db)
    .await
    .map_err(email_taken)?;

    info!(user_id = created.id, "user signed up");
    let token = state.tokens.issue(&created)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResp {
            message: "Signup successful".into(),
            user: UserPublic::from(&created),
            role: created.role(),
            token,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginReq>,
) -> Result<Json<AuthResp>, AppError> {
    let email = normalize_email(&req.email);
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::bad("Email and password are required."));
    }

    let Some(found) = find_by_email(&state.db, &email).await? else {
        return Err(AppError::InvalidCredentials);
    };
    if !verify_password(&found.password_hash, &req.password)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.tokens.issue(&found)?;
    Ok(Json(AuthResp {
        message: "Login successful".into(),
        user: UserPublic::from(&found),
        role: found.role(),
        token,
    }))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<MeResp>, AppError> {
    let found = load_user(&state.db, identity.subject_id).await?;
    Ok(Json(MeResp {
        user: Profile::from(&found),
    }))
}

pub async fn verify(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<UserResp>, AppError> {
    let found = load_user(&state.db, identity.subject_id).await?;
    Ok(Json(UserResp {
        message: "Token is valid".into(),
        user: UserPublic::from(&found),
    }))
}

/// Updates the caller's own profile. Blank fields are left untouched.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<UpdateProfileReq>,
) -> Result<Json<UserResp>, AppError> {
    let found = load_user(&state.db, identity.subject_id).await?;
    let current_email = found.email.clone();
    let mut am = found.into_active_model();

    if let Some(name) = non_blank(req.name) {
        am.name = Set(name);
    }
    if let Some(email) = non_blank(req.email).map(|e| normalize_email(&e)) {
        if email != current_email {
            if find_by_email(&state.db, &email).await?.is_some() {
                return Err(AppError::Conflict(EMAIL_TAKEN.into()));
            }
            am.email = Set(email);
        }
    }
    if let Some(journal_name) = non_blank(req.journal_name) {
        am.journal_name = Set(journal_name);
    }

    let updated = am.update(&state.db).await.map_err(email_taken)?;
    Ok(Json(UserResp {
        message: "Profile updated successfully".into(),
        user: UserPublic::from(&updated),
    }))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<UpdateSettingsReq>,
) -> Result<Json<SettingsResp>, AppError> {
    if matches!(req.streak_goal, Some(goal) if goal < 1) {
        return Err(AppError::bad("streakGoal must be at least 1"));
    }

    let found = load_user(&state.db, identity.subject_id).await?;
    let mut am = found.into_active_model();

    if let Some(theme) = non_blank(req.theme) {
        am.theme = Set(theme);
    }
    if let Some(v) = req.show_gif_bg {
        am.show_gif_bg = Set(v);
    }
    if let Some(v) = req.notifications {
        am.notifications = Set(v);
    }
    if let Some(v) = req.streak_goal {
        am.streak_goal = Set(v);
    }
    if let Some(v) = req.auto_save_journal {
        am.auto_save_journal = Set(v);
    }
    if let Some(v) = req.show_mood_type_reminder {
        am.show_mood_type_reminder = Set(v);
    }

    let updated = am.update(&state.db).await?;
    Ok(Json(SettingsResp {
        message: "Settings updated successfully".into(),
        settings: Settings::from(&updated),
    }))
}

// ---------- small helpers ----------
pub(crate) async fn load_user(db: &DatabaseConnection, id: i64) -> Result<user::Model, AppError> {
    User::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("User"))
}

async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<user::Model>, DbErr> {
    User::find().filter(UserCol::Email.eq(email)).one(db).await
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Two concurrent signups can both pass the lookup; the unique index decides.
fn email_taken(e: DbErr) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(EMAIL_TAKEN.into()),
        _ => AppError::Db(e),
    }
}
