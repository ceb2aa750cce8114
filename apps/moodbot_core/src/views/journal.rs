use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use super::user_auth::load_user;
use crate::auth::{authorize_mutation, Identity};
use crate::errors::AppError;
use crate::models::journal_entry::{self, Column as EntryCol, Entity as JournalEntry};
use crate::serializers::common::{check_date, check_text, Message};
use crate::serializers::journal::{CreateEntryReq, EntryOut, UpdateEntryReq};
use crate::AppState;

pub async fn create_entry(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreateEntryReq>,
) -> Result<Json<EntryOut>, AppError> {
    check_text("text", &req.text)?;
    check_date(&req.date)?;
    // token may outlive its user
    load_user(&state.db, identity.subject_id).await?;

    let created = journal_entry::ActiveModel {
        id: NotSet,
        user_id: Set(identity.subject_id),
        text: Set(req.text),
        gratitude: Set(req.gratitude),
        mood: Set(req.mood.map(|m| m.as_str().to_string())),
        date: Set(req.date),
        created_at: Set(Utc::now()),
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created.into()))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<EntryOut>>, AppError> {
    let entries = JournalEntry::find()
        .filter(EntryCol::UserId.eq(identity.subject_id))
        .order_by_desc(EntryCol::CreatedAt)
        .order_by_desc(EntryCol::Id)
        .all(&state.db)
        .await?;
    Ok(Json(entries.into_iter().map(EntryOut::from).collect()))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEntryReq>,
) -> Result<Json<EntryOut>, AppError> {
    let found = JournalEntry::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Journal entry"))?;
    authorize_mutation(&state.db, &identity, &found).await?;

    let mut am = found.into_active_model();
    if let Some(text) = req.text {
        check_text("text", &text)?;
        am.text = Set(text);
    }
    if let Some(gratitude) = req.gratitude {
        am.gratitude = Set(Some(gratitude));
    }
    if let Some(mood) = req.mood {
        am.mood = Set(Some(mood.as_str().to_string()));
    }
    if let Some(date) = req.date {
        check_date(&date)?;
        am.date = Set(date);
    }

    let updated = am.update(&state.db).await?;
    Ok(Json(updated.into()))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    let found = JournalEntry::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Journal entry"))?;
    authorize_mutation(&state.db, &identity, &found).await?;

    found.delete(&state.db).await?;
    Ok(Json(Message::new("Deleted")))
}
