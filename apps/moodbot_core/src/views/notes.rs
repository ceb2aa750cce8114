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
use crate::models::note::{self, Column as NoteCol, Entity as Note};
use crate::serializers::common::{check_date, check_text, Message};
use crate::serializers::notes::{CreateNoteReq, NoteOut, UpdateNoteReq};
use crate::AppState;

pub async fn create_note(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreateNoteReq>,
) -> Result<Json<NoteOut>, AppError> {
    check_text("note", &req.note)?;
    check_date(&req.date)?;
    // token may outlive its user
    load_user(&state.db, identity.subject_id).await?;

    let created = note::ActiveModel {
        id: NotSet,
        user_id: Set(identity.subject_id),
        mood: Set(req.mood.as_str().to_string()),
        note: Set(req.note),
        date: Set(req.date),
        created_at: Set(Utc::now()),
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created.into()))
}

/// The caller's own notes, newest first.
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<NoteOut>>, AppError> {
    let notes = Note::find()
        .filter(NoteCol::UserId.eq(identity.subject_id))
        .order_by_desc(NoteCol::CreatedAt)
        .order_by_desc(NoteCol::Id)
        .all(&state.db)
        .await?;
    Ok(Json(notes.into_iter().map(NoteOut::from).collect()))
}

pub async fn update_note(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNoteReq>,
) -> Result<Json<NoteOut>, AppError> {
    let found = Note::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Note"))?;
    authorize_mutation(&state.db, &identity, &found).await?;

    let mut am = found.into_active_model();
    if let Some(mood) = req.mood {
        am.mood = Set(mood.as_str().to_string());
    }
    if let Some(text) = req.note {
        check_text("note", &text)?;
        am.note = Set(text);
    }
    if let Some(date) = req.date {
        check_date(&date)?;
        am.date = Set(date);
    }

    let updated = am.update(&state.db).await?;
    Ok(Json(updated.into()))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    let found = Note::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Note"))?;
    authorize_mutation(&state.db, &identity, &found).await?;

    found.delete(&state.db).await?;
    Ok(Json(Message::new("Deleted")))
}
