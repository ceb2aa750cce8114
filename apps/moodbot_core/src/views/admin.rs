use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{
    ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::journal_entry::{Column as EntryCol, Entity as JournalEntry};
use crate::models::note::{Column as NoteCol, Entity as Note};
use crate::models::post::{Column as PostCol, Entity as Post};
use crate::models::user::{Column as UserCol, Entity as User};
use crate::serializers::admin::{AdminUser, Overview};
use crate::serializers::common::Message;
use crate::AppState;

const RECENT_USERS: u64 = 5;

pub async fn overview(State(state): State<AppState>) -> Result<Json<Overview>, AppError> {
    let users_count = User::find().count(&state.db).await?;
    let posts_count = Post::find().count(&state.db).await?;
    let recent = User::find()
        .order_by_desc(UserCol::CreatedAt)
        .order_by_desc(UserCol::Id)
        .limit(RECENT_USERS)
        .all(&state.db)
        .await?;

    Ok(Json(Overview {
        users_count,
        posts_count,
        recent_users: recent.into_iter().map(AdminUser::from).collect(),
    }))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<AdminUser>>, AppError> {
    let users = User::find()
        .order_by_asc(UserCol::Id)
        .all(&state.db)
        .await?;
    Ok(Json(users.into_iter().map(AdminUser::from).collect()))
}

/// Removes the user; their notes, journal entries and posts go with them.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    let found = User::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("User"))?;

    // owned rows first, same transaction
    let txn = state.db.begin().await?;
    Note::delete_many().filter(NoteCol::UserId.eq(id)).exec(&txn).await?;
    JournalEntry::delete_many().filter(EntryCol::UserId.eq(id)).exec(&txn).await?;
    Post::delete_many().filter(PostCol::UserId.eq(id)).exec(&txn).await?;
    found.delete(&txn).await?;
    txn.commit().await?;

    info!(user_id = id, "user deleted by admin");
    Ok(Json(Message::new("User deleted successfully")))
}
