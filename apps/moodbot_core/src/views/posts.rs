use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use tracing::info;

use super::user_auth::load_user;
use crate::auth::{authorize_mutation, Identity};
use crate::errors::AppError;
use crate::models::post::{self, Column as PostCol, Entity as Post};
use crate::serializers::common::{check_text, Message};
use crate::serializers::posts::{CreatePostReq, PostOut};
use crate::AppState;

/// Size of the public wall.
const WALL_LIMIT: u64 = 100;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreatePostReq>,
) -> Result<Json<PostOut>, AppError> {
    check_text("content", &req.content)?;
    let author = load_user(&state.db, identity.subject_id).await?;

    let created = post::ActiveModel {
        id: NotSet,
        user_id: Set(author.id),
        user_name: Set(author.name),
        content: Set(req.content),
        media: Set(req.media.filter(|m| !m.is_empty())),
        mood_tag: Set(req.mood_tag.as_str().to_string()),
        likes: Set(0),
        created_at: Set(Utc::now()),
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created.into()))
}

/// Public: newest posts from everybody.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostOut>>, AppError> {
    let posts = Post::find()
        .order_by_desc(PostCol::CreatedAt)
        .order_by_desc(PostCol::Id)
        .limit(WALL_LIMIT)
        .all(&state.db)
        .await?;
    Ok(Json(posts.into_iter().map(PostOut::from).collect()))
}

pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostOut>, AppError> {
    // single statement so concurrent likes are not lost
    let res = Post::update_many()
        .col_expr(PostCol::Likes, Expr::col(PostCol::Likes).add(1))
        .filter(PostCol::Id.eq(id))
        .exec(&state.db)
        .await?;
    if res.rows_affected == 0 {
        return Err(AppError::NotFound("Post"));
    }

    let found = Post::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Post"))?;
    Ok(Json(found.into()))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    let found = Post::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Post"))?;
    authorize_mutation(&state.db, &identity, &found).await?;

    info!(post_id = id, by = identity.subject_id, "post deleted");
    found.delete(&state.db).await?;
    Ok(Json(Message::new("Deleted")))
}
