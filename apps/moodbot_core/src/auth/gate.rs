use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::debug;

use super::codec::TokenCodec;
use super::identity::{Identity, Role};
use crate::errors::AppError;
use crate::models::user::{self, Entity as User};
use crate::AppState;

/// The token part of `Authorization: Bearer <token>`, if well formed.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let h = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = h.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolve the caller from request headers without touching the database.
pub fn identify(tokens: &TokenCodec, headers: &HeaderMap) -> Result<Identity, AppError> {
    let Some(token) = bearer_token(headers) else {
        debug!("missing or malformed authorization header");
        return Err(AppError::Unauthorized);
    };
    Ok(tokens.verify(token)?)
}

/// Middleware: verify the bearer credential and attach the [`Identity`].
///
/// Any failure short-circuits with 401 before the handler runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let identity = identify(&state.tokens, req.headers())?;
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Middleware: layered after [`authenticate`]; lets the request through only
/// if the caller's *persisted* role is admin.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let identity = req
        .extensions()
        .get::<Identity>()
        .copied()
        .ok_or(AppError::Unauthorized)?;
    let current = current_identity(&state.db, &identity).await?;
    if current.role != Role::Admin {
        debug!(user_id = identity.subject_id, "admin access refused");
        return Err(AppError::Forbidden);
    }
    Ok(next.run(req).await)
}

/// Re-read the caller's role from the users table. The role inside a
/// credential is only a hint.
pub async fn current_identity(
    db: &DatabaseConnection,
    identity: &Identity,
) -> Result<Identity, AppError> {
    let found: user::Model = User::find_by_id(identity.subject_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("User"))?;
    Ok(Identity::of(&found))
}
