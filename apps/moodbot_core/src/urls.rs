use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::{authenticate, require_admin};
use crate::views::{
    admin::{delete_user, list_users, overview},
    banner,
    journal::{create_entry, delete_entry, list_entries, update_entry},
    notes::{create_note, delete_note, list_notes, update_note},
    posts::{create_post, delete_post, like_post, list_posts},
    user_auth::{login, me, signup, update_profile, update_settings, verify},
};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .nest("/api/auth", auth_routes(&state))
        .nest("/api/notes", notes_routes(&state))
        .nest("/api/journal", journal_routes(&state))
        .nest("/api/posts", posts_routes(&state))
        .nest("/api/admin", admin_routes(&state))
        .with_state(state)
}

fn auth_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route("/verify", get(verify))
        .route("/update", put(update_profile))
        .route("/settings", put(update_settings))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .merge(protected)
}

fn notes_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_notes).post(create_note))
        .route("/:id", put(update_note).delete(delete_note))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
}

fn journal_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route("/:id", put(update_entry).delete(delete_entry))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
}

fn posts_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_post))
        .route("/:id", delete(delete_post))
        .route("/:id/like", post(like_post))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // reading the wall needs no account
    Router::new().route("/", get(list_posts)).merge(protected)
}

fn admin_routes(state: &AppState) -> Router<AppState> {
    // layers run bottom-up: authenticate, then require_admin
    Router::new()
        .route("/overview", get(overview))
        .route("/users", get(list_users))
        .route("/users/:id", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
}
