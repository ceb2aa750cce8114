pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod serializers;
pub mod urls;
pub mod views;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use sea_orm::{Database, DatabaseConnection};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::auth::TokenCodec;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenCodec,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenCodec) -> Self {
        Self { db, tokens }
    }

    /// Connect, migrate, and build the token codec from config.
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let db = Database::connect(config.database_url.as_str()).await?;
        ensure_schema(&db).await?;
        info!("database ready");

        let tokens = TokenCodec::new(config.jwt_secret.as_bytes(), config.token_ttl);
        Ok(Self::new(db, tokens))
    }
}

/// Ensure DB schema is up-to-date (calls migration crate).
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    use migration::Migrator;
    use sea_orm_migration::migrator::MigratorTrait;
    Migrator::up(db, None).await?;
    Ok(())
}

/// Full HTTP app: routes plus CORS, body limit and request tracing.
pub fn app(state: AppState, config: &AppConfig) -> Result<Router> {
    let origin: HeaderValue = config.cors_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Ok(urls::router(state)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
