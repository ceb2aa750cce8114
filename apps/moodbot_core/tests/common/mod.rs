#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration as ChronoDuration;
use moodbot_core::{auth::TokenCodec, ensure_schema, models::user, urls, AppState};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, EntityTrait, IntoActiveModel, Set};
use serde_json::{json, Value};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct Account {
    pub id: i64,
    pub token: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        // one connection, or every checkout sees its own empty database
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.expect("sqlite");
        ensure_schema(&db).await.expect("migrations");

        let tokens = TokenCodec::new(b"integration-test-secret", ChronoDuration::hours(1));
        let state = AppState::new(db, tokens);
        Self {
            router: urls::router(state.clone()),
            state,
        }
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }
        let req = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    pub async fn signup(&self, name: &str, email: &str) -> Account {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({ "name": name, "email": email, "password": "hunter22" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        Account {
            id: body["user"]["id"].as_i64().unwrap(),
            token: body["token"].as_str().unwrap().to_string(),
        }
    }

    /// Sign up, promote in the database, then log in again for an admin token.
    pub async fn admin(&self, name: &str, email: &str) -> Account {
        let acct = self.signup(name, email).await;
        self.set_role(acct.id, "admin").await;
        let (status, body) = self
            .call(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": "hunter22" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["role"], "admin");
        Account {
            id: acct.id,
            token: body["token"].as_str().unwrap().to_string(),
        }
    }

    pub async fn set_role(&self, id: i64, role: &str) {
        let found = user::Entity::find_by_id(id)
            .one(&self.state.db)
            .await
            .unwrap()
            .unwrap();
        let mut am = found.into_active_model();
        am.role = Set(role.to_string());
        am.update(&self.state.db).await.unwrap();
    }
}
