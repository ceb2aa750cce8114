pub mod admin;
pub mod journal;
pub mod notes;
pub mod posts;
pub mod user_auth;

/// Root banner, doubles as a liveness probe.
pub async fn banner() -> &'static str {
    "MoodBot Café API Running"
}
