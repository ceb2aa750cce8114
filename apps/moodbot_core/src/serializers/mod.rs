pub mod admin;
pub mod common;
pub mod journal;
pub mod notes;
pub mod posts;
pub mod user_auth;
