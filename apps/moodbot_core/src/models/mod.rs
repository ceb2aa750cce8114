pub mod journal_entry;
pub mod note;
pub mod post;
pub mod user;
