use sea_orm_migration::prelude::*;

mod m2025_10_20_000001_create_users;
mod m2025_10_20_000002_create_notes;
mod m2025_10_20_000003_create_journal_entries;
mod m2025_10_20_000004_create_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // `users` first: every other table references it
            Box::new(m2025_10_20_000001_create_users::Migration),
            Box::new(m2025_10_20_000002_create_notes::Migration),
            Box::new(m2025_10_20_000003_create_journal_entries::Migration),
            Box::new(m2025_10_20_000004_create_posts::Migration),
        ]
    }
}
