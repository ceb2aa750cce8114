use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string_len(16).not_null().default("user"))
                    .col(ColumnDef::new(Users::JournalName).string().not_null().default("My Journal"))
                    // settings are flattened onto the row
                    .col(ColumnDef::new(Users::Theme).string().not_null().default("sakura"))
                    .col(ColumnDef::new(Users::ShowGifBg).boolean().not_null().default(true))
                    .col(ColumnDef::new(Users::Notifications).boolean().not_null().default(true))
                    .col(ColumnDef::new(Users::StreakGoal).integer().not_null().default(7))
                    .col(ColumnDef::new(Users::AutoSaveJournal).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(Users::ShowMoodTypeReminder)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    JournalName,
    Theme,
    ShowGifBg,
    Notifications,
    StreakGoal,
    AutoSaveJournal,
    ShowMoodTypeReminder,
    CreatedAt,
}
