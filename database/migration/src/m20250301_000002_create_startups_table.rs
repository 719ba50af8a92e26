use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Display fields (stage, users, growth, funding, revenue) are free text on purpose:
        // the submission form accepts values like "50K+" or "+245%".
        manager
            .create_table(
                Table::create()
                    .table(Startups::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Startups::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Startups::Name).string().not_null())
                    .col(ColumnDef::new(Startups::Description).text().not_null())
                    .col(ColumnDef::new(Startups::Category).string().not_null()) // Web2 | Web3
                    .col(ColumnDef::new(Startups::Stage).string().null())
                    .col(ColumnDef::new(Startups::Users).string().null())
                    .col(ColumnDef::new(Startups::Growth).string().null())
                    .col(ColumnDef::new(Startups::Tagline).string().null())
                    .col(ColumnDef::new(Startups::Vision).text().null())
                    .col(ColumnDef::new(Startups::Funding).string().null())
                    .col(ColumnDef::new(Startups::Revenue).string().null())
                    .col(ColumnDef::new(Startups::FounderName).string().null())
                    .col(ColumnDef::new(Startups::FounderEmail).string().null())
                    .col(ColumnDef::new(Startups::Website).string().null())
                    .col(ColumnDef::new(Startups::LogoUrl).string().null())
                    .col(ColumnDef::new(Startups::SubmittedBy).uuid().null())
                    .col(ColumnDef::new(Startups::CreatedAt).timestamp_with_time_zone().null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Startups::UpdatedAt).timestamp_with_time_zone().null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_startups_submitted_by")
                            .from(Startups::Table, Startups::SubmittedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_startups_category")
                    .table(Startups::Table)
                    .col(Startups::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_startups_submitted_by")
                    .table(Startups::Table)
                    .col(Startups::SubmittedBy)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Startups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Startups {
    Table,
    Id,
    Name,
    Description,
    Category,
    Stage,
    Users,
    Growth,
    Tagline,
    Vision,
    Funding,
    Revenue,
    FounderName,
    FounderEmail,
    Website,
    LogoUrl,
    SubmittedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
