use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Social links shown on the startup detail page
        manager
            .alter_table(
                Table::alter()
                    .table(Startups::Table)
                    .add_column(ColumnDef::new(Startups::Twitter).string().null())
                    .add_column(ColumnDef::new(Startups::Linkedin).string().null())
                    .add_column(ColumnDef::new(Startups::Github).string().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Startups::Table)
                    .drop_column(Startups::Github)
                    .drop_column(Startups::Linkedin)
                    .drop_column(Startups::Twitter)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Startups {
    Table,
    Twitter,
    Linkedin,
    Github,
}
