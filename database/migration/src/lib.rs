pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_startups_table;
mod m20250301_000003_create_team_members_table;
mod m20250318_000001_add_social_links_to_startups;
mod m20250402_000001_add_wallet_address_to_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_startups_table::Migration),
            Box::new(m20250301_000003_create_team_members_table::Migration),
            Box::new(m20250318_000001_add_social_links_to_startups::Migration),
            Box::new(m20250402_000001_add_wallet_address_to_users::Migration),
        ]
    }
}
