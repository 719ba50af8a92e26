use migration::{Alias, Query};
use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use serde::Deserialize;
use std::error::Error;
use tracing::{error, info};

use crate::config::{redact, DatabaseConfig};

const SEED_STARTUPS: &str = include_str!("../../seed/startups.json");

/// Demo startup used to populate an empty showcase
#[derive(Debug, Deserialize)]
struct SeedStartup {
    name: String,
    description: String,
    category: String,
    stage: Option<String>,
    users: Option<String>,
    growth: Option<String>,
    funding: Option<String>,
    website: Option<String>,
}

fn load_seed_startups() -> Result<Vec<SeedStartup>, serde_json::Error> {
    serde_json::from_str(SEED_STARTUPS)
}

/// Insert the demo startups when the startups table is empty
pub async fn execute() -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;
    let startups = load_seed_startups()?;

    info!("Connecting to database: {}", redact(&config.url));

    let connection = match Database::connect(&config.url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(Box::new(e));
        }
    };

    let row = connection
        .query_one(Statement::from_string(
            DbBackend::Postgres,
            "SELECT COUNT(*) AS count FROM startups".to_owned(),
        ))
        .await?;
    let existing: i64 = match row {
        Some(row) => row.try_get("", "count")?,
        None => 0,
    };

    if existing > 0 {
        info!("Startups table already has {} rows, skipping seed", existing);
        return Ok(());
    }

    let mut insert = Query::insert();
    insert.into_table(Alias::new("startups")).columns([
        Alias::new("name"),
        Alias::new("description"),
        Alias::new("category"),
        Alias::new("stage"),
        Alias::new("users"),
        Alias::new("growth"),
        Alias::new("funding"),
        Alias::new("website"),
    ]);

    for startup in &startups {
        insert.values([
            startup.name.clone().into(),
            startup.description.clone().into(),
            startup.category.clone().into(),
            startup.stage.clone().into(),
            startup.users.clone().into(),
            startup.growth.clone().into(),
            startup.funding.clone().into(),
            startup.website.clone().into(),
        ])?;
    }

    let backend = connection.get_database_backend();
    connection.execute(backend.build(&insert)).await?;

    info!("Seeded {} demo startups", startups.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_seed_file_is_valid() {
        let startups = load_seed_startups().unwrap();

        assert!(!startups.is_empty());
        for startup in &startups {
            assert!(!startup.name.is_empty());
            assert!(!startup.description.is_empty());
            assert!(startup.category == "Web2" || startup.category == "Web3");
        }
    }
}
