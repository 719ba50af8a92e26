use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Execute the create command
pub async fn execute(name: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    // Use provided name or default from config
    let db_name = name.unwrap_or(config.name.clone());

    // CREATE DATABASE cannot take a bind parameter, so the name is checked instead
    if !is_valid_identifier(&db_name) {
        error!("Refusing to create database with invalid name '{}'", db_name);
        return Err(format!("Invalid database name: {}", db_name).into());
    }

    info!("Creating database: {}", db_name);

    let connection = match Database::connect(config.server_url()).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to connect to database server: {}", e);
            return Err(Box::new(e));
        }
    };

    let existing = connection
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [db_name.clone().into()],
        ))
        .await?;

    if existing.is_some() {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    match connection
        .execute_unprepared(&format!("CREATE DATABASE \"{}\"", db_name))
        .await
    {
        Ok(_) => {
            info!("Database '{}' created successfully", db_name);
            Ok(())
        }
        Err(e) => {
            error!("Failed to create database: {}", e);
            Err(Box::new(e))
        }
    }
}

/// Postgres identifiers we are willing to interpolate: ASCII letters, digits and
/// underscores, not starting with a digit, at most 63 bytes
fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::is_valid_identifier;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(is_valid_identifier("launchpad"));
        assert!(is_valid_identifier("launchpad_test_2"));
    }

    #[test]
    fn rejects_injection_and_odd_names() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1launchpad"));
        assert!(!is_valid_identifier("launch-pad"));
        assert!(!is_valid_identifier("x\"; DROP DATABASE postgres; --"));
        assert!(!is_valid_identifier(&"a".repeat(64)));
    }
}
