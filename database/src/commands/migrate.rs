use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::error::Error;
use tracing::{error, info};

use crate::config::{redact, DatabaseConfig};

async fn connect() -> Result<DatabaseConnection, Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    info!("Connecting to database: {}", redact(&config.url));

    match Database::connect(&config.url).await {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            Err(Box::new(e))
        }
    }
}

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Running migrations...");

    let all_migrations = Migrator::get_migration_files();
    info!("Found {} migration files", all_migrations.len());
    for m in &all_migrations {
        info!("Migration file: {}", m.name());
    }

    match steps {
        Some(n) => info!("Running {} migrations", n),
        None => info!("Running all pending migrations"),
    }

    match Migrator::up(&connection, steps).await {
        Ok(_) => {
            info!("Migrations applied");
            Ok(())
        }
        Err(e) => {
            error!("Failed to run migrations: {}", e);
            error!("Migration error details: {:?}", e);
            Err(Box::new(e))
        }
    }
}

/// Drop every table and re-apply all migrations
pub async fn reset() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Resetting database: dropping all tables");

    match Migrator::fresh(&connection).await {
        Ok(_) => {
            info!("Database reset complete");
            Ok(())
        }
        Err(e) => {
            error!("Failed to reset database: {}", e);
            Err(Box::new(e))
        }
    }
}

/// Log applied and pending migrations
pub async fn status() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    let applied = Migrator::get_applied_migrations(&connection).await?;
    let pending = Migrator::get_pending_migrations(&connection).await?;

    info!("{} applied, {} pending", applied.len(), pending.len());
    for m in &applied {
        info!("Applied: {}", m.name());
    }
    for m in &pending {
        info!("Pending: {}", m.name());
    }

    Ok(())
}
