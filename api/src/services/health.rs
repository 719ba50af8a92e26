// Health check service implementation

use sea_orm::DatabaseConnection;

pub struct HealthChecker<'a> {
    conn: &'a DatabaseConnection,
}

impl<'a> HealthChecker<'a> {
    pub fn new(conn: &'a DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The API is healthy when the database answers a ping
    pub async fn check(&self) -> bool {
        match self.conn.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Health check failed: {}", err);
                false
            }
        }
    }
}
