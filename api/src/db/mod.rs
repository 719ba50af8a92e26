// Database Module
// Connection pooling and repositories for the Launchpad API

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DbError;
pub use pool::DbPool;
pub use repositories::Repositories;
