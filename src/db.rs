//! SQLite connection pooling helpers.

use diesel::SqliteConnection;
use diesel::r2d2::{self, ConnectionManager};

/// Shared connection pool over the SQLite database.
pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// A single pooled connection.
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build an r2d2 pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder().build(manager)
}
