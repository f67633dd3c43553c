//! Database connection helpers.
//!
//! This module provides a small wrapper around the Diesel connection pool
//! for the SQLite database, plus the gateway that decides per request
//! whether reads are answered by the database or by the seed dataset.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug)]
/// Options that are applied each time a connection is acquired from the pool.
pub struct ConnectionOptions {
    /// Enable Write Ahead Logging mode for SQLite.
    pub enable_wal: bool,
    /// Enforce foreign key checks for SQLite.
    pub enable_foreign_keys: bool,
    /// Timeout to wait for a locked database.
    pub busy_timeout: Option<Duration>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            if self.enable_wal {
                conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
            }
            if self.enable_foreign_keys {
                conn.batch_execute("PRAGMA foreign_keys = ON;")?;
            }
            if let Some(d) = self.busy_timeout {
                conn.batch_execute(&format!("PRAGMA busy_timeout = {};", d.as_millis()))?;
            }
            Ok(())
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a Diesel connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions {
            enable_wal: true,
            enable_foreign_keys: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }))
        .build(manager)
}

#[derive(Clone)]
/// Selects the storage backend once per request at the composition
/// boundary.
pub enum DbGateway {
    /// No connection string configured; reads fall back to the seed
    /// dataset.
    Disabled,
    /// Process-wide pool, created at startup and reused for the process
    /// lifetime.
    Cached(DbPool),
    /// A fresh pool per invocation, for deployments without a persistent
    /// process.
    PerCall { database_url: String },
}

impl DbGateway {
    pub fn from_config(
        database_url: Option<&str>,
        cache_connections: bool,
    ) -> Result<Self, PoolError> {
        match database_url {
            None => Ok(Self::Disabled),
            Some(url) if cache_connections => Ok(Self::Cached(establish_connection_pool(url)?)),
            Some(url) => Ok(Self::PerCall {
                database_url: url.to_string(),
            }),
        }
    }

    /// `None` means no database is configured. `Some(Err(_))` is a
    /// connection failure on a configured database, which callers must
    /// surface rather than mask with seed data.
    pub fn pool(&self) -> Option<Result<DbPool, PoolError>> {
        match self {
            Self::Disabled => None,
            Self::Cached(pool) => Some(Ok(pool.clone())),
            Self::PerCall { database_url } => Some(establish_connection_pool(database_url)),
        }
    }
}
