//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_cache_connections() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Absent means no database: read endpoints answer from the seed
    /// dataset. A supported operating mode, not an error.
    pub database_url: Option<String>,
    /// When false, a fresh connection pool is built per invocation
    /// (serverless-style deployments). Defaults to a process-wide pool.
    #[serde(default = "default_cache_connections")]
    pub cache_connections: bool,
}
