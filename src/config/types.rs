//! Server settings.

use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// PostgreSQL URL. `None` runs on the in-memory store.
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
    /// Directory holding `directors.json`, `genres.json` and `movies.json`.
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            seed_path: None,
        }
    }
}
