//! Bind configuration handed to server adapters.

use serde::Deserialize;

/// Where the embedding server should listen.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_owned(), port: 8080 }
    }
}

impl ServerConfig {
    /// `host:port` form adapters hand to their listeners.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
