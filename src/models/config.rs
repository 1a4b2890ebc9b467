use serde::Deserialize;

/// Configuration options for the auctions service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Credentials the basic-auth gate accepts.
    pub auth: BasicAuthConfig,
}

/// The fixed user checked by the basic-auth gate.
#[derive(Debug, Clone, Deserialize)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}
