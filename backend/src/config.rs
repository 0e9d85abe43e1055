use std::env;

/// Bind address for the HTTP server, resolved from the environment with
/// local defaults.
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("LABCONSOLE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("LABCONSOLE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        ServerConfig { host, port }
    }
}
