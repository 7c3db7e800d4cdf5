use std::net::SocketAddr;

/// Server configuration, loaded once at startup.
///
/// Every field has a local-development default; production overrides
/// them through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address, from `HOST` (default `0.0.0.0`).
    pub host: String,
    /// Bind port, from `PORT` (default `3000`).
    pub port: u16,
    /// Allowed CORS origins, from the comma-separated `CORS_ORIGINS`
    /// (default: the Vite dev server at `http://localhost:5173`).
    pub cors_origins: Vec<String>,
    /// Request timeout in seconds, from `REQUEST_TIMEOUT_SECS` (default 30).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Read configuration from the environment, panicking on values that
    /// cannot be parsed. Misconfiguration should stop the boot, not limp
    /// along with a half-applied setup.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000")
                .parse()
                .expect("PORT must be a valid u16"),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid u64"),
        }
    }

    /// The socket address to bind, combining `host` and `port`.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = self.host.parse().expect("HOST must be a valid IP address");
        SocketAddr::new(ip, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
