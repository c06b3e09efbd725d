use std::net::IpAddr;

/// Server configuration, loaded from environment variables.
///
/// - `PK_HOST` (optional, default: 0.0.0.0) - Bind address
/// - `PK_PORT` (optional, default: 8080) - Bind port
/// - `PK_CORS_ORIGINS` (optional) - Comma-separated allowed browser origins
/// - `PK_MAX_LENGTH` (optional, default: 128) - Longest password the generator will build
/// - `PK_RATE_LIMIT` (optional, default: 120) - Requests per IP per minute on the password routes
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Allowed CORS origins. If empty, only `http://localhost` is allowed.
    pub cors_origins: Vec<String>,
    pub max_length: usize,
    pub rate_limit: usize,
}

impl ServerConfig {
    pub fn load() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = lookup("PK_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()
            .map_err(|_| "PK_HOST must be a valid IP address".to_string())?;

        let port: u16 = lookup("PK_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| "PK_PORT must be a valid port number".to_string())?;

        let cors_origins: Vec<String> = lookup("PK_CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_length: usize = lookup("PK_MAX_LENGTH")
            .unwrap_or_else(|| "128".to_string())
            .parse()
            .map_err(|_| "PK_MAX_LENGTH must be a number".to_string())?;

        if max_length < 8 {
            return Err("PK_MAX_LENGTH must be at least 8".to_string());
        }

        let rate_limit: usize = lookup("PK_RATE_LIMIT")
            .unwrap_or_else(|| "120".to_string())
            .parse()
            .map_err(|_| "PK_RATE_LIMIT must be a number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_origins,
            max_length,
            rate_limit,
        })
    }
}
