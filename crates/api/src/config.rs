use crate::auth::jwt::JwtConfig;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: &str) -> T {
    env_or(name, default)
        .parse()
        .unwrap_or_else(|_| panic!("{name} must be a valid {}", std::any::type_name::<T>()))
}

/// HTTP server settings, read once at startup.
///
/// Every field has a local-development default; production deployments
/// override through the environment (`HOST`, `PORT`, `CORS_ORIGINS`,
/// `REQUEST_TIMEOUT_SECS`, plus the `JWT_*` variables consumed by
/// [`JwtConfig`]).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by the CORS layer, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", "3000"),
            cors_origins,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", "30"),
            jwt: JwtConfig::from_env(),
        }
    }
}
