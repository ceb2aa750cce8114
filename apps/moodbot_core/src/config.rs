use chrono::Duration as ChronoDuration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// HS256 signing secret. Required; there is no built-in default.
    pub jwt_secret: String,
    /// Lifetime of every issued credential (default 1h). TOKEN_TTL_SECS.
    pub token_ttl: ChronoDuration,
    pub port: u16,
    /// Origin allowed by CORS (the frontend). CORS_ORIGIN.
    pub cors_origin: String,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let ttl_secs: i64 = parse_or(&lookup, "TOKEN_TTL_SECS", 3600)?; // 1 hour
        if ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "TOKEN_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }

        let port = parse_or(&lookup, "PORT", 5000)?;
        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:3000".into());
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", 50 * 1024 * 1024)?;

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl: ChronoDuration::seconds(ttl_secs),
            port,
            cors_origin,
            body_limit_bytes,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
