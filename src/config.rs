// src/config.rs
use std::net::IpAddr;

/// Name under which the employee store's connection string is registered.
pub const EMPLOYEE_CONNECTION_NAME: &str = "EmployeeDBContext";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub antiforgery_secret: String,
    /// Origins allowed to make cross-origin requests. Empty means same-origin only.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),
    #[error("{key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

impl AppConfig {
    /// Reads configuration from the process environment (call `dotenv()` first).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("EMPLOYEE_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid { key: "EMPLOYEE_STORE", value: other.to_string() })
            }
        };

        let database_url = connection_string(&lookup, EMPLOYEE_CONNECTION_NAME)
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty());
        if store == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL".to_string()));
        }

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?;
        let host = parse_or(&lookup, "HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_or(&lookup, "PORT", 3000)?;

        let antiforgery_secret = lookup("ANTIFORGERY_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::Missing("ANTIFORGERY_SECRET".to_string()))?;

        let cors_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { store, database_url, max_connections, host, port, antiforgery_secret, cors_origins })
    }
}

// Named connection strings live under CONNECTIONSTRINGS__<NAME>.
fn connection_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&format!("CONNECTIONSTRINGS__{}", name.to_uppercase()))
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn memory_store_needs_no_database_url() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("EMPLOYEE_STORE", "memory"),
            ("ANTIFORGERY_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(cfg.store, StoreBackend::Memory);
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.max_connections, 5);
        assert!(cfg.cors_origins.is_empty());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("EMPLOYEE_STORE", "memory"),
            ("ANTIFORGERY_SECRET", "s3cret"),
            ("CORS_ALLOWED_ORIGINS", " https://a.example , ,https://b.example"),
        ]))
        .unwrap();
        assert_eq!(cfg.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(ConfigError::Missing("PORT".to_string()).to_string(), "PORT must be set");
        let invalid = ConfigError::Invalid { key: "PORT", value: "x".to_string() };
        assert_eq!(invalid.to_string(), "PORT has invalid value 'x'");
    }

    #[test]
    fn named_connection_string_wins_over_database_url() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("CONNECTIONSTRINGS__EMPLOYEEDBCONTEXT", "postgres://named/db"),
            ("DATABASE_URL", "postgres://fallback/db"),
            ("ANTIFORGERY_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(cfg.store, StoreBackend::Postgres);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://named/db"));
    }

    #[test]
    fn postgres_without_url_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("ANTIFORGERY_SECRET", "s3cret")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL".to_string()));
    }

    #[test]
    fn bad_port_is_reported() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("EMPLOYEE_STORE", "memory"),
            ("ANTIFORGERY_SECRET", "s3cret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_string() });
    }

    #[test]
    fn missing_secret_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("EMPLOYEE_STORE", "memory")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ANTIFORGERY_SECRET".to_string()));
    }
}
