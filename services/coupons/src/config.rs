use std::fmt;
use std::time::Duration;

use url::Url;

/// Coupon service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CouponsConfig {
    /// TCP port for the HTTP server (default 5000). Env var: `PORT`.
    pub port: u16,
    pub database: DatabaseConfig,
}

/// Connection target for the relational store.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Env var: `DB_HOST` (default "localhost").
    pub host: String,
    /// Env var: `DB_PORT` (default 3306).
    pub port: u16,
    /// Env var: `DB_USER` (default "admin").
    pub user: String,
    /// Env var: `DB_PASSWORD`. Never logged or exposed over HTTP.
    pub password: String,
    /// Env var: `DB_NAME` (default "coupon-db").
    pub name: String,
    /// Env var: `DB_CHARSET` (default "utf8mb4").
    pub charset: String,
    /// Env var: `DB_CONNECT_TIMEOUT_SECS` (default 30).
    pub connect_timeout: Duration,
    /// Env var: `DB_MAX_CONNECTIONS` (default 10).
    pub max_connections: u32,
}

impl CouponsConfig {
    pub fn from_env() -> Self {
        Self {
            port: parsed_var("PORT").unwrap_or(5000),
            database: DatabaseConfig::from_env(),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            host: var_or("DB_HOST", "localhost"),
            port: parsed_var("DB_PORT").unwrap_or(3306),
            user: var_or("DB_USER", "admin"),
            password: var_or("DB_PASSWORD", ""),
            name: var_or("DB_NAME", "coupon-db"),
            charset: var_or("DB_CHARSET", "utf8mb4"),
            connect_timeout: Duration::from_secs(parsed_var("DB_CONNECT_TIMEOUT_SECS").unwrap_or(30)),
            max_connections: parsed_var("DB_MAX_CONNECTIONS").unwrap_or(10),
        }
    }

    /// MySQL connection URL with percent-encoded credentials.
    pub fn connection_url(&self) -> Result<String, url::ParseError> {
        let mut url = Url::parse(&format!("mysql://{}:{}", self.host, self.port))?;
        url.set_path(&self.name);
        // `set_username`/`set_password` only fail for cannot-be-a-base URLs, which mysql:// is not.
        let _ = url.set_username(&self.user);
        if !self.password.is_empty() {
            let _ = url.set_password(Some(&self.password));
        }
        url.query_pairs_mut().append_pair("charset", &self.charset);
        Ok(url.into())
    }

    /// The parameters that are safe to show to operators.
    pub fn public_summary(&self) -> ConnectionSummary {
        ConnectionSummary {
            host: self.host.clone(),
            database: self.name.clone(),
            port: self.port,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("charset", &self.charset)
            .field("connect_timeout", &self.connect_timeout)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Non-secret connection parameters reported by `/debug`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConnectionSummary {
    pub host: String,
    pub database: String,
    pub port: u16,
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
