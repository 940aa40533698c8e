//! Process configuration read from environment variables.
//!
//! [`load_settings`] first merges an optional `.env` file into the process
//! environment; variables already set take precedence over the file.
//! [`Settings::from_env`] parses the raw variables through [`mockable::Env`]
//! so that parsing can be exercised with `MockEnv`. [`ServerConfig`] carries
//! the resolved listener address and optional database pool into
//! [`super::create_server`].

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use exercise_tracker::outbound::persistence::{DbPool, PoolConfig};
use mockable::{DefaultEnv, Env};
use tracing::{info, warn};

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

pub(crate) const PORT_ENV: &str = "PORT";
pub(crate) const BIND_HOST_ENV: &str = "BIND_HOST";
pub(crate) const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub(crate) const DATABASE_MAX_CONNECTIONS_ENV: &str = "DATABASE_MAX_CONNECTIONS";
pub(crate) const DATABASE_CONNECT_TIMEOUT_ENV: &str = "DATABASE_CONNECT_TIMEOUT_SECS";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Read `.env` from the working directory (or a parent), then resolve
/// [`Settings`] from the process environment.
///
/// A missing `.env` file is not an error.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] when a variable cannot be parsed.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_dotenv(dotenvy::dotenv());
    Settings::from_env(&DefaultEnv::new())
}

fn load_dotenv(loaded: Result<PathBuf, dotenvy::Error>) -> Option<PathBuf> {
    match loaded {
        Ok(path) => {
            info!(path = %path.display(), "loaded environment file");
            Some(path)
        }
        Err(error) if error.not_found() => None,
        Err(error) => {
            warn!(%error, "failed to read environment file; continuing without it");
            None
        }
    }
}

/// Errors raised while validating environment configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// Human-readable description of an accepted value.
        expected: &'static str,
    },
}

/// Connection settings for the PostgreSQL store.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    url: String,
    max_connections: u32,
    connect_timeout: Duration,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl DatabaseSettings {
    /// Connection URL; never logged.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pool size cap.
    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// Pool checkout timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Pool settings for [`DbPool::new`].
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.url.clone())
            .with_max_size(self.max_connections)
            .with_connection_timeout(self.connect_timeout)
    }
}

/// Settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    bind_addr: SocketAddr,
    database: Option<DatabaseSettings>,
}

impl Settings {
    /// Parse every supported variable, applying defaults for absent ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] naming the first variable whose
    /// value cannot be parsed.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let port = parse_var(env, PORT_ENV, "a port number between 0 and 65535")?
            .unwrap_or(DEFAULT_PORT);
        let host = parse_var(env, BIND_HOST_ENV, "an IPv4 or IPv6 address")?
            .unwrap_or(DEFAULT_BIND_HOST);

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            database: database_from_env(env)?,
        })
    }

    /// Listener address.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// `None` when `DATABASE_URL` is unset or blank.
    pub fn database(&self) -> Option<&DatabaseSettings> {
        self.database.as_ref()
    }
}

fn database_from_env<E: Env>(env: &E) -> Result<Option<DatabaseSettings>, ConfigError> {
    let Some(url) = non_blank(env, DATABASE_URL_ENV) else {
        return Ok(None);
    };

    let max_connections = parse_var::<_, u32>(
        env,
        DATABASE_MAX_CONNECTIONS_ENV,
        "a positive integer",
    )?
    .unwrap_or(DEFAULT_MAX_CONNECTIONS);
    if max_connections == 0 {
        return Err(invalid(DATABASE_MAX_CONNECTIONS_ENV, "0", "a positive integer"));
    }

    let timeout_secs = parse_var::<_, u64>(
        env,
        DATABASE_CONNECT_TIMEOUT_ENV,
        "a positive number of seconds",
    )?
    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(invalid(
            DATABASE_CONNECT_TIMEOUT_ENV,
            "0",
            "a positive number of seconds",
        ));
    }

    Ok(Some(DatabaseSettings {
        url,
        max_connections,
        connect_timeout: Duration::from_secs(timeout_secs),
    }))
}

fn non_blank<E: Env>(env: &E, name: &'static str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_var<E: Env, T: std::str::FromStr>(
    env: &E,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    non_blank(env, name)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| invalid(name, &value, expected))
        })
        .transpose()
}

fn invalid(name: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidEnv {
        name,
        value: value.to_owned(),
        expected,
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Configuration backed by the in-memory store until a pool is attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach a database connection pool; repositories switch to Diesel.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
