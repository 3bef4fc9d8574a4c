use sqlx::mysql::MySqlConnectOptions;
use std::env;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;
use tracing::warn;

pub const HOST_VAR: &str = "MYSQL_HOST";
pub const PORT_VAR: &str = "MYSQL_PORT";
pub const DATABASE_VAR: &str = "MYSQL_DATABASE";
pub const USER_VAR: &str = "MYSQL_USER";
pub const PASSWORD_VAR: &str = "MYSQL_PASSWORD";

/// Character set requested for every connection
pub const CHARSET: &str = "utf8";

/// Configuration errors raised before any connection attempt
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVariable(&'static str),

    #[error("invalid MYSQL_PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// How unset environment variables are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvPolicy {
    /// Unset variables become empty strings and are handed to the driver
    #[default]
    PassThrough,
    /// Unset variables are a configuration error
    Require,
}

/// MySQL connection settings read from the environment
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Server hostname or IP
    pub host: String,
    /// Server port, kept as given
    pub port: String,
    /// Target schema
    pub database_name: String,
    /// Authentication username
    pub username: String,
    /// Authentication password
    pub password: String,
}

impl ConnectionConfig {
    /// Load connection settings from the process environment
    pub fn from_env(policy: EnvPolicy) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok(), policy)
    }

    /// Load connection settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, policy: EnvPolicy) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) => Ok(value),
                None if policy == EnvPolicy::Require => Err(ConfigError::MissingVariable(name)),
                None => {
                    warn!("{} environment variable not set, using empty value", name);
                    Ok(String::new())
                }
            }
        };

        Ok(Self {
            host: read(HOST_VAR)?,
            port: read(PORT_VAR)?,
            database_name: read(DATABASE_VAR)?,
            username: read(USER_VAR)?,
            password: read(PASSWORD_VAR)?,
        })
    }

    /// Connection descriptor in DSN form. Credentials are not part of it.
    pub fn dsn(&self) -> String {
        format!(
            "mysql:host={};port={};dbname={};charset={}",
            self.host, self.port, self.database_name, CHARSET
        )
    }

    /// Parsed port, or `None` to leave the driver default in place
    pub fn port_number(&self) -> Result<Option<u16>, ConfigError> {
        let port = self.port.trim();
        if port.is_empty() {
            return Ok(None);
        }

        port.parse::<u16>()
            .map(Some)
            .map_err(|source| ConfigError::InvalidPort {
                value: self.port.clone(),
                source,
            })
    }

    /// Driver options equivalent to [`ConnectionConfig::dsn`] plus credentials
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, ConfigError> {
        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .database(&self.database_name)
            .username(&self.username)
            .password(&self.password)
            .charset(CHARSET);

        if let Some(port) = self.port_number()? {
            options = options.port(port);
        }

        Ok(options)
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_name", &self.database_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
