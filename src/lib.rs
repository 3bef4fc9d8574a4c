//! Connectivity smoke test for MySQL-compatible databases.
//!
//! Reads `MYSQL_HOST`, `MYSQL_PORT`, `MYSQL_DATABASE`, `MYSQL_USER` and
//! `MYSQL_PASSWORD`, connects, runs `select version()` and dumps the rows.

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod output;
pub mod utils;

pub use config::{ConfigError, ConnectionConfig, EnvPolicy};
pub use error::{CheckError, CheckResult};
pub use output::{OutputFormat, ResultRow};
