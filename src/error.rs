use thiserror::Error;

use crate::config::ConfigError;
use crate::db::DbError;

/// Any failure that aborts a connectivity check
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Failed to write result: {0}")]
    Output(#[from] std::io::Error),
}

pub type CheckResult<T> = Result<T, CheckError>;
