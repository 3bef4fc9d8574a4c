use sea_orm::{DatabaseConnection, SqlxMySqlConnector};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, error, info};

use crate::db::error::DbError;

/// Opens a single MySQL connection with `options`.
///
/// One direct driver connect is made first so host, credential and schema
/// problems are reported immediately with the driver's own error, without
/// the pool's retry loop.
pub async fn connect(options: &MySqlConnectOptions) -> Result<DatabaseConnection, DbError> {
    let validation = options.connect().await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        DbError::ConnectionError(e)
    })?;

    if let Err(e) = validation.close().await {
        debug!("Closing validation connection failed: {}", e);
    }

    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(options.clone())
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {}", e);
            DbError::ConnectionError(e)
        })?;

    info!("Database connection established successfully");
    Ok(SqlxMySqlConnector::from_sqlx_mysql_pool(pool))
}
