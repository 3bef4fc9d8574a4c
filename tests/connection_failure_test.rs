// Failure paths that need no running server: nothing listens on port 1 of
// the loopback interface, and a malformed port never reaches the network.

use std::time::{Duration, Instant};

use mysql_connectivity_check::commands::check;
use mysql_connectivity_check::db::{self, DbError};
use mysql_connectivity_check::{CheckError, ConfigError, ConnectionConfig, OutputFormat};

fn config_for(host: &str, port: &str) -> ConnectionConfig {
    ConnectionConfig {
        host: host.to_string(),
        port: port.to_string(),
        database_name: "app".to_string(),
        username: "app".to_string(),
        password: "app".to_string(),
    }
}

#[tokio::test]
async fn refused_connection_fails_fast_with_driver_error() {
    let options = config_for("127.0.0.1", "1").connect_options().unwrap();

    let started = Instant::now();
    let err = db::connect(&options).await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(
        elapsed < Duration::from_secs(5),
        "connect took {:?}, expected an immediate failure",
        elapsed
    );
    assert!(
        matches!(err, DbError::ConnectionError(sqlx::Error::Io(_))),
        "unexpected error: {}",
        err
    );
    assert!(!err.to_string().contains("pool timed out"));
}

#[tokio::test]
async fn unreachable_server_prints_no_dump() {
    let config = config_for("127.0.0.1", "1");
    let mut out = Vec::new();

    let err = check::check(&config, &mut out, OutputFormat::Debug)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CheckError::Database(DbError::ConnectionError(_))
    ));
    assert!(out.is_empty());
}

#[tokio::test]
async fn malformed_port_fails_as_configuration_error() {
    let config = config_for("127.0.0.1", "33o6");
    let mut out = Vec::new();

    let err = check::check(&config, &mut out, OutputFormat::Debug)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CheckError::Config(ConfigError::InvalidPort { .. })
    ));
    assert!(err.to_string().starts_with("Configuration error: invalid MYSQL_PORT value"));
    assert!(out.is_empty());
}
