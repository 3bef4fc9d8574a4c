use sea_orm::ConnectionTrait;
use std::io::Write;
use tracing::info;

use crate::config::{ConnectionConfig, EnvPolicy};
use crate::db;
use crate::error::CheckResult;
use crate::output::{self, OutputFormat, ResultRow};

/// Execute the connectivity check against the server named by the environment
pub async fn execute(policy: EnvPolicy, format: OutputFormat) -> CheckResult<()> {
    let config = ConnectionConfig::from_env(policy)?;
    info!("Configuration loaded: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    check(&config, &mut out, format).await?;
    Ok(())
}

/// Connect with `config`, query the server version and dump the rows to `out`
pub async fn check<W>(
    config: &ConnectionConfig,
    out: &mut W,
    format: OutputFormat,
) -> CheckResult<Vec<ResultRow>>
where
    W: Write,
{
    let options = config.connect_options()?;

    info!("Connecting to database: {}", config.dsn());
    let connection = db::connect(&options).await?;

    run(&connection, out, format).await
}

/// Query `conn` for its version and dump the rows to `out`.
///
/// Nothing is written unless the query succeeds.
pub async fn run<C, W>(conn: &C, out: &mut W, format: OutputFormat) -> CheckResult<Vec<ResultRow>>
where
    C: ConnectionTrait,
    W: Write,
{
    let rows = db::fetch_version(conn).await?;
    output::write_rows(out, &rows, format)?;
    Ok(rows)
}
