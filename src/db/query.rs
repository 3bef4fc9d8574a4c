use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, QueryResult, Statement};
use serde_json::Value;
use tracing::{debug, info};

use crate::db::error::DbError;
use crate::output::ResultRow;

/// The only statement this tool ever issues
pub const VERSION_QUERY: &str = "select version()";

/// Runs [`VERSION_QUERY`] and collects every row of the result set
pub async fn fetch_version<C>(conn: &C) -> Result<Vec<ResultRow>, DbError>
where
    C: ConnectionTrait,
{
    debug!("Executing query: {}", VERSION_QUERY);

    let results = conn
        .query_all(Statement::from_string(
            DbBackend::MySql,
            VERSION_QUERY.to_string(),
        ))
        .await?;

    let rows = results
        .iter()
        .map(decode_row)
        .collect::<Result<Vec<_>, _>>()?;

    info!("Query returned {} row(s)", rows.len());
    Ok(rows)
}

/// Decodes one result row into `column => value` pairs
fn decode_row(row: &QueryResult) -> Result<ResultRow, DbErr> {
    match Value::from_query_result(row, "")? {
        Value::Object(columns) => Ok(ResultRow::from_columns(columns)),
        other => Err(DbErr::Type(format!(
            "expected a row of named columns, got {}",
            other
        ))),
    }
}
