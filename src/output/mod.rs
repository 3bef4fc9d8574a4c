// Rendering of fetched rows to standard output

use serde_json::{Map, Value};
use std::io::{self, Write};

/// One row of a result set, columns kept in server order
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    columns: Map<String, Value>,
}

impl ResultRow {
    /// Builds a row from decoded `column => value` pairs
    pub fn from_columns(columns: Map<String, Value>) -> Self {
        Self { columns }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.columns.iter()
    }
}

/// Supported dump styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Verbose dump with the type and value of every field
    #[default]
    Debug,
    /// Pretty-printed JSON array of row objects
    Json,
}

/// Writes `rows` to `out` in the requested format
pub fn write_rows<W: Write>(out: &mut W, rows: &[ResultRow], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Debug => write_debug(out, rows),
        OutputFormat::Json => write_json(out, rows),
    }
}

fn write_debug<W: Write>(out: &mut W, rows: &[ResultRow]) -> io::Result<()> {
    writeln!(out, "{} row(s)", rows.len())?;
    for (index, row) in rows.iter().enumerate() {
        writeln!(out, "[{}] => row({}) {{", index, row.len())?;
        for (column, value) in row.columns() {
            writeln!(out, "    {:?} => {}", column, describe(value))?;
        }
        writeln!(out, "}}")?;
    }
    out.flush()
}

fn write_json<W: Write>(out: &mut W, rows: &[ResultRow]) -> io::Result<()> {
    let array = Value::Array(
        rows.iter()
            .map(|row| Value::Object(row.columns.clone()))
            .collect(),
    );
    serde_json::to_writer_pretty(&mut *out, &array)?;
    writeln!(out)?;
    out.flush()
}

/// Type-tagged rendering of a single field value
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool({})", b),
        Value::Number(n) if n.is_f64() => format!("float({})", n),
        Value::Number(n) => format!("int({})", n),
        Value::String(s) => format!("string({}) {:?}", s.len(), s),
        Value::Array(_) | Value::Object(_) => format!("json({})", value),
    }
}
