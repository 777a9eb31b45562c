// Validates a form record saved as JSON against one of the built-in schemas.
// Usage: forms <schema> <record.json>
use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use forms::validation::schema::{self, SCHEMA_NAMES};
use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (schema_name, record_path) = match args.as_slice() {
        [schema, record] => (schema, record),
        _ => bail!("usage: forms <schema> <record.json>"),
    };

    let schema = schema::by_name(schema_name).with_context(|| {
        format!("unknown schema '{}', expected one of: {}", schema_name, SCHEMA_NAMES.join(", "))
    })?;

    let raw = fs::read_to_string(record_path).with_context(|| format!("failed to read {}", record_path))?;
    let record: Map<String, Value> =
        serde_json::from_str(&raw).with_context(|| format!("{} is not a JSON object", record_path))?;

    let report = schema.validate(&record);
    if report.is_valid() {
        info!(entity = schema.entity, path = %record_path, "Record is valid");
        println!("{}: ok", schema.entity);
        return Ok(ExitCode::SUCCESS);
    }

    info!(entity = schema.entity, failures = report.errors().len(), "Record is invalid");
    for (field, error) in report.errors() {
        println!("{}: {}", field, error);
    }
    Ok(ExitCode::FAILURE)
}
