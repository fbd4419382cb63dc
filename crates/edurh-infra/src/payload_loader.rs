//! Loaders for JSON payloads saved from the backend
//!
//! Payloads are decoded leniently: elements that are not JSON objects are
//! dropped, individual malformed fields fall back to defaults. Only input
//! that is not JSON at all is rejected.

use std::path::Path;

use serde_json::Value;

use edurh_domain::model::{DistributionRow, ReportKind, ReportRows, Teacher};
use edurh_types::{Error, Result};

/// Parse a teacher list (`GET /professores`) or a single teacher
/// (`GET /professores/{id}`)
pub fn parse_teachers(json: &str) -> Result<Vec<Teacher>> {
    let value: Value = serde_json::from_str(json)?;
    let teachers = into_elements(value)
        .into_iter()
        .filter(Value::is_object)
        .map(serde_json::from_value)
        .collect::<serde_json::Result<Vec<Teacher>>>()?;
    Ok(teachers)
}

pub fn load_teachers(path: &Path) -> Result<Vec<Teacher>> {
    let content = read_payload(path)?;
    let teachers = parse_teachers(&content)?;
    log::info!("Loaded {} teachers from {}", teachers.len(), path.display());
    Ok(teachers)
}

/// Parse raw assignment units, keeping malformed entries as they are
pub fn parse_units(json: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(into_elements(value))
}

pub fn load_units(path: &Path) -> Result<Vec<Value>> {
    let content = read_payload(path)?;
    parse_units(&content)
}

/// Parse rows of a report endpoint
pub fn parse_report(json: &str, kind: ReportKind) -> Result<ReportRows> {
    let value: Value = serde_json::from_str(json)?;
    let rows = ReportRows::from_values(kind, into_elements(value))?;
    Ok(rows)
}

pub fn load_report(path: &Path, kind: ReportKind) -> Result<ReportRows> {
    let content = read_payload(path)?;
    let rows = parse_report(&content, kind)?;
    log::info!(
        "Loaded {} rows of report '{}' from {}",
        rows.len(),
        kind,
        path.display()
    );
    Ok(rows)
}

/// Load the distribution report (`/professores/relatorio/distribuicao-ch-turno`)
pub fn load_distribution(path: &Path) -> Result<Vec<DistributionRow>> {
    match load_report(path, ReportKind::Distribuicao)? {
        ReportRows::Distribuicao(rows) => Ok(rows),
        other => Err(Error::InvalidArgument(format!(
            "expected distribution rows, got '{}'",
            other.kind()
        ))),
    }
}

/// Load any JSON document (login responses, single records)
pub fn load_json(path: &Path) -> Result<Value> {
    let content = read_payload(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read_payload(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn into_elements(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}
