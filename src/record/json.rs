//! JSON Lines decoding into [`Record`]s.

use std::io::BufRead;

use serde_json::{Map, Value};

use super::Record;
use crate::{error::DedupError, key::KeyValue};

/// Convert a JSON object into a [`Record`].
///
/// Scalars map onto the matching [`KeyValue`] variant. Nested arrays and objects keep
/// their compact JSON text so they still compare by value; object keys are sorted by
/// `serde_json`, so member order does not matter.
pub fn record_from_json(object: Map<String, Value>) -> Record {
    object
        .into_iter()
        .map(|(column, value)| (column, key_value_from_json(value)))
        .collect()
}

fn key_value_from_json(value: Value) -> KeyValue {
    match value {
        Value::Null => KeyValue::Null,
        Value::Bool(v) => KeyValue::Bool(v),
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                KeyValue::Int(v)
            } else if let Some(v) = n.as_u64() {
                KeyValue::from(v)
            } else {
                n.as_f64().map_or(KeyValue::Null, KeyValue::float)
            }
        }
        Value::String(v) => KeyValue::Utf8(v),
        nested @ (Value::Array(_) | Value::Object(_)) => KeyValue::Utf8(nested.to_string()),
    }
}

/// Read one JSON object per line. Blank lines are skipped.
pub fn read_json_lines<R: BufRead>(reader: R) -> Result<Vec<Record>, DedupError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let number = idx + 1;
        let value: Value = serde_json::from_str(&line).map_err(|source| DedupError::Json {
            line: number,
            source,
        })?;
        match value {
            Value::Object(object) => records.push(record_from_json(object)),
            _ => return Err(DedupError::NotAnObject { line: number }),
        }
    }
    Ok(records)
}
