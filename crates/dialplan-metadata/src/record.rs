//! Positional reads over raw record arrays.
//!
//! A slot is absent when it is past the end of the record or holds JSON
//! `null`. Values of an unexpected JSON type read as absent as well.

use serde_json::Value;

pub(crate) fn slot(record: &[Value], idx: usize) -> Option<&Value> {
    record.get(idx).filter(|v| !v.is_null())
}

pub(crate) fn str_at(record: &[Value], idx: usize) -> Option<&str> {
    slot(record, idx).and_then(Value::as_str)
}

pub(crate) fn bool_at(record: &[Value], idx: usize) -> Option<bool> {
    slot(record, idx).and_then(Value::as_bool)
}

pub(crate) fn array_at(record: &[Value], idx: usize) -> Option<&[Value]> {
    slot(record, idx).and_then(as_slice)
}

pub(crate) fn as_slice(value: &Value) -> Option<&[Value]> {
    value.as_array().map(Vec::as_slice)
}

/// Read a possible-lengths array. Non-numeric entries are skipped.
pub(crate) fn lengths(value: &Value) -> Option<Vec<u8>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_u64)
            .filter_map(|n| u8::try_from(n).ok())
            .collect(),
    )
}

/// Collect the string entries of an array slot.
pub(crate) fn strings(items: &[Value]) -> Vec<&str> {
    items.iter().filter_map(Value::as_str).collect()
}
