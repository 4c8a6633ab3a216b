//! Generic attribute records as produced and consumed by the configuration engine.
//!
//! A record is a JSON object keyed by snake_case attribute names. Nested blocks are
//! lists of such objects, usually holding a single element. The helpers below implement
//! the reading conventions shared by every expand function: optional strings count as
//! set only when non-empty, and required flags must be real booleans.

use crate::error::{FlexError, FlexResult};
use serde_json::{Map, Value};

/// An order-insensitive key-value attribute record.
pub type AttributeMap = Map<String, Value>;

/// Read an optional string attribute.
///
/// Returns `Some` only when the entry exists, is a string and is non-empty. Missing
/// entries, empty strings and non-string values all read as "not set".
pub fn optional_string(map: &AttributeMap, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Read a required boolean attribute.
pub fn required_bool(map: &AttributeMap, key: &str) -> FlexResult<bool> {
    match map.get(key) {
        Some(Value::Bool(b)) => Ok(*b),
        None | Some(Value::Null) => Err(FlexError::missing_required(key)),
        Some(other) => Err(FlexError::invalid_type(key, "bool", type_name(other))),
    }
}

/// Read a nested block list.
///
/// Missing and null entries read as `None`; any other non-array value is a shape error.
pub fn block_list<'a>(map: &'a AttributeMap, key: &str) -> FlexResult<Option<&'a [Value]>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.as_slice())),
        Some(other) => Err(FlexError::invalid_type(key, "list", type_name(other))),
    }
}

/// Read the first element of a nested block list.
///
/// Blocks declared with at most one element are represented as single-element lists.
/// An empty or missing list yields `None`; a first element that is not an object is
/// a shape error.
pub fn single_block<'a>(map: &'a AttributeMap, key: &str) -> FlexResult<Option<&'a AttributeMap>> {
    let Some(items) = block_list(map, key)? else {
        return Ok(None);
    };

    match items.first() {
        None => Ok(None),
        Some(Value::Object(block)) => Ok(Some(block)),
        Some(other) => Err(FlexError::invalid_type(
            format!("{}.0", key),
            "object",
            type_name(other),
        )),
    }
}

/// Insert `value` under `key` when present.
pub(crate) fn insert_optional(map: &mut AttributeMap, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::String(v.to_string()));
    }
}

/// Name of a JSON value's type, for diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
