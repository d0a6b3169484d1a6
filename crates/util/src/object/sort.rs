use super::record::Record;
use crate::error::{Result, UtilError};
use serde_json::Value;
use std::cmp::Ordering;

/// A property value that records can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Number(f64),
    Str(&'a str),
}

impl<'a> SortKey<'a> {
    /// Classify a JSON value, `None` for anything but numbers and strings.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(SortKey::Number),
            Value::String(s) => Some(SortKey::Str(s)),
            _ => None,
        }
    }

    /// Compare two keys of the same kind.
    ///
    /// Returns `None` when one is a number and the other a string.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => Some(a.total_cmp(b)),
            (SortKey::Str(a), SortKey::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

fn kind_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn sort_key<'a, R: Record>(record: &'a R, key: &str) -> Option<SortKey<'a>> {
    record.property(key).and_then(SortKey::from_value)
}

/// Sort records in place by the value stored under `key`.
///
/// Numbers are compared numerically and strings lexicographically. The sort
/// is stable and the same slice is handed back for chaining.
///
/// Every value is checked before anything moves: if two neighbouring records
/// hold values that are not both numbers or both strings (including a missing
/// key), [`UtilError::UnsupportedType`] is returned and the slice is left as
/// it was. Slices with fewer than two records are returned unchecked.
///
/// # Examples
///
/// ```
/// use plain_util::object::sort_by_property;
/// use serde_json::json;
///
/// let mut people = vec![json!({"age": 20}), json!({"age": 100}), json!({"age": 30})];
/// sort_by_property(&mut people, "age").unwrap();
/// assert_eq!(people, vec![json!({"age": 20}), json!({"age": 30}), json!({"age": 100})]);
///
/// let mut mixed = vec![json!({"age": 20}), json!({"age": "old"})];
/// assert!(sort_by_property(&mut mixed, "age").is_err());
/// ```
pub fn sort_by_property<'r, R: Record>(records: &'r mut [R], key: &str) -> Result<&'r mut [R]> {
    if records.len() < 2 {
        return Ok(records);
    }

    for pair in records.windows(2) {
        let left = sort_key(&pair[0], key);
        let right = sort_key(&pair[1], key);
        let comparable = matches!((left, right), (Some(a), Some(b)) if a.compare(&b).is_some());
        if !comparable {
            let left = kind_name(pair[0].property(key));
            let right = kind_name(pair[1].property(key));
            tracing::debug!(key, left, right, "refusing to sort records by property");
            return Err(UtilError::UnsupportedType {
                key: key.to_string(),
                left,
                right,
            });
        }
    }

    records.sort_by(|a, b| match (sort_key(a, key), sort_key(b, key)) {
        (Some(a), Some(b)) => a.compare(&b).unwrap_or(Ordering::Equal),
        // Ruled out by the check above.
        _ => Ordering::Equal,
    });
    tracing::trace!(key, count = records.len(), "sorted records by property");
    Ok(records)
}
