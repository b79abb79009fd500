//! Client documents.
//!
//! Write endpoints accept any JSON object. The whole object is stored in the
//! `doc` column as sent, and the named columns are read from it leniently:
//! form-style strings such as `"5"` fill numeric columns, and a value that
//! does not fit leaves its column NULL while the raw value stays in `doc`.

use serde_json::{Map, Value};

/// A JSON object as sent by the client
pub type Document = Map<String, Value>;

/// Keys that never pass through from a client document
const SYSTEM_KEYS: [&str; 2] = ["_id", "created_at"];

/// String value of `key`; numbers and booleans are rendered as text
pub fn text(doc: &Document, key: &str) -> Option<String> {
    match doc.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integer value of `key`, from a whole number or a numeric string
pub fn integer(doc: &Document, key: &str) -> Option<i32> {
    let value = match doc.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    i32::try_from(value).ok()
}

/// Float value of `key`, from a number or a numeric string
pub fn float(doc: &Document, key: &str) -> Option<f64> {
    match doc.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// `$set`-style patch: each key takes the client's raw value, or null when absent
pub fn patch(doc: &Document, keys: &[&str]) -> Document {
    keys.iter()
        .map(|key| (key.to_string(), doc.get(*key).cloned().unwrap_or(Value::Null)))
        .collect()
}

/// Fields of a stored document not already rendered from a named column.
///
/// `rendered` lists the columns that hold a value; the raw client value of
/// an empty column is passed through instead.
pub fn remainder(stored: Value, rendered: &[&str]) -> Document {
    let Value::Object(mut doc) = stored else {
        return Document::new();
    };
    for key in SYSTEM_KEYS.iter().chain(rendered) {
        doc.remove(*key);
    }
    doc
}
