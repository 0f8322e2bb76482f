use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A value flowing through the canvas.
///
/// Field values only ever hold `Text` or `Bool`. Node outputs may
/// additionally be `Record`s: composed projections such as Flow Basics'
/// `{value, name}` shape. `Record` is backed by a `BTreeMap` so its textual
/// encoding is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Bool(bool),
    Record(BTreeMap<String, Value>),
}

impl Value {
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// Builds a `Record` from `(name, value)` pairs.
    pub fn record<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Value::Record(entries.into_iter().collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Normalizes this value for assignment into a text field.
    ///
    /// Strings pass through verbatim. A record exposing a conventional
    /// `"value"` entry contributes that entry's content unencoded, so a
    /// named-output node hands a clean scalar to downstream text fields.
    /// Everything else is encoded as JSON.
    pub fn to_field_text(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Bool(flag) => flag.to_string(),
            Value::Record(entries) => match entries.get("value") {
                Some(inner) => inner.to_field_text(),
                None => self.encode_json(),
            },
        }
    }

    fn encode_json(&self) -> String {
        serde_json::Value::from(self).to_string()
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Text(text) => serde_json::Value::String(text.clone()),
            Value::Bool(flag) => serde_json::Value::Bool(*flag),
            Value::Record(entries) => serde_json::Value::Object(
                entries.iter().map(|(k, v)| (k.clone(), v.into())).collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Bool(flag) => write!(f, "{}", flag),
            Value::Record(_) => write!(f, "{}", self.encode_json()),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}
