use crate::value::Value;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A 2D canvas coordinate. Owned by the presentation layer; the core stores
/// it but never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A placed, user-configured occurrence of a node type on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInstance {
    pub id: String,
    /// Reference into the node type registry. An instance whose type no
    /// longer resolves is inert: it renders nothing and propagates nothing.
    pub type_key: String,
    pub position: Position,
    /// Current value per field key, seeded from the type's defaults.
    pub field_values: AHashMap<String, Value>,
    /// The last computed output exposed to downstream consumers. `None`
    /// until first computed.
    pub output: Option<Value>,
}

impl NodeInstance {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.field_values.get(key)
    }

    /// The field's current text, when it holds text.
    pub fn field_text(&self, key: &str) -> Option<&str> {
        self.field_values.get(key).and_then(Value::as_str)
    }
}
