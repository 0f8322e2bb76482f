//! The node type registry: the static, declarative description of every
//! node kind the editor can place.
//!
//! The registry is populated once at startup and read-only afterwards. It is
//! an explicit object handed to each [`Canvas`](crate::canvas::Canvas) by
//! reference; there is no ambient global lookup. An unknown type key is
//! "absent", not an error: callers render and propagate nothing for such a
//! node.

mod catalog;

use crate::error::RegistryError;
use crate::value::Value;
use ahash::AHashMap;
use itertools::Itertools;

/// The palette group a node type belongs to.
///
/// `Core` covers the flow-input node that sits outside the four styled
/// palette categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ai,
    WebScraping,
    Text,
    Integration,
    Core,
}

impl Category {
    /// The identifier the editor uses for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::WebScraping => "web-scraping",
            Category::Text => "text",
            Category::Integration => "integration",
            Category::Core => "core",
        }
    }
}

/// The widget kind backing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SingleLineText,
    MultiLineText,
    Boolean,
}

impl FieldKind {
    /// Text-capable fields are eligible as a node's primary input/output.
    pub fn is_text(self) -> bool {
        matches!(self, FieldKind::SingleLineText | FieldKind::MultiLineText)
    }
}

/// Derives a field key from a display label: lower-cased, whitespace
/// stripped. Stable across calls.
///
/// This is the editor's historical identity scheme. New definitions should
/// assign explicit keys via the [`FieldSpec`] constructors; the derivation is
/// kept for configs that only carry labels.
pub fn derive_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A single configurable field of a node type.
///
/// `key` is the stable identifier under which the field's value is stored on
/// every instance and against which edge target handles are matched.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub kind: FieldKind,
    /// Advanced fields are hidden until the user expands the node's extra
    /// options. Visibility only: propagation treats them like any other
    /// field.
    pub advanced: bool,
}

impl FieldSpec {
    fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            placeholder: None,
            kind,
            advanced: false,
        }
    }

    /// A single-line text field with an explicit key.
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::SingleLineText)
    }

    /// A multi-line text field with an explicit key.
    pub fn textarea(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::MultiLineText)
    }

    /// A boolean toggle with an explicit key.
    pub fn switch(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Boolean)
    }

    /// A field whose key is derived from its label (legacy identity scheme).
    pub fn labeled(kind: FieldKind, label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(derive_key(&label), label, kind)
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    /// The default value an instance starts with: empty text, or `false`.
    pub fn default_value(&self) -> Value {
        match self.kind {
            FieldKind::Boolean => Value::Bool(false),
            _ => Value::Text(String::new()),
        }
    }

    /// Whether a value has the shape this field stores.
    pub fn accepts(&self, value: &Value) -> bool {
        match self.kind {
            FieldKind::Boolean => matches!(value, Value::Bool(_)),
            FieldKind::SingleLineText | FieldKind::MultiLineText => {
                matches!(value, Value::Text(_))
            }
        }
    }
}

/// How a node's output is computed from its current field values.
///
/// Selected per node type, never inferred generically.
#[derive(Debug, Clone)]
pub enum OutputProjection {
    /// The output mirrors the first text-capable field.
    PrimaryText,
    /// The output is a record built from fixed `(entry name, field key)`
    /// pairs; fields that do not resolve are left out of the record.
    Record(Vec<(String, String)>),
}

/// The immutable, declarative configuration of one node type.
#[derive(Debug, Clone)]
pub struct NodeTypeConfig {
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Declaration order is significant: the first text-capable field is the
    /// node's primary input and the source of its primary output.
    pub fields: Vec<FieldSpec>,
    pub output: OutputProjection,
}

impl NodeTypeConfig {
    pub fn new(
        category: Category,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
            output: OutputProjection::PrimaryText,
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Switches the output to a fixed record projection.
    pub fn output_record(mut self, entries: &[(&str, &str)]) -> Self {
        self.output = OutputProjection::Record(
            entries
                .iter()
                .map(|(name, key)| (name.to_string(), key.to_string()))
                .collect(),
        );
        self
    }

    /// The first text-capable field in declaration order, if any.
    pub fn primary_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.kind.is_text())
    }

    pub fn field_by_key(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Seed values for a fresh instance of this type.
    pub fn default_values(&self) -> AHashMap<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.key.clone(), f.default_value()))
            .collect()
    }

    fn validate(&self, type_key: &str) -> Result<(), RegistryError> {
        let mut seen: AHashMap<&str, &FieldSpec> = AHashMap::new();
        for field in &self.fields {
            if let Some(first) = seen.insert(field.key.as_str(), field) {
                return Err(RegistryError::DuplicateFieldKey {
                    type_key: type_key.to_string(),
                    field_key: field.key.clone(),
                    first_label: first.label.clone(),
                    second_label: field.label.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The mapping from type keys to node type configurations.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    types: AHashMap<String, NodeTypeConfig>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of node types the editor ships with.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        catalog::populate(&mut registry)?;
        Ok(registry)
    }

    /// Registers a node type, failing fast when two of its fields resolve to
    /// the same key. Re-registering a key replaces the previous config.
    pub fn register(
        &mut self,
        type_key: impl Into<String>,
        config: NodeTypeConfig,
    ) -> Result<(), RegistryError> {
        let type_key = type_key.into();
        config.validate(&type_key)?;
        self.types.insert(type_key, config);
        Ok(())
    }

    pub fn lookup(&self, type_key: &str) -> Option<&NodeTypeConfig> {
        self.types.get(type_key)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All registered type keys, sorted for stable listings.
    pub fn type_keys(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).sorted().collect()
    }
}
