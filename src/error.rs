use thiserror::Error;

/// Errors raised while populating the node type registry.
///
/// A duplicate field key indicates a broken node definition and must halt
/// startup; the registry never silently overwrites a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(
        "node type '{type_key}' resolves fields '{first_label}' and '{second_label}' to the same key '{field_key}'"
    )]
    DuplicateFieldKey {
        type_key: String,
        field_key: String,
        first_label: String,
        second_label: String,
    },
}

/// Errors reported by canvas mutations.
///
/// Only structural mistakes the caller can act on are errors. Referential
/// inconsistencies that arise from the natural order of editor mutations
/// (dangling edges, unknown field keys, missing nodes mid-propagation) are
/// absorbed as no-ops and reported through `EditOutcome::Skipped` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown node type '{0}'")]
    UnknownType(String),

    #[error("connecting '{from_node}' to '{target}' would create a cycle")]
    WouldCycle { from_node: String, target: String },
}

/// Errors that can occur when converting an external document format into a
/// `CanvasDefinition`.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("failed to parse canvas JSON: {0}")]
    JsonParse(String),

    #[error("invalid canvas document: {0}")]
    Validation(String),
}

/// Errors around snapshot persistence.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("{0}")]
    Generic(String),
}
