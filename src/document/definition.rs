use crate::canvas::Position;
use crate::value::Value;

/// The complete, canonical description of a canvas, ready to load.
/// This is the target structure for any custom document conversion.
#[derive(Debug, Clone, Default)]
pub struct CanvasDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

/// Defines a single placed node.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    pub id: String,
    pub type_key: String,
    pub position: Position,
    /// Stored field values, keyed by field key. Fields absent here start at
    /// their type defaults; keys unknown to the type are dropped on load.
    pub field_values: Vec<(String, Value)>,
}

/// Defines a connection between two placed nodes.
#[derive(Debug, Clone)]
pub struct EdgeDefinition {
    /// Preserved when present so the presentation layer can address the
    /// edge later; generated otherwise.
    pub id: Option<String>,
    pub source: String,
    pub source_handle: Option<String>,
    pub target: String,
    pub target_handle: Option<String>,
}
