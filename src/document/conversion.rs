use super::definition::CanvasDefinition;
use crate::error::DocumentError;

/// A trait for custom document models that can be converted into a
/// [`CanvasDefinition`].
///
/// This is the extension point that keeps the core format-agnostic: parse
/// your own persisted canvas format into your own structs, then implement
/// `IntoCanvas` to hand the core a canonical definition.
///
/// # Example
///
/// ```rust,no_run
/// use haisen::document::{CanvasDefinition, IntoCanvas, NodeDefinition};
/// use haisen::error::DocumentError;
/// use haisen::canvas::Position;
///
/// struct MyNode { id: String, kind: String }
/// struct MyDocument { nodes: Vec<MyNode> }
///
/// impl IntoCanvas for MyDocument {
///     fn into_canvas(self) -> Result<CanvasDefinition, DocumentError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|node| NodeDefinition {
///                 id: node.id,
///                 type_key: node.kind,
///                 position: Position::default(),
///                 field_values: Vec::new(),
///             })
///             .collect();
///         Ok(CanvasDefinition { nodes, edges: vec![] })
///     }
/// }
/// ```
pub trait IntoCanvas {
    /// Consumes the document and converts it into a canonical canvas
    /// definition.
    fn into_canvas(self) -> Result<CanvasDefinition, DocumentError>;
}
