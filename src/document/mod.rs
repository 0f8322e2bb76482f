//! Canvas documents: the canonical definition format, the conversion trait
//! for custom formats, and the editor's own JSON shape.

pub mod conversion;
pub mod definition;
pub mod ui;

pub use conversion::*;
pub use definition::*;
pub use ui::{UiCanvas, UiEdge, UiNode};

use crate::canvas::{Canvas, Edge, NodeInstance};
use crate::registry::NodeRegistry;
use log::debug;
use std::sync::Arc;

impl Canvas {
    /// Builds a canvas from a definition.
    ///
    /// Loading is tolerant the same way live editing is: nodes with an
    /// unregistered type are skipped silently, stored values for unknown
    /// field keys are dropped, and edges that would close a cycle (or
    /// reference nodes that never loaded) are absorbed. Afterwards every
    /// node's output is computed and pulled through the graph so loaded
    /// chains come up already resolved.
    pub fn load(registry: Arc<NodeRegistry>, definition: CanvasDefinition) -> Self {
        let mut canvas = Canvas::new(registry);

        for node in definition.nodes {
            let Some(config) = canvas.registry().lookup(&node.type_key) else {
                debug!("skipping node '{}': unknown type '{}'", node.id, node.type_key);
                continue;
            };
            let mut field_values = config.default_values();
            for (key, value) in node.field_values {
                match config.field_by_key(&key) {
                    Some(field) if field.accepts(&value) => {
                        field_values.insert(key, value);
                    }
                    _ => debug!("dropping stored value for unknown or mismatched field '{key}'"),
                }
            }
            canvas.insert_instance(NodeInstance {
                id: node.id,
                type_key: node.type_key,
                position: node.position,
                field_values,
                output: None,
            });
        }

        for edge in definition.edges {
            let id = match edge.id {
                Some(id) => id,
                None => canvas.allocate_edge_id(),
            };
            if let Err(err) = canvas.add_edge(Edge {
                id,
                source: edge.source,
                source_handle: edge.source_handle,
                target: edge.target,
                target_handle: edge.target_handle,
            }) {
                debug!("dropping edge while loading: {err}");
            }
        }

        canvas.recompute_all();
        canvas
    }

    /// Convenience wrapper: convert a custom document and load it.
    pub fn load_from<D: IntoCanvas>(
        registry: Arc<NodeRegistry>,
        document: D,
    ) -> Result<Self, crate::error::DocumentError> {
        Ok(Self::load(registry, document.into_canvas()?))
    }
}
