//! Serde types for the canvas document the editor front-end serializes:
//! a flat node list with per-node data payloads, and an edge list with
//! optional camelCase handle ids.

use super::conversion::IntoCanvas;
use super::definition::{CanvasDefinition, EdgeDefinition, NodeDefinition};
use crate::canvas::Position;
use crate::error::DocumentError;
use crate::value::Value;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Per-node data payload: the stored field values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiNodeData {
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
}

/// A placed node as the editor serializes it.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub position: UiPosition,
    #[serde(default)]
    pub data: UiNodeData,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// A connection as the editor serializes it.
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// The complete editor document.
#[derive(Debug, Deserialize)]
pub struct UiCanvas {
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

impl UiCanvas {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParse(e.to_string()))
    }
}

impl IntoCanvas for UiCanvas {
    fn into_canvas(self) -> Result<CanvasDefinition, DocumentError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| NodeDefinition {
                id: node.id,
                type_key: node.node_type,
                position: Position::new(node.position.x, node.position.y),
                // Field values are strings and booleans; anything else in
                // the payload is presentation data and is dropped.
                field_values: node
                    .data
                    .values
                    .into_iter()
                    .filter_map(|(key, value)| match value {
                        serde_json::Value::String(text) => Some((key, Value::Text(text))),
                        serde_json::Value::Bool(flag) => Some((key, Value::Bool(flag))),
                        _ => None,
                    })
                    .collect(),
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|edge| EdgeDefinition {
                id: edge.id,
                source: edge.source,
                source_handle: edge.source_handle,
                target: edge.target,
                target_handle: edge.target_handle,
            })
            .collect();

        Ok(CanvasDefinition { nodes, edges })
    }
}
