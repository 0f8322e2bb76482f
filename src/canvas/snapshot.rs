use super::{Canvas, Edge, NodeInstance};
use crate::error::SnapshotError;
use crate::registry::NodeRegistry;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::sync::Arc;

/// A compact, binary-persistable copy of a canvas: instances, edges, and the
/// id counters. The registry is not part of a snapshot; restoring pairs the
/// saved state with whatever registry the host constructs.
#[derive(Serialize, Deserialize, Debug)]
pub struct Snapshot {
    pub nodes: Vec<NodeInstance>,
    pub edges: Vec<Edge>,
    pub next_node_seq: u64,
    pub next_edge_seq: u64,
}

impl Snapshot {
    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            SnapshotError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard())
            .map_err(|e| SnapshotError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path).map_err(|e| {
            SnapshotError::Generic(format!("Could not open file '{}': {}", path, e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot)
            .map_err(|e| SnapshotError::Generic(format!("Deserialization failed: {}", e)))
    }
}

impl Canvas {
    /// Captures the current canvas state. Nodes are ordered by id so equal
    /// states produce byte-identical snapshots.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self
                .nodes
                .values()
                .cloned()
                .sorted_by(|a, b| a.id.cmp(&b.id))
                .collect(),
            edges: self.edges.clone(),
            next_node_seq: self.next_node_seq,
            next_edge_seq: self.next_edge_seq,
        }
    }

    /// Rebuilds a canvas from a snapshot. State was saved consistent, so
    /// nothing is recomputed or propagated.
    pub fn restore(registry: Arc<NodeRegistry>, snapshot: Snapshot) -> Self {
        let mut canvas = Canvas::new(registry);
        canvas.next_node_seq = snapshot.next_node_seq;
        canvas.next_edge_seq = snapshot.next_edge_seq;
        for instance in snapshot.nodes {
            canvas.insert_instance(instance);
        }
        canvas.edges = snapshot.edges;
        canvas
    }
}
