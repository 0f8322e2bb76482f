use serde::{Deserialize, Serialize};

/// A directed connection between two node instances.
///
/// Endpoints are ids, not references: an edge can reference a node that was
/// never loaded or has been removed, in which case propagation treats the
/// edge as absent. An absent handle means "the node's single default port".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub source_handle: Option<String>,
    pub target: String,
    pub target_handle: Option<String>,
}
