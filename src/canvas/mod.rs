//! The canvas: the node instance store and the connection graph, plus the
//! mutation surface the presentation layer drives.

mod edge;
mod node;
mod snapshot;

pub use edge::Edge;
pub use node::{NodeInstance, Position};
pub use snapshot::Snapshot;

use crate::engine::{CanvasEvent, EditOutcome, Propagator};
use crate::error::GraphError;
use crate::registry::NodeRegistry;
use crate::value::Value;
use ahash::{AHashMap, AHashSet};
use log::debug;
use std::sync::Arc;

/// A presentation-layer callback, invoked after the canvas reaches a
/// consistent state for the operation that triggered the change.
pub type Subscriber = Box<dyn FnMut(&CanvasEvent)>;

/// The in-memory state of one workflow canvas.
///
/// The canvas exclusively owns its node instances and edges; edges refer to
/// nodes by id only. All operations run synchronously to completion; a
/// multi-threaded host must serialize calls externally.
pub struct Canvas {
    registry: Arc<NodeRegistry>,
    nodes: AHashMap<String, NodeInstance>,
    /// Insertion order is observable: it is the tie-break when several
    /// untargeted edges feed the same default port.
    edges: Vec<Edge>,
    subscribers: AHashMap<String, Vec<Subscriber>>,
    next_node_seq: u64,
    next_edge_seq: u64,
}

impl Canvas {
    pub fn new(registry: Arc<NodeRegistry>) -> Self {
        Self {
            registry,
            nodes: AHashMap::new(),
            edges: Vec::new(),
            subscribers: AHashMap::new(),
            next_node_seq: 0,
            next_edge_seq: 0,
        }
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn node(&self, node_id: &str) -> Option<&NodeInstance> {
        self.nodes.get(node_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeInstance> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Places a new node of the given type, seeded with default field
    /// values. The only creation failure is an unregistered type key.
    pub fn create_node(
        &mut self,
        type_key: &str,
        position: Position,
    ) -> Result<String, GraphError> {
        let config = self
            .registry
            .lookup(type_key)
            .ok_or_else(|| GraphError::UnknownType(type_key.to_string()))?;
        let field_values = config.default_values();
        let id = loop {
            self.next_node_seq += 1;
            let candidate = format!("{}_{}", type_key, self.next_node_seq);
            // Document-loaded nodes keep their foreign ids; skip over them.
            if !self.nodes.contains_key(&candidate) {
                break candidate;
            }
        };
        self.nodes.insert(
            id.clone(),
            NodeInstance {
                id: id.clone(),
                type_key: type_key.to_string(),
                position,
                field_values,
                output: None,
            },
        );
        Ok(id)
    }

    /// Removes a node and every edge referencing it. Downstream field values
    /// that were fed by the node keep their last propagated value.
    pub fn remove_node(&mut self, node_id: &str) {
        if self.nodes.remove(node_id).is_none() {
            return;
        }
        self.edges
            .retain(|e| e.source != node_id && e.target != node_id);
        self.subscribers.remove(node_id);
    }

    /// Moves a node. Position is opaque to propagation, so nothing else
    /// happens.
    pub fn move_node(&mut self, node_id: &str, position: Position) {
        if let Some(node) = self.nodes.get_mut(node_id) {
            node.position = position;
        }
    }

    /// Draws a connection and pulls the source's current output into the
    /// target. Connections that would close a cycle are rejected; endpoints
    /// that do not (yet) resolve are tolerated and simply contribute
    /// nothing.
    pub fn connect(
        &mut self,
        source: &str,
        source_handle: Option<&str>,
        target: &str,
        target_handle: Option<&str>,
    ) -> Result<String, GraphError> {
        let id = self.allocate_edge_id();
        self.add_edge(Edge {
            id: id.clone(),
            source: source.to_string(),
            source_handle: source_handle.map(str::to_string),
            target: target.to_string(),
            target_handle: target_handle.map(str::to_string),
        })?;
        Ok(id)
    }

    pub(crate) fn allocate_edge_id(&mut self) -> String {
        self.next_edge_seq += 1;
        format!("edge_{}", self.next_edge_seq)
    }

    pub(crate) fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if self.would_cycle(&edge.source, &edge.target) {
            return Err(GraphError::WouldCycle {
                from_node: edge.source,
                target: edge.target,
            });
        }
        let target = edge.target.clone();
        self.edges.push(edge);
        self.refresh_target(&target);
        Ok(())
    }

    /// Removes a connection. The former target keeps whatever value was
    /// last propagated into it; only future edits replace it.
    pub fn disconnect(&mut self, edge_id: &str) {
        let Some(index) = self.edges.iter().position(|e| e.id == edge_id) else {
            debug!("disconnect of unknown edge '{edge_id}' ignored");
            return;
        };
        let edge = self.edges.remove(index);
        self.refresh_target(&edge.target);
    }

    /// Sets a field value and propagates the consequences to every
    /// downstream node, synchronously. Malformed references are absorbed and
    /// reported through the outcome.
    pub fn edit_field(&mut self, node_id: &str, field_key: &str, value: Value) -> EditOutcome {
        let mut events = Vec::new();
        let outcome = Propagator::new(&self.registry, &mut self.nodes, &self.edges, &mut events)
            .edit_field(node_id, field_key, value);
        self.dispatch(events);
        outcome
    }

    /// Registers a re-render hook for one node. Callbacks fire on field and
    /// output changes, after the triggering operation has fully settled, and
    /// must not re-enter the canvas.
    pub fn subscribe(
        &mut self,
        node_id: impl Into<String>,
        callback: impl FnMut(&CanvasEvent) + 'static,
    ) {
        self.subscribers
            .entry(node_id.into())
            .or_default()
            .push(Box::new(callback));
    }

    fn refresh_target(&mut self, target_id: &str) {
        let mut events = Vec::new();
        Propagator::new(&self.registry, &mut self.nodes, &self.edges, &mut events)
            .refresh_inputs(target_id);
        self.dispatch(events);
    }

    pub(crate) fn recompute_all(&mut self) {
        let mut events = Vec::new();
        let ids: Vec<String> = self.nodes.keys().cloned().collect();
        let mut propagator =
            Propagator::new(&self.registry, &mut self.nodes, &self.edges, &mut events);
        for id in &ids {
            propagator.recompute(id);
        }
        self.dispatch(events);
    }

    pub(crate) fn insert_instance(&mut self, instance: NodeInstance) {
        self.nodes.insert(instance.id.clone(), instance);
    }

    fn would_cycle(&self, source: &str, target: &str) -> bool {
        if source == target {
            return true;
        }
        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut stack = vec![target];
        while let Some(current) = stack.pop() {
            if current == source {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            stack.extend(
                self.edges
                    .iter()
                    .filter(|e| e.source == current)
                    .map(|e| e.target.as_str()),
            );
        }
        false
    }

    fn dispatch(&mut self, events: Vec<CanvasEvent>) {
        for event in events {
            if let Some(callbacks) = self.subscribers.get_mut(event.node_id()) {
                for callback in callbacks.iter_mut() {
                    callback(&event);
                }
            }
        }
    }
}
