//! The data propagation engine.
//!
//! Keeps every node's output consistent with its current field values, and
//! every node's input-derived field values consistent with the outputs of
//! whatever upstream nodes currently feed it. Propagation is synchronous and
//! transitive: all downstream nodes reachable from an edited node reach a
//! consistent state before control returns to the caller.
//!
//! There is no fatal error path in here. Every malformed reference (a
//! dangling edge, an unknown field key, a node removed mid-mutation)
//! degrades to a no-op, reported through [`EditOutcome::Skipped`] so callers
//! and tests can still observe which path was taken.

use crate::canvas::{Edge, NodeInstance};
use crate::registry::{FieldKind, NodeRegistry, NodeTypeConfig, OutputProjection};
use crate::value::Value;
use ahash::{AHashMap, AHashSet};
use log::{debug, trace};
use std::collections::BTreeMap;

/// Outcome of a single field assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The value was written. `output_changed` reports whether the node's
    /// output moved and downstream consumers were refreshed.
    Applied { output_changed: bool },
    /// The edit referenced something that does not exist, or a value of the
    /// wrong shape, and was absorbed as a no-op.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnknownNode,
    UnregisteredType,
    UnknownField,
    ValueKindMismatch,
}

/// A change notification, collected during one synchronous operation and
/// delivered by the canvas once the graph is consistent again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasEvent {
    FieldChanged { node_id: String, field_key: String },
    OutputChanged { node_id: String },
}

impl CanvasEvent {
    pub fn node_id(&self) -> &str {
        match self {
            CanvasEvent::FieldChanged { node_id, .. } => node_id,
            CanvasEvent::OutputChanged { node_id } => node_id,
        }
    }
}

/// One propagation pass over the canvas state.
///
/// Borrows the registry, the instance store, and the edge list; writes back
/// only field values and outputs.
pub(crate) struct Propagator<'a> {
    registry: &'a NodeRegistry,
    nodes: &'a mut AHashMap<String, NodeInstance>,
    edges: &'a [Edge],
    events: &'a mut Vec<CanvasEvent>,
}

impl<'a> Propagator<'a> {
    pub(crate) fn new(
        registry: &'a NodeRegistry,
        nodes: &'a mut AHashMap<String, NodeInstance>,
        edges: &'a [Edge],
        events: &'a mut Vec<CanvasEvent>,
    ) -> Self {
        Self {
            registry,
            nodes,
            edges,
            events,
        }
    }

    /// Assigns a field value and pushes the consequences downstream.
    ///
    /// The short-circuit in the middle is load-bearing: when the recomputed
    /// output equals the previous one, downstream refreshes are not fired.
    pub(crate) fn edit_field(
        &mut self,
        node_id: &str,
        field_key: &str,
        value: Value,
    ) -> EditOutcome {
        let Some(node) = self.nodes.get_mut(node_id) else {
            debug!("edit on missing node '{node_id}' skipped");
            return EditOutcome::Skipped(SkipReason::UnknownNode);
        };
        let Some(config) = self.registry.lookup(&node.type_key) else {
            debug!(
                "edit on node '{node_id}' with unregistered type '{}' skipped",
                node.type_key
            );
            return EditOutcome::Skipped(SkipReason::UnregisteredType);
        };
        let Some(field) = config.field_by_key(field_key) else {
            debug!("edit on unknown field '{field_key}' of node '{node_id}' skipped");
            return EditOutcome::Skipped(SkipReason::UnknownField);
        };
        if !field.accepts(&value) {
            debug!("edit on field '{field_key}' of node '{node_id}' has wrong value kind, skipped");
            return EditOutcome::Skipped(SkipReason::ValueKindMismatch);
        }

        if node.field_values.get(field_key) != Some(&value) {
            node.field_values.insert(field_key.to_string(), value);
            self.events.push(CanvasEvent::FieldChanged {
                node_id: node_id.to_string(),
                field_key: field_key.to_string(),
            });
        }

        let new_output = project_output(config, node);
        if node.output.as_ref() == Some(&new_output) {
            return EditOutcome::Applied {
                output_changed: false,
            };
        }
        node.output = Some(new_output);
        self.events.push(CanvasEvent::OutputChanged {
            node_id: node_id.to_string(),
        });
        trace!("output of '{node_id}' changed, refreshing downstream");

        for target in self.downstream_of(node_id) {
            self.refresh_inputs(&target);
        }
        EditOutcome::Applied {
            output_changed: true,
        }
    }

    /// Re-resolves a node's incoming edges against current upstream outputs.
    ///
    /// Incoming data only overwrites when present: an absent source, a
    /// source without an output yet, or an unroutable handle contributes
    /// nothing, and the target field keeps its existing value.
    pub(crate) fn refresh_inputs(&mut self, target_id: &str) {
        let Some(target) = self.nodes.get(target_id) else {
            return;
        };
        let Some(config) = self.registry.lookup(&target.type_key) else {
            return;
        };
        let primary_key = config.primary_field().map(|f| f.key.clone());

        // Resolve assignments first. Edge insertion order decides ties: the
        // first resolvable edge claims a field, later ones fill other fields.
        let mut claimed: AHashSet<String> = AHashSet::new();
        let mut assignments: Vec<(String, Value)> = Vec::new();
        for edge in self.edges.iter().filter(|e| e.target == target_id) {
            let field_key = match &edge.target_handle {
                Some(handle) if config.field_by_key(handle).is_some() => handle.clone(),
                Some(_) => continue,
                None => match &primary_key {
                    Some(key) => key.clone(),
                    None => continue,
                },
            };
            if claimed.contains(&field_key) {
                continue;
            }
            let Some(output) = self.nodes.get(&edge.source).and_then(|n| n.output.as_ref()) else {
                continue;
            };
            let Some(field) = config.field_by_key(&field_key) else {
                continue;
            };
            let value = match field.kind {
                FieldKind::Boolean => match output {
                    Value::Bool(flag) => Value::Bool(*flag),
                    _ => continue,
                },
                _ => Value::Text(output.to_field_text()),
            };
            claimed.insert(field_key.clone());
            assignments.push((field_key, value));
        }

        // Assignment goes through the same path as a user edit so the
        // change short-circuit applies uniformly.
        for (field_key, value) in assignments {
            self.edit_field(target_id, &field_key, value);
        }
    }

    /// Recomputes a node's output from its current field values and, when it
    /// moved, refreshes downstream consumers. Used to prime freshly loaded
    /// canvases.
    pub(crate) fn recompute(&mut self, node_id: &str) {
        let Some(node) = self.nodes.get_mut(node_id) else {
            return;
        };
        let Some(config) = self.registry.lookup(&node.type_key) else {
            return;
        };
        let new_output = project_output(config, node);
        if node.output.as_ref() == Some(&new_output) {
            return;
        }
        node.output = Some(new_output);
        self.events.push(CanvasEvent::OutputChanged {
            node_id: node_id.to_string(),
        });
        for target in self.downstream_of(node_id) {
            self.refresh_inputs(&target);
        }
    }

    fn downstream_of(&self, node_id: &str) -> Vec<String> {
        self.edges
            .iter()
            .filter(|e| e.source == node_id)
            .map(|e| e.target.clone())
            .collect()
    }
}

/// Computes a node's output from its field values via the type's designated
/// projection.
fn project_output(config: &NodeTypeConfig, node: &NodeInstance) -> Value {
    match &config.output {
        OutputProjection::PrimaryText => {
            let text = config
                .primary_field()
                .and_then(|f| node.field_text(&f.key))
                .unwrap_or_default();
            Value::Text(text.to_string())
        }
        OutputProjection::Record(entries) => {
            let mut record = BTreeMap::new();
            for (name, field_key) in entries {
                if let Some(value) = node.field_values.get(field_key) {
                    record.insert(name.clone(), value.clone());
                }
            }
            Value::Record(record)
        }
    }
}

