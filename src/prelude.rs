//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the haisen crate so hosts
//! can get at the core functionality with a single import.
//!
//! # Example
//!
//! ```rust,no_run
//! use haisen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let registry = Arc::new(NodeRegistry::builtin()?);
//! let mut canvas = Canvas::new(registry);
//! let node = canvas.create_node("askAI", Position::default())?;
//! canvas.edit_field(&node, "prompt", Value::text("Summarize the context"));
//! # Ok(())
//! # }
//! ```

// Canvas state and mutation surface
pub use crate::canvas::{Canvas, Edge, NodeInstance, Position, Snapshot};

// Registry and node type configuration
pub use crate::registry::{
    Category, FieldKind, FieldSpec, NodeRegistry, NodeTypeConfig, OutputProjection, derive_key,
};

// Values and propagation outcomes
pub use crate::engine::{CanvasEvent, EditOutcome, SkipReason};
pub use crate::value::Value;

// Documents
pub use crate::document::{CanvasDefinition, EdgeDefinition, IntoCanvas, NodeDefinition, UiCanvas};

// Error types
pub use crate::error::{DocumentError, GraphError, RegistryError, SnapshotError};

// Standard library re-exports commonly used with this crate
pub use std::sync::Arc;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
