//! # Haisen - Canvas Core for Node-Based Workflow Editors
//!
//! **Haisen** is the UI-agnostic core of a visual workflow builder: the node
//! type registry, the canvas state (placed nodes and their connections), and
//! the synchronous data-propagation engine that keeps every node's output
//! consistent with its configuration and every downstream input consistent
//! with its upstream outputs.
//!
//! The presentation layer (canvas rendering, drag and drop, form widgets)
//! is an external collaborator. It feeds the core user edits and connection
//! gestures and subscribes to change notifications; the core never produces
//! user-facing text and never renders anything.
//!
//! ## Core Workflow
//!
//! 1.  **Build a registry**: use [`registry::NodeRegistry::builtin`] for the
//!     stock palette, or register your own [`registry::NodeTypeConfig`]s.
//!     Registration fails fast on duplicate field keys.
//! 2.  **Create a canvas**: a [`canvas::Canvas`] owns the placed node
//!     instances and the directed edges between them.
//! 3.  **Mutate**: `create_node`, `edit_field`, `connect`, `disconnect`,
//!     `remove_node`. Every mutation propagates synchronously; when control
//!     returns, all reachable downstream nodes are consistent.
//! 4.  **Observe**: `subscribe` to per-node change events, or read instances
//!     back directly.
//!
//! Canvas documents (the editor's serialized JSON, or any custom format via
//! [`document::IntoCanvas`]) can be loaded into a live canvas, and whole
//! canvases can be persisted compactly as [`canvas::Snapshot`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use haisen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let registry = Arc::new(NodeRegistry::builtin()?);
//!     let mut canvas = Canvas::new(registry);
//!
//!     // Place a flow input and an AI prompt node.
//!     let basics = canvas.create_node("flowBasics", Position::new(100.0, 100.0))?;
//!     let ask = canvas.create_node("askAI", Position::new(100.0, 420.0))?;
//!
//!     // Configure the input and wire it into the AI node's context port.
//!     canvas.edit_field(&basics, "defaultvalue", Value::text("tim@hubspot.com"));
//!     canvas.connect(&basics, None, &ask, Some("context"))?;
//!
//!     // The scalar arrived unencoded, and the AI node's output reflects it.
//!     assert_eq!(
//!         canvas.node(&ask).and_then(|n| n.field_text("context")),
//!         Some("tim@hubspot.com")
//!     );
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod document;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod value;
