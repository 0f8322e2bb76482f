//! Common test utilities for building registries and canvas topologies.
use haisen::prelude::*;

/// The stock registry, shared by tests that exercise the built-in catalog.
#[allow(dead_code)]
pub fn builtin_registry() -> Arc<NodeRegistry> {
    Arc::new(NodeRegistry::builtin().expect("built-in catalog is valid"))
}

#[allow(dead_code)]
pub fn builtin_canvas() -> Canvas {
    Canvas::new(builtin_registry())
}

/// A minimal registry with a single-field pass-through node type, for chain
/// topologies where the built-in catalog would only add noise.
#[allow(dead_code)]
pub fn relay_registry() -> Arc<NodeRegistry> {
    let mut registry = NodeRegistry::new();
    registry
        .register(
            "relay",
            NodeTypeConfig::new(Category::Text, "Relay", "Pass a text value along.")
                .field(FieldSpec::text("text", "Text")),
        )
        .expect("relay type registers");
    Arc::new(registry)
}

/// Builds a canvas holding `len` relay nodes wired head-to-tail through
/// their default ports. Returns the canvas and the node ids in chain order.
#[allow(dead_code)]
pub fn relay_chain(len: usize) -> (Canvas, Vec<String>) {
    let mut canvas = Canvas::new(relay_registry());
    let ids: Vec<String> = (0..len)
        .map(|i| {
            canvas
                .create_node("relay", Position::new(0.0, 120.0 * i as f64))
                .expect("relay node creates")
        })
        .collect();
    for pair in ids.windows(2) {
        canvas
            .connect(&pair[0], None, &pair[1], None)
            .expect("chain edge connects");
    }
    (canvas, ids)
}

/// Captures events for one node through `subscribe`, backed by shared
/// interior mutability so tests can read them back.
#[allow(dead_code)]
pub fn record_events(canvas: &mut Canvas, node_id: &str) -> std::rc::Rc<std::cell::RefCell<Vec<CanvasEvent>>> {
    let events = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = events.clone();
    canvas.subscribe(node_id, move |event: &CanvasEvent| {
        sink.borrow_mut().push(event.clone());
    });
    events
}
