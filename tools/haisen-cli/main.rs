use clap::Parser;
use haisen::prelude::*;
use std::fs;

/// Inspect and exercise workflow canvas documents from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the canvas JSON document
    canvas_path: Option<String>,

    /// Apply a field edit before reporting, as `node.field=value`
    /// (repeatable; switch fields take `true`/`false`)
    #[arg(short, long = "set", value_name = "NODE.FIELD=VALUE")]
    set: Vec<String>,

    /// Write a binary snapshot of the resolved canvas to this path
    #[arg(long, value_name = "PATH")]
    snapshot_out: Option<String>,

    /// List the registered node types and exit
    #[arg(long)]
    list_types: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let registry = NodeRegistry::builtin()
        .unwrap_or_else(|e| exit_with_error(&format!("Broken built-in node catalog: {}", e)));
    let registry = Arc::new(registry);

    if cli.list_types {
        list_types(&registry);
        return;
    }

    let canvas_path = cli
        .canvas_path
        .unwrap_or_else(|| exit_with_error("Canvas path is required unless --list-types is given."));
    let json = fs::read_to_string(&canvas_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read canvas file '{}': {}",
            &canvas_path, e
        ))
    });
    let document = UiCanvas::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse canvas: {}", e)));
    let definition = document
        .into_canvas()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert canvas document: {}", e)));
    let mut canvas = Canvas::load(registry, definition);

    for assignment in &cli.set {
        apply_assignment(&mut canvas, assignment);
    }

    report(&canvas);

    if let Some(path) = cli.snapshot_out {
        canvas
            .snapshot()
            .save(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write snapshot: {}", e)));
        println!("Snapshot written to {}", path);
    }
}

fn list_types(registry: &NodeRegistry) {
    println!("Registered node types:");
    for key in registry.type_keys() {
        if let Some(config) = registry.lookup(key) {
            println!(
                "  {:<20} [{}] {} ({} fields)",
                key,
                config.category.as_str(),
                config.title,
                config.fields.len()
            );
        }
    }
}

/// Parses `node.field=value`, coerces the value to the field's kind, and
/// applies it.
fn apply_assignment(canvas: &mut Canvas, raw: &str) {
    let Some((path, raw_value)) = raw.split_once('=') else {
        exit_with_error(&format!("Invalid --set '{}': expected NODE.FIELD=VALUE", raw));
    };
    let Some((node_id, field_key)) = path.split_once('.') else {
        exit_with_error(&format!("Invalid --set '{}': expected NODE.FIELD=VALUE", raw));
    };

    let is_switch = canvas
        .node(node_id)
        .and_then(|n| canvas.registry().lookup(&n.type_key))
        .and_then(|c| c.field_by_key(field_key))
        .map(|f| f.kind == FieldKind::Boolean)
        .unwrap_or(false);
    let value = if is_switch {
        Value::Bool(raw_value.trim() == "true")
    } else {
        Value::text(raw_value)
    };

    match canvas.edit_field(node_id, field_key, value) {
        EditOutcome::Applied { output_changed } => {
            println!(
                "Set {}.{} ({})",
                node_id,
                field_key,
                if output_changed {
                    "output changed, downstream refreshed"
                } else {
                    "output unchanged"
                }
            );
        }
        EditOutcome::Skipped(reason) => {
            println!("Skipped {}.{}: {:?}", node_id, field_key, reason);
        }
    }
}

fn report(canvas: &Canvas) {
    println!("\nCanvas: {} nodes, {} edges", canvas.node_count(), canvas.edges().len());

    let mut nodes: Vec<_> = canvas.nodes().collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    for node in nodes {
        let Some(config) = canvas.registry().lookup(&node.type_key) else {
            println!("\n{} (inert: unknown type '{}')", node.id, node.type_key);
            continue;
        };
        println!("\n{} [{}]", node.id, config.title);
        for field in &config.fields {
            let value = node
                .field(&field.key)
                .map(|v| v.to_string())
                .unwrap_or_default();
            let marker = if field.advanced { "*" } else { "" };
            println!("  {}{}: {}", field.label, marker, value);
        }
        match &node.output {
            Some(output) => println!("  -> output: {}", output),
            None => println!("  -> output: (not computed)"),
        }
    }
    println!();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
