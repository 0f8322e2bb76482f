//! Behavior tests for the data propagation engine: edit handling, routing,
//! normalization, and the change short-circuit.
mod common;
use haisen::prelude::*;

#[test]
fn test_edit_recomputes_output() {
    let mut canvas = common::builtin_canvas();
    let basics = canvas.create_node("flowBasics", Position::default()).unwrap();

    assert!(canvas.node(&basics).unwrap().output.is_none());

    let outcome = canvas.edit_field(&basics, "defaultvalue", Value::text("hello"));
    assert_eq!(outcome, EditOutcome::Applied { output_changed: true });

    let output = canvas.node(&basics).unwrap().output.clone().unwrap();
    assert_eq!(
        output,
        Value::record([
            ("value".to_string(), Value::text("hello")),
            ("name".to_string(), Value::text("")),
        ])
    );
}

#[test]
fn test_idempotent_recompute_fires_nothing() {
    let (mut canvas, ids) = common::relay_chain(2);
    canvas.edit_field(&ids[0], "text", Value::text("stable"));

    let upstream_events = common::record_events(&mut canvas, &ids[0]);
    let downstream_events = common::record_events(&mut canvas, &ids[1]);

    // Re-editing with the current value leaves output and downstream alone.
    let outcome = canvas.edit_field(&ids[0], "text", Value::text("stable"));
    assert_eq!(
        outcome,
        EditOutcome::Applied {
            output_changed: false
        }
    );
    assert!(upstream_events.borrow().is_empty());
    assert!(downstream_events.borrow().is_empty());
    assert_eq!(
        canvas.node(&ids[1]).unwrap().field_text("text"),
        Some("stable")
    );
}

#[test]
fn test_propagation_reaches_transitive_downstream_in_one_call() {
    let (mut canvas, ids) = common::relay_chain(3);

    canvas.edit_field(&ids[0], "text", Value::text("ripple"));

    for id in &ids {
        let node = canvas.node(id).unwrap();
        assert_eq!(node.field_text("text"), Some("ripple"));
        assert_eq!(node.output, Some(Value::text("ripple")));
    }
}

#[test]
fn test_record_with_value_entry_arrives_unencoded() {
    let mut canvas = common::builtin_canvas();
    let basics = canvas.create_node("flowBasics", Position::default()).unwrap();
    let ask = canvas.create_node("askAI", Position::default()).unwrap();

    canvas.edit_field(&basics, "defaultvalue", Value::text("x"));
    canvas.edit_field(&basics, "inputname", Value::text("y"));

    // Untargeted edge routes to askAI's primary field (prompt).
    canvas.connect(&basics, None, &ask, None).unwrap();

    let ask_node = canvas.node(&ask).unwrap();
    assert_eq!(ask_node.field_text("prompt"), Some("x"));
}

#[test]
fn test_record_without_value_entry_arrives_as_json() {
    let mut canvas = common::builtin_canvas();
    let ask_upstream = canvas.create_node("askAI", Position::default()).unwrap();
    let ask_downstream = canvas.create_node("askAI", Position::default()).unwrap();

    canvas.edit_field(&ask_upstream, "prompt", Value::text("a"));
    canvas.edit_field(&ask_upstream, "context", Value::text("b"));
    canvas.connect(&ask_upstream, None, &ask_downstream, None).unwrap();

    // askAI's record has no "value" entry, so the payload flows as JSON
    // without loss, keys in deterministic order.
    assert_eq!(
        canvas.node(&ask_downstream).unwrap().field_text("prompt"),
        Some(r#"{"context":"b","prompt":"a"}"#)
    );
}

#[test]
fn test_multi_port_routing_never_cross_assigns() {
    let mut canvas = common::builtin_canvas();
    let for_prompt = canvas.create_node("flowBasics", Position::default()).unwrap();
    let for_context = canvas.create_node("flowBasics", Position::default()).unwrap();
    let ask = canvas.create_node("askAI", Position::default()).unwrap();

    canvas.edit_field(&for_prompt, "defaultvalue", Value::text("the prompt"));
    canvas.edit_field(&for_context, "defaultvalue", Value::text("the context"));

    canvas.connect(&for_prompt, None, &ask, Some("prompt")).unwrap();
    canvas.connect(&for_context, None, &ask, Some("context")).unwrap();

    let ask_node = canvas.node(&ask).unwrap();
    assert_eq!(ask_node.field_text("prompt"), Some("the prompt"));
    assert_eq!(ask_node.field_text("context"), Some("the context"));

    // Later upstream edits keep routing strictly by handle.
    canvas.edit_field(&for_context, "defaultvalue", Value::text("revised context"));
    let ask_node = canvas.node(&ask).unwrap();
    assert_eq!(ask_node.field_text("prompt"), Some("the prompt"));
    assert_eq!(ask_node.field_text("context"), Some("revised context"));
}

#[test]
fn test_flow_basics_feeds_ask_ai_context() {
    // The end-to-end editor scenario: configure a flow input, wire it into
    // Ask AI's context port, and read back the composed output.
    let mut canvas = common::builtin_canvas();
    let basics = canvas.create_node("flowBasics", Position::new(100.0, 100.0)).unwrap();
    canvas.edit_field(&basics, "defaultvalue", Value::text("tim@hubspot.com"));

    let ask = canvas.create_node("askAI", Position::new(100.0, 420.0)).unwrap();
    canvas.connect(&basics, None, &ask, Some("context")).unwrap();

    let ask_node = canvas.node(&ask).unwrap();
    assert_eq!(ask_node.field_text("context"), Some("tim@hubspot.com"));
    assert_eq!(
        ask_node.output,
        Some(Value::record([
            ("prompt".to_string(), Value::text("")),
            ("context".to_string(), Value::text("tim@hubspot.com")),
        ]))
    );
}

#[test]
fn test_edit_outside_output_projection_does_not_notify_downstream() {
    let mut canvas = common::builtin_canvas();
    let basics = canvas.create_node("flowBasics", Position::default()).unwrap();
    let ask = canvas.create_node("askAI", Position::default()).unwrap();
    canvas.connect(&basics, None, &ask, Some("context")).unwrap();
    canvas.edit_field(&basics, "defaultvalue", Value::text("kept"));

    let downstream_events = common::record_events(&mut canvas, &ask);

    // "description" is not part of flowBasics' output record.
    let outcome = canvas.edit_field(&basics, "description", Value::text("a note"));
    assert_eq!(
        outcome,
        EditOutcome::Applied {
            output_changed: false
        }
    );
    assert!(downstream_events.borrow().is_empty());
    assert_eq!(
        canvas.node(&ask).unwrap().field_text("context"),
        Some("kept")
    );
}

#[test]
fn test_unconnected_source_output_contributes_nothing() {
    let mut canvas = common::builtin_canvas();
    let basics = canvas.create_node("flowBasics", Position::default()).unwrap();
    let ask = canvas.create_node("askAI", Position::default()).unwrap();
    canvas.edit_field(&ask, "context", Value::text("typed by hand"));

    // The source has no output yet, so connecting must not clear the
    // target's manual value.
    canvas.connect(&basics, None, &ask, Some("context")).unwrap();
    assert_eq!(
        canvas.node(&ask).unwrap().field_text("context"),
        Some("typed by hand")
    );

    // Once the source produces data, it overwrites.
    canvas.edit_field(&basics, "defaultvalue", Value::text("fed upstream"));
    assert_eq!(
        canvas.node(&ask).unwrap().field_text("context"),
        Some("fed upstream")
    );
}

#[test]
fn test_untargeted_tie_break_is_edge_insertion_order() {
    let mut canvas = common::builtin_canvas();
    let first = canvas.create_node("flowBasics", Position::default()).unwrap();
    let second = canvas.create_node("flowBasics", Position::default()).unwrap();
    let ask = canvas.create_node("askAI", Position::default()).unwrap();

    canvas.edit_field(&first, "defaultvalue", Value::text("first wins"));
    canvas.edit_field(&second, "defaultvalue", Value::text("second loses"));

    canvas.connect(&first, None, &ask, None).unwrap();
    canvas.connect(&second, None, &ask, None).unwrap();

    assert_eq!(
        canvas.node(&ask).unwrap().field_text("prompt"),
        Some("first wins")
    );

    // When the first edge stops resolving, the next one takes over.
    canvas.remove_node(&first);
    canvas.edit_field(&second, "defaultvalue", Value::text("now first"));
    assert_eq!(
        canvas.node(&ask).unwrap().field_text("prompt"),
        Some("now first")
    );
}

#[test]
fn test_text_output_never_lands_in_a_switch_field() {
    let mut canvas = common::builtin_canvas();
    let basics = canvas.create_node("flowBasics", Position::default()).unwrap();
    let gmail = canvas.create_node("gmail", Position::default()).unwrap();

    canvas.edit_field(&basics, "defaultvalue", Value::text("true"));
    canvas.connect(&basics, None, &gmail, Some("connectedtogmail")).unwrap();

    // The switch keeps its default; text never coerces into a boolean.
    assert_eq!(
        canvas.node(&gmail).unwrap().field("connectedtogmail"),
        Some(&Value::Bool(false))
    );
}

#[test]
fn test_malformed_edits_are_absorbed_as_skips() {
    let mut canvas = common::builtin_canvas();
    let basics = canvas.create_node("flowBasics", Position::default()).unwrap();
    canvas.edit_field(&basics, "defaultvalue", Value::text("baseline"));
    let before = canvas.node(&basics).unwrap().clone();

    assert_eq!(
        canvas.edit_field("ghost", "defaultvalue", Value::text("x")),
        EditOutcome::Skipped(SkipReason::UnknownNode)
    );
    assert_eq!(
        canvas.edit_field(&basics, "nosuchfield", Value::text("x")),
        EditOutcome::Skipped(SkipReason::UnknownField)
    );
    assert_eq!(
        canvas.edit_field(&basics, "defaultvalue", Value::Bool(true)),
        EditOutcome::Skipped(SkipReason::ValueKindMismatch)
    );
    assert_eq!(
        canvas.edit_field(&basics, "showasuserinput", Value::text("yes")),
        EditOutcome::Skipped(SkipReason::ValueKindMismatch)
    );

    // State unchanged across all of the above.
    let after = canvas.node(&basics).unwrap();
    assert_eq!(after.field_values, before.field_values);
    assert_eq!(after.output, before.output);
}

#[test]
fn test_subscribers_see_field_and_output_changes() {
    let (mut canvas, ids) = common::relay_chain(2);
    let downstream_events = common::record_events(&mut canvas, &ids[1]);

    canvas.edit_field(&ids[0], "text", Value::text("observed"));

    let events = downstream_events.borrow();
    assert!(events.contains(&CanvasEvent::FieldChanged {
        node_id: ids[1].clone(),
        field_key: "text".to_string(),
    }));
    assert!(events.contains(&CanvasEvent::OutputChanged {
        node_id: ids[1].clone(),
    }));
}
