//! Emission delivery specs
//!
//! Argument passing, ordering and failure isolation.

use crate::prelude::*;
use similar_asserts::assert_eq;
use retrobus_core::ListenerError;

#[test]
fn listeners_receive_args_in_registration_order() {
    let name = unique_name("x");
    let order = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));

    let (o1, o2) = (order.clone(), order.clone());
    let f = Callback::infallible(move |args| o1.lock().unwrap().push(("f", args.to_vec())));
    let g = Callback::infallible(move |args| o2.lock().unwrap().push(("g", args.to_vec())));

    global::add_listener(&name, &f, ListenerOptions::default());
    global::add_listener(&name, &g, ListenerOptions::default());
    global::emit(&name, [json!(1), json!("a"), json!(true)]);

    let args = vec![json!(1), json!("a"), json!(true)];
    assert_eq!(
        *order.lock().unwrap(),
        vec![("f", args.clone()), ("g", args)]
    );
}

#[test]
fn emit_with_no_arguments_delivers_empty_list() {
    let name = unique_name("empty");
    let recorder = Recorder::new();

    global::add_listener(&name, &recorder.callback, ListenerOptions::default());
    global::emit(&name, Vec::new());

    assert_eq!(recorder.calls(), vec![Vec::<Value>::new()]);
}

#[test]
fn failing_listener_is_reported_and_others_still_run() {
    let sink = FakeDiagnosticSink::new();
    let registry = Registry::new().with_sink(sink.clone());
    let recorder = Recorder::new();
    let failing = Callback::new(|_| Err(ListenerError::msg("listener exploded")));

    registry.add_listener("jobs", &failing, ListenerOptions::default());
    registry.add_listener("jobs", &recorder.callback, ListenerOptions::default());
    registry.emit("jobs", [json!(1)]);

    assert_eq!(recorder.count(), 1);
    assert_eq!(sink.failures().len(), 1);
    assert_eq!(registry.emitted_count("jobs"), 1);
}

#[test]
fn token_events_stay_separate_from_names() {
    let token = EventId::token();
    let recorder = Recorder::new();

    global::add_listener(&token, &recorder.callback, ListenerOptions::default());
    global::emit(token.to_string(), [json!(1)]);
    global::emit(&token, [json!(2)]);

    assert_eq!(recorder.calls(), vec![vec![json!(2)]]);
}
