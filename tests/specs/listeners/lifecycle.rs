//! Listener lifecycle specs
//!
//! Registration, once, unique, removal and per-event clearing.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn once_listener_fires_at_most_once() {
    let name = unique_name("once");
    let recorder = Recorder::new();

    global::add_listener(&name, &recorder.callback, ListenerOptions::new().once());
    global::emit(&name, [json!(1)]);
    global::emit(&name, [json!(2)]);

    assert_eq!(recorder.calls(), vec![vec![json!(1)]]);
}

#[test]
fn unique_listener_registered_twice_fires_once() {
    let name = unique_name("unique");
    let recorder = Recorder::new();

    global::add_listener(&name, &recorder.callback, ListenerOptions::new().unique());
    global::add_listener(&name, &recorder.callback, ListenerOptions::new().unique());
    global::emit(&name, Vec::new());

    assert_eq!(recorder.count(), 1);
    assert_eq!(global::registry().listener_count(&name), 1);
}

#[test]
fn remove_before_add_is_silent() {
    let name = unique_name("remove-first");
    let recorder = Recorder::new();

    global::remove_listener(&name, &recorder.callback);
    global::add_listener(&name, &recorder.callback, ListenerOptions::default());
    global::emit(&name, [json!("hi")]);

    assert_eq!(recorder.calls(), vec![vec![json!("hi")]]);
}

#[test]
fn unsubscribe_matches_remove_listener() {
    let via_handle = unique_name("unsub-handle");
    let via_remove = unique_name("unsub-remove");
    let handle_recorder = Recorder::new();
    let remove_recorder = Recorder::new();

    let unsubscribe = global::add_listener(
        &via_handle,
        &handle_recorder.callback,
        ListenerOptions::default(),
    );
    global::add_listener(&via_remove, &remove_recorder.callback, ListenerOptions::default());

    unsubscribe.unsubscribe();
    unsubscribe.unsubscribe();
    global::remove_listener(&via_remove, &remove_recorder.callback);

    global::emit(&via_handle, [json!(1)]);
    global::emit(&via_remove, [json!(1)]);

    assert_eq!(handle_recorder.count(), 0);
    assert_eq!(remove_recorder.count(), 0);
}

#[test]
fn clear_listeners_for_one_event_only() {
    let cleared = unique_name("clear-one");
    let kept = unique_name("clear-kept");
    let cleared_recorder = Recorder::new();
    let kept_recorder = Recorder::new();

    global::add_listener(&cleared, &cleared_recorder.callback, ListenerOptions::default());
    global::add_listener(&kept, &kept_recorder.callback, ListenerOptions::default());
    global::clear_listeners(Some(EventId::from(&cleared)));

    global::emit(&cleared, [json!(1)]);
    global::emit(&kept, [json!(1)]);

    assert_eq!(cleared_recorder.count(), 0);
    assert_eq!(kept_recorder.count(), 1);
}

#[test]
fn cleared_event_starts_fresh() {
    let name = unique_name("fresh");
    let before = Recorder::new();
    let after = Recorder::new();

    global::add_listener(&name, &before.callback, ListenerOptions::default());
    global::clear_listeners(Some(EventId::from(&name)));
    global::add_listener(&name, &after.callback, ListenerOptions::default());
    global::emit(&name, [json!(1)]);

    assert_eq!(before.count(), 0);
    assert_eq!(after.count(), 1);
}
