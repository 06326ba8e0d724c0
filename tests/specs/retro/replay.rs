//! Retro replay specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn retro_without_prior_emit_does_not_call() {
    let name = unique_name("retro-none");
    let recorder = Recorder::new();

    global::add_listener(&name, &recorder.callback, ListenerOptions::new().retro());

    assert_eq!(recorder.count(), 0);
}

#[test]
fn retro_replays_last_emission_immediately() {
    let name = unique_name("retro-last");
    global::emit(&name, [json!("a"), json!("b"), json!("c")]);

    let recorder = Recorder::new();
    global::add_listener(&name, &recorder.callback, ListenerOptions::new().retro());

    assert_eq!(recorder.calls(), vec![vec![json!("a"), json!("b"), json!("c")]]);
}

#[test]
fn retro_all_replays_every_emission_in_order() {
    let name = unique_name("retro-all");
    for n in 0..4 {
        global::emit(&name, [json!(n)]);
    }

    let recorder = Recorder::new();
    global::add_listener(&name, &recorder.callback, ListenerOptions::new().retro_all());

    let expected: Vec<Args> = (0..4).map(|n| vec![json!(n)]).collect();
    assert_eq!(recorder.calls(), expected);
}

#[test]
fn retro_once_is_satisfied_by_replay() {
    let name = unique_name("retro-once");
    global::emit(&name, [json!(1)]);

    let recorder = Recorder::new();
    global::add_listener(&name, &recorder.callback, ListenerOptions::new().retro().once());
    global::emit(&name, [json!(2)]);

    assert_eq!(recorder.calls(), vec![vec![json!(1)]]);
}

#[test]
fn retro_strategy_from_untrusted_text_falls_back() {
    let name = unique_name("retro-fallback");
    global::emit(&name, [json!(1)]);
    global::emit(&name, [json!(2)]);

    let options: ListenerOptions =
        serde_json::from_value(json!({"retro": true, "retro_strategy": "everything"})).unwrap();
    let recorder = Recorder::new();
    global::add_listener(&name, &recorder.callback, options);

    assert_eq!(recorder.calls(), vec![vec![json!(2)]]);
}
