//! Emission history retention specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn history_keeps_most_recent_thousand() {
    let name = unique_name("flood");
    for n in 0..1010 {
        global::emit(&name, [json!(n)]);
    }

    let recorder = Recorder::new();
    global::add_listener(&name, &recorder.callback, ListenerOptions::new().retro_all());

    let expected: Vec<Args> = (10..1010).map(|n| vec![json!(n)]).collect();
    assert_eq!(recorder.calls(), expected);
}

#[test]
fn clear_emitted_events_disables_replay_for_that_event() {
    let cleared = unique_name("forget");
    let kept = unique_name("remember");
    global::emit(&cleared, [json!(1)]);
    global::emit(&kept, [json!(1)]);

    global::clear_emitted_events(Some(EventId::from(&cleared)));

    let cleared_recorder = Recorder::new();
    let kept_recorder = Recorder::new();
    global::add_listener(&cleared, &cleared_recorder.callback, ListenerOptions::new().retro());
    global::add_listener(&kept, &kept_recorder.callback, ListenerOptions::new().retro());

    assert_eq!(cleared_recorder.count(), 0);
    assert_eq!(kept_recorder.count(), 1);
}

#[test]
fn clearing_history_keeps_listeners() {
    let name = unique_name("history-only");
    let recorder = Recorder::new();
    global::add_listener(&name, &recorder.callback, ListenerOptions::default());

    global::clear_emitted_events(Some(EventId::from(&name)));
    global::emit(&name, [json!(1)]);

    assert_eq!(recorder.count(), 1);
}
