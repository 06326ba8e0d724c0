// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Free functions over a process-wide default `Registry`
//!
//! The default registry lives for the rest of the process. Clearing is the
//! only reset.

use super::bus::{Registry, Unsubscribe};
use super::callback::Callback;
use super::id::EventId;
use super::scoped::EventBus;
use super::subscription::ListenerOptions;
use serde_json::Value;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, created on first use
pub fn registry() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

pub fn add_listener(
    name: impl Into<EventId>,
    callback: &Callback,
    options: ListenerOptions,
) -> Unsubscribe {
    registry().add_listener(name, callback, options)
}

pub fn remove_listener(name: impl Into<EventId>, callback: &Callback) {
    registry().remove_listener(name, callback);
}

pub fn clear_listeners(name: Option<EventId>) {
    registry().clear_listeners(name);
}

pub fn emit<I>(name: impl Into<EventId>, args: I)
where
    I: IntoIterator<Item = Value>,
{
    registry().emit(name, args);
}

pub fn clear_emitted_events(name: Option<EventId>) {
    registry().clear_emitted_events(name);
}

pub fn create_event_bus<T>(name: Option<EventId>) -> EventBus<T> {
    registry().create_event_bus(name)
}
