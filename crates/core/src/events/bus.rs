// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener registry: registration, retro replay and synchronous emission

use super::callback::Callback;
use super::history::{Args, EmissionHistory, Snapshot};
use super::id::EventId;
use super::scoped::EventBus;
use super::subscription::{ListenerOptions, ListenerRecord};
use crate::config::BusConfig;
use crate::diagnostics::{DiagnosticSink, FailurePhase, ListenerFailure, TracingSink};
use crate::error::ListenerError;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard};

/// Both tables live behind one lock so an emission's history write and its
/// listener snapshot are taken atomically.
struct Tables {
    listeners: HashMap<EventId, Vec<Arc<ListenerRecord>>>,
    history: EmissionHistory,
    next_seq: u64,
}

impl Tables {
    fn is_registered(&self, id: &EventId, callback: &Callback) -> bool {
        self.listeners
            .get(id)
            .is_some_and(|list| list.iter().any(|r| r.callback.same(callback)))
    }
}

/// The registry maps event ids to listeners and remembers past emissions
///
/// Cloning is cheap and shares state. The lock is released before any
/// callback runs, so callbacks may add, remove or emit re-entrantly.
#[derive(Clone)]
pub struct Registry {
    tables: Arc<Mutex<Tables>>,
    sink: Arc<dyn DiagnosticSink>,
    config: BusConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    pub fn with_config(config: BusConfig) -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables {
                listeners: HashMap::new(),
                history: EmissionHistory::new(config.history_limit),
                next_seq: 0,
            })),
            sink: Arc::new(TracingSink),
            config,
        }
    }

    /// Route listener failures to `sink` instead of the tracing log
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register `callback` for `name`
    ///
    /// With `retro`, past emissions are replayed synchronously before this
    /// returns. A `once` listener satisfied by replay is never stored.
    pub fn add_listener(
        &self,
        name: impl Into<EventId>,
        callback: &Callback,
        options: ListenerOptions,
    ) -> Unsubscribe {
        let name = name.into();
        let unsubscribe = Unsubscribe {
            registry: self.clone(),
            event: name.clone(),
            callback: callback.clone(),
        };

        let replay = {
            let tables = self.lock();
            if options.unique && tables.is_registered(&name, callback) {
                tracing::trace!(event = %name, "unique listener already registered");
                return unsubscribe;
            }
            if options.retro {
                tables.history.replay(&name, options.retro_strategy)
            } else {
                Vec::new()
            }
        };

        if !replay.is_empty() {
            tracing::debug!(
                event = %name,
                count = replay.len(),
                strategy = %options.retro_strategy,
                "replaying emitted events"
            );
            for args in &replay {
                self.invoke(&name, callback, args, FailurePhase::Replay);
            }
            if options.once {
                return unsubscribe;
            }
        }

        let mut tables = self.lock();
        // Replay ran unlocked; a callback may have registered itself meanwhile
        if options.unique && tables.is_registered(&name, callback) {
            return unsubscribe;
        }
        let seq = tables.next_seq;
        tables.next_seq += 1;
        let record = Arc::new(ListenerRecord::new(seq, callback.clone(), options));
        tables.listeners.entry(name.clone()).or_default().push(record);
        tracing::debug!(event = %name, seq, once = options.once, "listener added");

        unsubscribe
    }

    /// Remove every registration of `callback` for `name`
    pub fn remove_listener(&self, name: impl Into<EventId>, callback: &Callback) {
        let name = name.into();
        let mut tables = self.lock();
        if let Some(list) = tables.listeners.get_mut(&name) {
            let before = list.len();
            list.retain(|r| !r.callback.same(callback));
            tracing::trace!(event = %name, removed = before - list.len(), "listener removed");
        }
    }

    /// Drop the listeners of one event, or of every event when `name` is `None`
    pub fn clear_listeners(&self, name: Option<EventId>) {
        let mut tables = self.lock();
        match name {
            Some(name) => {
                tables.listeners.remove(&name);
                tracing::debug!(event = %name, "listeners cleared");
            }
            None => {
                tables.listeners.clear();
                tracing::debug!("all listeners cleared");
            }
        }
    }

    /// Record an emission and deliver it to the current listeners
    ///
    /// Delivery uses the listener list as it was when the emission started:
    /// listeners added by a callback miss this emission, listeners removed by
    /// a callback still receive it.
    pub fn emit<I>(&self, name: impl Into<EventId>, args: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let name = name.into();
        let args: Snapshot = args.into_iter().collect();

        let snapshot = {
            let mut tables = self.lock();
            let evicted = tables.history.record(&name, Arc::clone(&args));
            if evicted > 0 {
                tracing::trace!(event = %name, evicted, "history window full");
            }
            match tables.listeners.get(&name) {
                Some(list) => list.clone(),
                None => return,
            }
        };

        tracing::trace!(event = %name, listeners = snapshot.len(), "emitting");

        let mut pruner = OncePruner {
            registry: self,
            event: &name,
            fired: Vec::new(),
        };
        for record in &snapshot {
            if !record.claim() {
                continue;
            }
            if record.options.once {
                pruner.fired.push(record.seq);
            }
            self.invoke(&name, &record.callback, &args, FailurePhase::Emit);
        }
    }

    /// Forget past emissions of one event, or of every event when `name` is `None`
    pub fn clear_emitted_events(&self, name: Option<EventId>) {
        let mut tables = self.lock();
        tables.history.clear(name.as_ref());
        match name {
            Some(name) => tracing::debug!(event = %name, "emitted events cleared"),
            None => tracing::debug!("all emitted events cleared"),
        }
    }

    /// Typed handle bound to `name`, or to a fresh token when `None`
    pub fn create_event_bus<T>(&self, name: Option<EventId>) -> EventBus<T> {
        EventBus::new(self.clone(), name.unwrap_or_else(EventId::token))
    }

    /// Number of live listeners for `name`
    pub fn listener_count(&self, name: impl Into<EventId>) -> usize {
        self.lock().listeners.get(&name.into()).map_or(0, Vec::len)
    }

    pub fn has_listeners(&self, name: impl Into<EventId>) -> bool {
        self.listener_count(name) > 0
    }

    /// Event ids that currently have at least one listener
    pub fn event_ids(&self) -> Vec<EventId> {
        self.lock()
            .listeners
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Retained emissions for `name`, oldest first
    pub fn emitted(&self, name: impl Into<EventId>) -> Vec<Args> {
        self.lock().history.snapshots(&name.into())
    }

    pub fn emitted_count(&self, name: impl Into<EventId>) -> usize {
        self.lock().history.len(&name.into())
    }

    /// Arguments of the most recent retained emission for `name`
    pub fn last_emitted(&self, name: impl Into<EventId>) -> Option<Args> {
        self.lock().history.last(&name.into())
    }

    /// Run one callback inside the error boundary
    fn invoke(&self, name: &EventId, callback: &Callback, args: &[Value], phase: FailurePhase) {
        let result = if self.config.catch_panics {
            panic::catch_unwind(AssertUnwindSafe(|| callback.call(args)))
                .unwrap_or_else(|payload| Err(ListenerError::Panicked(panic_message(&*payload))))
        } else {
            callback.call(args)
        };

        if let Err(error) = result {
            self.sink.report(&ListenerFailure {
                event: name,
                phase,
                error: &error,
            });
        }
    }
}

/// Removes the `once` records fired by an emission, also when a listener
/// panic unwinds through `emit`.
struct OncePruner<'a> {
    registry: &'a Registry,
    event: &'a EventId,
    fired: Vec<u64>,
}

impl Drop for OncePruner<'_> {
    fn drop(&mut self) {
        if self.fired.is_empty() {
            return;
        }
        let mut tables = self.registry.lock();
        if let Some(list) = tables.listeners.get_mut(self.event) {
            list.retain(|r| !self.fired.contains(&r.seq));
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Handle returned by `add_listener`
///
/// Equivalent to calling `remove_listener` with the same event and callback;
/// safe to call any number of times. Dropping it does not unsubscribe.
#[derive(Clone, Debug)]
pub struct Unsubscribe {
    registry: Registry,
    event: EventId,
    callback: Callback,
}

impl Unsubscribe {
    pub fn unsubscribe(&self) {
        self.registry.remove_listener(&self.event, &self.callback);
    }

    pub fn event(&self) -> &EventId {
        &self.event
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
