// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed single-topic handles over a `Registry`

use super::bus::{Registry, Unsubscribe};
use super::callback::Callback;
use super::id::EventId;
use super::subscription::ListenerOptions;
use crate::error::{BusError, ListenerError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// A callback receiving one decoded payload of type `T`
pub struct TypedCallback<T> {
    callback: Callback,
    _payload: PhantomData<fn(T)>,
}

impl<T: DeserializeOwned + 'static> TypedCallback<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self {
            callback: Callback::typed(f),
            _payload: PhantomData,
        }
    }

    pub fn infallible<F>(f: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::new(move |payload| {
            f(payload);
            Ok(())
        })
    }
}

impl<T> TypedCallback<T> {
    /// The untyped callback registered on the underlying registry
    pub fn as_callback(&self) -> &Callback {
        &self.callback
    }
}

impl<T> Clone for TypedCallback<T> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            _payload: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for TypedCallback<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TypedCallback").field(&self.callback).finish()
    }
}

/// Event bus bound to one event id, carrying payloads of type `T`
///
/// Buses created from the same name share listeners and history with each
/// other and with untyped calls using that name.
pub struct EventBus<T> {
    registry: Registry,
    id: EventId,
    _payload: PhantomData<fn(T)>,
}

impl<T> EventBus<T> {
    pub(crate) fn new(registry: Registry, id: EventId) -> Self {
        Self {
            registry,
            id,
            _payload: PhantomData,
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn add_listener(
        &self,
        callback: &TypedCallback<T>,
        options: ListenerOptions,
    ) -> Unsubscribe {
        self.registry.add_listener(&self.id, callback.as_callback(), options)
    }

    pub fn remove_listener(&self, callback: &TypedCallback<T>) {
        self.registry.remove_listener(&self.id, callback.as_callback());
    }

    pub fn clear_listeners(&self) {
        self.registry.clear_listeners(Some(self.id.clone()));
    }

    pub fn clear_emitted_events(&self) {
        self.registry.clear_emitted_events(Some(self.id.clone()));
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listener_count(&self.id)
    }
}

impl<T: Serialize> EventBus<T> {
    /// Emit `payload` as the single argument of an emission
    pub fn emit(&self, payload: &T) -> Result<(), BusError> {
        let value = serde_json::to_value(payload)?;
        self.registry.emit(&self.id, [value]);
        Ok(())
    }
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self::new(self.registry.clone(), self.id.clone())
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").field("id", &self.id).finish()
    }
}

#[cfg(test)]
#[path = "scoped_tests.rs"]
mod tests;
