// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener callbacks
//!
//! A `Callback` is a shared handle. Clones refer to the same callback, which
//! is what `unique` registration and `remove_listener` compare against.

use crate::error::ListenerError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

type CallbackFn = dyn Fn(&[Value]) -> Result<(), ListenerError> + Send + Sync;

/// A listener callback invoked with an emission's arguments
#[derive(Clone)]
pub struct Callback {
    inner: Arc<CallbackFn>,
}

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Wrap a callback that cannot fail
    pub fn infallible<F>(f: F) -> Self
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        Self::new(move |args| {
            f(args);
            Ok(())
        })
    }

    /// Wrap a callback taking the first argument decoded as `T`
    ///
    /// A missing argument decodes from `null`, so `Option<_>` and `()`
    /// payloads accept argument-less emissions.
    pub fn typed<T, F>(f: F) -> Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self::new(move |args| {
            let payload = args.first().cloned().unwrap_or(Value::Null);
            f(serde_json::from_value(payload)?)
        })
    }

    /// Whether both handles refer to the same callback
    pub fn same(&self, other: &Callback) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn call(&self, args: &[Value]) -> Result<(), ListenerError> {
        (self.inner)(args)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback({:p})", Arc::as_ptr(&self.inner).cast::<()>())
    }
}

#[cfg(test)]
#[path = "callback_tests.rs"]
mod tests;
