// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic channel for listener failures
//!
//! A failing listener never aborts an emission. The failure is handed to a
//! `DiagnosticSink` instead, which by default writes it to `tracing`.

use crate::error::ListenerError;
use crate::events::EventId;

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeDiagnosticSink, RecordedFailure};

/// Where a listener was invoked from when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePhase {
    /// Live delivery from `emit`
    Emit,
    /// Retro replay during `add_listener`
    Replay,
}

impl std::fmt::Display for FailurePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePhase::Emit => write!(f, "emit"),
            FailurePhase::Replay => write!(f, "replay"),
        }
    }
}

/// A caught listener failure
#[derive(Debug)]
pub struct ListenerFailure<'a> {
    pub event: &'a EventId,
    pub phase: FailurePhase,
    pub error: &'a ListenerError,
}

/// Receives listener failures caught by the registry
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, failure: &ListenerFailure<'_>);
}

/// Default sink: logs each failure at error level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, failure: &ListenerFailure<'_>) {
        tracing::error!(
            event = %failure.event,
            phase = %failure.phase,
            error = %failure.error,
            "listener failed"
        );
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
