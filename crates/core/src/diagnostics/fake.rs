// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake diagnostic sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DiagnosticSink, FailurePhase, ListenerFailure};
use crate::events::EventId;
use std::sync::{Arc, Mutex};

/// Recorded listener failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFailure {
    pub event: EventId,
    pub phase: FailurePhase,
    pub message: String,
}

/// Diagnostic sink that records every failure it receives
#[derive(Clone, Default)]
pub struct FakeDiagnosticSink {
    failures: Arc<Mutex<Vec<RecordedFailure>>>,
}

impl FakeDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded failures
    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl DiagnosticSink for FakeDiagnosticSink {
    fn report(&self, failure: &ListenerFailure<'_>) {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedFailure {
                event: failure.event.clone(),
                phase: failure.phase,
                message: failure.error.to_string(),
            });
    }
}
