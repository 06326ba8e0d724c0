// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emission history backing retro replay
//!
//! Each event id keeps a bounded FIFO of argument snapshots. Once the limit
//! is reached the oldest snapshot is evicted, so the window always holds the
//! most recent emissions.

use super::id::EventId;
use super::subscription::RetroStrategy;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Arguments carried by one emission
pub type Args = Vec<Value>;

/// Shared, immutable snapshot of one emission's arguments
pub(crate) type Snapshot = Arc<[Value]>;

#[derive(Debug)]
pub(crate) struct EmissionHistory {
    entries: HashMap<EventId, VecDeque<Snapshot>>,
    limit: usize,
}

impl EmissionHistory {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            limit,
        }
    }

    /// Append a snapshot, returning how many old snapshots were evicted
    pub(crate) fn record(&mut self, id: &EventId, args: Snapshot) -> usize {
        let entry = self.entries.entry(id.clone()).or_default();
        entry.push_back(args);

        let mut evicted = 0;
        while entry.len() > self.limit {
            entry.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Snapshots a retro listener should receive, oldest first
    pub(crate) fn replay(&self, id: &EventId, strategy: RetroStrategy) -> Vec<Snapshot> {
        let Some(entry) = self.entries.get(id) else {
            return Vec::new();
        };
        match strategy {
            RetroStrategy::All => entry.iter().cloned().collect(),
            RetroStrategy::LastOne => entry.back().cloned().into_iter().collect(),
        }
    }

    pub(crate) fn snapshots(&self, id: &EventId) -> Vec<Args> {
        self.entries
            .get(id)
            .map(|entry| entry.iter().map(|args| args.to_vec()).collect())
            .unwrap_or_default()
    }

    pub(crate) fn last(&self, id: &EventId) -> Option<Args> {
        self.entries.get(id)?.back().map(|args| args.to_vec())
    }

    pub(crate) fn len(&self, id: &EventId) -> usize {
        self.entries.get(id).map_or(0, VecDeque::len)
    }

    /// Drop one id's snapshots, or every id's when `id` is `None`
    pub(crate) fn clear(&mut self, id: Option<&EventId>) {
        match id {
            Some(id) => {
                self.entries.remove(id);
            }
            None => self.entries.clear(),
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
