// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener options and registered listener records

use super::callback::Callback;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Which past emissions a retro listener is replayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum RetroStrategy {
    /// Only the most recent emission
    #[default]
    LastOne,
    /// Every retained emission, oldest first
    All,
}

impl RetroStrategy {
    /// Parse a strategy name. Unknown names fall back to `LastOne`.
    pub fn parse(name: &str) -> Self {
        match name {
            "all" => RetroStrategy::All,
            _ => RetroStrategy::LastOne,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RetroStrategy::LastOne => "last-one",
            RetroStrategy::All => "all",
        }
    }
}

impl From<&str> for RetroStrategy {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for RetroStrategy {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl std::fmt::Display for RetroStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavior of a registered listener
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerOptions {
    /// Replay past emissions on registration
    pub retro: bool,
    /// Ignored unless `retro` is set
    pub retro_strategy: RetroStrategy,
    /// Remove the listener after its first invocation, live or replayed
    pub once: bool,
    /// Skip registration when the same callback is already registered
    pub unique: bool,
}

impl ListenerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay the last emission on registration
    pub fn retro(mut self) -> Self {
        self.retro = true;
        self
    }

    /// Replay every retained emission on registration
    pub fn retro_all(self) -> Self {
        self.retro().with_retro_strategy(RetroStrategy::All)
    }

    pub fn with_retro_strategy(mut self, strategy: impl Into<RetroStrategy>) -> Self {
        self.retro_strategy = strategy.into();
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A listener as stored in the registry
#[derive(Debug)]
pub(crate) struct ListenerRecord {
    /// Registration order, unique per registry
    pub(crate) seq: u64,
    pub(crate) callback: Callback,
    pub(crate) options: ListenerOptions,
    spent: AtomicBool,
}

impl ListenerRecord {
    pub(crate) fn new(seq: u64, callback: Callback, options: ListenerOptions) -> Self {
        Self {
            seq,
            callback,
            options,
            spent: AtomicBool::new(false),
        }
    }

    /// Claim the right to invoke this listener.
    ///
    /// Always true for ordinary listeners; true exactly once for `once`
    /// listeners, even across nested emissions.
    pub(crate) fn claim(&self) -> bool {
        !self.options.once || !self.spent.swap(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
