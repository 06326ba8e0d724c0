// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus configuration
//!
//! Limits and behavior switches for a `Registry`. Every field has a default,
//! so a partial TOML document is enough to override a single value.

use crate::error::BusError;
use serde::{Deserialize, Serialize};

/// Snapshots retained per event id unless configured otherwise
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Configuration for a `Registry`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Maximum emission snapshots kept per event id (oldest evicted first)
    pub history_limit: usize,
    /// Convert listener panics into reported failures instead of unwinding
    /// through `emit`
    pub catch_panics: bool,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            catch_panics: true,
        }
    }
}

impl BusConfig {
    /// Create config suitable for testing (lower values).
    pub fn for_testing() -> Self {
        Self {
            history_limit: 8,
            catch_panics: true,
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, BusError> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
