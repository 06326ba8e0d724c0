// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the event bus

use thiserror::Error;

/// Failure raised by a listener callback
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("listener failed: {0}")]
    Failed(String),
    #[error("listener panicked: {0}")]
    Panicked(String),
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

impl ListenerError {
    /// Build a `Failed` error from anything printable
    pub fn msg(message: impl std::fmt::Display) -> Self {
        Self::Failed(message.to_string())
    }
}

/// Errors surfaced to callers of the bus
#[derive(Debug, Error)]
pub enum BusError {
    #[error("payload encoding failed: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("invalid bus config: {0}")]
    Config(#[from] toml::de::Error),
}
