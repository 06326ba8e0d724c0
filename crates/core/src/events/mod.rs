// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system: listener registry, emission history and retro replay
//!
//! This module provides:
//! - `Registry` - Owns the listener table and the emission history
//! - `EventId` - Named topics (compared by value) or unique tokens (by identity)
//! - `ListenerOptions` - `retro`, `retro_strategy`, `once`, `unique`
//! - `EventBus` - Typed handle bound to a single event id
//! - `global` - Free functions over a process-wide default registry

mod bus;
mod callback;
pub mod global;
mod history;
mod id;
mod scoped;
mod subscription;

pub use bus::{Registry, Unsubscribe};
pub use callback::Callback;
pub use history::Args;
pub use id::{EventId, Token};
pub use scoped::{EventBus, TypedCallback};
pub use subscription::{ListenerOptions, RetroStrategy};
