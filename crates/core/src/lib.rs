// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! retrobus-core: in-process event bus with retroactive delivery
//!
//! This crate provides:
//! - `Registry` - listener table plus bounded emission history
//! - Retro replay of past emissions to late listeners (`last-one` or `all`)
//! - `once` / `unique` listener lifecycle
//! - `EventBus<T>` - typed single-topic handles
//! - A process-wide default registry behind free functions (`global`)

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;

pub use config::BusConfig;
pub use diagnostics::{DiagnosticSink, FailurePhase, ListenerFailure, TracingSink};
pub use error::{BusError, ListenerError};
pub use events::{
    global, Args, Callback, EventBus, EventId, ListenerOptions, Registry, RetroStrategy, Token,
    TypedCallback, Unsubscribe,
};

#[cfg(any(test, feature = "test-support"))]
pub use diagnostics::{FakeDiagnosticSink, RecordedFailure};
