// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting notification and verification events.
//!
//! Components log through a cheap [`DiagnosticsHandle`]; the
//! [`DiagnosticsCollector`] drains the channel into a memory-bounded
//! [`CircularBuffer`].
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
