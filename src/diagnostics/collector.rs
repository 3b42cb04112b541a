// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! various parts of the application and stores them in a circular buffer.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction,
    WarningEvent,
};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event.
    ///
    /// Non-blocking; the event is dropped if the channel is full.
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    /// Logs a warning event.
    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error event.
    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted
/// when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the number of stored warning and error events.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.buffer.iter().filter(|e| e.kind.is_problem()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn events_are_buffered_after_processing() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log_action(UserAction::ResendVerification);
        handle.log_error(ErrorEvent::new(ErrorType::TemplateNotFound, "toast-notice"));
        assert!(collector.is_empty(), "events stay in the channel until processed");

        collector.process_pending();

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.problem_count(), 1);
    }

    #[test]
    fn cloned_handles_feed_the_same_collector() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let first = collector.handle();
        let second = first.clone();

        first.log_warning(WarningEvent::new(WarningType::RequestRejected, "one"));
        second.log_error(ErrorEvent::new(ErrorType::NetworkError, "two"));
        collector.process_pending();

        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    event: WarningEvent::new(WarningType::RequestRejected, "one"),
                },
                DiagnosticEventKind::Error {
                    event: ErrorEvent::new(ErrorType::NetworkError, "two"),
                },
            ]
        );
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 25) {
            handle.log_action(UserAction::ResendVerification);
        }
        collector.process_pending();

        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }
}
