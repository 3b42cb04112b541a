// SPDX-License-Identifier: MPL-2.0
//! Toast timers backed by iced tasks.
//!
//! Each timer becomes an abortable [`Task`] that sleeps on the tokio runtime
//! and then yields the fired timer as an application message. Tasks queue up
//! inside the scheduler until `update` hands them to the runtime.

use crate::toast::{Scheduler, Timer};
use iced::task::Handle;
use iced::Task;
use std::time::Duration;

/// [`Scheduler`] producing iced tasks.
pub struct TaskScheduler<M> {
    to_message: fn(Timer) -> M,
    queued: Vec<Task<M>>,
}

impl<M: Send + 'static> TaskScheduler<M> {
    /// Creates a scheduler delivering fired timers through `to_message`.
    pub fn new(to_message: fn(Timer) -> M) -> Self {
        Self {
            to_message,
            queued: Vec::new(),
        }
    }

    /// Number of timer tasks not yet handed to the runtime.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    /// Drains the queued timer tasks into one batch.
    pub fn take_tasks(&mut self) -> Task<M> {
        if self.queued.is_empty() {
            return Task::none();
        }
        Task::batch(std::mem::take(&mut self.queued))
    }
}

impl<M: Send + 'static> Scheduler for TaskScheduler<M> {
    type Handle = Handle;

    fn after(&mut self, delay: Duration, timer: Timer) -> Handle {
        let to_message = self.to_message;
        let (task, handle) = Task::perform(
            async move {
                tokio::time::sleep(delay).await;
            },
            move |()| to_message(timer),
        )
        .abortable();
        self.queued.push(task);
        handle
    }

    fn cancel(&mut self, handle: Handle) {
        handle.abort();
    }
}

impl<M> std::fmt::Debug for TaskScheduler<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("queued", &self.queued.len())
            .finish()
    }
}
