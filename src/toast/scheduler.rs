// SPDX-License-Identifier: MPL-2.0
//! One-shot timers driving toast lifecycles.

use super::kind::ToastId;
use std::time::Duration;

/// Timers the manager schedules for each toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Start the entry animation.
    Enter(ToastId),
    /// Lifetime elapsed.
    AutoDismiss(ToastId),
    /// Exit transition has had time to finish.
    ExitComplete(ToastId),
}

impl Timer {
    #[must_use]
    pub fn toast(self) -> ToastId {
        match self {
            Timer::Enter(id) | Timer::AutoDismiss(id) | Timer::ExitComplete(id) => id,
        }
    }
}

/// Schedules one-shot timers.
///
/// When a timer fires, the host passes it back to the manager as
/// [`Message::Timer`](super::Message::Timer).
pub trait Scheduler {
    type Handle;

    fn after(&mut self, delay: Duration, timer: Timer) -> Self::Handle;

    /// Cancels a pending timer. Cancelling a fired timer is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle returned by [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Pending {
    handle: TimerHandle,
    due: Duration,
    timer: Timer,
}

/// Scheduler running on a virtual clock.
///
/// Nothing fires on its own: the owner moves time forward with
/// [`Manager::advance`](super::Manager::advance) or [`ManualScheduler::pop_due`].
/// Used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether `timer` is scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn is_pending(&self, timer: Timer) -> bool {
        self.pending.iter().any(|p| p.timer == timer)
    }

    /// Removes and returns the earliest timer due at or before `deadline`,
    /// moving the clock to its due time.
    ///
    /// Timers due at the same instant fire in scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Timer> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.handle))
            .map(|(index, _)| index)?;
        let pending = self.pending.remove(index);
        self.now = self.now.max(pending.due);
        Some(pending.timer)
    }

    /// Moves the clock forward to `time` without firing anything.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerHandle;

    fn after(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            due: self.now.saturating_add(delay),
            timer,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|p| p.handle != handle);
    }
}
