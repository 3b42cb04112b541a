// SPDX-License-Identifier: MPL-2.0
//! Countdown gating the "resend verification email" control.

/// Seconds left before another resend is allowed.
///
/// Ticked once per second by the host. Progress is always relative to the
/// full cooldown, even when started from a shorter initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCooldown {
    total: u32,
    remaining: u32,
}

impl ResendCooldown {
    /// Starts a full cooldown of `total_secs`.
    #[must_use]
    pub fn new(total_secs: u32) -> Self {
        Self::with_initial(total_secs, total_secs)
    }

    /// Starts from `initial_secs` (capped at the total).
    #[must_use]
    pub fn with_initial(total_secs: u32, initial_secs: u32) -> Self {
        let total = total_secs.max(1);
        Self {
            total,
            remaining: initial_secs.min(total),
        }
    }

    /// A cooldown that allows resending right away.
    #[must_use]
    pub fn ready(total_secs: u32) -> Self {
        Self::with_initial(total_secs, 0)
    }

    /// Counts one second down.
    ///
    /// Returns `true` on the tick that makes the control available again.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Starts the full cooldown again after a successful resend.
    pub fn restart(&mut self) {
        self.remaining = self.total;
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of the cooldown still to run, from 1.0 down to 0.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.remaining as f32 / self.total as f32
    }

    /// Countdown label, e.g. `"42s"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}s", self.remaining)
    }
}
