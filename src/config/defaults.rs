// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Lifetime, stacking geometry and transition timings
//! - **Verification**: Resend cooldown lengths
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays visible before auto-dismiss (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Maximum configurable toast duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Vertical gap between stacked toasts (in logical pixels).
pub const DEFAULT_TOAST_MARGIN: f32 = 10.0;

/// Distance of the first toast from the top edge (in logical pixels).
pub const DEFAULT_TOAST_BASE_OFFSET: f32 = 16.0;

/// Upper bound for margin and base offset.
pub const MAX_TOAST_SPACING: f32 = 200.0;

/// Delay before the entry animation starts, letting the initial
/// off-screen state render first (in milliseconds).
pub const DEFAULT_ENTER_DELAY_MS: u64 = 100;

/// Duration of the exit transition (in milliseconds).
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 500;

/// Upper bound for enter delay and exit transition (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5000;

// ==========================================================================
// Verification Defaults
// ==========================================================================

/// Cooldown between verification email resends (in seconds).
pub const DEFAULT_RESEND_COOLDOWN_SECS: u32 = 60;

/// Initial cooldown shown after a failed verification link (in seconds).
pub const DEFAULT_FAILED_VERIFICATION_COOLDOWN_SECS: u32 = 5;

/// Minimum cooldown (in seconds).
pub const MIN_COOLDOWN_SECS: u32 = 1;

/// Maximum cooldown (in seconds).
pub const MAX_COOLDOWN_SECS: u32 = 600;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept in the diagnostics buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
