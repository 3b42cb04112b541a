// SPDX-License-Identifier: MPL-2.0
//! Stacking geometry and timing settings.

use crate::config::{
    NotificationsConfig, DEFAULT_ENTER_DELAY_MS, DEFAULT_EXIT_TRANSITION_MS,
    DEFAULT_TOAST_BASE_OFFSET, DEFAULT_TOAST_DURATION_MS, DEFAULT_TOAST_MARGIN,
};
use std::time::Duration;

/// Geometry and timings applied by the manager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastSettings {
    /// Lifetime used when `show` gets no explicit duration.
    pub default_duration: Duration,
    /// Offset of the first toast from the top edge.
    pub base_offset: f32,
    /// Gap between consecutive toasts.
    pub margin: f32,
    pub enter_delay: Duration,
    pub exit_transition: Duration,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            default_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            base_offset: DEFAULT_TOAST_BASE_OFFSET,
            margin: DEFAULT_TOAST_MARGIN,
            enter_delay: Duration::from_millis(DEFAULT_ENTER_DELAY_MS),
            exit_transition: Duration::from_millis(DEFAULT_EXIT_TRANSITION_MS),
        }
    }
}

impl From<&NotificationsConfig> for ToastSettings {
    fn from(config: &NotificationsConfig) -> Self {
        Self {
            default_duration: config.duration(),
            base_offset: config.base_offset(),
            margin: config.margin(),
            enter_delay: config.enter_delay(),
            exit_transition: config.exit_transition(),
        }
    }
}

impl ToastSettings {
    /// Top offsets for toasts of the given heights, stacked in order.
    ///
    /// Each offset is `base_offset` plus the height and margin of every
    /// toast above it.
    #[must_use]
    pub fn stack_offsets(&self, heights: &[f32]) -> Vec<f32> {
        heights
            .iter()
            .scan(self.base_offset, |top, height| {
                let offset = *top;
                *top += height + self.margin;
                Some(offset)
            })
            .collect()
    }

    /// Offset for a toast appended below toasts of the given heights.
    #[must_use]
    pub fn next_offset(&self, heights: &[f32]) -> f32 {
        heights
            .iter()
            .fold(self.base_offset, |top, height| top + height + self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn empty_stack_starts_at_base_offset() {
        let settings = ToastSettings::default();
        assert!(settings.stack_offsets(&[]).is_empty());
        assert_abs_diff_eq!(settings.next_offset(&[]), DEFAULT_TOAST_BASE_OFFSET);
    }

    #[test]
    fn offsets_accumulate_measured_heights() {
        let settings = ToastSettings {
            base_offset: 16.0,
            margin: 10.0,
            ..ToastSettings::default()
        };

        let offsets = settings.stack_offsets(&[40.0, 64.0, 40.0]);

        assert_eq!(offsets.len(), 3);
        assert_abs_diff_eq!(offsets[0], 16.0);
        assert_abs_diff_eq!(offsets[1], 66.0);
        assert_abs_diff_eq!(offsets[2], 140.0);
        assert_abs_diff_eq!(settings.next_offset(&[40.0, 64.0, 40.0]), 190.0);
    }

    #[test]
    fn next_offset_matches_offset_after_append() {
        let settings = ToastSettings::default();
        let heights = [52.0, 30.5];

        let mut appended = heights.to_vec();
        appended.push(10.0);

        assert_abs_diff_eq!(
            settings.next_offset(&heights),
            settings.stack_offsets(&appended)[2]
        );
    }

    #[test]
    fn settings_follow_notifications_config() {
        let config = NotificationsConfig {
            duration_ms: Some(1500),
            margin: Some(4.0),
            base_offset: Some(8.0),
            enter_delay_ms: Some(0),
            exit_transition_ms: Some(250),
        };

        let settings = ToastSettings::from(&config);

        assert_eq!(settings.default_duration, Duration::from_millis(1500));
        assert_abs_diff_eq!(settings.margin, 4.0);
        assert_abs_diff_eq!(settings.base_offset, 8.0);
        assert_eq!(settings.enter_delay, Duration::ZERO);
        assert_eq!(settings.exit_transition, Duration::from_millis(250));
    }
}
