// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the active toast list: it renders toasts from the
//! widget factory, stacks them without overlap, schedules their entry and
//! auto-dismiss timers, and reflows the stack once a toast has left.

use super::kind::{Kind, ToastId};
use super::layout::ToastSettings;
use super::scheduler::{ManualScheduler, Scheduler, Timer};
use super::widget::{ToastWidget, WidgetFactory};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, UserAction};
use crate::error::{Error, Result};
use std::time::Duration;

/// Messages that drive toast state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A scheduled timer fired.
    Timer(Timer),
    /// The dismiss control of a toast was pressed.
    DismissPressed(ToastId),
    /// The host finished the exit transition of a toast.
    TransitionEnded(ToastId),
}

/// Lifecycle phase of an active toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached, waiting for the entry animation.
    Entering,
    Shown,
    /// Exit transition running; the toast still holds its slot.
    Leaving,
}

struct Entry<W, H> {
    id: ToastId,
    kind: Kind,
    widget: W,
    phase: Phase,
    enter_timer: Option<H>,
    dismiss_timer: Option<H>,
    exit_timer: Option<H>,
    manual: bool,
}

/// Owns the visible toasts, in stacking order (oldest first).
pub struct Manager<F: WidgetFactory, S: Scheduler> {
    factory: F,
    scheduler: S,
    settings: ToastSettings,
    active: Vec<Entry<F::Widget, S::Handle>>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<F: WidgetFactory, S: Scheduler> Manager<F, S> {
    /// Creates an empty manager with default settings.
    pub fn new(factory: F, scheduler: S) -> Self {
        Self::with_settings(factory, scheduler, ToastSettings::default())
    }

    pub fn with_settings(factory: F, scheduler: S, settings: ToastSettings) -> Self {
        Self {
            factory,
            scheduler,
            settings,
            active: Vec::new(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle used for logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a toast of `kind` with `message` for `duration`
    /// (the configured default when `None`).
    ///
    /// An unknown kind is logged and nothing is shown.
    pub fn show(
        &mut self,
        kind: &str,
        message: &str,
        duration: Option<Duration>,
    ) -> Option<ToastId> {
        match self.try_show(kind, message, duration) {
            Ok(id) => Some(id),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    /// Like [`Manager::show`], but returns the failure instead of logging it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] when `kind` is unknown or the
    /// factory has no template for it.
    pub fn try_show(
        &mut self,
        kind: &str,
        message: &str,
        duration: Option<Duration>,
    ) -> Result<ToastId> {
        let kind: Kind = kind.parse()?;
        let id = ToastId::new();
        let mut widget = self
            .factory
            .render(kind, id)
            .ok_or_else(|| Error::TemplateNotFound(kind.as_str().to_string()))?;

        widget.set_text(message);
        widget.attach();
        widget.set_offset(self.settings.next_offset(&self.heights()));

        let duration = duration.unwrap_or(self.settings.default_duration);
        let enter_timer = self.scheduler.after(self.settings.enter_delay, Timer::Enter(id));
        let dismiss_timer = self.scheduler.after(duration, Timer::AutoDismiss(id));

        self.active.push(Entry {
            id,
            kind,
            widget,
            phase: Phase::Entering,
            enter_timer: Some(enter_timer),
            dismiss_timer: Some(dismiss_timer),
            exit_timer: None,
            manual: false,
        });

        if let Some(handle) = &self.diagnostics {
            handle.log_action(UserAction::ShowToast {
                kind: kind.as_str().to_string(),
            });
        }

        Ok(id)
    }

    /// Starts the exit transition of a toast, as if its dismiss control
    /// was pressed.
    ///
    /// Returns `false` if the toast is gone or already leaving.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.begin_exit(id, true)
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Timer(Timer::Enter(id)) => self.enter(id),
            Message::Timer(Timer::AutoDismiss(id)) => {
                if let Some(entry) = self.entry_mut(id) {
                    // Fired, nothing left to cancel
                    entry.dismiss_timer = None;
                }
                self.begin_exit(id, false);
            }
            Message::Timer(Timer::ExitComplete(id)) => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.exit_timer = None;
                }
                self.complete_exit(id);
            }
            Message::DismissPressed(id) => {
                self.begin_exit(id, true);
            }
            Message::TransitionEnded(id) => {
                self.complete_exit(id);
            }
        }
    }

    /// Active toasts in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = (ToastId, &F::Widget)> {
        self.active.iter().map(|entry| (entry.id, &entry.widget))
    }

    #[must_use]
    pub fn widget(&self, id: ToastId) -> Option<&F::Widget> {
        self.entry(id).map(|entry| &entry.widget)
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.entry(id).map(|entry| entry.phase)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.entry(id).is_some()
    }

    /// Number of attached toasts, leaving ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn entry(&self, id: ToastId) -> Option<&Entry<F::Widget, S::Handle>> {
        self.active.iter().find(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: ToastId) -> Option<&mut Entry<F::Widget, S::Handle>> {
        self.active.iter_mut().find(|entry| entry.id == id)
    }

    fn heights(&self) -> Vec<f32> {
        self.active.iter().map(|entry| entry.widget.height()).collect()
    }

    fn enter(&mut self, id: ToastId) {
        if let Some(entry) = self.entry_mut(id) {
            entry.enter_timer = None;
            if entry.phase == Phase::Entering {
                entry.widget.animate_in();
                entry.phase = Phase::Shown;
            }
        }
    }

    fn begin_exit(&mut self, id: ToastId, manual: bool) -> bool {
        let Some(entry) = self.active.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        if entry.phase == Phase::Leaving {
            return false;
        }

        if let Some(handle) = entry.enter_timer.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = entry.dismiss_timer.take() {
            self.scheduler.cancel(handle);
        }

        entry.phase = Phase::Leaving;
        entry.manual = manual;
        entry.widget.animate_out();
        entry.exit_timer = Some(
            self.scheduler
                .after(self.settings.exit_transition, Timer::ExitComplete(id)),
        );
        true
    }

    /// Removes a leaving toast and reflows the rest of the stack.
    fn complete_exit(&mut self, id: ToastId) -> bool {
        let Some(index) = self
            .active
            .iter()
            .position(|entry| entry.id == id && entry.phase == Phase::Leaving)
        else {
            return false;
        };

        let mut entry = self.active.remove(index);
        if let Some(handle) = entry.exit_timer.take() {
            self.scheduler.cancel(handle);
        }
        entry.widget.detach();
        self.reflow();

        if let Some(handle) = &self.diagnostics {
            handle.log_action(UserAction::DismissToast {
                kind: entry.kind.as_str().to_string(),
                manual: entry.manual,
            });
        }
        true
    }

    /// Recomputes every offset from scratch in list order.
    fn reflow(&mut self) {
        let offsets = self.settings.stack_offsets(&self.heights());
        for (entry, offset) in self.active.iter_mut().zip(offsets) {
            entry.widget.set_offset(offset);
        }
    }

    fn report(&self, err: &Error) {
        match &self.diagnostics {
            Some(handle) => handle.log_error(ErrorEvent::new(err.error_type(), err.to_string())),
            None => eprintln!("{err}"),
        }
    }
}

impl<F: WidgetFactory> Manager<F, ManualScheduler> {
    /// Moves the virtual clock forward, handling every timer that comes
    /// due on the way in due order.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.scheduler.now().saturating_add(by);
        while let Some(timer) = self.scheduler.pop_due(deadline) {
            self.handle_message(Message::Timer(timer));
        }
        self.scheduler.advance_to(deadline);
    }
}

impl<F: WidgetFactory, S: Scheduler> std::fmt::Debug for Manager<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("active", &self.active.len())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{
        BufferCapacity, DiagnosticEventKind, DiagnosticsCollector, ErrorType,
    };
    use crate::test_utils::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    const SHORT: f32 = 40.0;
    const TALL: f32 = 64.0;

    type Log = Rc<RefCell<Vec<(ToastId, &'static str)>>>;

    struct FakeWidget {
        id: ToastId,
        text: String,
        offset: f32,
        log: Log,
    }

    impl ToastWidget for FakeWidget {
        fn set_text(&mut self, message: &str) {
            self.text = message.to_string();
        }

        fn attach(&mut self) {
            self.log.borrow_mut().push((self.id, "attach"));
        }

        fn height(&self) -> f32 {
            if self.text.len() > 20 {
                TALL
            } else {
                SHORT
            }
        }

        fn set_offset(&mut self, top: f32) {
            self.offset = top;
        }

        fn animate_in(&mut self) {
            self.log.borrow_mut().push((self.id, "in"));
        }

        fn animate_out(&mut self) {
            self.log.borrow_mut().push((self.id, "out"));
        }

        fn detach(&mut self) {
            self.log.borrow_mut().push((self.id, "detach"));
        }
    }

    struct FakeFactory {
        templates: Vec<Kind>,
        log: Log,
    }

    impl WidgetFactory for FakeFactory {
        type Widget = FakeWidget;

        fn render(&mut self, kind: Kind, id: ToastId) -> Option<FakeWidget> {
            self.templates.contains(&kind).then(|| FakeWidget {
                id,
                text: String::new(),
                offset: f32::NAN,
                log: Rc::clone(&self.log),
            })
        }
    }

    fn manager_with(settings: ToastSettings) -> (Manager<FakeFactory, ManualScheduler>, Log) {
        let log: Log = Rc::default();
        let factory = FakeFactory {
            templates: vec![Kind::Success, Kind::Danger, Kind::Warning],
            log: Rc::clone(&log),
        };
        (
            Manager::with_settings(factory, ManualScheduler::new(), settings),
            log,
        )
    }

    fn manager() -> (Manager<FakeFactory, ManualScheduler>, Log) {
        manager_with(ToastSettings::default())
    }

    fn count(log: &Log, id: ToastId, event: &str) -> usize {
        log.borrow()
            .iter()
            .filter(|(logged, e)| *logged == id && *e == event)
            .count()
    }

    fn offset(manager: &Manager<FakeFactory, ManualScheduler>, id: ToastId) -> f32 {
        manager.widget(id).expect("toast is active").offset
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let (manager, _) = manager();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn show_attaches_widget_with_message() {
        let (mut manager, log) = manager();

        let id = manager.show("success", "Saved", None).expect("shown");

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.phase(id), Some(Phase::Entering));
        assert_eq!(manager.widget(id).map(|w| w.text.as_str()), Some("Saved"));
        assert_eq!(count(&log, id, "attach"), 1);
        assert_abs_diff_eq!(offset(&manager, id), manager.settings().base_offset);
    }

    #[test]
    fn unknown_kind_leaves_list_unchanged() {
        let (mut manager, log) = manager();
        manager.show("success", "Saved", None);

        assert!(manager.show("nonexistent-kind", "x", None).is_none());

        assert_eq!(manager.len(), 1);
        assert_eq!(log.borrow().len(), 1, "only the first toast was attached");
    }

    #[test]
    fn missing_template_is_reported_to_diagnostics() {
        let (mut manager, _) = manager();
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        manager.set_diagnostics(collector.handle());

        // Kind exists but the factory has no template for it
        assert!(manager.show("info", "Heads up", None).is_none());
        collector.process_pending();

        let errors: Vec<_> = collector
            .events()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::Error { event } => Some(event.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, ErrorType::TemplateNotFound);
        assert!(errors[0].message.contains("toast-info"));
        assert!(manager.is_empty());
    }

    #[test]
    fn try_show_returns_template_not_found() {
        let (mut manager, _) = manager();

        assert_eq!(
            manager.try_show("notice", "x", None),
            Err(Error::TemplateNotFound("notice".into()))
        );
        assert_eq!(
            manager.try_show("info", "x", None),
            Err(Error::TemplateNotFound("info".into()))
        );
    }

    #[test]
    fn second_toast_stacks_below_first() {
        let (mut manager, _) = manager();

        let a = manager.show("danger", "A", None).expect("shown");
        let b = manager.show("danger", "B", None).expect("shown");

        let settings = *manager.settings();
        assert_abs_diff_eq!(offset(&manager, a), settings.base_offset);
        assert_abs_diff_eq!(
            offset(&manager, b),
            settings.base_offset + SHORT + settings.margin
        );
    }

    #[test]
    fn stacking_uses_each_toast_measured_height() {
        let (mut manager, _) = manager();

        let a = manager
            .show("warning", "A much longer warning message", None)
            .expect("shown");
        let b = manager.show("success", "Short", None).expect("shown");
        let c = manager.show("success", "Short", None).expect("shown");

        let settings = *manager.settings();
        assert!(offset(&manager, b) - offset(&manager, a) >= TALL + settings.margin);
        assert_abs_diff_eq!(
            offset(&manager, c),
            settings.base_offset + TALL + SHORT + 2.0 * settings.margin
        );
    }

    #[test]
    fn entry_animation_starts_after_enter_delay() {
        let (mut manager, log) = manager();
        let id = manager.show("success", "Saved", None).expect("shown");

        manager.advance(manager.settings().enter_delay - ms(1));
        assert_eq!(count(&log, id, "in"), 0);

        manager.advance(ms(1));
        assert_eq!(count(&log, id, "in"), 1);
        assert_eq!(manager.phase(id), Some(Phase::Shown));
    }

    #[test]
    fn toast_auto_dismisses_after_duration() {
        let (mut manager, log) = manager_with(ToastSettings {
            exit_transition: ms(20),
            ..ToastSettings::default()
        });
        let id = manager.show("success", "Saved", Some(ms(100))).expect("shown");

        manager.advance(ms(150));

        assert!(manager.is_empty());
        assert_eq!(count(&log, id, "out"), 1);
        assert_eq!(count(&log, id, "detach"), 1);
        assert_eq!(manager.scheduler().pending_count(), 0);
    }

    #[test]
    fn default_duration_applies_when_omitted() {
        let (mut manager, _) = manager();
        let id = manager.show("success", "Saved", None).expect("shown");
        let default = manager.settings().default_duration;
        let exit = manager.settings().exit_transition;

        manager.advance(default - ms(1));
        assert_eq!(manager.phase(id), Some(Phase::Shown));

        manager.advance(ms(1));
        assert_eq!(manager.phase(id), Some(Phase::Leaving));

        manager.advance(exit);
        assert!(!manager.contains(id));
    }

    #[test]
    fn longest_duration_after_clock_moved_stays_shown() {
        let (mut manager, _) = manager();
        manager.advance(ms(1));

        let id = manager
            .show("success", "Saved", Some(Duration::MAX))
            .expect("shown");
        manager.advance(ms(10_000));

        assert_eq!(manager.phase(id), Some(Phase::Shown));
        assert!(manager.scheduler().is_pending(Timer::AutoDismiss(id)));
    }

    #[test]
    fn leaving_toast_keeps_its_slot_until_removed() {
        let (mut manager, _) = manager();
        let a = manager.show("danger", "A", None).expect("shown");
        manager.dismiss(a);

        let b = manager.show("danger", "B", None).expect("shown");

        let settings = *manager.settings();
        assert_abs_diff_eq!(
            offset(&manager, b),
            settings.base_offset + SHORT + settings.margin
        );
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn manual_dismiss_cancels_auto_dismiss() {
        let (mut manager, log) = manager();
        let id = manager.show("success", "Saved", Some(ms(1000))).expect("shown");
        manager.advance(ms(200));

        assert!(manager.dismiss(id));

        assert!(!manager.scheduler().is_pending(Timer::AutoDismiss(id)));
        manager.advance(ms(5000));
        assert_eq!(count(&log, id, "out"), 1);
        assert_eq!(count(&log, id, "detach"), 1);
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_pressed_message_starts_exit() {
        let (mut manager, _) = manager();
        let id = manager.show("success", "Saved", None).expect("shown");

        manager.handle_message(Message::DismissPressed(id));

        assert_eq!(manager.phase(id), Some(Phase::Leaving));
    }

    #[test]
    fn dismissing_twice_is_a_no_op() {
        let (mut manager, log) = manager();
        let id = manager.show("success", "Saved", None).expect("shown");

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
        manager.handle_message(Message::Timer(Timer::AutoDismiss(id)));

        assert_eq!(count(&log, id, "out"), 1);
    }

    #[test]
    fn messages_for_removed_toast_are_ignored() {
        let (mut manager, log) = manager();
        let id = manager.show("success", "Saved", None).expect("shown");
        manager.dismiss(id);
        manager.handle_message(Message::TransitionEnded(id));
        assert!(manager.is_empty());

        manager.handle_message(Message::Timer(Timer::AutoDismiss(id)));
        manager.handle_message(Message::Timer(Timer::ExitComplete(id)));
        manager.handle_message(Message::TransitionEnded(id));
        assert!(!manager.dismiss(id));

        assert_eq!(count(&log, id, "out"), 1);
        assert_eq!(count(&log, id, "detach"), 1);
    }

    #[test]
    fn transition_end_completes_exit_and_cancels_exit_timer() {
        let (mut manager, _) = manager();
        let id = manager.show("success", "Saved", None).expect("shown");
        manager.dismiss(id);
        assert!(manager.scheduler().is_pending(Timer::ExitComplete(id)));

        manager.handle_message(Message::TransitionEnded(id));

        assert!(manager.is_empty());
        assert_eq!(manager.scheduler().pending_count(), 0);
    }

    #[test]
    fn transition_end_before_dismissal_is_ignored() {
        let (mut manager, _) = manager();
        let id = manager.show("success", "Saved", None).expect("shown");
        manager.advance(ms(100));

        manager.handle_message(Message::TransitionEnded(id));

        assert_eq!(manager.phase(id), Some(Phase::Shown));
    }

    #[test]
    fn dismiss_before_entry_cancels_entry_animation() {
        let (mut manager, log) = manager();
        let id = manager.show("success", "Saved", None).expect("shown");

        manager.dismiss(id);
        manager.advance(ms(100));

        assert_eq!(count(&log, id, "in"), 0);
        assert!(!manager.scheduler().is_pending(Timer::Enter(id)));
    }

    #[test]
    fn dismissing_first_moves_next_to_base_offset() {
        let (mut manager, _) = manager();
        let a = manager.show("danger", "A", None).expect("shown");
        let b = manager.show("danger", "B", None).expect("shown");

        manager.dismiss(a);
        manager.advance(manager.settings().exit_transition);

        assert!(!manager.contains(a));
        assert_abs_diff_eq!(offset(&manager, b), manager.settings().base_offset);
    }

    #[test]
    fn removing_middle_toast_closes_the_gap() {
        let (mut manager, _) = manager();
        let a = manager.show("success", "Short", None).expect("shown");
        let b = manager
            .show("warning", "A much longer warning message", None)
            .expect("shown");
        let c = manager.show("danger", "Short", None).expect("shown");

        manager.dismiss(b);
        manager.handle_message(Message::TransitionEnded(b));

        let settings = *manager.settings();
        assert_eq!(manager.len(), 2);
        assert_abs_diff_eq!(offset(&manager, a), settings.base_offset);
        assert_abs_diff_eq!(
            offset(&manager, c),
            settings.base_offset + SHORT + settings.margin
        );
    }

    #[test]
    fn offsets_stay_cumulative_under_arbitrary_dismissal_order() {
        let (mut manager, log) = manager();
        let messages = [
            "one",
            "a second, rather long message",
            "three",
            "another rather long message",
            "five",
        ];
        let ids: Vec<_> = messages
            .iter()
            .map(|m| manager.show("success", m, None).expect("shown"))
            .collect();

        for &index in &[2, 0, 4] {
            let before = manager.len();
            manager.dismiss(ids[index]);
            manager.handle_message(Message::TransitionEnded(ids[index]));
            assert_eq!(manager.len(), before - 1);

            let heights: Vec<f32> = manager.iter().map(|(_, w)| w.height()).collect();
            let expected = manager.settings().stack_offsets(&heights);
            for ((_, widget), expected) in manager.iter().zip(expected) {
                assert_abs_diff_eq!(widget.offset, expected);
            }
        }

        let remaining: Vec<_> = manager.iter().map(|(id, _)| id).collect();
        assert_eq!(remaining, vec![ids[1], ids[3]]);
        let attached = ids
            .iter()
            .filter(|&&id| count(&log, id, "attach") > count(&log, id, "detach"))
            .count();
        assert_eq!(attached, manager.len());
    }

    #[test]
    fn show_and_dismiss_are_logged_as_actions() {
        let (mut manager, _) = manager();
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        manager.set_diagnostics(collector.handle());

        let id = manager.show("success", "Saved", None).expect("shown");
        manager.dismiss(id);
        manager.handle_message(Message::TransitionEnded(id));
        collector.process_pending();

        let actions: Vec<_> = collector
            .events()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::UserAction { action } => Some(action.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            actions,
            vec![
                UserAction::ShowToast {
                    kind: "success".into()
                },
                UserAction::DismissToast {
                    kind: "success".into(),
                    manual: true,
                },
            ]
        );
    }
}
