// SPDX-License-Identifier: MPL-2.0
//! Stacked toast notifications.
//!
//! Toasts are short-lived, non-blocking notifications stacked from the top
//! of the window. The [`Manager`] keeps them from overlapping, dismisses
//! each one once (by timer or by its dismiss control, whichever comes
//! first) and closes the gap a dismissed toast leaves behind.
//!
//! # Components
//!
//! - [`kind`] - `Kind` severities and `ToastId`
//! - [`manager`] - `Manager` owning the active list
//! - [`layout`] - `ToastSettings` and stacking offsets
//! - [`widget`] - `ToastWidget` / `WidgetFactory` rendering seams
//! - [`scheduler`] - `Scheduler` seam and the virtual-clock `ManualScheduler`
//!
//! # Usage
//!
//! ```ignore
//! let mut toasts = Manager::new(factory, scheduler);
//!
//! toasts.show("success", "Item moved successfully.", None);
//! toasts.show("danger", "Item has been deleted.", Some(Duration::from_secs(5)));
//!
//! // Feed fired timers, dismiss presses and transition ends back in
//! toasts.handle_message(message);
//! ```

pub mod kind;
pub mod layout;
pub mod manager;
pub mod scheduler;
pub mod widget;

pub use kind::{Kind, ToastId};
pub use layout::ToastSettings;
pub use manager::{Manager, Message, Phase};
pub use scheduler::{ManualScheduler, Scheduler, Timer, TimerHandle};
pub use widget::{ToastWidget, WidgetFactory};
