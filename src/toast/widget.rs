// SPDX-License-Identifier: MPL-2.0
//! Rendering seams between the manager and a concrete UI.

use super::kind::{Kind, ToastId};

/// A rendered toast owned by the [`Manager`](super::Manager).
///
/// Dismiss-control presses and transition ends are not callbacks on the
/// widget; the host reports them as [`Message`](super::Message)s.
pub trait ToastWidget {
    /// Replaces the text slot. Plain text, never markup.
    fn set_text(&mut self, message: &str);

    /// Makes the widget part of the visible tree, still off-screen.
    fn attach(&mut self);

    /// Current rendered height in logical pixels.
    fn height(&self) -> f32;

    /// Moves the widget to `top` pixels from the top edge.
    fn set_offset(&mut self, top: f32);

    fn animate_in(&mut self);

    fn animate_out(&mut self);

    /// Removes the widget from the visible tree.
    fn detach(&mut self);
}

/// Produces a fresh widget per toast from a per-kind template.
pub trait WidgetFactory {
    type Widget: ToastWidget;

    /// Returns `None` when no template exists for `kind`.
    fn render(&mut self, kind: Kind, id: ToastId) -> Option<Self::Widget>;
}
