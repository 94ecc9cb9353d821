//! Transient toast notifications.
//!
//! A single-slot emitter: at most one message is visible at a time. Emitting
//! while a toast is pending replaces the message and restarts the dismissal
//! timer from zero - it does not queue a second display. The pending
//! dismissal is a deadline owned by the emitter, so tearing the emitter down
//! drops it; there is no detached timer to cancel.

use egui::{Align2, Color32, RichText};
use std::time::{Duration, Instant};

/// How long a toast stays visible unless superseded first.
pub const TOAST_DISMISS_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// Process-wide transient-message channel with fixed-duration auto-dismiss.
#[derive(Debug)]
pub struct ToastEmitter {
    dismiss_delay: Duration,
    active: Option<Toast>,
}

impl ToastEmitter {
    pub fn new() -> Self {
        Self::with_dismiss_delay(TOAST_DISMISS_DELAY)
    }

    /// Emitter with a custom dismissal delay. Used by the timing tests; the
    /// application always runs with [`TOAST_DISMISS_DELAY`].
    pub fn with_dismiss_delay(dismiss_delay: Duration) -> Self {
        Self {
            dismiss_delay,
            active: None,
        }
    }

    /// Show `message`, superseding any pending toast and arming a fresh
    /// dismissal deadline.
    pub fn emit(&mut self, message: impl Into<String>) {
        self.active = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + self.dismiss_delay,
        });
    }

    /// Drop the pending toast if its deadline has passed.
    pub fn clear_expired(&mut self) {
        if let Some(toast) = &self.active {
            if Instant::now() >= toast.expires_at {
                self.active = None;
            }
        }
    }

    /// The currently visible message, if any. Expires stale state first.
    pub fn active(&mut self) -> Option<&str> {
        self.clear_expired();
        self.active.as_ref().map(|t| t.message.as_str())
    }

    /// Time until the pending toast dismisses, if one is pending.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|t| t.expires_at.saturating_duration_since(Instant::now()))
    }

    /// Render the toast anchored to the bottom-right corner and schedule a
    /// repaint for its dismissal deadline.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.clear_expired();

        let Some(toast) = &self.active else {
            return;
        };

        egui::Area::new(egui::Id::new("toast_notification"))
            .anchor(Align2::RIGHT_BOTTOM, [-24.0, -24.0])
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .fill(Color32::from_rgb(255, 159, 28))
                    .corner_radius(16.0)
                    .inner_margin(egui::Margin::symmetric(20, 14))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("✔").color(Color32::BLACK).size(16.0));
                            ui.label(
                                RichText::new(&toast.message)
                                    .color(Color32::BLACK)
                                    .strong(),
                            );
                        });
                    });
            });

        // Without this the dismissal would wait for the next input event
        if let Some(remaining) = self.time_remaining() {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl Default for ToastEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_replaces_the_pending_message() {
        let mut toasts = ToastEmitter::new();
        toasts.emit("first");
        toasts.emit("second");
        assert_eq!(toasts.active(), Some("second"));
    }

    #[test]
    fn no_toast_without_emit() {
        let mut toasts = ToastEmitter::new();
        assert_eq!(toasts.active(), None);
        assert!(toasts.time_remaining().is_none());
    }

    #[test]
    fn deadline_tracks_the_configured_delay() {
        let mut toasts = ToastEmitter::with_dismiss_delay(Duration::from_millis(100));
        toasts.emit("hello");
        let remaining = toasts.time_remaining().unwrap();
        assert!(remaining <= Duration::from_millis(100));
        assert!(remaining > Duration::from_millis(50));
    }
}
