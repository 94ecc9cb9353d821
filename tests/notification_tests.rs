//! Toast emitter timing: single-slot display, supersede restarts the timer.
//!
//! These tests run the emitter with a shortened dismissal delay so the
//! timing semantics can be observed without multi-second sleeps.

use promptarch::app::notifications::{ToastEmitter, TOAST_DISMISS_DELAY};
use std::thread::sleep;
use std::time::Duration;

#[test]
fn application_delay_is_three_seconds() {
    assert_eq!(TOAST_DISMISS_DELAY, Duration::from_millis(3000));
}

#[test]
fn toast_clears_after_the_dismiss_delay() {
    let mut toasts = ToastEmitter::with_dismiss_delay(Duration::from_millis(40));
    toasts.emit("hello");
    assert_eq!(toasts.active(), Some("hello"));

    sleep(Duration::from_millis(80));
    assert_eq!(toasts.active(), None);
    assert!(toasts.time_remaining().is_none());
}

#[test]
fn second_emit_supersedes_and_restarts_the_timer() {
    // Delay 100ms; emit at t=0 and t~=60. At t~=120 the first deadline has
    // passed but the second message must still be visible; it clears only
    // after 60+100.
    let mut toasts = ToastEmitter::with_dismiss_delay(Duration::from_millis(100));

    toasts.emit("first");
    sleep(Duration::from_millis(60));
    toasts.emit("second");

    sleep(Duration::from_millis(60)); // t ~= 120
    assert_eq!(toasts.active(), Some("second"));

    sleep(Duration::from_millis(120)); // t ~= 240 > 60+100
    assert_eq!(toasts.active(), None);
}

#[test]
fn only_one_message_is_visible_at_any_instant() {
    let mut toasts = ToastEmitter::with_dismiss_delay(Duration::from_millis(200));
    toasts.emit("first");
    toasts.emit("second");
    toasts.emit("third");

    // No queue: earlier messages are gone, not pending
    assert_eq!(toasts.active(), Some("third"));
    sleep(Duration::from_millis(260));
    assert_eq!(toasts.active(), None);
}

#[test]
fn clear_expired_is_a_no_op_while_the_toast_is_live() {
    let mut toasts = ToastEmitter::with_dismiss_delay(Duration::from_millis(500));
    toasts.emit("still here");
    toasts.clear_expired();
    assert_eq!(toasts.active(), Some("still here"));
}
