//! Narration queue behaviour against recording and timed backends.

use std::thread;
use std::time::Duration;

use super::helpers::recording_queue;
use scenereel::narration::backends::TimedVoice;
use scenereel::narration::{select_backend, BackendKind};
use scenereel::NarrationQueue;

#[test]
fn lines_are_handed_over_in_order() {
    let (mut queue, log) = recording_queue();
    queue.enqueue("one", 1.0);
    queue.enqueue("two", 1.0);
    queue.enqueue("three", 1.0);
    assert_eq!(log.borrow().texts(), vec!["one"]);
    assert_eq!(queue.pending_len(), 2);

    for _ in 0..2 {
        log.borrow_mut().finish_last();
        queue.poll();
    }
    assert_eq!(log.borrow().texts(), vec!["one", "two", "three"]);
    assert_eq!(queue.pending_len(), 0);
    assert!(!queue.is_idle());

    log.borrow_mut().finish_last();
    queue.poll();
    assert!(queue.is_idle());
}

#[test]
fn clear_cancels_and_ignores_late_completion() {
    let (mut queue, log) = recording_queue();
    queue.enqueue("one", 1.0);
    queue.enqueue("two", 1.0);
    let first = log.borrow().spoken[0].0;

    queue.clear();
    assert!(queue.is_idle());
    assert_eq!(log.borrow().cancels, 1);

    queue.enqueue("three", 1.0);
    queue.complete(first);
    assert_eq!(queue.speaking().map(|i| i.text.as_str()), Some("three"));
}

#[test]
fn invalid_rate_falls_back_to_normal() {
    let (mut queue, log) = recording_queue();
    queue.enqueue("fast", f64::INFINITY);
    assert_eq!(log.borrow().spoken[0].2, 1.0);
}

#[test]
fn disabled_queue_drops_lines() {
    let (mut queue, log) = recording_queue();
    queue.set_enabled(false);
    queue.enqueue("ignored", 1.0);
    assert!(log.borrow().spoken.is_empty());
    assert!(queue.is_idle());

    queue.set_enabled(true);
    queue.enqueue("heard", 1.0);
    assert_eq!(log.borrow().texts(), vec!["heard"]);
}

#[test]
fn disabling_drops_queued_lines() {
    let (mut queue, _log) = recording_queue();
    queue.enqueue("one", 1.0);
    queue.enqueue("two", 1.0);
    queue.set_enabled(false);
    assert!(queue.is_idle());
}

#[test]
fn muted_queue_is_never_active() {
    let queue = NarrationQueue::disabled();
    assert!(!queue.is_active());
    assert!(!queue.is_enabled());
}

#[test]
fn timed_voice_completes_short_lines() {
    let mut queue = NarrationQueue::new(Box::new(TimedVoice::new(450)), true);
    queue.enqueue("Hi", 4.0);
    queue.enqueue("Bye", 4.0);
    assert_eq!(queue.speaking().map(|i| i.text.as_str()), Some("Hi"));

    thread::sleep(Duration::from_millis(350));
    queue.poll();
    assert_eq!(queue.speaking().map(|i| i.text.as_str()), Some("Bye"));
}

#[test]
fn none_backend_is_silent() {
    let queue = NarrationQueue::new(select_backend(BackendKind::None, 175), true);
    assert!(!queue.is_active());
}

#[test]
fn timed_backend_is_always_available() {
    let queue = NarrationQueue::new(select_backend(BackendKind::Timed, 175), true);
    assert!(queue.is_active());
    assert_eq!(queue.backend_name(), "timed");
}
