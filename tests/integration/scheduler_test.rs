//! Frame-loop behaviour of the scheduler over probe scenes.

use super::helpers::{entries, probe_scheduler, Probe, SharedLog};
use scenereel::scene::{Cue, SceneRegistry};
use scenereel::{Phase, Scheduler, Stage, TickOutcome};

fn settle(scheduler: &mut Scheduler<Probe>, log: &SharedLog) {
    while scheduler.narration().speaking().is_some() {
        log.borrow_mut().finish_last();
        scheduler.pump_narration();
    }
}

#[test]
fn boundary_belongs_to_the_next_scene() {
    let (mut scheduler, _journal, _log) = probe_scheduler(&[("a", 3.0), ("b", 1.6)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();

    let scenes: Vec<usize> = [0.0, 1.0, 2.0, 3.0]
        .iter()
        .map(|&ts| {
            scheduler.tick(ts, &mut stage);
            scheduler.current_scene()
        })
        .collect();

    assert_eq!(scenes, vec![0, 0, 0, 1]);
    assert_eq!(scheduler.elapsed(), 3.0);
    assert_eq!(scheduler.local_time(), 0.0);
}

#[test]
fn speed_scales_elapsed_time() {
    let (mut scheduler, _journal, _log) = probe_scheduler(&[("a", 3.0), ("b", 1.6)]);
    let mut stage = Stage::default();
    scheduler.set_speed(2.0).unwrap();
    scheduler.reset(&mut stage);
    scheduler.play();

    scheduler.tick(0.0, &mut stage);
    scheduler.tick(1.0, &mut stage);
    assert_eq!(scheduler.elapsed(), 2.0);
    assert_eq!(scheduler.current_scene(), 0);

    let outcome = scheduler.tick(1.5, &mut stage);
    assert_eq!(outcome.entered_scene(), Some(1));
    assert_eq!(scheduler.elapsed(), 3.0);
}

#[test]
fn finishing_keeps_the_last_frame_and_shows_the_caption() {
    let (mut scheduler, journal, _log) = probe_scheduler(&[("a", 3.0), ("b", 1.6)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();

    scheduler.tick(0.0, &mut stage);
    scheduler.tick(3.0, &mut stage);
    let outcome = scheduler.tick(5.0, &mut stage);

    assert!(matches!(outcome, TickOutcome::Finished { scene: 1, .. }));
    assert_eq!(scheduler.phase(), Phase::Finished);
    assert_eq!(stage.subtitle.text(), "Replay?");
    assert_eq!(journal.borrow().last().map(String::as_str), Some("draw b 2.00"));

    // Further ticks do nothing
    assert_eq!(scheduler.tick(6.0, &mut stage), TickOutcome::Inactive);
    assert_eq!(scheduler.elapsed(), 5.0);
}

#[test]
fn finishing_tick_reports_a_scene_it_entered() {
    let (mut scheduler, journal, _log) = probe_scheduler(&[("a", 1.0), ("b", 1.0)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);

    let outcome = scheduler.tick(2.5, &mut stage);

    assert!(matches!(
        outcome,
        TickOutcome::Finished {
            scene: 1,
            entered: true,
            ..
        }
    ));
    assert_eq!(outcome.entered_scene(), Some(1));
    assert_eq!(entries(&journal), vec!["enter a", "enter b"]);
}

#[test]
fn custom_finish_caption() {
    let (scheduler, _journal, _log) = probe_scheduler(&[("a", 1.0)]);
    let mut scheduler = scheduler.with_finish_caption("The End");
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    scheduler.tick(2.0, &mut stage);
    assert_eq!(stage.subtitle.text(), "The End");
}

#[test]
fn paused_time_is_not_counted() {
    let (mut scheduler, _journal, _log) = probe_scheduler(&[("a", 3.0), ("b", 1.6)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    scheduler.tick(1.0, &mut stage);

    scheduler.pause();
    assert_eq!(scheduler.tick(5.0, &mut stage), TickOutcome::Inactive);
    assert_eq!(scheduler.elapsed(), 1.0);

    scheduler.play();
    scheduler.tick(10.0, &mut stage);
    assert_eq!(scheduler.elapsed(), 1.0);
    scheduler.tick(10.5, &mut stage);
    assert_eq!(scheduler.elapsed(), 1.5);
}

#[test]
fn pause_silences_narration() {
    let (mut scheduler, _journal, log) = probe_scheduler(&[("a", 3.0), ("b", 1.6)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    assert!(!scheduler.narration().is_idle());

    let cancels = log.borrow().cancels;
    scheduler.pause();

    assert!(scheduler.narration().is_idle());
    assert!(log.borrow().cancels > cancels);
}

#[test]
fn reset_silences_narration() {
    let journal = Default::default();
    let mut probe = Probe::new("a", 3.0, &journal);
    probe.cues = vec![Cue::new(0.5, "first", 1.0), Cue::new(0.5, "second", 1.0)];
    let registry = SceneRegistry::new(vec![probe]).unwrap();
    let (queue, log) = super::helpers::recording_queue();
    let mut scheduler = Scheduler::new(registry, queue);
    let mut stage = Stage::default();

    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    scheduler.tick(1.0, &mut stage);
    assert_eq!(scheduler.narration().pending_len(), 2);

    let cancels = log.borrow().cancels;
    scheduler.reset(&mut stage);

    assert!(log.borrow().cancels > cancels);
    // Only the opening scene's entry line survives the reset
    assert_eq!(scheduler.narration().pending_len(), 0);
    assert_eq!(scheduler.narration().speaking().map(|i| i.text.as_str()), Some("a"));
}

#[test]
fn reset_is_idempotent() {
    let (mut scheduler, _journal, _log) = probe_scheduler(&[("a", 3.0), ("b", 1.6)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    scheduler.tick(3.5, &mut stage);
    assert_eq!(scheduler.current_scene(), 1);

    scheduler.reset(&mut stage);
    let first = stage.clone();
    scheduler.reset(&mut stage);

    assert_eq!(scheduler.phase(), Phase::Idle);
    assert_eq!(scheduler.elapsed(), 0.0);
    assert_eq!(scheduler.current_scene(), 0);
    assert_eq!(stage.canvas, first.canvas);
    assert_eq!(stage.subtitle, first.subtitle);
    assert_eq!(stage.subtitle.text(), "a");
}

#[test]
fn on_enter_runs_once_per_visit() {
    let (mut scheduler, journal, _log) =
        probe_scheduler(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();

    for frame in 0..=40 {
        scheduler.tick(f64::from(frame) * 0.05, &mut stage);
    }

    assert_eq!(entries(&journal), vec!["enter a", "enter b", "enter c"]);
}

#[test]
fn large_jump_skips_intermediate_scenes() {
    let (mut scheduler, journal, _log) =
        probe_scheduler(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    scheduler.tick(2.5, &mut stage);

    assert_eq!(entries(&journal), vec!["enter a", "enter c"]);
}

#[test]
fn narration_is_spoken_one_line_at_a_time() {
    let journal = Default::default();
    let mut probe = Probe::new("a", 3.0, &journal);
    probe.cues = vec![Cue::new(0.5, "first", 1.0), Cue::new(0.5, "second", 1.0)];
    let registry = SceneRegistry::new(vec![probe]).unwrap();
    let (queue, log) = super::helpers::recording_queue();
    let mut scheduler = Scheduler::new(registry, queue);
    let mut stage = Stage::default();

    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    scheduler.tick(1.0, &mut stage);

    assert_eq!(log.borrow().texts(), vec!["a"]);
    assert_eq!(scheduler.narration().pending_len(), 2);

    log.borrow_mut().finish_last();
    scheduler.pump_narration();
    assert_eq!(log.borrow().texts(), vec!["a", "first"]);

    settle(&mut scheduler, &log);
    assert_eq!(log.borrow().texts(), vec!["a", "first", "second"]);
    assert!(scheduler.narration().is_idle());
}

#[test]
fn scene_change_drops_previous_narration() {
    let (mut scheduler, _journal, log) = probe_scheduler(&[("a", 1.0), ("b", 1.0)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);

    let stale = log.borrow().spoken[0].0;
    let cancels = log.borrow().cancels;
    scheduler.tick(1.2, &mut stage);

    assert!(log.borrow().cancels > cancels);
    assert_eq!(scheduler.narration().speaking().map(|i| i.text.as_str()), Some("b"));

    // A late completion for the cancelled line changes nothing
    log.borrow_mut().finished.push(stale);
    scheduler.pump_narration();
    assert_eq!(scheduler.narration().speaking().map(|i| i.text.as_str()), Some("b"));
}

#[test]
fn cues_fire_once_with_speed_scaled_rate() {
    let journal = Default::default();
    let mut probe = Probe::new("a", 4.0, &journal);
    probe.cues = vec![Cue::new(1.0, "cue", 0.5)];
    let registry = SceneRegistry::new(vec![probe]).unwrap();
    let (queue, log) = super::helpers::recording_queue();
    let mut scheduler = Scheduler::new(registry, queue);
    let mut stage = Stage::default();
    scheduler.set_speed(2.0).unwrap();

    scheduler.reset(&mut stage);
    scheduler.play();
    for frame in 0..15 {
        scheduler.tick(f64::from(frame) * 0.1, &mut stage);
        settle(&mut scheduler, &log);
    }

    let log = log.borrow();
    let cues: Vec<f64> = log
        .spoken
        .iter()
        .filter(|(_, text, _)| text == "cue")
        .map(|(_, _, rate)| *rate)
        .collect();
    assert_eq!(cues, vec![1.0]);
}

#[test]
fn play_after_finish_replays_from_the_start() {
    let (mut scheduler, journal, _log) = probe_scheduler(&[("a", 1.0), ("b", 1.0)]);
    let mut stage = Stage::default();
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    scheduler.tick(3.0, &mut stage);
    assert_eq!(scheduler.phase(), Phase::Finished);

    assert!(scheduler.play());
    let outcome = scheduler.tick(100.0, &mut stage);

    assert_eq!(outcome.entered_scene(), Some(0));
    assert_eq!(scheduler.elapsed(), 0.0);
    assert_eq!(stage.subtitle.text(), "a");
    assert_eq!(
        entries(&journal),
        vec!["enter a", "enter b", "enter a"]
    );
}

#[test]
fn play_while_playing_is_a_no_op() {
    let (mut scheduler, _journal, _log) = probe_scheduler(&[("a", 1.0)]);
    assert!(scheduler.play());
    assert!(!scheduler.play());
}

#[test]
fn invalid_speed_keeps_previous() {
    let (mut scheduler, _journal, _log) = probe_scheduler(&[("a", 1.0)]);
    scheduler.set_speed(1.5).unwrap();
    assert!(scheduler.set_speed(0.0).is_err());
    assert!(scheduler.set_speed(f64::NAN).is_err());
    assert_eq!(scheduler.speed(), 1.5);
}
