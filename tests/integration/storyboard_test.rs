//! The built-in sequence played end to end.

use super::helpers::recording_queue;
use scenereel::player::{run_headless, Pacing};
use scenereel::{Scheduler, Stage, Storyboard};

#[test]
fn full_run_narrates_every_scene_entry() {
    let (queue, log) = recording_queue();
    let mut scheduler = Scheduler::new(Storyboard::registry().unwrap(), queue);
    let mut stage = Stage::default();
    let mut out = Vec::new();

    let report = run_headless(&mut scheduler, &mut stage, 30, Pacing::Simulated, &mut out)
        .unwrap();

    assert_eq!(report.entered.len(), 7);
    // Every scene change cancels at the backend; nothing is ever finished,
    // so each scene gets exactly its entry line.
    let texts = log.borrow().texts();
    assert_eq!(texts.len(), 7);
    assert!(texts[0].starts_with("The year is 1831"));
    assert_eq!(stage.subtitle.text(), "Replay?");
}

#[test]
fn headless_output_lists_scenes_in_order() {
    let mut scheduler = Scheduler::new(
        Storyboard::registry().unwrap(),
        scenereel::NarrationQueue::disabled(),
    );
    let mut stage = Stage::default();
    let mut out = Vec::new();
    run_headless(&mut scheduler, &mut stage, 20, Pacing::Simulated, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let names: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split_once(' ').map(|(_, rest)| rest))
        .collect();
    assert_eq!(names.len(), 8);
    assert!(names[0].starts_with("1/7 1831 Civil War"));
    assert_eq!(names[1], "2/7 Teleport");
    assert!(names[6].starts_with("7/7 End card"));
    assert_eq!(names[7], "sequence complete");
}
