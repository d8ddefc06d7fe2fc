//! Scenes command handler

use anyhow::Result;
use serde::Serialize;

use scenereel::player::render::format_duration;
use scenereel::scene::SceneRegistry;
use scenereel::theme::Theme;
use scenereel::{Scene, Storyboard};

/// One row of the scene listing.
#[derive(Debug, Serialize)]
struct SceneEntry<'a> {
    index: usize,
    name: &'a str,
    start: f64,
    end: f64,
    duration: f64,
    cues: usize,
}

fn entries<S: Scene>(registry: &SceneRegistry<S>) -> Vec<SceneEntry<'_>> {
    registry
        .iter()
        .zip(registry.ranges())
        .enumerate()
        .map(|(index, (scene, range))| SceneEntry {
            index,
            name: scene.name(),
            start: range.start,
            end: range.end,
            duration: scene.duration(),
            cues: scene.cues().len(),
        })
        .collect()
}

fn table(entries: &[SceneEntry<'_>], total: f64) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{:<4}{:>6.2}s  {:>6.2}s  {:>5.2}s  {}\n",
            format!("{}.", entry.index + 1),
            entry.start,
            entry.end,
            entry.duration,
            entry.name
        ));
    }
    out.push_str(&format!(
        "{} scenes, {:.1}s ({})",
        entries.len(),
        total,
        format_duration(total)
    ));
    out
}

/// List the storyboard's scenes.
pub fn handle(json: bool) -> Result<()> {
    let registry = Storyboard::registry()?;
    let entries = entries(&registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let theme = Theme::default();
    let header = format!(
        "{:<4}{:>7}  {:>7}  {:>6}  {}",
        "#", "start", "end", "length", "name"
    );
    println!("{}", theme.secondary_text(&header));
    println!("{}", table(&entries, registry.total_duration()));
    Ok(())
}
