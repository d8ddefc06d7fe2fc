//! Play command handler

use std::io;

use anyhow::Result;

use scenereel::cli::PlayArgs;
use scenereel::player::render::format_duration;
use scenereel::player::{self, Pacing, PlaybackResult, PlaySettings};
use scenereel::stage::Stage;
use scenereel::theme::Theme;
use scenereel::{Config, Storyboard};

/// Play the built-in storyboard, interactively or headless.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs) -> Result<()> {
    let config = Config::load()?;
    let settings = PlaySettings::resolve(&config, args)?;
    let scheduler = settings.build_scheduler(Storyboard::registry()?)?;

    if args.headless {
        let mut scheduler = scheduler;
        let mut stage = Stage::default();
        let mut stdout = io::stdout().lock();
        player::run_headless(
            &mut scheduler,
            &mut stage,
            settings.fps,
            Pacing::RealTime,
            &mut stdout,
        )?;
        scheduler.dispose();
        return Ok(());
    }

    let result = player::run(scheduler, &settings)?;
    let theme = Theme::from_name(settings.theme);
    println!("{}", theme.secondary_text(&summary(&result)));
    Ok(())
}

fn summary(result: &PlaybackResult) -> String {
    if result.finished {
        return format!("Played to the end ({})", format_duration(result.elapsed));
    }
    format!(
        "Stopped at {} in scene {}/{}",
        format_duration(result.elapsed),
        result.scene + 1,
        Storyboard::ALL.len()
    )
}
