//! Frame command handler

use anyhow::{bail, Result};

use scenereel::cli::FrameArgs;
use scenereel::player::stage_at;
use scenereel::Storyboard;

/// Print the stage at a timeline position as plain text, subtitle last.
pub fn handle(args: &FrameArgs) -> Result<()> {
    if !args.at.is_finite() {
        bail!("--at must be a finite number of seconds");
    }
    if args.width == 0 || args.height == 0 {
        bail!("--width and --height must be at least 1");
    }

    let stage = stage_at(Storyboard::registry()?, args.at, args.width, args.height);
    println!("{}", stage.canvas.to_plain_text());
    if !stage.subtitle.is_empty() {
        println!();
        println!("{}", stage.subtitle.text());
    }
    Ok(())
}
