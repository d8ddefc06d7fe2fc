//! Integration tests for scenereel

mod cli_test;
mod helpers;
mod narration_test;
mod scheduler_test;
mod storyboard_test;
