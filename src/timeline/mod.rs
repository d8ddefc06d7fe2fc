//! Virtual timeline clock.
//!
//! Turns the wall-clock timestamps delivered by the frame source into a
//! monotonic, speed-scaled elapsed time that the scheduler maps onto scenes.

mod clock;

pub use clock::{ClockError, TimelineClock, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
