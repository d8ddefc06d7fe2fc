//! Timeline clock: wall-clock deltas scaled into virtual seconds.

/// Speed used when nothing else is configured.
pub const DEFAULT_SPEED: f64 = 1.0;
/// Lower bound used by the stepped speed controls.
pub const MIN_SPEED: f64 = 0.1;
/// Upper bound used by the stepped speed controls.
pub const MAX_SPEED: f64 = 16.0;

/// Errors raised by the timeline clock.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ClockError {
    #[error("Invalid playback speed {0}: must be a finite number greater than zero")]
    InvalidSpeed(f64),
}

/// Converts successive frame timestamps into virtual elapsed time.
///
/// Timestamps are seconds since an arbitrary epoch. The first timestamp
/// after creation, [`suspend`](Self::suspend) or [`reset`](Self::reset)
/// only establishes the reference point and contributes no time.
#[derive(Debug, Clone)]
pub struct TimelineClock {
    /// Virtual seconds accumulated so far
    elapsed: f64,
    /// Multiplier applied to each wall-clock delta
    speed: f64,
    /// Latest timestamp seen while running
    last_timestamp: Option<f64>,
}

impl TimelineClock {
    /// Create a clock at zero running at [`DEFAULT_SPEED`].
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            speed: DEFAULT_SPEED,
            last_timestamp: None,
        }
    }

    /// Create a clock at zero with the given speed.
    pub fn with_speed(speed: f64) -> Result<Self, ClockError> {
        let mut clock = Self::new();
        clock.set_speed(speed)?;
        Ok(clock)
    }

    /// Virtual seconds elapsed.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether a reference timestamp is held (i.e. the next advance will
    /// produce a delta).
    pub fn is_anchored(&self) -> bool {
        self.last_timestamp.is_some()
    }

    /// Change the speed multiplier.
    ///
    /// Applies from the next delta onwards; time already accumulated is not
    /// rescaled. Rejects zero, negative and non-finite values and keeps the
    /// previous speed.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), ClockError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ClockError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Feed the next frame timestamp and return the virtual time added.
    ///
    /// Out-of-order timestamps add nothing and do not move the reference
    /// point backwards. Non-finite timestamps are ignored entirely.
    pub fn advance(&mut self, timestamp: f64) -> f64 {
        if !timestamp.is_finite() {
            return 0.0;
        }

        let (delta, reference) = match self.last_timestamp {
            Some(previous) => ((timestamp - previous).max(0.0), previous.max(timestamp)),
            None => (0.0, timestamp),
        };
        self.last_timestamp = Some(reference);

        let scaled = delta * self.speed;
        self.elapsed += scaled;
        scaled
    }

    /// Drop the reference timestamp so the interval until the next
    /// [`advance`](Self::advance) is never counted.
    pub fn suspend(&mut self) {
        self.last_timestamp = None;
    }

    /// Rewind to zero. Speed is kept.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.last_timestamp = None;
    }
}

impl Default for TimelineClock {
    fn default() -> Self {
        Self::new()
    }
}
