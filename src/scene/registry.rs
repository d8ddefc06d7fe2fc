//! Ordered, immutable scene list with cumulative-time lookup.

/// Errors raised while building a registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("A timeline needs at least one scene")]
    Empty,

    #[error("Scene {index} ('{name}') has invalid duration {duration}: must be finite and positive")]
    InvalidDuration {
        index: usize,
        name: String,
        duration: f64,
    },
}

/// Half-open interval `[start, end)` a scene occupies on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneRange {
    pub start: f64,
    pub end: f64,
}

impl SceneRange {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `t` falls inside `[start, end)`.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t < self.end
    }
}

/// The scenes of a timeline in playback order.
#[derive(Debug, Clone)]
pub struct SceneRegistry<S> {
    scenes: Vec<S>,
    /// Cumulative end time of each scene
    ends: Vec<f64>,
}

impl<S: super::Scene> SceneRegistry<S> {
    /// Validate and index the scenes.
    pub fn new(scenes: Vec<S>) -> Result<Self, RegistryError> {
        if scenes.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut ends = Vec::with_capacity(scenes.len());
        let mut cumulative = 0.0f64;
        for (index, scene) in scenes.iter().enumerate() {
            let duration = scene.duration();
            if !duration.is_finite() || duration <= 0.0 {
                return Err(RegistryError::InvalidDuration {
                    index,
                    name: scene.name().to_string(),
                    duration,
                });
            }
            cumulative += duration;
            ends.push(cumulative);
        }

        Ok(Self { scenes, ends })
    }

    /// Number of scenes (never zero).
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.scenes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.scenes.iter()
    }

    /// Sum of all durations; the end of the timeline.
    pub fn total_duration(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Timeline bounds of a scene.
    pub fn range_of(&self, index: usize) -> Option<SceneRange> {
        let end = *self.ends.get(index)?;
        let start = if index == 0 { 0.0 } else { self.ends[index - 1] };
        Some(SceneRange { start, end })
    }

    /// Bounds of every scene, in order.
    pub fn ranges(&self) -> impl Iterator<Item = SceneRange> + '_ {
        (0..self.len()).filter_map(|i| self.range_of(i))
    }

    /// Index of the scene playing at time `t`.
    ///
    /// The smallest index whose cumulative end is strictly greater than `t`,
    /// so a boundary instant belongs to the later scene. Times at or past the
    /// end clamp to the last scene; negative times resolve to the first.
    pub fn resolve(&self, t: f64) -> usize {
        let index = self.ends.partition_point(|&end| end <= t);
        index.min(self.scenes.len() - 1)
    }
}
