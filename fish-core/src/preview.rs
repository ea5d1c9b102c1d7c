//! Forward simulation of the shill's course toward the pointer.

use crate::config::SchoolConfig;
use crate::steering::steer_towards;
use crate::vector::Vector2;

/// A preview of where the shill will swim if the pointer stays put.
///
/// Holds a detached copy of the shill's state; iterating never touches the
/// live fish, and every call to [`PathPreview::iter`] replays the walk from
/// the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPreview {
    start: Vector2,
    velocity: Vector2,
    target: Vector2,
    max_steps: usize,
    speed: f32,
    max_turn_rate: f32,
}

impl PathPreview {
    pub fn new(
        position: Vector2,
        velocity: Vector2,
        target: Vector2,
        max_steps: usize,
        config: &SchoolConfig,
    ) -> Self {
        Self {
            start: position,
            velocity,
            target,
            max_steps,
            speed: config.speed,
            max_turn_rate: config.max_turn_rate,
        }
    }

    pub fn start(&self) -> Vector2 {
        self.start
    }

    pub fn target(&self) -> Vector2 {
        self.target
    }

    /// Positions visited after each simulated tick, excluding the start.
    pub fn iter(&self) -> PreviewIter {
        PreviewIter {
            position: self.start,
            velocity: self.velocity,
            remaining: self.max_steps,
            preview: *self,
        }
    }
}

impl IntoIterator for &PathPreview {
    type Item = Vector2;
    type IntoIter = PreviewIter;

    fn into_iter(self) -> PreviewIter {
        self.iter()
    }
}

/// Lazy walk over a [`PathPreview`].
#[derive(Debug, Clone)]
pub struct PreviewIter {
    position: Vector2,
    velocity: Vector2,
    remaining: usize,
    preview: PathPreview,
}

impl Iterator for PreviewIter {
    type Item = Vector2;

    fn next(&mut self) -> Option<Vector2> {
        if self.remaining == 0 {
            return None;
        }
        let to_target = self.preview.target - self.position;
        if to_target.magnitude() < self.preview.speed {
            self.remaining = 0;
            return None;
        }
        self.remaining -= 1;

        let heading = steer_towards(self.velocity, to_target.normalize(), self.preview.max_turn_rate);
        self.velocity = heading;
        self.position += heading * self.preview.speed;
        Some(self.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Previews the shill's path from `position`/`velocity` toward `target`.
pub fn simulate(
    position: Vector2,
    velocity: Vector2,
    target: Vector2,
    max_steps: usize,
    config: &SchoolConfig,
) -> PathPreview {
    PathPreview::new(position, velocity, target, max_steps, config)
}
