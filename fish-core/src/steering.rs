//! Turn-rate limited heading updates.

use crate::vector::Vector2;
use core::f32::consts::PI;

const TAU: f32 = 2.0 * PI;

/// Normalizes an angular difference into `(-π, π]`, the shortest way around.
pub fn shortest_turn(mut delta: f32) -> f32 {
    while delta > PI {
        delta -= TAU;
    }
    while delta <= -PI {
        delta += TAU;
    }
    delta
}

/// Rotates `current` toward `desired` by at most `max_turn_rate` radians.
///
/// Returns the new unit heading; the caller rescales it by speed. A zero
/// `desired` leaves `current` untouched.
pub fn steer_towards(current: Vector2, desired: Vector2, max_turn_rate: f32) -> Vector2 {
    if desired.magnitude() <= 0.0 {
        return current;
    }

    let target_angle = desired.angle();
    let current_angle = current.angle();
    let turn = shortest_turn(target_angle - current_angle).clamp(-max_turn_rate, max_turn_rate);

    Vector2::from_angle(current_angle + turn)
}
