use crate::config::{Bounds, PointerState, SchoolConfig};
use crate::steering::steer_towards;
use crate::vector::{math, Vector2};
use crate::zones;

#[cfg(feature = "std")]
use rand::Rng;

/// How the shill chases the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekPolicy {
    /// Pointer distance below which the shill holds course instead of seeking.
    pub deadzone: f32,
}

impl SeekPolicy {
    /// Direction toward `target`, or `None` inside the deadzone.
    pub fn seek(&self, position: Vector2, target: Vector2) -> Option<Vector2> {
        let offset = target - position;
        if offset.magnitude() > self.deadzone {
            Some(offset.normalize())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// Follows the zonal rules of the school.
    Normal,
    /// Ignores the school and seeks the pointer.
    Shill(SeekPolicy),
}

impl Role {
    pub fn shill(config: &SchoolConfig) -> Self {
        Role::Shill(SeekPolicy {
            deadzone: config.pointer_deadzone,
        })
    }
}

/// A single fish.
///
/// `velocity` is always a unit heading scaled by the configured speed. The
/// only exception is a fish built by hand with a zero velocity, which then
/// stays put until something gives it a heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub position: Vector2,
    pub velocity: Vector2,
    pub role: Role,
}

impl Fish {
    pub fn new(position: Vector2, velocity: Vector2, role: Role) -> Self {
        Self {
            position,
            velocity,
            role,
        }
    }

    /// A fish at a random position inside `bounds` with a random heading.
    #[cfg(feature = "std")]
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: Bounds,
        role: Role,
        config: &SchoolConfig,
    ) -> Self {
        let position = Vector2::new(
            sample_extent(rng, bounds.width),
            sample_extent(rng, bounds.height),
        );
        let angle = rng.gen_range(0.0..core::f32::consts::TAU);
        Self::new(position, Vector2::from_angle(angle) * config.speed, role)
    }

    pub fn is_shill(&self) -> bool {
        matches!(self.role, Role::Shill(_))
    }

    /// Heading angle in radians, used to orient the sprite.
    pub fn heading(&self) -> f32 {
        self.velocity.angle()
    }

    /// Where this fish wants to go next tick.
    ///
    /// `school[index]` must be this fish; the rest of `school` is read as the
    /// frame-start state of its neighbors.
    pub fn desired_direction(
        &self,
        index: usize,
        school: &[Fish],
        pointer: &PointerState,
        config: &SchoolConfig,
    ) -> Vector2 {
        match self.role {
            Role::Shill(policy) => pointer
                .target()
                .and_then(|target| policy.seek(self.position, target))
                .unwrap_or(self.velocity),
            Role::Normal => zones::classify(index, school, config)
                .desired_direction()
                .unwrap_or(self.velocity),
        }
    }

    /// Turns toward `desired`, moves one step and wraps around the edges.
    pub fn advance(&mut self, desired: Vector2, config: &SchoolConfig, bounds: Bounds) {
        if desired.magnitude() > 0.0 {
            self.velocity = steer_towards(self.velocity, desired, config.max_turn_rate) * config.speed;
        }
        self.position += self.velocity;
        self.wrap_edges(bounds);
    }

    /// Toroidal wrap: leaving one side re-enters from the opposite one.
    pub fn wrap_edges(&mut self, bounds: Bounds) {
        self.position.x = wrap_coordinate(self.position.x, bounds.width);
        self.position.y = wrap_coordinate(self.position.y, bounds.height);
    }
}

/// Uniform in `[0, extent)`, or `0.0` for an empty or non-finite extent.
#[cfg(feature = "std")]
fn sample_extent<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 && extent.is_finite() {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

/// Brings `value` back into `[0, extent]` however far outside it is.
fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    if !(extent > 0.0 && extent.is_finite()) {
        return 0.0;
    }
    if (0.0..=extent).contains(&value) {
        value
    } else {
        math::rem_euclid(value, extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn test_fish_creation() {
        let fish = Fish::new(Vector2::new(10.0, 20.0), Vector2::new(1.0, 1.0), Role::Normal);
        assert_eq!(fish.position, Vector2::new(10.0, 20.0));
        assert_eq!(fish.velocity, Vector2::new(1.0, 1.0));
        assert!(!fish.is_shill());
    }

    #[test]
    fn test_wrap_edges_wraps_to_opposite_side() {
        let mut fish = Fish::new(Vector2::new(801.0, -1.0), Vector2::zero(), Role::Normal);
        fish.wrap_edges(bounds());
        assert!((fish.position.x - 1.0).abs() < 1e-4);
        assert!((fish.position.y - 599.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_edges_keeps_inside_points() {
        let mut fish = Fish::new(Vector2::new(800.0, 0.0), Vector2::zero(), Role::Normal);
        fish.wrap_edges(bounds());
        assert_eq!(fish.position, Vector2::new(800.0, 0.0));
    }

    #[test]
    fn test_wrap_edges_handles_several_extents() {
        let mut fish = Fish::new(Vector2::new(2450.0, -1230.0), Vector2::zero(), Role::Normal);
        fish.wrap_edges(bounds());
        assert!((fish.position.x - 50.0).abs() < 1e-2);
        assert!((fish.position.y - 570.0).abs() < 1e-2);
    }

    #[test]
    fn test_wrap_edges_in_empty_world() {
        let mut fish = Fish::new(Vector2::new(12.0, 7.0), Vector2::zero(), Role::Normal);
        fish.wrap_edges(Bounds::new(0.0, f32::NAN));
        assert_eq!(fish.position, Vector2::zero());
    }

    #[test]
    fn test_random_fish_in_empty_world() {
        let mut rng = rand::thread_rng();
        let config = SchoolConfig::default();
        let fish = Fish::random(&mut rng, Bounds::new(0.0, f32::NAN), Role::Normal, &config);
        assert_eq!(fish.position, Vector2::zero());
        assert!((fish.velocity.magnitude() - config.speed).abs() < 1e-5);
    }

    #[test]
    fn test_advance_keeps_speed_constant() {
        let config = SchoolConfig::default();
        let mut fish = Fish::new(
            Vector2::new(400.0, 300.0),
            Vector2::new(config.speed, 0.0),
            Role::Normal,
        );
        fish.advance(Vector2::new(0.0, 1.0), &config, bounds());
        assert!((fish.velocity.magnitude() - config.speed).abs() < 1e-5);
        assert!((fish.heading() - config.max_turn_rate).abs() < 1e-5);
    }

    #[test]
    fn test_shill_seeks_active_pointer() {
        let config = SchoolConfig::default();
        let shill = Fish::new(
            Vector2::new(100.0, 100.0),
            Vector2::new(config.speed, 0.0),
            Role::shill(&config),
        );
        let school = [shill.clone()];
        let mut pointer = PointerState::inactive();

        let desired = shill.desired_direction(0, &school, &pointer, &config);
        assert_eq!(desired, shill.velocity);

        pointer.move_to(100.0, 200.0);
        let desired = shill.desired_direction(0, &school, &pointer, &config);
        assert!((desired.y - 1.0).abs() < 1e-6);

        pointer.move_to(103.0, 100.0);
        let desired = shill.desired_direction(0, &school, &pointer, &config);
        assert_eq!(desired, shill.velocity);
    }

    #[test]
    fn test_shill_ignores_the_school() {
        let config = SchoolConfig::default();
        let shill = Fish::new(
            Vector2::new(100.0, 100.0),
            Vector2::new(0.0, config.speed),
            Role::shill(&config),
        );
        let crowd = Fish::new(Vector2::new(105.0, 100.0), Vector2::zero(), Role::Normal);
        let school = [shill.clone(), crowd];

        let desired = shill.desired_direction(0, &school, &PointerState::inactive(), &config);
        assert_eq!(desired, shill.velocity);
    }

    #[test]
    fn test_lonely_fish_coasts() {
        let config = SchoolConfig::default();
        let fish = Fish::new(Vector2::new(10.0, 10.0), Vector2::new(0.0, 1.2), Role::Normal);
        let far = Fish::new(Vector2::new(500.0, 500.0), Vector2::new(1.2, 0.0), Role::Normal);
        let school = [fish.clone(), far];

        let desired = fish.desired_direction(0, &school, &PointerState::inactive(), &config);
        assert_eq!(desired, fish.velocity);
    }
}
