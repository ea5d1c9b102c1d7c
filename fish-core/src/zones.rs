//! Couzin zone classification of a fish's neighbors.

use crate::config::SchoolConfig;
use crate::fish::Fish;
use crate::vector::Vector2;

/// Weighted per-zone sums around one fish.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneSummary {
    pub repel: Vector2,
    pub repel_count: usize,
    pub orient: Vector2,
    pub orient_count: usize,
    pub attract: Vector2,
    pub attract_count: usize,
}

impl ZoneSummary {
    pub fn is_empty(&self) -> bool {
        self.repel_count == 0 && self.orient_count == 0 && self.attract_count == 0
    }

    /// Desired direction by strict zone priority, or `None` when no zone has
    /// members. Repulsion alone wins whenever it has any member.
    pub fn desired_direction(&self) -> Option<Vector2> {
        if self.repel_count > 0 {
            return Some(self.repel.normalize());
        }
        if self.is_empty() {
            return None;
        }

        let mut desired = Vector2::zero();
        if self.orient_count > 0 {
            desired += self.orient.normalize();
        }
        if self.attract_count > 0 {
            desired += self.attract.normalize();
        }
        Some(desired.normalize())
    }
}

/// Classifies every fish in `school` other than `school[index]`.
///
/// Zones use strict inequalities, so a neighbor at exactly `0`,
/// `repel_radius` or `orient_radius` lands in no zone at all.
pub fn classify(index: usize, school: &[Fish], config: &SchoolConfig) -> ZoneSummary {
    let mut summary = ZoneSummary::default();
    let me = &school[index];

    for (i, other) in school.iter().enumerate() {
        if i == index {
            continue;
        }

        let offset = me.position - other.position;
        let distance = offset.magnitude();
        let weight = if other.is_shill() {
            config.shill_influence
        } else {
            1.0
        };

        if distance > 0.0 && distance < config.repel_radius {
            summary.repel += offset.normalize() * weight;
            summary.repel_count += 1;
        }
        if distance > config.repel_radius && distance < config.orient_radius {
            summary.orient += other.velocity.normalize() * weight;
            summary.orient_count += 1;
        }
        if distance > config.orient_radius && distance < config.attract_radius {
            summary.attract += (other.position - me.position).normalize() * weight;
            summary.attract_count += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fish::Role;

    fn normal(x: f32, y: f32, heading: f32) -> Fish {
        Fish::new(Vector2::new(x, y), Vector2::from_angle(heading), Role::Normal)
    }

    #[test]
    fn test_boundary_distances_fall_in_no_zone() {
        let config = SchoolConfig::default();
        let school = [
            normal(200.0, 200.0, 0.0),
            normal(200.0 + config.repel_radius, 200.0, 0.0),
            normal(200.0, 200.0 - config.orient_radius, 0.0),
            normal(200.0 - config.attract_radius, 200.0, 0.0),
            normal(200.0, 200.0, 1.0),
        ];

        let summary = classify(0, &school, &config);
        assert!(summary.is_empty(), "{:?}", summary);
        assert_eq!(summary.desired_direction(), None);
    }

    #[test]
    fn test_each_zone_collects_its_band() {
        let config = SchoolConfig::default();
        let school = [
            normal(100.0, 100.0, 0.0),
            normal(110.0, 100.0, 0.0),
            normal(100.0, 130.0, 1.0),
            normal(170.0, 100.0, 0.0),
            normal(400.0, 400.0, 0.0),
        ];

        let summary = classify(0, &school, &config);
        assert_eq!(summary.repel_count, 1);
        assert_eq!(summary.orient_count, 1);
        assert_eq!(summary.attract_count, 1);

        // Away from the close neighbor, along its heading, toward the far one.
        assert!((summary.repel.x + 1.0).abs() < 1e-6);
        assert!((summary.orient.angle() - 1.0).abs() < 1e-6);
        assert!((summary.attract.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_shill_counts_with_influence() {
        let config = SchoolConfig::default();
        let mut shill = normal(100.0, 130.0, 0.0);
        shill.role = Role::shill(&config);
        let school = [normal(100.0, 100.0, 0.0), shill];

        let summary = classify(0, &school, &config);
        assert_eq!(summary.orient_count, 1);
        assert!((summary.orient.magnitude() - config.shill_influence).abs() < 1e-5);
    }

    #[test]
    fn test_repulsion_preempts_other_zones() {
        let config = SchoolConfig::default();
        let school = [
            normal(100.0, 100.0, 0.0),
            normal(100.0, 110.0, 0.0),
            normal(180.0, 100.0, 0.0),
        ];

        let summary = classify(0, &school, &config);
        assert_eq!(summary.repel_count, 1);
        assert_eq!(summary.attract_count, 1);

        let desired = summary.desired_direction().unwrap();
        assert!((desired.x - 0.0).abs() < 1e-6);
        assert!((desired.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orientation_and_attraction_blend() {
        let config = SchoolConfig::default();
        let school = [
            normal(100.0, 100.0, 0.0),
            // Heading +y, in the orientation band.
            normal(100.0, 140.0, core::f32::consts::FRAC_PI_2),
            // Due +x, in the attraction band.
            normal(175.0, 100.0, 0.0),
        ];

        let desired = classify(0, &school, &config).desired_direction().unwrap();
        let diag = core::f32::consts::FRAC_1_SQRT_2;
        assert!((desired.x - diag).abs() < 1e-5);
        assert!((desired.y - diag).abs() < 1e-5);
    }
}
