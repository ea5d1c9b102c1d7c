/// A 2D vector used for positions, velocities and steering directions.
///
/// Every operation returns a new value; nothing mutates in place except the
/// `AddAssign` impl used when accumulating zone sums.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        Self {
            x: math::cos(angle),
            y: math::sin(angle),
        }
    }

    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn subtract(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn scale(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    pub fn magnitude(&self) -> f32 {
        math::sqrt(self.x * self.x + self.y * self.y)
    }

    /// Returns the unit vector in the same direction, or the zero vector when
    /// the magnitude is zero.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    pub fn distance(&self, other: &Vector2) -> f32 {
        self.subtract(*other).magnitude()
    }

    /// Heading angle in radians, `atan2(y, x)`.
    pub fn angle(&self) -> f32 {
        math::atan2(self.y, self.x)
    }

    #[cfg(test)]
    pub(crate) fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl core::ops::Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2::add(self, other)
    }
}

impl core::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl core::ops::Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        self.scale(scalar)
    }
}

impl core::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Float helpers that go through `libm` when `std` is unavailable.
pub(crate) mod math {
    #[cfg(feature = "std")]
    pub fn sqrt(v: f32) -> f32 {
        v.sqrt()
    }

    #[cfg(not(feature = "std"))]
    pub fn sqrt(v: f32) -> f32 {
        libm::sqrtf(v)
    }

    /// Non-negative remainder of `v / m`, for `m > 0`.
    #[cfg(feature = "std")]
    pub fn rem_euclid(v: f32, m: f32) -> f32 {
        v.rem_euclid(m)
    }

    #[cfg(not(feature = "std"))]
    pub fn rem_euclid(v: f32, m: f32) -> f32 {
        let r = libm::fmodf(v, m);
        if r < 0.0 {
            r + m
        } else {
            r
        }
    }

    #[cfg(feature = "std")]
    pub fn atan2(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }

    #[cfg(not(feature = "std"))]
    pub fn atan2(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }

    #[cfg(feature = "std")]
    pub fn sin(v: f32) -> f32 {
        v.sin()
    }

    #[cfg(not(feature = "std"))]
    pub fn sin(v: f32) -> f32 {
        libm::sinf(v)
    }

    #[cfg(feature = "std")]
    pub fn cos(v: f32) -> f32 {
        v.cos()
    }

    #[cfg(not(feature = "std"))]
    pub fn cos(v: f32) -> f32 {
        libm::cosf(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2_magnitude() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_vector2_normalize() {
        let v = Vector2::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        let n = Vector2::zero().normalize();
        assert_eq!(n, Vector2::zero());
        assert!(!n.x.is_nan() && !n.y.is_nan());
    }

    #[test]
    fn test_normalized_magnitude_is_zero_or_one() {
        let samples = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1e-6, 0.0),
            Vector2::new(-250.0, 13.0),
            Vector2::new(0.0, -0.5),
            Vector2::new(1e6, 1e6),
        ];
        for v in samples {
            let mag = v.normalize().magnitude();
            if v.is_zero() {
                assert_eq!(mag, 0.0);
            } else {
                assert!((mag - 1.0).abs() < 1e-5, "{:?} -> {}", v, mag);
            }
        }
    }

    #[test]
    fn test_vector2_operations() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);

        let sum = v1 + v2;
        assert_eq!(sum, Vector2::new(4.0, 6.0));

        let diff = v2 - v1;
        assert_eq!(diff, Vector2::new(2.0, 2.0));

        let scaled = v1 * 2.0;
        assert_eq!(scaled, Vector2::new(2.0, 4.0));

        // Operations return fresh values and leave the operands alone.
        assert_eq!(v1, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_from_angle_round_trips_through_angle() {
        let v = Vector2::from_angle(1.0);
        assert!((v.magnitude() - 1.0).abs() < 1e-6);
        assert!((v.angle() - 1.0).abs() < 1e-6);
    }
}
