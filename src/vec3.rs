use crate::rtweekend::*;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

pub type Point3 = Vec3;

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// True when every component is within `1e-8` of zero.
    pub fn near_zero(&self) -> bool {
        let s = 1e-8;
        self.x.abs() < s && self.y.abs() < s && self.z.abs() < s
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Components drawn uniformly from `[0, 1)`.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self::new(random_f64(rng), random_f64(rng), random_f64(rng))
    }

    pub fn random_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Self {
        Self::new(
            random_f64_range(rng, min, max),
            random_f64_range(rng, min, max),
            random_f64_range(rng, min, max),
        )
    }

    /// Rejection-samples a point strictly inside the unit ball.
    pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Self {
        loop {
            let p = Self::random_range(rng, -1.0, 1.0);
            let len_sq = p.length_squared();
            // Points too close to the origin blow up on normalization.
            if 1e-160 < len_sq && len_sq < 1.0 {
                return p;
            }
        }
    }

    pub fn random_unit_vector(rng: &mut dyn RngCore) -> Self {
        Self::random_in_unit_sphere(rng).normalized()
    }

    /// Rejection-samples a point inside the unit disk on the z = 0 plane.
    pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Self {
        loop {
            let p = Self::new(
                random_f64_range(rng, -1.0, 1.0),
                random_f64_range(rng, -1.0, 1.0),
                0.0,
            );
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Mirrors `v` about the plane with normal `n`.
    pub fn reflect(v: Self, n: Self) -> Self {
        v - 2.0 * v.dot(n) * n
    }

    /// Bends the unit vector `uv` through a surface with normal `n` by Snell's law.
    ///
    /// The caller rules out total internal reflection beforehand.
    pub fn refract(uv: Self, n: Self, etai_over_etat: f64) -> Self {
        let cos_theta = (-uv).dot(n).min(1.0);
        let r_out_perp = etai_over_etat * (uv + cos_theta * n);
        let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
        r_out_perp + r_out_parallel
    }
}

macro_rules! impl_componentwise {
    ($($trait:ident :: $method:ident => $op:tt),* $(,)?) => {
        $(
            impl $trait for Vec3 {
                type Output = Self;

                fn $method(self, other: Self) -> Self::Output {
                    Self::new(self.x $op other.x, self.y $op other.y, self.z $op other.z)
                }
            }
        )*
    };
}

impl_componentwise!(Add::add => +, Sub::sub => -, Mul::mul => *);

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Self::Output {
        vec * self
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        self * (1.0 / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cross_of_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(Vec3::reflect(v, n), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_straight_through_at_unit_ratio() {
        let uv = Vec3::new(0.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let out = Vec3::refract(uv, n, 1.0);
        assert!((out - uv).length() < 1e-12);
    }

    #[test]
    fn test_random_unit_vector_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = Vec3::random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_random_in_unit_disk_stays_flat() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let p = Vec3::random_in_unit_disk(&mut rng);
            assert_eq!(p.z, 0.0);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_near_zero() {
        assert!(Vec3::splat(1e-9).near_zero());
        assert!(!Vec3::new(0.0, 1e-7, 0.0).near_zero());
    }
}
