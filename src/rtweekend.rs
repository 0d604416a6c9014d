pub use crate::camera::Camera;
pub use crate::color::{Color, color_to_bytes, linear_to_gamma, write_color};
pub use crate::error::{RenderError, RenderResult};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::hittable_list::HittableList;
pub use crate::interval::Interval;
pub use crate::material::{Dielectric, Lambertian, Material, Metal};
pub use crate::ray::Ray;
pub use crate::render::RowBuffer;
pub use crate::sphere::Sphere;
pub use crate::vec3::{Point3, Vec3};

pub use rand::RngCore;
pub use std::sync::Arc;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Uniform draw in `[0, 1)`.
#[inline]
pub fn random_f64(rng: &mut dyn RngCore) -> f64 {
    rng.random::<f64>()
}

#[inline]
pub fn random_f64_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}

/// Generator for image row `row`, derived from the render's base seed.
///
/// Rows never share a stream, so the pixels of a row depend only on
/// `(base_seed, row)` and not on which worker renders it.
pub fn row_rng(base_seed: u64, row: u32) -> StdRng {
    StdRng::seed_from_u64(base_seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
