//! Offline Monte-Carlo path tracer for scenes made of spheres.
//!
//! A [`Camera`](camera::Camera) traces jittered rays through a
//! [`HittableList`](hittable_list::HittableList), scatters them off
//! [`Material`](material::Material)s and writes one formatted text row per
//! scanline into a [`RowBuffer`](render::RowBuffer).

pub mod camera;
pub mod color;
pub mod error;
pub mod hittable;
pub mod hittable_list;
pub mod interval;
pub mod material;
pub mod ray;
pub mod render;
pub mod rtweekend;
pub mod scene;
pub mod sphere;
pub mod vec3;

pub use rtweekend::*;
