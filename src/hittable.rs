use crate::rtweekend::*;

/// Nearest intersection found by a [`Hittable::hit`] query.
#[derive(Clone)]
pub struct HitRecord {
    pub p: Point3,
    /// Always faces against the incoming ray.
    pub normal: Vec3,
    pub mat: Arc<dyn Material>,
    pub t: f64,
    pub front_face: bool,
}

impl HitRecord {
    /// Builds a record at parameter `t` along `r`, orienting `outward_normal`
    /// (assumed unit length) against the ray.
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3, mat: Arc<dyn Material>) -> Self {
        let mut rec = Self {
            p: r.at(t),
            normal: outward_normal,
            mat,
            t,
            front_face: true,
        };
        rec.set_face_normal(r, outward_normal);
        rec
    }

    #[inline]
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = r.dir.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Anything a ray can be intersected with.
///
/// Implementors are immutable once built and are shared read-only by every
/// render worker.
pub trait Hittable: Send + Sync {
    /// Nearest hit with `t` strictly inside `ray_t`, or `None`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
