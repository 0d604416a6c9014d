use crate::rtweekend::*;

/// Ordered collection of surfaces answering for their nearest hit.
#[derive(Default)]
pub struct HittableList {
    pub objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with(object: Arc<dyn Hittable>) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at(z: f64, radius: f64, albedo: f64) -> Arc<dyn Hittable> {
        let mat: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(albedo)));
        Arc::new(Sphere::new(Point3::new(0.0, 0.0, z), radius, mat))
    }

    #[test]
    fn test_reports_nearest_regardless_of_order() {
        let mut world = HittableList::new();
        world.add(sphere_at(-5.0, 0.5, 0.1));
        world.add(sphere_at(-2.0, 0.5, 0.2));
        world.add(sphere_at(-8.0, 0.5, 0.3));

        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let rec = world.hit(&ray, Interval::new(0.001, INFINITY)).unwrap();

        assert!((rec.t - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_equal_distance_keeps_first_surface() {
        let first: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.1)));
        let second: Arc<dyn Material> = Arc::new(Metal::new(Color::splat(0.9), 0.0));
        let center = Point3::new(0.0, 0.0, -2.0);

        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(center, 0.5, Arc::clone(&first))));
        world.add(Arc::new(Sphere::new(center, 0.5, Arc::clone(&second))));

        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let rec = world.hit(&ray, Interval::new(0.001, INFINITY)).unwrap();

        assert!((rec.t - 1.5).abs() < 1e-12);
        assert!(Arc::ptr_eq(&rec.mat, &first));
        assert!(!Arc::ptr_eq(&rec.mat, &second));
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert!(world.hit(&ray, Interval::UNIVERSE).is_none());
    }

    #[test]
    fn test_new_with_and_clear() {
        let mut world = HittableList::new_with(sphere_at(-1.0, 0.5, 0.5));
        assert_eq!(world.len(), 1);
        world.clear();
        assert!(world.is_empty());
    }
}
