//! Ready-made worlds and matching camera setups.

use crate::rtweekend::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Ground, a diffuse center sphere, a hollow glass sphere and a fuzzy metal
/// sphere, seen head-on.
pub fn three_spheres() -> (HittableList, Camera) {
    let material_ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let material_center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let material_left: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    let material_bubble: Arc<dyn Material> = Arc::new(Dielectric::new(1.0 / 1.5));
    let material_right: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, material_ground)));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, material_center)));
    world.add(Arc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, material_left)));
    world.add(Arc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.4, material_bubble)));
    world.add(Arc::new(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, material_right)));

    let camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_sampling(100, 50)
        .with_view(
            20.0,
            Point3::new(-2.0, 2.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .with_focus(10.0, 3.4);

    (world, camera)
}

/// Mirror floor with three large orbs and a field of small random spheres.
///
/// `seed` drives sphere placement and materials only, not the render.
pub fn showcase(seed: u64) -> (HittableList, Camera) {
    let mut rng = StdRng::seed_from_u64(seed);

    let ground: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.1, 0.1, 0.15), 0.05));
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    let gold: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));
    let cobalt: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.01, 0.0, 0.6), 0.0));
    let bubbles: Arc<dyn Material> = Arc::new(Dielectric::new(1.3));
    let pale: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.9, 0.9, 0.7)));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Point3::new(0.0, -1000.0, -1.0), 1000.0, ground)));

    let orbs = [
        (Point3::new(0.0, 1.0, 0.0), glass),
        (Point3::new(-4.0, 1.0, 0.0), gold),
        (Point3::new(4.0, 1.0, 0.0), cobalt),
    ];

    let small_radius = 0.2;
    for a in -3..3 {
        for b in -3..3 {
            let choose_mat = random_f64(&mut rng);
            let center = Point3::new(
                a as f64 + 0.9 * random_f64(&mut rng),
                small_radius,
                b as f64 + 0.9 * random_f64(&mut rng),
            );

            let clear_of_orbs = orbs
                .iter()
                .all(|(orb, _)| (center - *orb).length() > 1.0 + small_radius);
            if !clear_of_orbs {
                continue;
            }

            let mat: Arc<dyn Material> = if choose_mat < 0.3 {
                let albedo = Color::random(&mut rng) * Color::random(&mut rng);
                Arc::new(Lambertian::new(albedo))
            } else if choose_mat < 0.6 {
                let albedo = Color::random_range(&mut rng, 0.5, 1.0);
                let fuzz = random_f64_range(&mut rng, 0.0, 0.5);
                Arc::new(Metal::new(albedo, fuzz))
            } else if choose_mat < 0.8 {
                Arc::clone(&bubbles)
            } else {
                Arc::clone(&pale)
            };
            world.add(Arc::new(Sphere::new(center, small_radius, mat)));
        }
    }

    for (center, mat) in orbs {
        world.add(Arc::new(Sphere::new(center, 1.0, mat)));
    }

    let lookfrom = Point3::new(8.0, 2.5, 10.0);
    let camera = Camera::new()
        .with_image(16.0 / 9.0, 600)
        .with_sampling(10, 10)
        .with_view(25.0, lookfrom, Point3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 1.0, 0.0))
        .with_focus(0.8, (lookfrom - Point3::new(0.0, 1.0, 0.0)).length());

    (world, camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_spheres_layout() {
        let (world, mut camera) = three_spheres();
        assert_eq!(world.len(), 5);
        camera.initialize().unwrap();
    }

    #[test]
    fn test_showcase_is_deterministic_per_seed() {
        let (a, _) = showcase(3);
        let (b, _) = showcase(3);
        assert_eq!(a.len(), b.len());
        // Ground plus the three large orbs are always present.
        assert!(a.len() >= 4);
    }

    #[test]
    fn test_showcase_camera_is_valid() {
        let (_, camera) = showcase(0);
        assert!(camera.validate().is_ok());
    }
}
