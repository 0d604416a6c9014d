use sphere_tracer::*;
use std::thread;
use std::time::Duration;

fn single_diffuse_sphere() -> HittableList {
    let grey: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.5)));
    HittableList::new_with(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, grey)))
}

fn mixed_scene() -> HittableList {
    let (world, _) = scene::three_spheres();
    world
}

fn small_camera(width: u32, samples: u32, depth: u32) -> Camera {
    Camera::new()
        .with_image(1.0, width)
        .with_sampling(samples, depth)
        .with_seed(1234)
}

/// Sleeps before answering for rays aimed at the upper part of the image,
/// so the worker owning the first rows finishes last.
struct SlowUpperRows<H> {
    inner: H,
    delay: Duration,
}

impl<H: Hittable> Hittable for SlowUpperRows<H> {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        if r.dir.y > 0.5 * r.dir.length() {
            thread::sleep(self.delay);
        }
        self.inner.hit(r, ray_t)
    }
}

#[test]
fn repeated_renders_produce_identical_rows() {
    let world = single_diffuse_sphere();
    let mut camera = small_camera(16, 1, 1);

    let first = camera.render_with_threads(&world, 3).unwrap();
    let second = camera.render_with_threads(&world, 3).unwrap();

    assert_eq!(first, second);
}

#[test]
fn diffuse_sphere_at_depth_one_is_black_against_the_sky() {
    let world = single_diffuse_sphere();
    let mut camera = small_camera(9, 1, 1);

    let rows = camera.render_with_threads(&world, 2).unwrap();
    let center_row = rows.row(4).unwrap();
    let center_pixel = center_row.lines().nth(4).unwrap();
    assert_eq!(center_pixel, "0 0 0");

    // Corner pixel misses the sphere and sees sky.
    let corner_pixel = rows.row(0).unwrap().lines().next().unwrap();
    assert_ne!(corner_pixel, "0 0 0");
}

#[test]
fn output_does_not_depend_on_worker_count() {
    let world = mixed_scene();
    let mut camera = small_camera(20, 4, 8);

    let sequential = camera.render_with_threads(&world, 1).unwrap();
    for threads in [2, 3, 7, 64] {
        let parallel = camera.render_with_threads(&world, threads).unwrap();
        assert_eq!(sequential, parallel, "{threads} workers");
    }
}

#[test]
fn delayed_worker_does_not_reorder_rows() {
    let world = SlowUpperRows {
        inner: mixed_scene(),
        delay: Duration::from_millis(2),
    };
    let mut camera = small_camera(12, 1, 4);

    let sequential = camera.render_with_threads(&world, 1).unwrap();
    let parallel = camera.render_with_threads(&world, 4).unwrap();

    assert_eq!(sequential.rows(), parallel.rows());
}

#[test]
fn ppm_output_has_header_and_one_triple_per_pixel() {
    let world = mixed_scene();
    let mut camera = Camera::new()
        .with_image(2.0, 10)
        .with_sampling(2, 5)
        .with_seed(7);

    let mut out = Vec::new();
    camera.render_to(&world, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("10 5"));
    assert_eq!(lines.next(), Some("255"));

    let pixels: Vec<&str> = lines.collect();
    assert_eq!(pixels.len(), 50);
    for pixel in pixels {
        let channels: Vec<u32> = pixel
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect();
        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|&c| c <= 255));
    }
}

#[test]
fn zero_threads_is_rejected() {
    let world = single_diffuse_sphere();
    let mut camera = small_camera(4, 1, 1);

    assert!(matches!(
        camera.render_with_threads(&world, 0),
        Err(RenderError::InvalidConfig(_))
    ));
}

#[test]
fn invalid_camera_is_rejected_before_rendering() {
    let world = single_diffuse_sphere();
    let mut camera = small_camera(4, 0, 1);

    assert!(matches!(
        camera.render(&world),
        Err(RenderError::InvalidConfig(_))
    ));
}
