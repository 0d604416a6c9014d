use crate::render::{Progress, partition_rows};
use crate::rtweekend::*;
use log::{debug, info};
use rand::Rng;
use std::io::Write;
use std::num::NonZeroUsize;
use std::time::Instant;

/// Lower bound on hit distances; keeps scattered rays off their own surface.
const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Largest accepted image width or derived image height, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 1 << 16;

/// Camera configuration plus the viewport state derived from it.
///
/// The public fields are read once per render; the derived state is rebuilt
/// by [`Camera::initialize`] at the start of every render call.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Image width over height.
    pub aspect_ratio: f64,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    /// Maximum number of bounces per path.
    pub max_depth: u32,

    /// Vertical field of view in degrees.
    pub vfov: f64,
    pub lookfrom: Point3,
    pub lookat: Point3,
    pub vup: Vec3,

    /// Aperture cone angle in degrees; `<= 0` renders a pinhole camera.
    pub defocus_angle: f64,
    /// Distance from `lookfrom` to the plane of perfect focus.
    pub focus_dist: f64,

    /// Base seed for the per-row generators; `None` picks one at random.
    pub seed: Option<u64>,

    image_height: u32,
    pixel_samples_scale: f64,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.0,
            lookfrom: Point3::zero(),
            lookat: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 10.0,
            seed: None,
            image_height: 0,
            pixel_samples_scale: 0.0,
            center: Point3::zero(),
            pixel00_loc: Point3::zero(),
            pixel_delta_u: Vec3::zero(),
            pixel_delta_v: Vec3::zero(),
            u: Vec3::zero(),
            v: Vec3::zero(),
            w: Vec3::zero(),
            defocus_disk_u: Vec3::zero(),
            defocus_disk_v: Vec3::zero(),
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, aspect_ratio: f64, image_width: u32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self.image_width = image_width;
        self
    }

    pub fn with_sampling(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    pub fn with_view(mut self, vfov: f64, lookfrom: Point3, lookat: Point3, vup: Vec3) -> Self {
        self.vfov = vfov;
        self.lookfrom = lookfrom;
        self.lookat = lookat;
        self.vup = vup;
        self
    }

    pub fn with_focus(mut self, defocus_angle: f64, focus_dist: f64) -> Self {
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Height derived by the last [`Camera::initialize`].
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn validate(&self) -> RenderResult<()> {
        let invalid = |msg: String| Err(RenderError::InvalidConfig(msg));

        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return invalid(format!("aspect ratio must be positive, got {}", self.aspect_ratio));
        }
        if self.image_width == 0 {
            return invalid("image width must be at least 1".into());
        }
        if self.image_width > MAX_IMAGE_DIMENSION {
            return invalid(format!(
                "image width {} exceeds {MAX_IMAGE_DIMENSION}",
                self.image_width
            ));
        }
        let height = self.image_width as f64 / self.aspect_ratio;
        if height > MAX_IMAGE_DIMENSION as f64 {
            return invalid(format!(
                "aspect ratio {} gives an image height of {height:.0}, above {MAX_IMAGE_DIMENSION}",
                self.aspect_ratio
            ));
        }
        if self.samples_per_pixel == 0 {
            return invalid("samples per pixel must be at least 1".into());
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return invalid(format!("vertical fov must lie in (0, 180), got {}", self.vfov));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return invalid(format!("focus distance must be positive, got {}", self.focus_dist));
        }
        if !self.defocus_angle.is_finite() {
            return invalid(format!("defocus angle must be finite, got {}", self.defocus_angle));
        }
        let view = self.lookfrom - self.lookat;
        if view.near_zero() {
            return invalid("lookfrom and lookat coincide".into());
        }
        if self.vup.cross(view).near_zero() {
            return invalid("vup is parallel to the view direction".into());
        }
        Ok(())
    }

    /// Validates the configuration and rebuilds the viewport from it.
    pub fn initialize(&mut self) -> RenderResult<()> {
        self.validate()?;

        self.image_height = ((self.image_width as f64 / self.aspect_ratio) as u32).max(1);
        self.pixel_samples_scale = 1.0 / self.samples_per_pixel as f64;
        self.center = self.lookfrom;

        let theta = degrees_to_radians(self.vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f64 / self.image_height as f64);

        self.w = (self.lookfrom - self.lookat).normalized();
        self.u = self.vup.cross(self.w).normalized();
        self.v = self.w.cross(self.u);

        // Image rows run down the viewport, hence -v.
        let viewport_u = viewport_width * self.u;
        let viewport_v = viewport_height * -self.v;

        self.pixel_delta_u = viewport_u / self.image_width as f64;
        self.pixel_delta_v = viewport_v / self.image_height as f64;

        let viewport_upper_left =
            self.center - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        if self.defocus_angle > 0.0 {
            let defocus_radius = self.focus_dist * degrees_to_radians(self.defocus_angle / 2.0).tan();
            self.defocus_disk_u = defocus_radius * self.u;
            self.defocus_disk_v = defocus_radius * self.v;
        } else {
            self.defocus_disk_u = Vec3::zero();
            self.defocus_disk_v = Vec3::zero();
        }

        Ok(())
    }

    /// Renders on one worker per available hardware thread.
    pub fn render(&mut self, world: &dyn Hittable) -> RenderResult<RowBuffer> {
        let threads = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        self.render_with_threads(world, threads)
    }

    /// Renders and streams the result as a `P3` image.
    pub fn render_to<W: Write>(&mut self, world: &dyn Hittable, out: &mut W) -> RenderResult<()> {
        let rows = self.render(world)?;
        rows.write_ppm(out)?;
        Ok(())
    }

    /// Renders on a fixed pool of `threads` workers, each owning a contiguous
    /// block of rows.
    pub fn render_with_threads(
        &mut self,
        world: &dyn Hittable,
        threads: usize,
    ) -> RenderResult<RowBuffer> {
        if threads == 0 {
            return Err(RenderError::InvalidConfig("thread count must be at least 1".into()));
        }
        self.initialize()?;

        let base_seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let partitions = partition_rows(self.image_height, threads);
        info!(
            "Rendering {}x{} at {} samples/pixel, max depth {}, on {} workers",
            self.image_width,
            self.image_height,
            self.samples_per_pixel,
            self.max_depth,
            partitions.len()
        );
        debug!("Base seed {base_seed}, row partitions {partitions:?}");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(partitions.len())
            .thread_name(|i| format!("render-worker-{i}"))
            .build()
            .map_err(|e| RenderError::Worker(e.to_string()))?;

        let start = Instant::now();
        let mut rows = RowBuffer::new(self.image_width, self.image_height);
        let progress = Progress::new(self.image_height);
        let progress = &progress;
        let camera: &Camera = self;
        let blocks = rows.split_partitions(&partitions);

        pool.scope(|s| {
            for (first_row, slots) in blocks {
                s.spawn(move |_| {
                    for (offset, slot) in slots.iter_mut().enumerate() {
                        let j = first_row + offset as u32;
                        *slot = camera.render_row(world, j, base_seed);
                        progress.row_done();
                    }
                });
            }
        });

        info!("Done in {:.2?}", start.elapsed());
        Ok(rows)
    }

    /// Formats row `j`; the row's samples are drawn from its own generator.
    fn render_row(&self, world: &dyn Hittable, j: u32, base_seed: u64) -> String {
        let mut rng = row_rng(base_seed, j);
        let mut row = String::with_capacity(self.image_width as usize * 12);

        for i in 0..self.image_width {
            let mut pixel_color = Color::zero();
            for _ in 0..self.samples_per_pixel {
                let r = self.get_ray(i, j, &mut rng);
                pixel_color += Self::ray_color(&r, self.max_depth, world, &mut rng);
            }
            write_color(&mut row, pixel_color * self.pixel_samples_scale);
        }

        row
    }

    /// Radiance carried back along `r`, following at most `depth` bounces.
    pub fn ray_color(r: &Ray, depth: u32, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
        let mut ray = *r;
        let mut throughput = Color::splat(1.0);

        for _ in 0..depth {
            let Some(rec) = world.hit(&ray, Interval::new(SHADOW_ACNE_EPSILON, INFINITY)) else {
                return throughput * Self::background(&ray);
            };
            let Some((scattered, attenuation)) = rec.mat.scatter(&ray, &rec, rng) else {
                return Color::zero();
            };
            throughput *= attenuation;
            ray = scattered;
        }

        // Bounce budget spent: no light gathered.
        Color::zero()
    }

    /// Sky gradient from white at the horizon to blue overhead.
    fn background(r: &Ray) -> Color {
        let unit_direction = r.dir.normalized();
        let a = 0.5 * (unit_direction.y + 1.0);
        (1.0 - a) * Color::splat(1.0) + a * Color::new(0.5, 0.7, 1.0)
    }

    /// Ray from the lens toward a jittered point inside pixel `(i, j)`.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = Self::sample_square(rng);
        let pixel_sample = self.pixel00_loc
            + (i as f64 + offset.x) * self.pixel_delta_u
            + (j as f64 + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
        Vec3::new(random_f64(rng) - 0.5, random_f64(rng) - 0.5, 0.0)
    }

    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = Vec3::random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}
