use crate::rtweekend::*;
use std::fmt::Write;

pub type Color = Vec3;

/// Gamma-2 transfer; non-positive input maps to zero.
#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Gamma-corrects a linear color and quantizes each channel to `[0, 255]`.
pub fn color_to_bytes(pixel_color: Color) -> [u8; 3] {
    const INTENSITY: Interval = Interval::new(0.000, 0.999);
    let to_byte = |c: f64| (255.999 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [
        to_byte(pixel_color.x),
        to_byte(pixel_color.y),
        to_byte(pixel_color.z),
    ]
}

/// Appends one `R G B` line to a row of plain-text pixel data.
pub fn write_color(out: &mut String, pixel_color: Color) {
    let [r, g, b] = color_to_bytes(pixel_color);
    // Writing into a String never fails.
    let _ = writeln!(out, "{r} {g} {b}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-3.5), 0.0);
        assert_eq!(linear_to_gamma(1.0), 1.0);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_color_to_bytes_saturates() {
        assert_eq!(color_to_bytes(Color::zero()), [0, 0, 0]);
        assert_eq!(color_to_bytes(Color::splat(1.0)), [255, 255, 255]);
        assert_eq!(color_to_bytes(Color::new(4.0, -1.0, 0.25)), [255, 0, 127]);
    }

    #[test]
    fn test_write_color_appends_line() {
        let mut row = String::new();
        write_color(&mut row, Color::zero());
        write_color(&mut row, Color::splat(1.0));
        assert_eq!(row, "0 0 0\n255 255 255\n");
    }
}
