use std::fmt;

use crate::math::{add, scale, Vec3};

/// Linear color with channels nominally in `[0, 1]`. Nothing clamps them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// `self*(1-t) + other*t`. `t` is not clamped, so values outside `[0, 1]`
    /// extrapolate past either end.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        add(&scale(&self.into(), 1.0 - t), &scale(&other.into(), t)).into()
    }
}

impl From<Color> for Vec3 {
    fn from(value: Color) -> Self {
        Vec3::new(value.r, value.g, value.b)
    }
}

impl From<Vec3> for Color {
    fn from(value: Vec3) -> Self {
        Color::new(value.x, value.y, value.z)
    }
}

/// Just under 256 so that a channel of exactly 1.0 lands on 255.
const QUANTIZE_SCALE: f64 = 255.999;

/// Scales and truncates toward zero. Out-of-range input stays out of range;
/// NaN becomes 0.
fn quantize(value: f64) -> i32 {
    (QUANTIZE_SCALE * value) as i32
}

/// An 8-bit-per-channel pixel as written to a PPM file. Signed because
/// unclamped colors can quantize below zero.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Rgb { r, g, b }
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        Rgb::new(quantize(value.r), quantize(value.g), quantize(value.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_boundaries() {
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(0.7), 179);
    }

    #[test]
    fn quantize_does_not_clamp() {
        assert_eq!(quantize(1.5), 383);
        assert_eq!(quantize(-0.5), -127);
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn named_colors_quantize() {
        assert_eq!(Rgb::from(Color::RED), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from(Color::WHITE), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from(Color::SKY_BLUE), Rgb::new(127, 179, 255));
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(Color::WHITE.lerp(Color::SKY_BLUE, 0.0), Color::WHITE);
        assert_eq!(Color::WHITE.lerp(Color::SKY_BLUE, 1.0), Color::SKY_BLUE);
    }

    #[test]
    fn lerp_extrapolates() {
        let past = Color::WHITE.lerp(Color::SKY_BLUE, 2.0);
        assert!((past.r - 0.0).abs() < 1e-12);
        assert!((past.g - 0.4).abs() < 1e-12);
        assert!((past.b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_is_space_separated() {
        assert_eq!(Rgb::new(12, -3, 255).to_string(), "12 -3 255");
    }
}
