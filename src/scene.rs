//! The fixed scene and raster settings, gathered in one place so the
//! renderer never reaches for literals.

use std::path::PathBuf;

use nalgebra::{point, Point3};

use crate::camera::Camera;
use crate::math::Vec3;
use crate::object::Sphere;
use crate::picture::Color;

/// Vertical gradient shown wherever a ray misses every object.
#[derive(Clone, Debug, PartialEq)]
pub struct Sky {
    pub horizon: Color,
    pub zenith: Color,
}

impl Sky {
    /// Blends on `direction.y` without renormalizing, so only unit-length
    /// directions stay within the two endpoint colors.
    pub fn color(&self, direction: &Vec3) -> Color {
        let t = 0.5 * (direction.y + 1.0);
        self.horizon.lerp(self.zenith, t)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub sphere: Sphere,
    pub hit_color: Color,
    pub sky: Sky,
}

impl Default for Scene {
    fn default() -> Self {
        Scene {
            camera: Camera::new(Point3::origin(), 4.0, 2.0, 1.0),
            sphere: Sphere::new(point![0.0, 0.0, -5.0], 1.0),
            hit_color: Color::RED,
            sky: Sky {
                horizon: Color::WHITE,
                zenith: Color::SKY_BLUE,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: 400,
            height: 200,
            output: PathBuf::from("output.ppm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn sky_endpoints() {
        let sky = Scene::default().sky;
        assert_eq!(sky.color(&vector![0.0, 1.0, 0.0]), Color::SKY_BLUE);
        assert_eq!(sky.color(&vector![0.0, -1.0, 0.0]), Color::WHITE);
    }

    #[test]
    fn sky_extrapolates_for_long_directions() {
        let sky = Scene::default().sky;
        let color = sky.color(&vector![0.0, 3.0, 0.0]);
        assert!(color.r < Color::SKY_BLUE.r);
    }
}
