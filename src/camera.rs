use nalgebra::vector;

use crate::math::{normalize, Point3};
use crate::ray::Ray;

/// Pinhole camera looking down -z.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub focal_length: f64,
}

impl Camera {
    pub fn new(position: Point3, viewport_width: f64, viewport_height: f64, focal_length: f64) -> Self {
        Camera {
            position,
            viewport_width,
            viewport_height,
            focal_length,
        }
    }

    pub fn viewport(&self, width: u32, height: u32) -> Viewport {
        Viewport {
            origin: self.position,
            image_width: width as f64,
            image_height: height as f64,
            width: self.viewport_width,
            height: self.viewport_height,
            focal_length: self.focal_length,
        }
    }
}

/// A camera bound to a raster size, ready to turn pixel coordinates into rays.
pub struct Viewport {
    pub origin: Point3,
    pub image_width: f64,
    pub image_height: f64,
    pub width: f64,
    pub height: f64,
    pub focal_length: f64,
}

impl Viewport {
    /// `u` and `v` run from 0 at the left/bottom edge to 1 at the right/top.
    pub fn emit_ray(&self, u: f64, v: f64) -> Ray {
        let direction = vector![
            u * self.width - self.width / 2.0,
            v * self.height - self.height / 2.0,
            -self.focal_length
        ];
        Ray::new(self.origin, normalize(&direction))
    }

    pub fn pixel_ray(&self, x: u32, y: u32) -> Ray {
        let u = x as f64 / (self.image_width - 1.0);
        let v = y as f64 / (self.image_height - 1.0);
        self.emit_ray(u, v)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::*;

    const EPSILON: f64 = 1e-12;

    fn viewport() -> Viewport {
        Camera::new(point![0.0, 0.0, 0.0], 4.0, 2.0, 1.0).viewport(400, 200)
    }

    #[test]
    fn corners_map_to_viewport_edges() {
        let viewport = viewport();
        let lower_left = viewport.pixel_ray(0, 0).direction;
        let expected = normalize(&vector![-2.0, -1.0, -1.0]);
        assert!((lower_left - expected).norm() < EPSILON);

        let upper_right = viewport.pixel_ray(399, 199).direction;
        let expected = normalize(&vector![2.0, 1.0, -1.0]);
        assert!((upper_right - expected).norm() < EPSILON);
    }

    #[test]
    fn rays_are_unit_length_and_start_at_camera() {
        let viewport = viewport();
        for (x, y) in [(0, 0), (17, 150), (200, 100), (399, 0)] {
            let ray = viewport.pixel_ray(x, y);
            assert_eq!(ray.origin, point![0.0, 0.0, 0.0]);
            assert!((ray.direction.norm() - 1.0).abs() < EPSILON);
            assert!(ray.direction.z < 0.0);
        }
    }

    #[test]
    fn higher_rows_point_up() {
        let viewport = viewport();
        assert!(viewport.pixel_ray(200, 199).direction.y > 0.0);
        assert!(viewport.pixel_ray(200, 0).direction.y < 0.0);
    }
}
