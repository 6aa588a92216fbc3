use crate::math::{dot, subtract, Point3};
use crate::ray::Ray;

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        Sphere { center, radius }
    }

    /// `b² - 4ac` of the ray/sphere quadratic. The direction need not be
    /// unit length.
    pub fn discriminant(&self, ray: &Ray) -> f64 {
        let oc = subtract(&ray.origin.coords, &self.center.coords);
        let a = dot(&ray.direction, &ray.direction);
        let b = 2.0 * dot(&oc, &ray.direction);
        let c = dot(&oc, &oc) - self.radius * self.radius;

        b * b - 4.0 * a * c
    }

    /// Only a strictly positive discriminant counts as a hit: a ray that
    /// grazes the surface misses.
    pub fn is_hit(&self, ray: &Ray) -> bool {
        self.discriminant(ray) > 0.0
    }
}
