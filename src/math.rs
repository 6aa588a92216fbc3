//! Vector arithmetic used by every other part of the renderer.
//!
//! Thin wrappers over nalgebra so callers can speak in terms of the few
//! operations the ray caster actually needs.

pub type Vec3 = nalgebra::Vector3<f64>;
pub type Point3 = nalgebra::Point3<f64>;

pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

pub fn subtract(a: &Vec3, b: &Vec3) -> Vec3 {
    a - b
}

pub fn scale(v: &Vec3, k: f64) -> Vec3 {
    v * k
}

pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// Divides `v` by its length. A zero vector produces NaN components rather
/// than an error.
pub fn normalize(v: &Vec3) -> Vec3 {
    let length = dot(v, v).sqrt();
    v / length
}
