//! Casts one ray per pixel from a pinhole camera into a scene holding a single
//! sphere and writes the result as a plain-text PPM image.

pub mod camera;
pub mod math;
pub mod object;
pub mod picture;
pub mod ppm;
pub mod ray;
pub mod render;
pub mod scene;
