use std::io::{self, Write};

use log::trace;
use rayon::prelude::*;

use crate::camera::Viewport;
use crate::math::{Point3, Vec3};
use crate::picture::{Color, Rgb};
use crate::ppm::PpmWriter;
use crate::ray::Ray;
use crate::scene::{RenderSettings, Scene};

pub fn render_ray(ray: &Ray, scene: &Scene) -> Color {
    if scene.sphere.is_hit(ray) {
        return scene.hit_color;
    }
    scene.sky.color(&ray.direction)
}

/// Colors a ray cast into the default scene.
pub fn color_for(origin: Point3, direction: Vec3) -> Color {
    render_ray(&Ray::new(origin, direction), &Scene::default())
}

pub fn render_pixel(x: u32, y: u32, viewport: &Viewport, scene: &Scene) -> Rgb {
    render_ray(&viewport.pixel_ray(x, y), scene).into()
}

const LINES_PER_WORK: u32 = 50;

/// Renders the raster top row first (`y = height-1` down to 0) and streams
/// each finished band of rows to `out` in that order.
pub fn render_image<W: Write>(out: W, scene: &Scene, settings: &RenderSettings) -> io::Result<W> {
    let (width, height) = (settings.width, settings.height);
    let viewport = scene.camera.viewport(width, height);
    let mut writer = PpmWriter::new(out, width, height)?;

    let rows: Vec<u32> = (0..height).rev().collect();
    for band in rows.chunks(LINES_PER_WORK as usize) {
        trace!(target: "app", "Rendering {} rows starting at y = {}", band.len(), band[0]);
        let pixels: Vec<Rgb> = band
            .par_iter()
            .flat_map_iter(|&y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| render_pixel(x, y, &viewport, scene))
            .collect();
        writer.write_pixels(&pixels)?;
    }

    writer.finish()
}
