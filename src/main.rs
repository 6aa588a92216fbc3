//! Renders the fixed single-sphere scene to `output.ppm`.

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use anyhow::Context;
use log::info;

use sphere_cast::render::render_image;
use sphere_cast::scene::{RenderSettings, Scene};

fn main() -> anyhow::Result<()> {
    env_logger::builder().target(env_logger::Target::Stdout).init();

    let scene = Scene::default();
    let settings = RenderSettings::default();

    let file = File::create(&settings.output)
        .with_context(|| format!("creating {}", settings.output.display()))?;

    info!(target: "app", "Starting {}x{} render...", settings.width, settings.height);
    let start = Instant::now();
    render_image(BufWriter::new(file), &scene, &settings)
        .with_context(|| format!("writing {}", settings.output.display()))?;
    let elapsed = start.elapsed();
    info!(target: "app", "Finished rendering. Took {:?}", elapsed);

    println!("Rendering is complete, Check the output in '{}'.", settings.output.display());
    Ok(())
}
