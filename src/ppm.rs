//! Plain-text PPM (`P3`) output, streamed one pixel per line.

use std::io::{self, Write};

use crate::picture::Rgb;

pub const MAX_CHANNEL: u32 = 255;

pub struct PpmWriter<W: Write> {
    out: W,
}

impl<W: Write> PpmWriter<W> {
    /// Writes the three-line header and returns a writer ready for pixels.
    pub fn new(mut out: W, width: u32, height: u32) -> io::Result<Self> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", width, height)?;
        writeln!(out, "{}", MAX_CHANNEL)?;
        Ok(PpmWriter { out })
    }

    pub fn write_pixels(&mut self, pixels: &[Rgb]) -> io::Result<()> {
        for pixel in pixels {
            writeln!(self.out, "{}", pixel)?;
        }
        Ok(())
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
