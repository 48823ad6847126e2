// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The engine
//!
//! A `SeamCarver` owns an image and its energy map and carves seams
//! out of it one at a time.  The energy map is computed once, up
//! front, and afterwards patched along each removed seam.
//!
//! Every coordinate, dimension and seam that crosses this interface is
//! in the image's logical orientation.  Horizontal work happens on the
//! transposed canvas; see the `orientation` module.

use crate::error::{CarveError, Result};
use crate::orientation::{Canvas, Orientation};
use crate::raster::Raster;
use crate::seamfinder::{energy_to_seam, SeamFinder};
use crate::seamremover::{remove_seam, validate_seam};
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive, Rgb, RgbImage};
use itertools::iproduct;
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct SeamCarver {
    pub(crate) canvas: Canvas,
}

impl SeamCarver {
    /// Creates a new SeamCarver from a flat, row-major buffer of RGB
    /// triples.
    pub fn from_raw(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self> {
        Raster::from_raw(width, height, buffer).map(Self::new)
    }

    /// Creates a new SeamCarver with a copy of an image to be carved.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        Raster::from_image(image).map(Self::new)
    }

    pub fn new(raster: Raster) -> Self {
        SeamCarver {
            canvas: Canvas::new(raster),
        }
    }

    pub fn width(&self) -> u32 {
        self.canvas.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.canvas.dimensions().1
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        self.canvas.pixel(x, y)
    }

    /// The energy of the pixel at `(x, y)`, computed fresh from the
    /// current pixels.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        self.canvas.energy(x, y)
    }

    /// Every pixel, row-major.
    pub fn pixels(&self) -> Vec<Rgb<u8>> {
        match self.canvas.orientation() {
            Orientation::Upright => self.canvas.raster.pixels().copied().collect(),
            Orientation::Transposed => {
                let (width, height) = self.dimensions();
                iproduct!(0..height, 0..width)
                    .map(|(y, x)| self.canvas.raster[(y, x)])
                    .collect()
            }
        }
    }

    /// Every pixel as a flat, row-major buffer of RGB triples.
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels()
            .into_iter()
            .flat_map(|p| p.0.to_vec())
            .collect()
    }

    pub fn to_image(&self) -> RgbImage {
        let pixels = self.pixels();
        let width = self.width();
        ImageBuffer::from_fn(width, self.height(), |x, y| {
            pixels[(y * width + x) as usize]
        })
    }

    /// Render the energy map as a grayscale image, scaled so that the
    /// most energetic pixel is white.
    pub fn energy_image(&self) -> GrayImage {
        let energy = &self.canvas.energy;
        let orientation = self.canvas.orientation();
        let factor = energy.max();
        let (width, height) = self.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| {
            let e = energy[orientation.to_physical((x, y))];
            let level = if factor > 0.0 { e * 255.0 / factor } else { 0.0 };
            Luma([level.round().min(255.0).max(0.0) as u8])
        })
    }

    /// Remove a top-to-bottom seam: one column index per row.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        let (width, height) = self.dimensions();
        validate_seam(seam, height, width)?;
        self.canvas.orient(Orientation::Upright);
        self.carve(seam);
        debug!("removed vertical seam, now {:?}", self.dimensions());
        Ok(())
    }

    /// Remove a left-to-right seam: one row index per column.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        let (width, height) = self.dimensions();
        validate_seam(seam, width, height)?;
        self.canvas.orient(Orientation::Transposed);
        self.carve(seam);
        debug!("removed horizontal seam, now {:?}", self.dimensions());
        Ok(())
    }

    fn carve(&mut self, seam: &[u32]) {
        let Canvas { raster, energy, .. } = &mut self.canvas;
        remove_seam(raster, energy, seam);
    }

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the image: every vertical seam first, then every
    /// horizontal one.
    pub fn resize(&mut self, newwidth: u32, newheight: u32) -> Result<()> {
        let (width, height) = self.dimensions();
        if newwidth == 0 || newheight == 0 {
            return Err(CarveError::invalid_input(format!(
                "cannot carve down to {}x{}",
                newwidth, newheight
            )));
        }
        if width < newwidth || height < newheight {
            return Err(CarveError::invalid_input(format!(
                "seamcarve cannot upscale an image: {}x{} to {}x{}",
                width, height, newwidth, newheight
            )));
        }

        info!("carving {}x{} to {}x{}", width, height, newwidth, newheight);
        while self.width() > newwidth {
            let seam = self.find_vertical_seam()?;
            self.remove_vertical_seam(&seam)?;
        }
        while self.height() > newheight {
            let seam = self.find_horizontal_seam()?;
            self.remove_horizontal_seam(&seam)?;
        }
        info!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&mut self) -> Result<Vec<u32>> {
        self.canvas.orient(Orientation::Transposed);
        energy_to_seam(&self.canvas.energy)
    }

    fn find_vertical_seam(&mut self) -> Result<Vec<u32>> {
        self.canvas.orient(Orientation::Upright);
        energy_to_seam(&self.canvas.energy)
    }
}
