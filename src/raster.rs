// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The mutable pixel grid being carved.
//!
//! A raster knows nothing about orientation: its width and height are
//! those of its physical storage.  The engine is responsible for
//! mapping logical coordinates onto it.

use crate::error::{CarveError, Result};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive, Rgb};
use itertools::iproduct;
use num_traits::NumCast;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    grid: TwoDimensionalMap<Rgb<u8>>,
}

// Any pixel type with channels that fit in a byte can be carved.
fn to_rgb8<P, S>(pixel: &P) -> Result<Rgb<u8>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let rgb = pixel.to_rgb();
    let mut out = [0u8; 3];
    for (target, channel) in out.iter_mut().zip(rgb.0.iter()) {
        *target = <u8 as NumCast>::from(*channel)
            .ok_or_else(|| CarveError::invalid_input("channel value does not fit in 8 bits"))?;
    }
    Ok(Rgb(out))
}

impl Raster {
    /// Build a raster from a flat, row-major buffer of RGB triples.
    pub fn from_raw(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CarveError::invalid_input(format!(
                "a {}x{} image has no pixels",
                width, height
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| CarveError::invalid_input("image dimensions overflow"))?;
        if buffer.len() != expected {
            return Err(CarveError::invalid_input(format!(
                "buffer holds {} bytes, a {}x{} RGB image needs {}",
                buffer.len(),
                width,
                height,
                expected
            )));
        }
        let pixels = buffer
            .chunks_exact(3)
            .map(|c| Rgb([c[0], c[1], c[2]]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Build a raster from anything the `image` crate can view.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::invalid_input(format!(
                "a {}x{} image has no pixels",
                width, height
            )));
        }
        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| to_rgb8(&image.get_pixel(x, y)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_pixels(width, height, pixels)
    }

    fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb<u8>>) -> Result<Self> {
        TwoDimensionalMap::from_vec(width, height, pixels)
            .map(|grid| Raster { grid })
            .ok_or_else(|| CarveError::invalid_input("pixel count does not match dimensions"))
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.grid.dimensions()
    }

    /// Read a single pixel, in physical coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        self.grid.get(x, y).copied().ok_or(CarveError::OutOfRange {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// Every pixel, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = &Rgb<u8>> + '_ {
        self.grid.rows().flat_map(|row| row.iter())
    }

    /// Export as a flat, row-major buffer of RGB triples.
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels().flat_map(|p| p.0.iter().copied()).collect()
    }

    pub(crate) fn remove_from_row(&mut self, x: u32, y: u32) {
        self.grid.remove_from_row(x, y)
    }

    pub(crate) fn narrow(&mut self) {
        self.grid.narrow()
    }

    pub(crate) fn transposed(&self) -> Self {
        Raster {
            grid: self.grid.transposed(),
        }
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Rgb<u8>]> + '_ {
        self.grid.rows_mut()
    }

    pub(crate) fn flip_rows(&mut self) {
        self.grid.flip_rows()
    }
}

impl Index<(u32, u32)> for Raster {
    type Output = Rgb<u8>;

    fn index(&self, at: (u32, u32)) -> &Rgb<u8> {
        &self.grid[at]
    }
}
