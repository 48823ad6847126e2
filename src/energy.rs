// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient magnitude of its four
//! neighbors: the squared channel differences across its left and
//! right neighbors, plus those across its upper and lower neighbors,
//! square-rooted.  Pixels on the border have no full neighborhood and
//! are pinned to [`BORDER_ENERGY`], which is larger than any gradient
//! an 8-bit image can produce, so seams avoid the edges where they can.

use crate::raster::Raster;
use crate::twodmap::TwoDimensionalMap;
use image::Rgb;
use itertools::{iproduct, zip};
use std::ops::Index;

/// The energy of every pixel on the edge of the image.
pub const BORDER_ENERGY: f64 = 1000.0;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = √(|Δx|²+|Δy|²)
//
fn energy_of_pair(p1: &Rgb<u8>, p2: &Rgb<u8>) -> u32 {
    zip(p1.0.iter(), p2.0.iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}

/// The energy of the pixel at physical `(x, y)`.  The coordinate must
/// be inside the raster.
pub fn pixel_energy(raster: &Raster, x: u32, y: u32) -> f64 {
    let (width, height) = raster.dimensions();
    if x == 0 || y == 0 || x + 1 >= width || y + 1 >= height {
        return BORDER_ENERGY;
    }
    let dx = energy_of_pair(&raster[(x - 1, y)], &raster[(x + 1, y)]);
    let dy = energy_of_pair(&raster[(x, y - 1)], &raster[(x, y + 1)]);
    f64::from(dx + dy).sqrt()
}

/// A cached energy for every pixel of a raster, kept in step with the
/// raster as it is carved.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyMap {
    grid: TwoDimensionalMap<f64>,
}

impl EnergyMap {
    /// Compute the energy of every pixel in a raster.
    pub fn compute(raster: &Raster) -> Self {
        let (width, height) = raster.dimensions();
        let mut grid = TwoDimensionalMap::new(width, height, BORDER_ENERGY);
        for (y, x) in iproduct!(0..height, 0..width) {
            grid[(x, y)] = pixel_energy(raster, x, y);
        }
        EnergyMap { grid }
    }

    /// Build a map straight from precomputed energies, row-major.
    pub fn from_vec(width: u32, height: u32, energies: Vec<f64>) -> Option<Self> {
        TwoDimensionalMap::from_vec(width, height, energies).map(|grid| EnergyMap { grid })
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

    /// Recompute the cached energy at physical `(x, y)` from the
    /// raster's current contents.
    pub(crate) fn refresh(&mut self, raster: &Raster, x: u32, y: u32) {
        self.grid[(x, y)] = pixel_energy(raster, x, y);
    }

    pub(crate) fn remove_from_row(&mut self, x: u32, y: u32) {
        self.grid.remove_from_row(x, y)
    }

    pub(crate) fn narrow(&mut self) {
        self.grid.narrow()
    }

    pub(crate) fn transposed(&self) -> Self {
        EnergyMap {
            grid: self.grid.transposed(),
        }
    }

    /// The largest energy on the map.
    pub fn max(&self) -> f64 {
        self.grid
            .rows()
            .flat_map(|row| row.iter().copied())
            .fold(0.0, f64::max)
    }
}

impl Index<(u32, u32)> for EnergyMap {
    type Output = f64;

    fn index(&self, at: (u32, u32)) -> &f64 {
        &self.grid[at]
    }
}
