// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! The seam finder and remover only know how to work top-to-bottom.
//! A horizontal seam is a vertical seam of the image turned on its
//! side, so rather than write everything twice the canvas physically
//! transposes its raster and energy map and remembers that it has
//! done so.  Logical coordinates, the ones callers see, are mapped
//! through the orientation onto physical storage.
//!
//! Turning is lazy: the canvas stays transposed until some operation
//! needs it upright again, so a run of horizontal carves pays for
//! only one transposition.

use crate::energy::{pixel_energy, EnergyMap};
use crate::error::{CarveError, Result};
use crate::raster::Raster;
use image::Rgb;
use log::trace;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    Upright,
    Transposed,
}

impl Orientation {
    pub fn turn(self) -> Self {
        match self {
            Orientation::Upright => Orientation::Transposed,
            Orientation::Transposed => Orientation::Upright,
        }
    }

    /// Map a logical coordinate onto physical storage.  The mapping
    /// is its own inverse.
    pub fn to_physical(self, (x, y): (u32, u32)) -> (u32, u32) {
        match self {
            Orientation::Upright => (x, y),
            Orientation::Transposed => (y, x),
        }
    }
}

/// The raster and its energy map, stored in whichever orientation
/// the last seam operation wanted.
#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    pub raster: Raster,
    pub energy: EnergyMap,
    orientation: Orientation,
}

impl Canvas {
    pub fn new(raster: Raster) -> Self {
        let energy = EnergyMap::compute(&raster);
        Canvas {
            raster,
            energy,
            orientation: Orientation::Upright,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Logical width and height.
    pub fn dimensions(&self) -> (u32, u32) {
        self.orientation.to_physical(self.raster.dimensions())
    }

    fn physical(&self, x: u32, y: u32) -> Result<(u32, u32)> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(CarveError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(self.orientation.to_physical((x, y)))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        let (px, py) = self.physical(x, y)?;
        Ok(self.raster[(px, py)])
    }

    // The energy formula is symmetric in its axes and in the border
    // test, so it can be evaluated on the physical grid directly.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        let (px, py) = self.physical(x, y)?;
        Ok(pixel_energy(&self.raster, px, py))
    }

    /// Swap the stored axes of both grids.  An involution.
    pub fn transpose(&mut self) {
        self.raster = self.raster.transposed();
        self.energy = self.energy.transposed();
        self.orientation = self.orientation.turn();
        trace!(
            "canvas transposed to {:?}, physically {:?}",
            self.orientation,
            self.raster.dimensions()
        );
    }

    pub fn orient(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.transpose();
        }
    }

    pub fn recompute_energy(&mut self) {
        self.energy = EnergyMap::compute(&self.raster);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    fn canvas(width: u32, height: u32) -> Canvas {
        let buffer = (0..width * height * 3).map(|i| (i * 37 % 251) as u8).collect();
        Canvas::new(Raster::from_raw(width, height, buffer).unwrap())
    }

    #[test]
    fn turning_is_an_involution() {
        assert_eq!(Orientation::Upright.turn().turn(), Orientation::Upright);
        assert_eq!(Orientation::Transposed.to_physical((2, 7)), (7, 2));
        assert_eq!(Orientation::Upright.to_physical((2, 7)), (2, 7));
    }

    #[test]
    fn logical_view_survives_transposition() {
        let mut c = canvas(5, 4);
        let before: Vec<_> = iproduct!(0..4, 0..5)
            .map(|(y, x)| (c.pixel(x, y).unwrap(), c.energy(x, y).unwrap()))
            .collect();
        c.transpose();
        assert_eq!(c.orientation(), Orientation::Transposed);
        assert_eq!(c.dimensions(), (5, 4));
        assert_eq!(c.raster.dimensions(), (4, 5));
        let after: Vec<_> = iproduct!(0..4, 0..5)
            .map(|(y, x)| (c.pixel(x, y).unwrap(), c.energy(x, y).unwrap()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn double_transpose_restores_storage() {
        let mut c = canvas(6, 3);
        let (raster, energy) = (c.raster.clone(), c.energy.clone());
        c.transpose();
        c.transpose();
        assert_eq!(c.orientation(), Orientation::Upright);
        assert_eq!(c.raster, raster);
        assert_eq!(c.energy, energy);
    }

    #[test]
    fn cached_energy_is_transposed_with_pixels() {
        let mut c = canvas(4, 6);
        c.orient(Orientation::Transposed);
        assert_eq!(c.energy, EnergyMap::compute(&c.raster));
        c.orient(Orientation::Transposed);
        assert_eq!(c.orientation(), Orientation::Transposed);
    }

    #[test]
    fn out_of_range_reports_logical_dimensions() {
        let mut c = canvas(3, 2);
        c.transpose();
        assert_eq!(
            c.pixel(0, 2),
            Err(CarveError::OutOfRange {
                x: 0,
                y: 2,
                width: 3,
                height: 2
            })
        );
        assert!(c.energy(3, 0).is_err());
        assert!(c.energy(2, 1).is_ok());
    }
}
