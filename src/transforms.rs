// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Whole-image transforms.  None of these are seam carving; they're
//! the elementwise odds and ends a carving tool gets asked for anyway.
//! Each one works on the upright image and leaves the energy map
//! recomputed.

use crate::orientation::Orientation;
use crate::seamcarver::SeamCarver;
use image::Rgb;

fn luma(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    (f64::from(r) * 0.3 + f64::from(g) * 0.59 + f64::from(b) * 0.11) as u8
}

impl SeamCarver {
    fn transform_rows<F>(&mut self, mut transform: F)
    where
        F: FnMut(&mut [Rgb<u8>]),
    {
        self.canvas.orient(Orientation::Upright);
        self.canvas.raster.rows_mut().for_each(|row| transform(row));
        self.canvas.recompute_energy();
    }

    pub fn grayscale(&mut self) {
        self.transform_rows(|row| {
            for pixel in row.iter_mut() {
                let l = luma(*pixel);
                *pixel = Rgb([l, l, l]);
            }
        })
    }

    pub fn invert_colors(&mut self) {
        self.transform_rows(|row| {
            for pixel in row.iter_mut() {
                pixel.0.iter_mut().for_each(|c| *c = 255 - *c);
            }
        })
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&mut self) {
        self.transform_rows(|row| row.reverse())
    }

    /// Mirror top to bottom.
    pub fn flip_vertical(&mut self) {
        self.canvas.orient(Orientation::Upright);
        self.canvas.raster.flip_rows();
        self.canvas.recompute_energy();
    }
}
