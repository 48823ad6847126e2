// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An addressable two-dimensional field.
//!
//! Both the pixel raster and the energy map are one of these, as is
//! the distance-and-parent table the seam finder builds.  Storage is
//! row-major with a fixed physical stride: carving a column out of
//! the map shifts the tail of each row left and narrows the logical
//! width, but never reallocates.  Only transposition produces a fresh,
//! tightly packed map.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    stride: u32,
    data: Vec<P>,
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to `fill`.
    pub fn new(width: u32, height: u32, fill: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            stride: width,
            data: vec![fill; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector's length doesn't describe a `width` by `height` field.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            stride: width,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  The
    // stride, not the width, is the distance between rows.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.stride as usize) + (x as usize)
    }

    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Checked access to a single cell.
    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        if self.in_bounds(x, y) {
            Some(&self.data[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// Slide every cell to the right of `(x, y)` one place left,
    /// overwriting `(x, y)`.  The width is unchanged; the caller
    /// narrows the map once every row has been compacted.
    pub(crate) fn remove_from_row(&mut self, x: u32, y: u32) {
        debug_assert!(self.in_bounds(x, y));
        let (start, end) = (self.get_index(x, y), self.get_index(self.width, y));
        self.data.copy_within(start + 1..end, start);
    }

    /// Drop the last logical column.
    pub(crate) fn narrow(&mut self) {
        debug_assert!(self.width > 0);
        self.width -= 1;
    }

    /// A new map with the axes exchanged: cell `(x, y)` of the result
    /// is cell `(y, x)` of this one.
    pub fn transposed(&self) -> Self {
        let data = iproduct!(0..self.width, 0..self.height)
            .map(|(ny, nx)| self[(ny, nx)])
            .collect();
        TwoDimensionalMap {
            width: self.height,
            height: self.width,
            stride: self.height,
            data,
        }
    }

    /// The live cells of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        let width = self.width as usize;
        self.data
            .chunks(self.stride as usize)
            .take(self.height as usize)
            .map(move |row| &row[..width])
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [P]> + '_ {
        let width = self.width as usize;
        let height = self.height as usize;
        self.data
            .chunks_mut(self.stride as usize)
            .take(height)
            .map(move |row| &mut row[..width])
    }

    /// Exchange the top and bottom halves, mirroring the map about its
    /// horizontal axis.
    pub(crate) fn flip_rows(&mut self) {
        let height = self.height;
        for y in 0..height / 2 {
            let (top, bottom) = (self.get_index(0, y), self.get_index(0, height - 1 - y));
            for x in 0..self.width as usize {
                self.data.swap(top + x, bottom + x);
            }
        }
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        debug_assert!(self.in_bounds(x, y));
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        debug_assert!(self.in_bounds(x, y));
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

// Two maps are equal when their live cells are; the stride and
// whatever has been carved off the end of each row don't count.
impl<P: Copy + PartialEq> PartialEq for TwoDimensionalMap<P> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.rows().eq(other.rows())
    }
}
