// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy map.
//!
//! The map is a dense DAG with edges only from each row to the next,
//! so a single top-to-bottom sweep from row 0 relaxes every edge in
//! topological order.  The accounting is: every cell in row 0 starts
//! at distance zero, and stepping from a cell into the row below costs
//! the energy of the cell being *left*.  The bottom row's own energies
//! therefore never contribute.
//!
//! Ties matter, because a reproducible carve has to pick the same seam
//! among equals every time.  Predecessors are tried in the order
//! directly above, above-right, above-left, and a later one wins only
//! if it is strictly cheaper.  The bottom of the seam is the leftmost
//! cheapest cell of the last row.

use crate::energy::EnergyMap;
use crate::error::{CarveError, Result};
use crate::twodmap::TwoDimensionalMap;

/// This trait defines how we will return seams from an image.  Both
/// requests may rearrange the storage they work on, hence `&mut`, but
/// neither changes what the image looks like.
pub trait SeamFinder {
    /// Request a left-to-right seam: one row index per column.
    fn find_horizontal_seam(&mut self) -> Result<Vec<u32>>;

    /// Request a top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&mut self) -> Result<Vec<u32>>;
}

#[derive(Debug, Copy, Clone)]
struct DistanceAndBackPointer {
    distance: f64,
    parent: u32,
}

// The cheapest way into (x, y) from the row above.
fn relax(
    energy: &EnergyMap,
    target: &TwoDimensionalMap<DistanceAndBackPointer>,
    (x, y): (u32, u32),
) -> DistanceAndBackPointer {
    let above = y - 1;
    let right = if x + 1 < energy.width() { Some(x + 1) } else { None };
    let left = x.checked_sub(1);

    let mut best = DistanceAndBackPointer {
        distance: f64::INFINITY,
        parent: x,
    };
    for px in [Some(x), right, left].iter().flatten() {
        let distance = target[(*px, above)].distance + energy[(*px, above)];
        if distance < best.distance {
            best = DistanceAndBackPointer {
                distance,
                parent: *px,
            };
        }
    }
    best
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the cheapest top-to-bottom seam.
pub fn energy_to_seam(energy: &EnergyMap) -> Result<Vec<u32>> {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidState(format!(
            "cannot find a seam in a {}x{} image",
            width, height
        )));
    }

    let mut target = TwoDimensionalMap::new(
        width,
        height,
        DistanceAndBackPointer {
            distance: 0.0,
            parent: 0,
        },
    );
    for y in 1..height {
        for x in 0..width {
            target[(x, y)] = relax(energy, &target, (x, y));
        }
    }

    // Find the x coordinate of the bottommost cell with the least
    // distance; the first one found wins.
    let bottom = height - 1;
    let mut seam_col = 0;
    for x in 1..width {
        if target[(x, bottom)].distance < target[(seam_col, bottom)].distance {
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    Ok((0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn energies(width: u32, height: u32, data: &[f64]) -> EnergyMap {
        EnergyMap::from_vec(width, height, data.to_vec()).unwrap()
    }

    const ENERGY_DATA: [f64; 20] = [
        9., 9., 0., 9., 9., //
        9., 1., 9., 8., 9., //
        9., 9., 9., 9., 0., //
        9., 9., 9., 0., 9.,
    ];

    #[test]
    fn energy_grid_to_vertical_seam() {
        let seam = energy_to_seam(&energies(5, 4, &ENERGY_DATA)).unwrap();
        assert_eq!(seam, [2, 3, 4, 3]);
    }

    #[test]
    fn uniform_energy_prefers_straight_down_then_leftmost() {
        let seam = energy_to_seam(&energies(4, 4, &[5.0; 16])).unwrap();
        assert_eq!(seam, [0, 0, 0, 0]);
    }

    #[test]
    fn above_right_beats_above_left_on_a_tie() {
        // The middle of row 1 can come from either upper corner at an
        // equal cost; the right one is tried first and kept.
        let seam = energy_to_seam(&energies(
            3,
            3,
            &[
                1., 5., 1., //
                9., 0., 9., //
                7., 7., 7.,
            ],
        ))
        .unwrap();
        assert_eq!(seam, [2, 1, 0]);
    }

    #[test]
    fn above_beats_a_diagonal_on_a_tie() {
        let seam = energy_to_seam(&energies(
            3,
            2,
            &[
                3., 3., 3., //
                0., 0., 0.,
            ],
        ))
        .unwrap();
        assert_eq!(seam, [0, 0]);
    }

    #[test]
    fn bottom_row_energy_is_ignored() {
        let seam = energy_to_seam(&energies(
            3,
            2,
            &[
                4., 1., 4., //
                0., 1000., 0.,
            ],
        ))
        .unwrap();
        // Every bottom cell can be reached for 1 through column 1;
        // the leftmost of them takes it.
        assert_eq!(seam, [1, 0]);
    }

    #[test]
    fn empty_map_is_invalid_state() {
        match energy_to_seam(&energies(0, 0, &[])) {
            Err(CarveError::InvalidState(_)) => (),
            other => panic!("expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_shapes() {
        assert_eq!(energy_to_seam(&energies(1, 3, &[1.; 3])).unwrap(), [0, 0, 0]);
        assert_eq!(energy_to_seam(&energies(3, 1, &[3., 2., 1.])).unwrap(), [0]);
    }

    #[test]
    fn seams_are_connected_and_in_range() {
        let data: Vec<f64> = (0..7 * 9).map(|i| ((i * 7919) % 101) as f64).collect();
        let seam = energy_to_seam(&energies(7, 9, &data)).unwrap();
        assert_eq!(seam.len(), 9);
        assert!(seam.iter().all(|&x| x < 7));
        assert!(seam
            .windows(2)
            .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1));
    }
}
