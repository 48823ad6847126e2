// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove a top-to-bottom seam in place.
//!
//! Removing a pixel changes the neighborhood of the pixels on either
//! side of it, and nothing else: anything two or more columns away
//! from the seam either doesn't move or moves in lockstep with every
//! one of its neighbors.  So after compaction only the (at most) two
//! cells flanking the old seam position in each row are recomputed.

use crate::energy::EnergyMap;
use crate::error::{CarveError, Result};
use crate::raster::Raster;

/// Check that `seam` could be carved out of an image with `rows`
/// rows and `columns` columns, one entry per row.
pub fn validate_seam(seam: &[u32], rows: u32, columns: u32) -> Result<()> {
    if seam.len() != rows as usize {
        return Err(CarveError::invalid_input(format!(
            "seam has {} entries but the image is {} across",
            seam.len(),
            rows
        )));
    }
    if columns <= 1 {
        return Err(CarveError::invalid_input(
            "cannot carve a seam out of an image one pixel thick",
        ));
    }
    if let Some((i, x)) = seam.iter().enumerate().find(|&(_, &x)| x >= columns) {
        return Err(CarveError::invalid_input(format!(
            "seam entry {} at position {} is outside 0..{}",
            x, i, columns
        )));
    }
    if let Some((i, w)) = seam
        .windows(2)
        .enumerate()
        .find(|(_, w)| w[0].max(w[1]) - w[0].min(w[1]) > 1)
    {
        return Err(CarveError::invalid_input(format!(
            "seam jumps from {} to {} between positions {} and {}",
            w[0],
            w[1],
            i,
            i + 1
        )));
    }
    Ok(())
}

/// Carve a validated vertical seam out of a raster and its energy
/// map, both in physical coordinates.
pub(crate) fn remove_seam(raster: &mut Raster, energy: &mut EnergyMap, seam: &[u32]) {
    debug_assert!(validate_seam(seam, raster.height(), raster.width()).is_ok());
    for (y, &x) in seam.iter().enumerate() {
        raster.remove_from_row(x, y as u32);
        energy.remove_from_row(x, y as u32);
    }
    raster.narrow();
    energy.narrow();

    // Only now is the whole raster in its post-carve shape.
    let width = raster.width();
    for (y, &x) in seam.iter().enumerate() {
        let y = y as u32;
        if x > 0 {
            energy.refresh(raster, x - 1, y);
        }
        if x < width {
            energy.refresh(raster, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn is_invalid(result: Result<()>) -> bool {
        match result {
            Err(CarveError::InvalidInput(_)) => true,
            _ => false,
        }
    }

    #[test]
    fn accepts_a_connected_seam() {
        assert!(validate_seam(&[0, 1, 2, 1, 1], 5, 3).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(is_invalid(validate_seam(&[0, 1], 3, 3)));
        assert!(is_invalid(validate_seam(&[0, 1, 1, 1], 3, 3)));
    }

    #[test]
    fn rejects_out_of_range_entries() {
        assert!(is_invalid(validate_seam(&[1, 2, 3], 3, 3)));
    }

    #[test]
    fn rejects_disconnected_seams() {
        assert!(is_invalid(validate_seam(&[0, 2, 2], 3, 3)));
        assert!(is_invalid(validate_seam(&[2, 2, 0], 3, 3)));
    }

    #[test]
    fn rejects_the_last_column() {
        assert!(is_invalid(validate_seam(&[0, 0, 0], 3, 1)));
    }

    #[test]
    fn removal_shifts_pixels_and_keeps_energy_fresh() {
        let buffer: Vec<u8> = (0..5 * 4 * 3).map(|i| (i * 53 % 256) as u8).collect();
        let mut raster = Raster::from_raw(5, 4, buffer).unwrap();
        let mut energy = EnergyMap::compute(&raster);
        let before = raster.clone();

        let seam = [1, 2, 3, 3];
        remove_seam(&mut raster, &mut energy, &seam);

        assert_eq!(raster.dimensions(), (4, 4));
        assert_eq!(energy.dimensions(), (4, 4));
        for (y, &sx) in seam.iter().enumerate() {
            let y = y as u32;
            for x in 0..4 {
                let source = if x < sx { x } else { x + 1 };
                assert_eq!(raster[(x, y)], before[(source, y)]);
            }
        }
        assert_eq!(energy, EnergyMap::compute(&raster));
    }

    #[test]
    fn removing_the_rightmost_column_refreshes_the_new_edge() {
        let raster_data = vec![
            Rgb([10u8, 10, 10]),
            Rgb([20, 20, 20]),
            Rgb([30, 30, 30]),
            Rgb([200, 0, 0]),
        ];
        let buffer: Vec<u8> = (0..3)
            .flat_map(|_| raster_data.iter().flat_map(|p| p.0.to_vec()))
            .collect();
        let mut raster = Raster::from_raw(4, 3, buffer).unwrap();
        let mut energy = EnergyMap::compute(&raster);
        remove_seam(&mut raster, &mut energy, &[3, 3, 3]);
        assert_eq!(energy, EnergyMap::compute(&raster));
        assert_eq!(energy[(2, 1)], crate::energy::BORDER_ENERGY);
    }
}
