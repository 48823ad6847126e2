// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! ```
//! use seamcarve::{SeamCarver, SeamFinder};
//!
//! let mut carver = SeamCarver::from_raw(4, 3, vec![128; 36]).unwrap();
//! let seam = carver.find_vertical_seam().unwrap();
//! carver.remove_vertical_seam(&seam).unwrap();
//! carver.resize(2, 2).unwrap();
//! assert_eq!(carver.dimensions(), (2, 2));
//! ```

pub mod energy;
pub mod error;
pub mod orientation;
pub mod raster;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamremover;
pub mod transforms;
pub mod twodmap;

pub use energy::{EnergyMap, BORDER_ENERGY};
pub use error::{CarveError, Result};
pub use orientation::Orientation;
pub use raster::Raster;
pub use seamcarver::SeamCarver;
pub use seamfinder::{energy_to_seam, SeamFinder};
