// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a carve can go wrong.  Every one of them is a contract
//! violation detected before any state is touched; nothing here is
//! transient, and nothing is retried.

use failure::Fail;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum CarveError {
    /// A malformed pixel buffer, seam, or resize target.
    #[fail(display = "invalid input: {}", _0)]
    InvalidInput(String),

    /// A coordinate query outside the current image.
    #[fail(
        display = "coordinate ({}, {}) is outside the {}x{} image",
        x, y, width, height
    )]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The engine is in a shape the invariants say it can't be in.
    #[fail(display = "invalid state: {}", _0)]
    InvalidState(String),
}

impl CarveError {
    pub(crate) fn invalid_input<S: Into<String>>(message: S) -> Self {
        CarveError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CarveError>;
