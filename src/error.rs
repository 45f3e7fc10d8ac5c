// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `smart_remote` library.
//!
//! Device commands never fail: out-of-bound adjustments, commands sent while
//! a device is off, and commands sent with nothing selected are silent no-ops.
//! Errors only surface when constructing appliances with invalid bounds and
//! from the fallible selection API
//! [`Remote::try_switch_device`](crate::Remote::try_switch_device).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A device index does not refer to a registered device.
    #[error("invalid device index {index} (registered devices: {count})")]
    InvalidIndex {
        /// The index that was requested.
        index: usize,
        /// Number of devices registered with the remote.
        count: usize,
    },
}

/// Errors related to value validation and constraints.
///
/// These errors occur when constructing appliances with invalid bounds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A construction parameter is below its minimum.
    #[error("{name} must be at least {min}, got {actual}")]
    BelowMinimum {
        /// Name of the offending parameter.
        name: &'static str,
        /// Minimum allowed value.
        min: u32,
        /// The actual value that was provided.
        actual: u32,
    },

    /// The temperature lower bound is not strictly below the upper bound.
    #[error("invalid temperature range: min {min} must be below max {max}")]
    InvalidTemperatureRange {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
