// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance kind.

use std::fmt;

/// The kind of appliance behind a [`Device`](crate::Device).
///
/// The label is the prefix of every echo line and status report the
/// appliance produces.
///
/// # Examples
///
/// ```
/// use smart_remote::types::DeviceKind;
///
/// assert_eq!(DeviceKind::Television.label(), "TV");
/// assert_eq!(DeviceKind::AirConditioner.to_string(), "AirConditioner");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DeviceKind {
    /// A television with volume and channels.
    Television,
    /// An air conditioner with temperature and modes.
    AirConditioner,
}

impl DeviceKind {
    /// Returns the short label used in output lines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Television => "TV",
            Self::AirConditioner => "AirConditioner",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
