// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode of an air conditioner.
//!
//! Modes form a fixed cycle. Stepping works on positions in [`AcMode::ALL`]
//! rather than on discriminant values, so reordering or adding a variant only
//! requires updating that list.

use std::fmt;

/// Air conditioner operating mode.
///
/// | Position | Name    |
/// |----------|---------|
/// | 0        | Cooling |
/// | 1        | Heating |
/// | 2        | Turbo   |
/// | 3        | Sleep   |
///
/// # Examples
///
/// ```
/// use smart_remote::types::AcMode;
///
/// assert_eq!(AcMode::Cooling.next(), AcMode::Heating);
/// assert_eq!(AcMode::Sleep.next(), AcMode::Cooling);
/// assert_eq!(AcMode::Cooling.prev(), AcMode::Sleep);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum AcMode {
    /// Cooling (default).
    #[default]
    Cooling,
    /// Heating.
    Heating,
    /// Maximum fan output.
    Turbo,
    /// Quiet night operation.
    Sleep,
}

impl AcMode {
    /// Every mode in cycle order.
    pub const ALL: [Self; 4] = [Self::Cooling, Self::Heating, Self::Turbo, Self::Sleep];

    /// Returns the position of this mode in [`AcMode::ALL`].
    #[must_use]
    pub fn position(self) -> usize {
        // ALL lists every variant
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Returns the mode after this one, wrapping from the last to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Returns the mode before this one, wrapping from the first to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Returns the mode name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cooling => "Cooling",
            Self::Heating => "Heating",
            Self::Turbo => "Turbo",
            Self::Sleep => "Sleep",
        }
    }
}

impl fmt::Display for AcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
