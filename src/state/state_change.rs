// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A [`StateChange`] is what an appliance reports back when a command
//! actually changed something. Commands that were ignored (device off, value
//! at its bound) produce no change at all.
//!
//! # Change Types
//!
//! - [`StateChange::Power`] - Power toggled on or off
//! - [`StateChange::Volume`] - Television volume changed
//! - [`StateChange::Channel`] - Television channel changed
//! - [`StateChange::Temperature`] - Air conditioner temperature changed
//! - [`StateChange::Mode`] - Air conditioner mode changed
//!
//! # Examples
//!
//! ```
//! use smart_remote::state::StateChange;
//! use smart_remote::types::{AcMode, PowerState};
//!
//! assert_eq!(StateChange::Power(PowerState::On).to_string(), "is ON");
//! assert_eq!(StateChange::Volume(1).to_string(), "volume: 1");
//! assert_eq!(StateChange::Mode(AcMode::Heating).to_string(), "mode: Heating");
//! ```

use std::fmt;

use crate::types::{AcMode, PowerState};

/// A change applied to an appliance by one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// The appliance was switched to this power state.
    Power(PowerState),

    /// New television volume.
    Volume(u32),

    /// New television channel.
    Channel(u32),

    /// New air conditioner temperature.
    Temperature(i32),

    /// New air conditioner mode.
    Mode(AcMode),
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(state) => write!(f, "is {state}"),
            Self::Volume(volume) => write!(f, "volume: {volume}"),
            Self::Channel(channel) => write!(f, "channel: {channel}"),
            Self::Temperature(temperature) => write!(f, "temperature: {temperature}"),
            Self::Mode(mode) => write!(f, "mode: {mode}"),
        }
    }
}
