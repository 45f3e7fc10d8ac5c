// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Uniform control surface implemented by every appliance.
//!
//! The [`Device`] trait is what a [`Remote`](crate::Remote) talks to. Each
//! appliance decides for itself whether a command applies: power-state
//! gating and bound checks live in the implementations, and a command that
//! does not apply is a silent no-op rather than an error.

mod air_conditioner;
mod television;

pub use air_conditioner::AirConditioner;
pub use television::Television;

use crate::state::{DeviceStatus, StateChange};
use crate::types::DeviceKind;

/// Control surface shared by all appliances.
///
/// `plus`/`minus` adjust the primary quantity (volume, temperature) with a
/// linear clamp. `next`/`prev` step the secondary property (channel, mode)
/// cyclically. All four return `None` when the command was ignored.
///
/// # Examples
///
/// ```
/// use smart_remote::{AirConditioner, Device};
/// use smart_remote::state::StateChange;
///
/// let mut ac = AirConditioner::new(16, 25).unwrap();
///
/// // Ignored while off
/// assert_eq!(ac.plus(), None);
///
/// ac.power();
/// assert_eq!(ac.plus(), Some(StateChange::Temperature(17)));
/// ```
pub trait Device {
    /// Returns which appliance this is.
    fn kind(&self) -> DeviceKind;

    /// Toggles the power state and reports the new state.
    fn power(&mut self) -> StateChange;

    /// Increases the primary quantity by one unit.
    fn plus(&mut self) -> Option<StateChange>;

    /// Decreases the primary quantity by one unit.
    fn minus(&mut self) -> Option<StateChange>;

    /// Advances the secondary property, wrapping past the last value.
    fn next(&mut self) -> Option<StateChange>;

    /// Steps the secondary property back, wrapping past the first value.
    fn prev(&mut self) -> Option<StateChange>;

    /// Returns a snapshot of all current attributes.
    fn status(&self) -> DeviceStatus;

    /// Returns `true` while the appliance is powered on.
    fn is_on(&self) -> bool {
        self.status().power().is_on()
    }

    /// Returns the human-readable status report line.
    fn show_info(&self) -> String {
        self.status().to_string()
    }
}
