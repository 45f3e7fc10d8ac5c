// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner appliance.

use crate::error::ValueError;
use crate::state::{DeviceStatus, StateChange};
use crate::types::{AcMode, DeviceKind, PowerState};

use super::Device;

/// An air conditioner with a clamped temperature and cyclic modes.
///
/// Temperature ranges over `[min_temp, max_temp]` and starts at `min_temp`.
/// The mode starts at [`AcMode::Cooling`] and cycles through
/// [`AcMode::ALL`]. Both only change while the air conditioner is on.
///
/// # Examples
///
/// ```
/// use smart_remote::{AirConditioner, Device};
/// use smart_remote::types::AcMode;
///
/// let mut ac = AirConditioner::new(16, 25).unwrap();
/// ac.power();
/// ac.next();
/// assert_eq!(ac.mode(), AcMode::Heating);
///
/// assert!(AirConditioner::new(25, 25).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirConditioner {
    power: PowerState,
    temperature: i32,
    mode: AcMode,
    min_temp: i32,
    max_temp: i32,
}

impl AirConditioner {
    /// Creates a powered-off air conditioner at `min_temp` in cooling mode.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperatureRange` unless
    /// `min_temp < max_temp`.
    pub fn new(min_temp: i32, max_temp: i32) -> Result<Self, ValueError> {
        if min_temp >= max_temp {
            return Err(ValueError::InvalidTemperatureRange {
                min: min_temp,
                max: max_temp,
            });
        }
        Ok(Self {
            power: PowerState::Off,
            temperature: min_temp,
            mode: AcMode::default(),
            min_temp,
            max_temp,
        })
    }

    /// Returns the power state.
    #[must_use]
    pub const fn power_state(&self) -> PowerState {
        self.power
    }

    /// Returns the current temperature.
    #[must_use]
    pub const fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> AcMode {
        self.mode
    }

    /// Returns the temperature lower bound.
    #[must_use]
    pub const fn min_temp(&self) -> i32 {
        self.min_temp
    }

    /// Returns the temperature upper bound.
    #[must_use]
    pub const fn max_temp(&self) -> i32 {
        self.max_temp
    }
}

impl Device for AirConditioner {
    fn kind(&self) -> DeviceKind {
        DeviceKind::AirConditioner
    }

    fn power(&mut self) -> StateChange {
        self.power = self.power.toggled();
        tracing::debug!(power = %self.power, "Air conditioner power toggled");
        StateChange::Power(self.power)
    }

    fn plus(&mut self) -> Option<StateChange> {
        if !self.power.is_on() || self.temperature >= self.max_temp {
            tracing::trace!(
                temperature = self.temperature,
                power = %self.power,
                "Ignoring temperature up"
            );
            return None;
        }
        self.temperature += 1;
        tracing::debug!(temperature = self.temperature, "Air conditioner temperature up");
        Some(StateChange::Temperature(self.temperature))
    }

    fn minus(&mut self) -> Option<StateChange> {
        if !self.power.is_on() || self.temperature <= self.min_temp {
            tracing::trace!(
                temperature = self.temperature,
                power = %self.power,
                "Ignoring temperature down"
            );
            return None;
        }
        self.temperature -= 1;
        tracing::debug!(temperature = self.temperature, "Air conditioner temperature down");
        Some(StateChange::Temperature(self.temperature))
    }

    fn next(&mut self) -> Option<StateChange> {
        if !self.power.is_on() {
            tracing::trace!("Ignoring next mode while off");
            return None;
        }
        self.mode = self.mode.next();
        tracing::debug!(mode = %self.mode, "Air conditioner next mode");
        Some(StateChange::Mode(self.mode))
    }

    fn prev(&mut self) -> Option<StateChange> {
        if !self.power.is_on() {
            tracing::trace!("Ignoring previous mode while off");
            return None;
        }
        self.mode = self.mode.prev();
        tracing::debug!(mode = %self.mode, "Air conditioner previous mode");
        Some(StateChange::Mode(self.mode))
    }

    fn status(&self) -> DeviceStatus {
        DeviceStatus::AirConditioner {
            power: self.power,
            temperature: self.temperature,
            mode: self.mode,
        }
    }
}
