// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Television appliance.

use crate::error::ValueError;
use crate::state::{DeviceStatus, StateChange};
use crate::types::{DeviceKind, PowerState};

use super::Device;

/// A television with clamped volume and cyclic channels.
///
/// Volume ranges over `[0, max_volume]` and starts at 0. Channels range over
/// `[1, max_channels]`, start at 1 and wrap in both directions. Volume and
/// channel only change while the television is on.
///
/// # Examples
///
/// ```
/// use smart_remote::{Device, Television};
///
/// let mut tv = Television::new(100, 10).unwrap();
/// tv.power();
/// tv.prev();
/// assert_eq!(tv.channel(), 10);
///
/// // Bounds are validated at construction
/// assert!(Television::new(100, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Television {
    power: PowerState,
    volume: u32,
    channel: u32,
    max_volume: u32,
    max_channels: u32,
}

impl Television {
    /// First channel number.
    pub const FIRST_CHANNEL: u32 = 1;

    /// Creates a powered-off television at volume 0, channel 1.
    ///
    /// # Arguments
    ///
    /// * `max_volume` - Highest reachable volume (at least 1)
    /// * `max_channels` - Number of channels (at least 1)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::BelowMinimum` if either bound is 0.
    pub fn new(max_volume: u32, max_channels: u32) -> Result<Self, ValueError> {
        if max_volume == 0 {
            return Err(ValueError::BelowMinimum {
                name: "max_volume",
                min: 1,
                actual: max_volume,
            });
        }
        if max_channels == 0 {
            return Err(ValueError::BelowMinimum {
                name: "max_channels",
                min: 1,
                actual: max_channels,
            });
        }
        Ok(Self {
            power: PowerState::Off,
            volume: 0,
            channel: Self::FIRST_CHANNEL,
            max_volume,
            max_channels,
        })
    }

    /// Returns the power state.
    #[must_use]
    pub const fn power_state(&self) -> PowerState {
        self.power
    }

    /// Returns the current volume.
    #[must_use]
    pub const fn volume(&self) -> u32 {
        self.volume
    }

    /// Returns the current channel.
    #[must_use]
    pub const fn channel(&self) -> u32 {
        self.channel
    }

    /// Returns the volume upper bound.
    #[must_use]
    pub const fn max_volume(&self) -> u32 {
        self.max_volume
    }

    /// Returns the number of channels.
    #[must_use]
    pub const fn max_channels(&self) -> u32 {
        self.max_channels
    }
}

impl Device for Television {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Television
    }

    fn power(&mut self) -> StateChange {
        self.power = self.power.toggled();
        tracing::debug!(power = %self.power, "Television power toggled");
        StateChange::Power(self.power)
    }

    fn plus(&mut self) -> Option<StateChange> {
        if !self.power.is_on() || self.volume >= self.max_volume {
            tracing::trace!(volume = self.volume, power = %self.power, "Ignoring volume up");
            return None;
        }
        self.volume += 1;
        tracing::debug!(volume = self.volume, "Television volume up");
        Some(StateChange::Volume(self.volume))
    }

    fn minus(&mut self) -> Option<StateChange> {
        if !self.power.is_on() || self.volume == 0 {
            tracing::trace!(volume = self.volume, power = %self.power, "Ignoring volume down");
            return None;
        }
        self.volume -= 1;
        tracing::debug!(volume = self.volume, "Television volume down");
        Some(StateChange::Volume(self.volume))
    }

    fn next(&mut self) -> Option<StateChange> {
        if !self.power.is_on() {
            tracing::trace!("Ignoring next channel while off");
            return None;
        }
        // channel <= max_channels, so the result stays in [1, max_channels]
        self.channel = self.channel % self.max_channels + 1;
        tracing::debug!(channel = self.channel, "Television next channel");
        Some(StateChange::Channel(self.channel))
    }

    fn prev(&mut self) -> Option<StateChange> {
        if !self.power.is_on() {
            tracing::trace!("Ignoring previous channel while off");
            return None;
        }
        // Same as (channel - 2 + max) % max + 1 without intermediate overflow
        self.channel = if self.channel == Self::FIRST_CHANNEL {
            self.max_channels
        } else {
            self.channel - 1
        };
        tracing::debug!(channel = self.channel, "Television previous channel");
        Some(StateChange::Channel(self.channel))
    }

    fn status(&self) -> DeviceStatus {
        DeviceStatus::Television {
            power: self.power,
            volume: self.volume,
            channel: self.channel,
        }
    }
}
