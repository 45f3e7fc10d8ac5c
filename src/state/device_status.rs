// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status snapshots of appliances.

use std::fmt;

use crate::types::{AcMode, DeviceKind, PowerState};

/// Point-in-time snapshot of every mutable attribute of an appliance.
///
/// The [`Display`](fmt::Display) implementation produces the status report
/// line shown by [`Remote::show_info`](crate::Remote::show_info).
///
/// # Examples
///
/// ```
/// use smart_remote::state::DeviceStatus;
/// use smart_remote::types::{AcMode, PowerState};
///
/// let tv = DeviceStatus::Television {
///     power: PowerState::On,
///     volume: 1,
///     channel: 2,
/// };
/// assert_eq!(tv.to_string(), "TV [ON], Volume: 1, Channel: 2");
///
/// let ac = DeviceStatus::AirConditioner {
///     power: PowerState::Off,
///     temperature: 16,
///     mode: AcMode::Cooling,
/// };
/// assert_eq!(ac.to_string(), "AirConditioner [OFF], Temperature: 16, Mode: Cooling");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum DeviceStatus {
    /// Television status.
    Television {
        /// Power state.
        power: PowerState,
        /// Current volume.
        volume: u32,
        /// Current channel.
        channel: u32,
    },

    /// Air conditioner status.
    AirConditioner {
        /// Power state.
        power: PowerState,
        /// Current temperature.
        temperature: i32,
        /// Current mode.
        mode: AcMode,
    },
}

impl DeviceStatus {
    /// Returns the kind of appliance this status belongs to.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        match self {
            Self::Television { .. } => DeviceKind::Television,
            Self::AirConditioner { .. } => DeviceKind::AirConditioner,
        }
    }

    /// Returns the power state recorded in the snapshot.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        match self {
            Self::Television { power, .. } | Self::AirConditioner { power, .. } => *power,
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind().label();
        match self {
            Self::Television {
                power,
                volume,
                channel,
            } => write!(f, "{label} [{power}], Volume: {volume}, Channel: {channel}"),
            Self::AirConditioner {
                power,
                temperature,
                mode,
            } => write!(
                f,
                "{label} [{power}], Temperature: {temperature}, Mode: {mode}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn television_accessors() {
        let status = DeviceStatus::Television {
            power: PowerState::On,
            volume: 10,
            channel: 3,
        };
        assert_eq!(status.kind(), DeviceKind::Television);
        assert_eq!(status.power(), PowerState::On);
    }

    #[test]
    fn air_conditioner_display() {
        let status = DeviceStatus::AirConditioner {
            power: PowerState::On,
            temperature: 17,
            mode: AcMode::Heating,
        };
        assert_eq!(
            status.to_string(),
            "AirConditioner [ON], Temperature: 17, Mode: Heating"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let status = DeviceStatus::Television {
            power: PowerState::Off,
            volume: 0,
            channel: 1,
        };
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "Television",
                "power": "Off",
                "volume": 0,
                "channel": 1
            })
        );
    }

    #[test]
    fn deserializes_air_conditioner() {
        let status: DeviceStatus = serde_json::from_str(
            r#"{"kind":"AirConditioner","power":"On","temperature":20,"mode":"Sleep"}"#,
        )
        .unwrap();
        assert_eq!(
            status,
            DeviceStatus::AirConditioner {
                power: PowerState::On,
                temperature: 20,
                mode: AcMode::Sleep,
            }
        );
    }
}
