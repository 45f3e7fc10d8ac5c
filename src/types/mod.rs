// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the appliances.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of an appliance
//! - [`AcMode`] - Cyclic air conditioner mode (Cooling, Heating, Turbo, Sleep)
//! - [`DeviceKind`] - Which appliance variant a device is

mod kind;
mod mode;
mod power;

pub use kind::DeviceKind;
pub use mode::AcMode;
pub use power::PowerState;
