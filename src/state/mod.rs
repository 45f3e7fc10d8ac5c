// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance state reporting types.
//!
//! [`StateChange`] describes what a single command changed, while
//! [`DeviceStatus`] is a full snapshot of an appliance.
//!
//! # Examples
//!
//! ```
//! use smart_remote::{Device, Television};
//! use smart_remote::state::StateChange;
//! use smart_remote::types::PowerState;
//!
//! let mut tv = Television::new(100, 10).unwrap();
//! assert_eq!(tv.power(), StateChange::Power(PowerState::On));
//! assert_eq!(tv.status().to_string(), "TV [ON], Volume: 0, Channel: 1");
//! ```

mod device_status;
mod state_change;

pub use device_status::DeviceStatus;
pub use state_change::StateChange;
