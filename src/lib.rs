// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `smart_remote` - A universal remote controller for virtual appliances.
//!
//! Appliances expose a uniform control surface through the [`Device`]
//! trait, and a single [`Remote`] can be pointed at any one of them to
//! forward commands.
//!
//! # Supported Appliances
//!
//! - [`Television`]: clamped volume, cyclic channels
//! - [`AirConditioner`]: clamped temperature, cyclic modes
//!
//! # Commands
//!
//! | Command     | Television      | Air conditioner    |
//! |-------------|-----------------|--------------------|
//! | `power`     | toggle on/off   | toggle on/off      |
//! | `plus`      | volume up       | temperature up     |
//! | `minus`     | volume down     | temperature down   |
//! | `next`      | next channel    | next mode          |
//! | `prev`      | previous channel| previous mode      |
//! | `show_info` | status report   | status report      |
//!
//! Commands that do not apply (appliance off, value at its bound, nothing
//! selected) are silently ignored.
//!
//! # Quick Start
//!
//! ```
//! use smart_remote::{AirConditioner, Remote, Television};
//!
//! fn main() -> smart_remote::Result<()> {
//!     let mut tv = Television::new(100, 10)?;
//!     let mut ac = AirConditioner::new(16, 25)?;
//!
//!     let mut remote = Remote::new();
//!     remote.add_device(&mut tv);
//!     remote.add_device(&mut ac);
//!
//!     remote.try_switch_device(0)?;
//!     remote.power();
//!     remote.plus();
//!     remote.next();
//!     remote.show_info();
//!
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod error;
pub mod remote;
pub mod state;
pub mod types;

pub use device::{AirConditioner, Device, Television};
pub use error::{Error, Result, ValueError};
pub use remote::{Output, Remote, StdoutOutput, Transcript};
pub use state::{DeviceStatus, StateChange};
pub use types::{AcMode, DeviceKind, PowerState};
