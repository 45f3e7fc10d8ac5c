// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Universal remote controller.

use std::fmt;

use crate::device::Device;
use crate::error::{Error, Result};
use crate::state::{DeviceStatus, StateChange};

use super::output::{Output, StdoutOutput};

/// Notice emitted when a selection index is out of range.
pub const INVALID_INDEX_NOTICE: &str = "Invalid device index";

/// A remote that forwards commands to one selected appliance.
///
/// The remote borrows its devices; it never owns or drops them. Devices are
/// addressed by registration order, starting at index 0. Until a device has
/// been selected with [`switch_device`](Self::switch_device), every command
/// is a silent no-op. Once set, the selection can change target but is never
/// cleared.
///
/// Every command that changes a device emits one `"<label> <change>"` line
/// to the remote's [`Output`], for example `TV volume: 1`.
///
/// # Examples
///
/// ```
/// use smart_remote::{AirConditioner, Remote, Television};
/// use smart_remote::remote::Transcript;
///
/// let mut tv = Television::new(100, 10).unwrap();
/// let mut ac = AirConditioner::new(16, 25).unwrap();
/// let transcript = Transcript::new();
///
/// let mut remote = Remote::with_output(transcript.clone());
/// remote.add_device(&mut tv);
/// remote.add_device(&mut ac);
///
/// remote.switch_device(0);
/// remote.power();
/// remote.plus();
/// assert_eq!(transcript.last().as_deref(), Some("TV volume: 1"));
///
/// drop(remote);
/// assert_eq!(tv.volume(), 1);
/// ```
pub struct Remote<'a> {
    /// Registered devices in registration order.
    devices: Vec<&'a mut dyn Device>,
    /// Index of the selected device, if any.
    current: Option<usize>,
    /// Destination for echo lines and status reports.
    output: Box<dyn Output + 'a>,
}

impl<'a> Remote<'a> {
    /// Creates a remote that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(StdoutOutput)
    }

    /// Creates a remote that writes its lines to `output`.
    #[must_use]
    pub fn with_output(output: impl Output + 'a) -> Self {
        Self {
            devices: Vec::new(),
            current: None,
            output: Box::new(output),
        }
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// Registers a device at the next index.
    ///
    /// There is no duplicate check and no upper bound.
    pub fn add_device(&mut self, device: &'a mut dyn Device) {
        tracing::debug!(
            index = self.devices.len(),
            kind = %device.kind(),
            "Registering device"
        );
        self.devices.push(device);
    }

    /// Returns the number of registered devices.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if no device has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns the device registered at `index`.
    #[must_use]
    pub fn device(&self, index: usize) -> Option<&dyn Device> {
        self.devices.get(index).map(|device| &**device)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects the device at `index`.
    ///
    /// On success emits `Switched to device N` (N is `index + 1`) followed by
    /// the device's status report. An out-of-range index emits
    /// [`INVALID_INDEX_NOTICE`] and leaves the selection unchanged.
    pub fn switch_device(&mut self, index: usize) {
        if self.try_switch_device(index).is_err() {
            self.output.emit(INVALID_INDEX_NOTICE);
        }
    }

    /// Selects the device at `index`, reporting an out-of-range index as an
    /// error instead of a notice.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIndex` if `index` is not below
    /// [`device_count`](Self::device_count). The selection is unchanged.
    pub fn try_switch_device(&mut self, index: usize) -> Result<()> {
        let count = self.devices.len();
        let Some(device) = self.devices.get(index) else {
            tracing::debug!(index, count, "Invalid device index");
            return Err(Error::InvalidIndex { index, count });
        };

        let report = device.show_info();
        self.current = Some(index);
        tracing::debug!(index, "Switched device");

        self.output.emit(&format!("Switched to device {}", index + 1));
        self.output.emit(&report);
        Ok(())
    }

    /// Returns the index of the selected device.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Returns the selected device.
    #[must_use]
    pub fn current(&self) -> Option<&dyn Device> {
        self.current.and_then(|index| self.device(index))
    }

    /// Returns a status snapshot of the selected device.
    #[must_use]
    pub fn status(&self) -> Option<DeviceStatus> {
        self.current().map(Device::status)
    }

    // =========================================================================
    // Forwarded commands
    // =========================================================================

    /// Toggles power on the selected device.
    pub fn power(&mut self) {
        self.forward("power", |device| Some(device.power()));
    }

    /// Increases the primary quantity of the selected device.
    pub fn plus(&mut self) {
        self.forward("plus", Device::plus);
    }

    /// Decreases the primary quantity of the selected device.
    pub fn minus(&mut self) {
        self.forward("minus", Device::minus);
    }

    /// Advances the secondary property of the selected device.
    pub fn next(&mut self) {
        self.forward("next", Device::next);
    }

    /// Steps back the secondary property of the selected device.
    pub fn prev(&mut self) {
        self.forward("prev", Device::prev);
    }

    /// Emits the status report of the selected device.
    pub fn show_info(&mut self) {
        if let Some(report) = self.current().map(Device::show_info) {
            self.output.emit(&report);
        } else {
            tracing::trace!(command = "show_info", "No device selected, ignoring");
        }
    }

    fn forward(
        &mut self,
        command: &'static str,
        apply: impl FnOnce(&mut (dyn Device + 'a)) -> Option<StateChange>,
    ) {
        let Some(device) = self.current.and_then(|index| self.devices.get_mut(index)) else {
            tracing::trace!(command, "No device selected, ignoring");
            return;
        };

        let kind = device.kind();
        if let Some(change) = apply(&mut **device) {
            self.output.emit(&format!("{kind} {change}"));
        }
    }
}

impl Default for Remote<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Remote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Remote")
            .field("devices", &self.devices.len())
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
