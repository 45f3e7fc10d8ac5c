// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote controller for a set of appliances.
//!
//! The [`Remote`] borrows any number of [`Device`](crate::Device)s, lets the
//! caller select one by registration index, and forwards commands to the
//! selection. What it prints goes to an [`Output`]: [`StdoutOutput`] by
//! default, or a [`Transcript`] to capture lines in memory.
//!
//! # Examples
//!
//! ```
//! use smart_remote::{Remote, Television};
//! use smart_remote::remote::Transcript;
//!
//! let mut tv = Television::new(100, 10).unwrap();
//! let transcript = Transcript::new();
//! let mut remote = Remote::with_output(transcript.clone());
//! remote.add_device(&mut tv);
//!
//! // Nothing selected yet: silently ignored
//! remote.power();
//! assert!(transcript.is_empty());
//!
//! remote.switch_device(3);
//! assert_eq!(transcript.last().as_deref(), Some("Invalid device index"));
//! ```

mod controller;
mod output;

pub use controller::{INVALID_INDEX_NOTICE, Remote};
pub use output::{Output, StdoutOutput, Transcript};
