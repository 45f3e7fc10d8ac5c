// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output sinks for remote echo lines and status reports.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for the lines a [`Remote`](super::Remote) produces.
///
/// One call to [`emit`](Output::emit) is one line, without a trailing newline.
pub trait Output {
    /// Writes a single line.
    fn emit(&mut self, line: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Records emitted lines in memory.
///
/// Clones share the same buffer, so a caller can keep one handle and give
/// another to a remote.
///
/// # Examples
///
/// ```
/// use smart_remote::remote::{Output, Transcript};
///
/// let transcript = Transcript::new();
/// let mut sink = transcript.clone();
/// sink.emit("TV is ON");
///
/// assert_eq!(transcript.lines(), vec!["TV is ON".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line recorded so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns the most recent line.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }

    /// Returns the number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Discards every recorded line.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    /// Removes and returns every recorded line.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Output for Transcript {
    fn emit(&mut self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

impl fmt::Debug for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcript")
            .field("lines", &self.len())
            .finish()
    }
}
