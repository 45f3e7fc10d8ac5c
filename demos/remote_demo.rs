// SPDX-License-Identifier: MPL-2.0

//! Remote control walkthrough.
//!
//! Registers a television and an air conditioner, then drives each one
//! through the remote: power on, one step up, one step forward, status.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example remote_demo
//!
//! # Show which commands were ignored and why
//! RUST_LOG=smart_remote=trace cargo run --example remote_demo
//! ```

use smart_remote::{AirConditioner, Remote, Television};
use tracing_subscriber::EnvFilter;

fn main() -> smart_remote::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut tv = Television::new(100, 10)?;
    let mut ac = AirConditioner::new(16, 25)?;

    let mut remote = Remote::new();
    remote.add_device(&mut tv);
    remote.add_device(&mut ac);

    for index in 0..remote.device_count() {
        remote.switch_device(index);
        remote.power();
        remote.plus();
        remote.next();
        remote.show_info();
    }

    Ok(())
}
