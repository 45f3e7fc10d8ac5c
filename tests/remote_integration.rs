// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests driving appliances through the remote.

use smart_remote::remote::INVALID_INDEX_NOTICE;
use smart_remote::{
    AcMode, AirConditioner, Device, DeviceStatus, Error, PowerState, Remote, Television,
    Transcript,
};

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn television_session() {
        let mut tv = Television::new(100, 10).unwrap();
        let transcript = Transcript::new();
        {
            let mut remote = Remote::with_output(transcript.clone());
            remote.add_device(&mut tv);

            remote.switch_device(0);
            remote.power();
            remote.plus();
            remote.next();
            remote.show_info();
        }

        assert_eq!(
            transcript.lines(),
            vec![
                "Switched to device 1",
                "TV [OFF], Volume: 0, Channel: 1",
                "TV is ON",
                "TV volume: 1",
                "TV channel: 2",
                "TV [ON], Volume: 1, Channel: 2",
            ]
        );
        assert_eq!(tv.volume(), 1);
        assert_eq!(tv.channel(), 2);
    }

    #[test]
    fn air_conditioner_session() {
        let mut ac = AirConditioner::new(16, 25).unwrap();
        let transcript = Transcript::new();
        {
            let mut remote = Remote::with_output(transcript.clone());
            remote.add_device(&mut ac);

            remote.switch_device(0);
            remote.power();
            remote.plus();
            remote.next();
            remote.show_info();
        }

        assert_eq!(
            transcript.lines(),
            vec![
                "Switched to device 1",
                "AirConditioner [OFF], Temperature: 16, Mode: Cooling",
                "AirConditioner is ON",
                "AirConditioner temperature: 17",
                "AirConditioner mode: Heating",
                "AirConditioner [ON], Temperature: 17, Mode: Heating",
            ]
        );
        assert_eq!(ac.temperature(), 17);
        assert_eq!(ac.mode(), AcMode::Heating);
    }

    #[test]
    fn television_prev_wraps_to_last_channel() {
        let mut tv = Television::new(100, 10).unwrap();
        let transcript = Transcript::new();
        {
            let mut remote = Remote::with_output(transcript.clone());
            remote.add_device(&mut tv);
            remote.switch_device(0);
            remote.power();
            remote.prev();
        }
        assert_eq!(transcript.last().as_deref(), Some("TV channel: 10"));
        assert_eq!(tv.channel(), 10);
    }

    #[test]
    fn switching_between_devices_keeps_their_state() {
        let mut tv = Television::new(100, 10).unwrap();
        let mut ac = AirConditioner::new(16, 25).unwrap();
        {
            let mut remote = Remote::with_output(Transcript::new());
            remote.add_device(&mut tv);
            remote.add_device(&mut ac);

            remote.switch_device(0);
            remote.power();
            remote.plus();
            remote.plus();

            remote.switch_device(1);
            remote.power();
            remote.prev();

            remote.switch_device(0);
            remote.minus();

            assert_eq!(
                remote.device(1).map(Device::status),
                Some(DeviceStatus::AirConditioner {
                    power: PowerState::On,
                    temperature: 16,
                    mode: AcMode::Sleep,
                })
            );
        }
        assert_eq!(tv.volume(), 1);
        assert!(tv.is_on());
        assert_eq!(ac.mode(), AcMode::Sleep);
    }
}

// ============================================================================
// Selection
// ============================================================================

mod selection {
    use super::*;

    #[test]
    fn out_of_range_index_changes_nothing() {
        let mut tv = Television::new(100, 10).unwrap();
        let mut ac = AirConditioner::new(16, 25).unwrap();
        let transcript = Transcript::new();
        {
            let mut remote = Remote::with_output(transcript.clone());
            remote.add_device(&mut tv);
            remote.add_device(&mut ac);

            remote.switch_device(0);
            remote.power();
            transcript.clear();

            for index in [2, 3, 100, usize::MAX] {
                remote.switch_device(index);
                assert_eq!(remote.current_index(), Some(0));
                assert_eq!(transcript.take(), vec![INVALID_INDEX_NOTICE]);
            }

            assert_eq!(
                remote.try_switch_device(2),
                Err(Error::InvalidIndex { index: 2, count: 2 })
            );
            assert!(transcript.is_empty());
        }
        assert_eq!(tv.power_state(), PowerState::On);
        assert_eq!(ac.power_state(), PowerState::Off);
    }

    #[test]
    fn duplicate_registration_is_allowed() {
        let mut tv = Television::new(100, 10).unwrap();
        let mut again = Television::new(100, 10).unwrap();
        let mut remote = Remote::with_output(Transcript::new());
        remote.add_device(&mut tv);
        remote.add_device(&mut again);
        assert_eq!(remote.device_count(), 2);
    }

    #[test]
    fn current_follows_selection() {
        let mut tv = Television::new(100, 10).unwrap();
        let mut ac = AirConditioner::new(16, 25).unwrap();
        let mut remote = Remote::with_output(Transcript::new());
        remote.add_device(&mut tv);
        remote.add_device(&mut ac);

        assert!(remote.current().is_none());
        remote.try_switch_device(1).unwrap();
        assert_eq!(
            remote.current().map(Device::kind),
            Some(smart_remote::DeviceKind::AirConditioner)
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;

    #[test]
    fn powered_off_devices_ignore_adjustments() {
        let mut tv = Television::new(5, 5).unwrap();
        let mut ac = AirConditioner::new(0, 5).unwrap();
        let transcript = Transcript::new();
        {
            let mut remote = Remote::with_output(transcript.clone());
            remote.add_device(&mut tv);
            remote.add_device(&mut ac);

            for index in 0..2 {
                remote.switch_device(index);
                let before = remote.status();
                transcript.clear();

                remote.plus();
                remote.minus();
                remote.next();
                remote.prev();

                assert_eq!(remote.status(), before);
                assert!(transcript.is_empty());
            }
        }
    }

    #[test]
    fn channel_round_trip_through_remote() {
        let mut tv = Television::new(100, 7).unwrap();
        let mut remote = Remote::with_output(Transcript::new());
        remote.add_device(&mut tv);
        remote.switch_device(0);
        remote.power();

        for n in 0..20 {
            let before = remote.status();
            for _ in 0..n {
                remote.next();
            }
            for _ in 0..n {
                remote.prev();
            }
            assert_eq!(remote.status(), before);
        }
    }

    #[test]
    fn clamp_is_idempotent_at_bounds() {
        let mut ac = AirConditioner::new(16, 18).unwrap();
        let transcript = Transcript::new();
        {
            let mut remote = Remote::with_output(transcript.clone());
            remote.add_device(&mut ac);
            remote.switch_device(0);
            remote.power();

            for _ in 0..5 {
                remote.plus();
            }
            transcript.clear();
            remote.plus();
            assert!(transcript.is_empty());

            for _ in 0..5 {
                remote.minus();
            }
            transcript.clear();
            remote.minus();
            assert!(transcript.is_empty());
        }
        assert_eq!(ac.temperature(), 16);
    }

    #[test]
    fn status_snapshot_serializes() {
        let mut tv = Television::new(100, 10).unwrap();
        tv.power();
        tv.plus();
        let json = serde_json::to_string(&tv.status()).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"Television","power":"On","volume":1,"channel":1}"#
        );
    }
}
