//! Host scenario tests driving the full polling loop
//!
//! Requests go in through the mock transport, replies and callbacks come out
//! of it, and the AC inputs are simulated with mock GPIO pins.

use dual_ac_in::communication::tfp::MockTransport;
use dual_ac_in::core::ac_in::Channel;
use dual_ac_in::core::protocol::{Frame, HEADER_SIZE};
use dual_ac_in::core::traits::MockTime;
use dual_ac_in::parameters::BrickletConfig;
use dual_ac_in::platform::mock::MockGpio;
use dual_ac_in::Bricklet;

const UID: u32 = 0x00AB_CDEF;

const FID_GET_VALUE: u8 = 1;
const FID_SET_VALUE_CALLBACK_CONFIGURATION: u8 = 2;
const FID_SET_ALL_VALUE_CALLBACK_CONFIGURATION: u8 = 4;
const FID_SET_CHANNEL_LED_CONFIG: u8 = 6;
const FID_GET_CHANNEL_LED_CONFIG: u8 = 7;
const FID_CALLBACK_VALUE: u8 = 8;
const FID_CALLBACK_ALL_VALUE: u8 = 9;

type Device = Bricklet<MockGpio, MockGpio, MockTransport, MockTime>;

fn device() -> Device {
    Bricklet::new(
        BrickletConfig::with_uid(UID),
        [MockGpio::new_input(), MockGpio::new_input()],
        [MockGpio::new_output(), MockGpio::new_output()],
        MockTransport::new(),
        MockTime::new(),
    )
    .unwrap()
}

fn request(function_id: u8, response_expected: bool, payload: &[u8]) -> Frame {
    let mut bytes = UID.to_le_bytes().to_vec();
    let options = (1 << 4) | if response_expected { 1 << 3 } else { 0 };
    bytes.extend_from_slice(&[(HEADER_SIZE + payload.len()) as u8, function_id, options, 0]);
    bytes.extend_from_slice(payload);
    Frame::from_slice(&bytes).unwrap()
}

fn value_callback_config(channel: u8, period_ms: u32, has_to_change: bool) -> Frame {
    let mut payload = vec![channel];
    payload.extend_from_slice(&period_ms.to_le_bytes());
    payload.push(has_to_change as u8);
    request(FID_SET_VALUE_CALLBACK_CONFIGURATION, false, &payload)
}

fn all_value_callback_config(period_ms: u32, has_to_change: bool) -> Frame {
    let mut payload = period_ms.to_le_bytes().to_vec();
    payload.push(has_to_change as u8);
    request(FID_SET_ALL_VALUE_CALLBACK_CONFIGURATION, false, &payload)
}

fn tick_at(device: &mut Device, now_ms: u32) {
    device.time().set(now_ms);
    device.tick().unwrap();
}

fn send_request(device: &mut Device, frame: Frame, now_ms: u32) {
    assert!(device.transport_mut().push_incoming(&frame));
    tick_at(device, now_ms);
}

fn set_input(device: &mut Device, channel: Channel, level: bool) {
    device.ac_in_mut().input_pin_mut(channel).set_input_state(level);
}

fn take_sent(device: &mut Device) -> Vec<Vec<u8>> {
    let transport = device.transport_mut();
    let sent = transport.sent().iter().map(|frame| frame.to_vec()).collect();
    transport.clear_sent();
    sent
}

fn error_code(frame: &[u8]) -> u8 {
    frame[7] >> 6
}

#[test]
fn led_mode_out_of_range_is_rejected() {
    let mut device = device();

    send_request(&mut device, request(FID_SET_CHANNEL_LED_CONFIG, true, &[1, 5]), 1);
    let sent = take_sent(&mut device);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].len(), HEADER_SIZE);
    assert_eq!(error_code(&sent[0]), 1);

    send_request(&mut device, request(FID_GET_CHANNEL_LED_CONFIG, true, &[1]), 2);
    let sent = take_sent(&mut device);
    assert_eq!(error_code(&sent[0]), 0);
    assert_eq!(sent[0][HEADER_SIZE], 3);
}

#[test]
fn disabled_value_callback_never_emits() {
    let mut device = device();
    send_request(&mut device, value_callback_config(0, 0, false), 1);

    for now in 2..600 {
        set_input(&mut device, Channel::Ch0, now % 20 < 10);
        tick_at(&mut device, now);
    }

    assert!(take_sent(&mut device)
        .iter()
        .all(|frame| frame[5] != FID_CALLBACK_VALUE));
}

#[test]
fn combined_callback_reports_flipped_channel() {
    let mut device = device();
    send_request(&mut device, all_value_callback_config(50, true), 1);

    for now in 2..100 {
        tick_at(&mut device, now);
    }
    assert!(take_sent(&mut device).is_empty());

    set_input(&mut device, Channel::Ch0, true);
    tick_at(&mut device, 100);

    let sent = take_sent(&mut device);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][5], FID_CALLBACK_ALL_VALUE);
    assert_eq!(&sent[0][HEADER_SIZE..], &[0b01, 0b01]);
}

#[test]
fn backpressure_delivers_buffered_callback_unmodified() {
    let mut device = device();
    send_request(&mut device, value_callback_config(1, 10, false), 1);

    device.transport_mut().send_possible = false;
    for now in 20..40 {
        if now == 25 {
            set_input(&mut device, Channel::Ch1, true);
        }
        tick_at(&mut device, now);
    }
    assert!(take_sent(&mut device).is_empty());

    device.transport_mut().send_possible = true;
    tick_at(&mut device, 40);
    let sent = take_sent(&mut device);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][5], FID_CALLBACK_VALUE);
    assert_eq!(&sent[0][HEADER_SIZE..], &[1, 0, 0]);

    tick_at(&mut device, 41);
    let sent = take_sent(&mut device);
    assert_eq!(&sent[0][HEADER_SIZE..], &[1, 1, 1]);
}

#[test]
fn toggling_channel_stays_present_until_timeout() {
    let mut device = device();

    for now in 1..=400 {
        if (10..=200).contains(&now) && now % 10 == 0 {
            let level = (now / 10) % 2 == 1;
            set_input(&mut device, Channel::Ch0, level);
        }
        tick_at(&mut device, now);

        let present = device.ac_in().value(Channel::Ch0);
        if (10..300).contains(&now) {
            assert!(present, "absent at {} ms", now);
        } else {
            assert!(!present, "present at {} ms", now);
        }
    }
}

#[test]
fn get_value_reports_packed_state() {
    let mut device = device();
    set_input(&mut device, Channel::Ch1, true);
    tick_at(&mut device, 5);

    send_request(&mut device, request(FID_GET_VALUE, true, &[]), 6);
    let sent = take_sent(&mut device);
    assert_eq!(sent[0][HEADER_SIZE], 0b10);
}

#[test]
fn unknown_function_reports_not_supported() {
    let mut device = device();
    send_request(&mut device, request(200, false, &[]), 1);
    let sent = take_sent(&mut device);
    assert_eq!(sent.len(), 1);
    assert_eq!(error_code(&sent[0]), 2);
}

#[test]
fn configuration_write_makes_callback_due_immediately() {
    let mut device = device();
    tick_at(&mut device, 5_000);

    send_request(&mut device, value_callback_config(0, 1_000, false), 5_001);
    let sent = take_sent(&mut device);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][5], FID_CALLBACK_VALUE);
    assert_eq!(&sent[0][HEADER_SIZE..], &[0, 0, 0]);
}
