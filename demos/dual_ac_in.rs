//! Dual AC input firmware for RP2350
//!
//! Samples the two AC sense inputs, drives the channel LEDs and runs the
//! bricklet polling loop. Outgoing frames are printed over defmt RTT; the
//! host link is provided by the board's communication stack.
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 W on the dual AC carrier board (see `BOARD_PINS`):
//! - GPIO2 / GPIO3: AC sense inputs (opto-coupler outputs)
//! - GPIO14 / GPIO15: channel LEDs (active low)
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --example dual_ac_in --features pico2_w --target thumbv8m.main-none-eabihf
//! ```

#![no_std]
#![no_main]

use dual_ac_in::communication::tfp::{TfpTransport, TransportError};
use dual_ac_in::core::protocol::Frame;
use dual_ac_in::core::traits::EmbassyTime;
use dual_ac_in::parameters::{BoardPinConfig, BrickletConfig, ChannelPins};
use dual_ac_in::platform::rp2350::{Rp2350Input, Rp2350Output};
use dual_ac_in::Bricklet;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use {defmt_rtt as _, panic_probe as _};

/// Transport that never receives and prints every frame it sends
struct RttTransport;

impl TfpTransport for RttTransport {
    fn tick(&mut self, _now_ms: u32) -> Result<(), TransportError> {
        Ok(())
    }

    fn receive(&mut self) -> Result<Option<Frame>, TransportError> {
        Ok(None)
    }

    fn is_send_possible(&self) -> bool {
        true
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        defmt::info!("tx {=[u8]:x}", frame);
        Ok(())
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    defmt::info!("dual AC input starting");

    let config = BrickletConfig::default();
    if config.pins.validate().is_err() {
        defmt::panic!("invalid board pin configuration");
    }

    let built = BoardPinConfig {
        channels: [
            ChannelPins { input: p.PIN_2.pin(), led: p.PIN_14.pin() },
            ChannelPins { input: p.PIN_3.pin(), led: p.PIN_15.pin() },
        ],
    };
    if let Err(e) = config.pins.check_wiring(&built) {
        defmt::panic!("firmware pins differ from board wiring: {}", defmt::Debug2Format(&e));
    }

    let inputs = [
        Rp2350Input::new(Input::new(p.PIN_2, Pull::None)),
        Rp2350Input::new(Input::new(p.PIN_3, Pull::None)),
    ];
    let leds = [
        Rp2350Output::new(Output::new(p.PIN_14, Level::High)),
        Rp2350Output::new(Output::new(p.PIN_15, Level::High)),
    ];

    let mut bricklet = match Bricklet::new(config, inputs, leds, RttTransport, EmbassyTime) {
        Ok(bricklet) => bricklet,
        Err(e) => defmt::panic!("bricklet init failed: {}", defmt::Display2Format(&e)),
    };

    bricklet.run()
}
