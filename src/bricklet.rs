//! Bricklet polling loop
//!
//! Ties the AC input device, the callback schedulers, the request dispatcher
//! and the transport together. One call to [`Bricklet::tick`] is one loop
//! iteration:
//!
//! 1. Tick the transport, flush a held reply, handle at most one request
//! 2. Sample and debounce both inputs, drive the LEDs
//! 3. Poll the callback schedulers
//!
//! Debouncing runs before the schedulers so callbacks always see the sample
//! taken in the same tick.

use crate::communication::tfp::{MessageDispatcher, TfpTransport, TransportError, TransportSink};
use crate::core::callback::CallbackHandlers;
use crate::core::protocol::{Frame, ProtocolError};
use crate::core::traits::TimeSource;
use crate::devices::ac_in::AcIn;
use crate::parameters::BrickletConfig;
use crate::platform::{traits::GpioInterface, PlatformError};
use crate::{log_error, log_info, log_warn};
use core::fmt;

/// Errors surfaced by one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickletError {
    /// GPIO setup failed
    Platform(PlatformError),
    /// Transport failed
    Transport(TransportError),
    /// Reply could not be encoded
    Protocol(ProtocolError),
}

impl From<PlatformError> for BrickletError {
    fn from(e: PlatformError) -> Self {
        BrickletError::Platform(e)
    }
}

impl From<TransportError> for BrickletError {
    fn from(e: TransportError) -> Self {
        BrickletError::Transport(e)
    }
}

impl From<ProtocolError> for BrickletError {
    fn from(e: ProtocolError) -> Self {
        BrickletError::Protocol(e)
    }
}

impl fmt::Display for BrickletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrickletError::Platform(e) => write!(f, "platform: {}", e),
            BrickletError::Transport(e) => write!(f, "transport: {}", e),
            BrickletError::Protocol(e) => write!(f, "protocol: {}", e),
        }
    }
}

/// Dual AC input bricklet
pub struct Bricklet<I, O, T, C>
where
    I: GpioInterface,
    O: GpioInterface,
    T: TfpTransport,
    C: TimeSource,
{
    config: BrickletConfig,
    ac_in: AcIn<I, O>,
    callbacks: CallbackHandlers,
    dispatcher: MessageDispatcher,
    transport: T,
    time: C,
    /// Reply waiting for the transport to accept it
    pending_reply: Option<Frame>,
}

impl<I, O, T, C> Bricklet<I, O, T, C>
where
    I: GpioInterface,
    O: GpioInterface,
    T: TfpTransport,
    C: TimeSource,
{
    /// Configure the pins and seed all state from the current input levels
    ///
    /// # Errors
    ///
    /// Returns `BrickletError::Platform` if the pins cannot be configured.
    pub fn new(
        config: BrickletConfig,
        inputs: [I; 2],
        leds: [O; 2],
        transport: T,
        time: C,
    ) -> Result<Self, BrickletError> {
        let ac_in = AcIn::new(inputs, leds)?;
        let callbacks = CallbackHandlers::new(ac_in.inputs(), config.callback_tick_wait_ms);

        log_info!("bricklet uid {} ready", config.uid);

        Ok(Self {
            config,
            ac_in,
            callbacks,
            dispatcher: MessageDispatcher::new(),
            transport,
            time,
            pending_reply: None,
        })
    }

    /// Run one loop iteration
    ///
    /// Input sampling and callbacks run even if the transport step failed;
    /// the transport error is returned afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first transport or encoding error of this iteration.
    pub fn tick(&mut self) -> Result<(), BrickletError> {
        let now_ms = self.time.now_ms();

        let communication = self.communicate(now_ms);

        self.ac_in.tick(now_ms);

        let mut sink = TransportSink::new(&mut self.transport, self.config.uid);
        self.callbacks.tick(self.ac_in.inputs(), now_ms, &mut sink);

        communication
    }

    /// Poll forever
    pub fn run(&mut self) -> ! {
        log_info!("bricklet started");
        loop {
            if let Err(e) = self.tick() {
                log_tick_error(e);
            }
        }
    }

    fn communicate(&mut self, now_ms: u32) -> Result<(), BrickletError> {
        self.transport.tick(now_ms)?;

        if let Some(reply) = self.pending_reply.take() {
            if !self.send_reply(reply)? {
                return Ok(());
            }
        }

        let Some(frame) = self.transport.receive()? else {
            return Ok(());
        };

        let reply = self
            .dispatcher
            .handle_frame(&frame, &mut self.ac_in, &mut self.callbacks)?;
        if let Some(reply) = reply {
            if !self.send_reply(reply)? {
                log_warn!("transport busy, holding reply");
            }
        }

        Ok(())
    }

    /// Send `reply` or hold it in `pending_reply`
    ///
    /// Returns `false` if the transport was busy. A failed send keeps the
    /// reply held and returns the error.
    fn send_reply(&mut self, reply: Frame) -> Result<bool, BrickletError> {
        if !self.transport.is_send_possible() {
            self.pending_reply = Some(reply);
            return Ok(false);
        }
        if let Err(e) = self.transport.send(&reply) {
            self.pending_reply = Some(reply);
            return Err(e.into());
        }
        Ok(true)
    }

    pub fn config(&self) -> &BrickletConfig {
        &self.config
    }

    pub fn ac_in(&self) -> &AcIn<I, O> {
        &self.ac_in
    }

    pub fn ac_in_mut(&mut self) -> &mut AcIn<I, O> {
        &mut self.ac_in
    }

    pub fn callbacks(&self) -> &CallbackHandlers {
        &self.callbacks
    }

    pub fn dispatcher(&self) -> &MessageDispatcher {
        &self.dispatcher
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn time(&self) -> &C {
        &self.time
    }

    /// Reply held back by transport backpressure
    pub fn pending_reply(&self) -> Option<&Frame> {
        self.pending_reply.as_ref()
    }
}

fn log_tick_error(error: BrickletError) {
    match error {
        BrickletError::Platform(_e) => log_error!("platform error: {:?}", _e),
        BrickletError::Transport(_e) => log_error!("transport error: {:?}", _e),
        BrickletError::Protocol(_e) => {
            log_error!("reply encoding failed: code {}", _e.error_code() as u8)
        }
    }
}
