//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin state (high/low), mode and the number of output writes for
/// test verification.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    writes: u32,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            writes: 0,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: false,
            mode: GpioMode::Input,
            writes: 0,
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }

    /// Number of successful `set_high`/`set_low` calls
    pub fn writes(&self) -> u32 {
        self.writes
    }

    fn write(&mut self, high: bool) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull => {
                self.state = high;
                self.writes += 1;
                Ok(())
            }
            GpioMode::Input => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.write(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.write(false)
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
