//! Bus transport: control-byte framing over I2C.
//!
//! The SSD1306 distinguishes commands from pixel data purely by the first
//! byte of each I2C write (see [`crate::command`]). [`Transport`] is the
//! seam the driver talks through; [`I2cInterface`] implements it for any
//! `embedded-hal` I2C bus and [`LinuxI2c`](crate::linux::LinuxI2c) for a
//! Linux i2c-dev node.

use embedded_hal::i2c::I2c;
use log::debug;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};
use crate::error::OledError;
use crate::framebuffer::BUFFER_SIZE;

/// Largest payload accepted by [`Transport::send_data`]: one full frame
/// buffer.
pub const MAX_DATA_LEN: usize = BUFFER_SIZE;

/// Size of a data frame on the wire: control byte + [`MAX_DATA_LEN`].
pub const FRAME_CAPACITY: usize = MAX_DATA_LEN + 1;

/// Command/data byte channel to the panel.
///
/// All operations block until the bus write completes or fails. No retries
/// are attempted.
pub trait Transport {
    /// Underlying bus error.
    type Error;

    /// Send one command byte as a `[0x00, command]` frame.
    fn send_command(&mut self, command: u8) -> Result<(), OledError<Self::Error>>;

    /// Send up to [`MAX_DATA_LEN`] bytes of pixel data as a single
    /// `[0x40, data…]` frame.
    ///
    /// # Errors
    ///
    /// [`OledError::PayloadTooLarge`] if `data` is longer than
    /// [`MAX_DATA_LEN`]; nothing is written in that case.
    fn send_data(&mut self, data: &[u8]) -> Result<(), OledError<Self::Error>>;

    /// Release the bus handle. Calling this again, or on a handle that is
    /// already closed, does nothing.
    fn close(&mut self);
}

/// Two-byte command frame.
pub(crate) fn command_frame(command: u8) -> [u8; 2] {
    [CONTROL_COMMAND, command]
}

/// Assemble `[CONTROL_DATA, data…]` into `frame` and return the used prefix.
pub(crate) fn data_frame<'a, E>(
    data: &[u8],
    frame: &'a mut [u8; FRAME_CAPACITY],
) -> Result<&'a [u8], OledError<E>> {
    if data.len() > MAX_DATA_LEN {
        return Err(OledError::PayloadTooLarge(data.len()));
    }
    frame[0] = CONTROL_DATA;
    frame[1..=data.len()].copy_from_slice(data);
    Ok(&frame[..=data.len()])
}

/// [`Transport`] over an `embedded-hal` I2C bus.
///
/// Each frame is a single `write` transaction to the configured address.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
    closed: bool,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Wrap a bus.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            closed: false,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Hand the bus peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Transport for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn send_command(&mut self, command: u8) -> Result<(), OledError<Self::Error>> {
        if self.closed {
            return Err(OledError::BusClosed);
        }
        self.i2c
            .write(self.address, &command_frame(command))
            .map_err(OledError::Write)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), OledError<Self::Error>> {
        if self.closed {
            return Err(OledError::BusClosed);
        }
        let mut frame = [0u8; FRAME_CAPACITY];
        let frame = data_frame::<I2C::Error>(data, &mut frame)?;
        debug!("OLED data frame: {} bytes to {:#04x}", frame.len(), self.address);
        self.i2c.write(self.address, frame).map_err(OledError::Write)
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
