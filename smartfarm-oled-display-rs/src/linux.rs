//! Linux i2c-dev transport.
//!
//! Opens `/dev/i2c-N`, binds the panel address with the `I2C_SLAVE` ioctl
//! and then writes frames with plain `write(2)` calls, each of which the
//! kernel turns into one I2C transaction.

use std::path::Path;

use linux_embedded_hal::i2cdev::core::I2CDevice;
use linux_embedded_hal::i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
use log::{debug, info};

use crate::error::OledError;
use crate::interface::{command_frame, data_frame, Transport, FRAME_CAPACITY};

/// Address-bound handle on an i2c-dev node.
///
/// The file descriptor is closed on [`close()`](Transport::close) or drop,
/// whichever comes first, and never twice.
pub struct LinuxI2c {
    device: Option<LinuxI2CDevice>,
    address: u8,
}

impl LinuxI2c {
    /// Open `path` read/write and bind the 7-bit `address` to it.
    ///
    /// # Errors
    ///
    /// * [`OledError::DeviceOpen`] if the node cannot be opened.
    /// * [`OledError::AddressBind`] if the address ioctl is rejected. The
    ///   node has already been closed again when this is returned.
    pub fn open<P: AsRef<Path>>(path: P, address: u8) -> Result<Self, OledError<LinuxI2CError>> {
        let path = path.as_ref();
        let device = LinuxI2CDevice::new(path, u16::from(address)).map_err(|e| match e {
            e @ LinuxI2CError::Io(_) => OledError::DeviceOpen(e),
            e => OledError::AddressBind(e),
        })?;

        info!("OLED bus {} opened at {:#04x}", path.display(), address);
        Ok(Self {
            device: Some(device),
            address,
        })
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    fn device(&mut self) -> Result<&mut LinuxI2CDevice, OledError<LinuxI2CError>> {
        self.device.as_mut().ok_or(OledError::BusClosed)
    }
}

impl Transport for LinuxI2c {
    type Error = LinuxI2CError;

    // i2c-dev turns each write(2) into a single transaction that either
    // completes whole or returns an errno, so the byte count `I2CDevice`
    // drops carries no information; any incomplete frame is a `Write` error.
    fn send_command(&mut self, command: u8) -> Result<(), OledError<LinuxI2CError>> {
        self.device()?
            .write(&command_frame(command))
            .map_err(OledError::Write)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), OledError<LinuxI2CError>> {
        let mut frame = [0u8; FRAME_CAPACITY];
        let frame = data_frame::<LinuxI2CError>(data, &mut frame)?;
        debug!("OLED data frame: {} bytes to {:#04x}", frame.len(), self.address());
        self.device()?.write(frame).map_err(OledError::Write)
    }

    fn close(&mut self) {
        // Dropping the device closes the descriptor.
        if self.device.take().is_some() {
            info!("OLED bus closed");
        }
    }
}
