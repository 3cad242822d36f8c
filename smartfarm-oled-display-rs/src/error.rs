//! Error types for the OLED display driver.

use core::fmt;

/// Errors that can occur while talking to the panel.
///
/// Generic over the underlying bus error `E` so that both `embedded-hal`
/// buses and the Linux i2c-dev node report their own cause. Drawing never
/// fails; only bus operations return this type.
#[derive(Debug)]
pub enum OledError<E> {
    /// The bus device node could not be opened.
    DeviceOpen(E),

    /// The bus rejected the 7-bit device address.
    AddressBind(E),

    /// A command or data frame was not transmitted in full.
    Write(E),

    /// A data payload exceeded the 1024-byte frame limit. Nothing was sent.
    PayloadTooLarge(usize),

    /// The transport was closed, or the driver was never given one.
    BusClosed,
}

impl<E: fmt::Debug> fmt::Display for OledError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::DeviceOpen(e) => write!(f, "failed to open bus device: {:?}", e),
            OledError::AddressBind(e) => write!(f, "failed to bind device address: {:?}", e),
            OledError::Write(e) => write!(f, "bus write failed: {:?}", e),
            OledError::PayloadTooLarge(len) => {
                write!(f, "data payload of {} bytes exceeds 1024-byte frame", len)
            }
            OledError::BusClosed => write!(f, "bus is closed"),
        }
    }
}

#[cfg(feature = "linux")]
impl<E: fmt::Debug> std::error::Error for OledError<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for OledError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::DeviceOpen(e) => defmt::write!(f, "Device open failed: {}", e),
            OledError::AddressBind(e) => defmt::write!(f, "Address bind failed: {}", e),
            OledError::Write(e) => defmt::write!(f, "Write failed: {}", e),
            OledError::PayloadTooLarge(len) => defmt::write!(f, "Payload too large: {}", len),
            OledError::BusClosed => defmt::write!(f, "Bus closed"),
        }
    }
}
