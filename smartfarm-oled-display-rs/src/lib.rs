//! SSD1306 (128×64) OLED driver and status screen for the smart-farm
//! controller.
//!
//! This crate provides [`OledDriver`], which owns a page-layout
//! [`Framebuffer`] and pushes it to the panel through a [`Transport`], and
//! a fixed five-line status screen ([`OledDriver::show_status`]) for the
//! greenhouse readings.
//!
//! Everything is blocking and single-threaded: each bus call returns once
//! the write has completed or failed.
//!
//! # Quick Start
//!
//! ```ignore
//! use smartfarm_oled_display_rs::{OledDriver, DEFAULT_ADDRESS, DEFAULT_DEVICE_PATH};
//!
//! // Linux i2c-dev (feature `linux`):
//! let mut oled = OledDriver::new();
//! oled.init_device(DEFAULT_DEVICE_PATH, DEFAULT_ADDRESS)?;
//! oled.show_status(23.7, 55.2, 410, true, false)?;
//! oled.deinit();
//! ```
//!
//! Any `embedded-hal` I2C bus works through [`I2cInterface`]:
//!
//! ```ignore
//! let mut oled = OledDriver::new();
//! oled.init(I2cInterface::new(i2c, DEFAULT_ADDRESS))?;
//! ```
//!
//! # Crate Features
//!
//! - **`linux`** — [`LinuxI2c`](linux::LinuxI2c) transport for
//!   `/dev/i2c-N` nodes and [`OledDriver::init_device`]. Enables `std`.
//! - **`defmt`** — [`defmt::Format`] for the error and state types.

#![cfg_attr(not(any(test, feature = "linux")), no_std)]

pub mod command;
pub mod driver;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod glyph;
pub mod interface;
#[cfg(feature = "linux")]
pub mod linux;
pub mod status;

#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use command::{DEFAULT_ADDRESS, DEFAULT_DEVICE_PATH};
pub use driver::{DriverState, OledDriver};
pub use error::OledError;
pub use framebuffer::{Framebuffer, BUFFER_SIZE, HEIGHT, WIDTH};
pub use interface::{I2cInterface, Transport};
#[cfg(feature = "linux")]
pub use linux::LinuxI2c;
pub use status::{render_status, StatusSnapshot};
