//! Shared reading and actuator state for the smart-farm controller.
//!
//! The display crate and the hardware-interface binary both depend on the
//! types in [`readings`]; sensor and GPIO drivers plug in through the
//! [`ReadingSource`](readings::ReadingSource) and
//! [`ActuatorSource`](readings::ActuatorSource) traits.

#![no_std]

pub mod readings;
