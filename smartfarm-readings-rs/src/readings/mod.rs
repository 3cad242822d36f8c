//! Sensor readings and actuator channels.
//!
//! The controller polls two kinds of state on a fixed interval:
//!
//! ```text
//! ambient-light sensor        ──► lux (integer)
//! temperature/humidity sensor ──► °C, %RH (floating)
//! GPIO lines                  ──► Lamp on/off, Pump on/off
//! ```
//!
//! This crate only describes that state. The drivers that produce it
//! implement [`ReadingSource`] and [`ActuatorSource`]; consumers such as the
//! OLED status screen take snapshots through those traits and never poll the
//! hardware themselves.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. The optional `defmt` feature derives
//! [`defmt::Format`] for embedded logging.

mod actuator;
mod sensor;

pub use actuator::{Actuator, ActuatorSource, ActuatorStates};
pub use sensor::{ReadingSource, SensorReadings};
