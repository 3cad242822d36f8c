//! Five-line status screen.
//!
//! [`StatusSnapshot`] is an immutable, already-truncated copy of everything
//! the screen shows; [`render_status`] lays it out with the 5×7 font and
//! [`OledDriver::show_status`] ties clear, render and update together.
//!
//! # Layout
//!
//! ```text
//! y=0   Temp: 23 C
//! y=10  Hum : 55 %
//! y=20  Lux : 410
//! y=30
//! y=40  Lamp: OFF
//! y=50  Pump: ON
//! ```

use core::fmt::Write;

use heapless::String;
use smartfarm::readings::{Actuator, ActuatorSource, SensorReadings};

use crate::driver::OledDriver;
use crate::error::OledError;
use crate::framebuffer::Framebuffer;
use crate::glyph::draw_string;
use crate::interface::Transport;

/// Top edge of each status line, in [`StatusSnapshot::lines`] order.
pub const STATUS_LINE_Y: [i32; 5] = [0, 10, 20, 40, 50];

/// Capacity of one formatted line.
pub const LINE_CAPACITY: usize = 32;

/// One formatted status line.
pub type StatusLine = String<LINE_CAPACITY>;

// ── StatusSnapshot ───────────────────────────────────────────────────────

/// Everything the status screen shows, with readings already truncated to
/// whole numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    /// Whole degrees Celsius.
    pub temperature: i32,
    /// Whole percent relative humidity.
    pub humidity: i32,
    pub lux: i32,
    pub lamp_on: bool,
    pub pump_on: bool,
}

impl StatusSnapshot {
    /// Build from raw readings. Floats are truncated toward zero, never
    /// rounded: `23.7` shows as `23`.
    pub fn new(temperature: f32, humidity: f32, lux: i32, pump_on: bool, lamp_on: bool) -> Self {
        Self {
            temperature: temperature as i32,
            humidity: humidity as i32,
            lux,
            lamp_on,
            pump_on,
        }
    }

    /// Build from a sensor sample and the current actuator state.
    pub fn from_sources<A: ActuatorSource + ?Sized>(readings: &SensorReadings, actuators: &A) -> Self {
        Self {
            temperature: readings.temperature_whole(),
            humidity: readings.humidity_whole(),
            lux: readings.lux,
            lamp_on: actuators.is_on(Actuator::Lamp),
            pump_on: actuators.is_on(Actuator::Pump),
        }
    }

    /// The five screen lines, top to bottom.
    pub fn lines(&self) -> [StatusLine; 5] {
        let mut lines: [StatusLine; 5] = Default::default();
        // Longest line is "Temp: -2147483648 C" (19 chars), so writes into a
        // 32-byte string cannot overflow.
        let _ = write!(lines[0], "Temp: {} C", self.temperature);
        let _ = write!(lines[1], "Hum : {} %", self.humidity);
        let _ = write!(lines[2], "Lux : {}", self.lux);
        let _ = write!(lines[3], "{}: {}", Actuator::Lamp.label(), on_off(self.lamp_on));
        let _ = write!(lines[4], "{}: {}", Actuator::Pump.label(), on_off(self.pump_on));
        lines
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Draw `snapshot` into `fb` at the fixed line positions.
///
/// Does not clear first; [`OledDriver::show_status`] does.
pub fn render_status(fb: &mut Framebuffer, snapshot: &StatusSnapshot) {
    for (line, &y) in snapshot.lines().iter().zip(STATUS_LINE_Y.iter()) {
        draw_string(fb, 0, y, line);
    }
}

impl<T: Transport> OledDriver<T> {
    /// Clear the screen, draw the status lines for the given readings and
    /// push the frame.
    ///
    /// Temperature and humidity are truncated toward zero.
    pub fn show_status(
        &mut self,
        temperature: f32,
        humidity: f32,
        lux: i32,
        pump_on: bool,
        lamp_on: bool,
    ) -> Result<(), OledError<T::Error>> {
        let snapshot = StatusSnapshot::new(temperature, humidity, lux, pump_on, lamp_on);
        self.show_snapshot(&snapshot)
    }

    /// [`show_status`](Self::show_status) fed from a sensor sample and an
    /// actuator source.
    pub fn show_readings<A: ActuatorSource + ?Sized>(
        &mut self,
        readings: &SensorReadings,
        actuators: &A,
    ) -> Result<(), OledError<T::Error>> {
        self.show_snapshot(&StatusSnapshot::from_sources(readings, actuators))
    }

    /// Clear, render `snapshot`, update.
    pub fn show_snapshot(&mut self, snapshot: &StatusSnapshot) -> Result<(), OledError<T::Error>> {
        self.clear();
        render_status(self.framebuffer_mut(), snapshot);
        self.update()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
