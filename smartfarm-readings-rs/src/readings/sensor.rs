/// One sample from the ambient sensors.
///
/// Temperature and humidity arrive as floating values from the
/// temperature/humidity sensor; the light sensor reports whole lux.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReadings {
    /// Air temperature in degrees Celsius.
    pub temperature_c: f32,
    /// Relative humidity in percent.
    pub humidity_pct: f32,
    /// Ambient light level in lux.
    pub lux: i32,
}

impl SensorReadings {
    pub fn new(temperature_c: f32, humidity_pct: f32, lux: i32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            lux,
        }
    }

    /// Temperature truncated toward zero (`23.7` → `23`, `-0.5` → `0`).
    ///
    /// Readings are shown as whole numbers without rounding. NaN maps to 0.
    pub fn temperature_whole(&self) -> i32 {
        self.temperature_c as i32
    }

    /// Humidity truncated toward zero, same rules as
    /// [`temperature_whole()`](Self::temperature_whole).
    pub fn humidity_whole(&self) -> i32 {
        self.humidity_pct as i32
    }
}

/// Producer of [`SensorReadings`], implemented by the sensor drivers.
///
/// Each call performs a fresh read. The error type is left to the
/// implementation since the sensors sit on different buses.
pub trait ReadingSource {
    type Error;

    fn read(&mut self) -> Result<SensorReadings, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values_truncate_toward_zero() {
        let r = SensorReadings::new(23.7, 55.2, 410);
        assert_eq!(r.temperature_whole(), 23);
        assert_eq!(r.humidity_whole(), 55);

        let cold = SensorReadings::new(-4.9, 99.99, 0);
        assert_eq!(cold.temperature_whole(), -4);
        assert_eq!(cold.humidity_whole(), 99);
    }

    #[test]
    fn nan_truncates_to_zero() {
        let r = SensorReadings::new(f32::NAN, f32::NAN, 1);
        assert_eq!(r.temperature_whole(), 0);
        assert_eq!(r.humidity_whole(), 0);
    }

    struct Fixed(SensorReadings);

    impl ReadingSource for Fixed {
        type Error = ();

        fn read(&mut self) -> Result<SensorReadings, ()> {
            Ok(self.0)
        }
    }

    #[test]
    fn reading_source_returns_sample() {
        let mut src = Fixed(SensorReadings::new(20.0, 40.0, 300));
        assert_eq!(src.read(), Ok(SensorReadings::new(20.0, 40.0, 300)));
    }
}
