//! Core SSD1306 driver: frame buffer ownership and bus lifecycle.
//!
//! [`OledDriver`] owns both the [`Framebuffer`] and the bus [`Transport`].
//! Drawing only touches memory; [`update()`](OledDriver::update) is the one
//! call that moves pixels to the panel, always as a full 1024-byte frame.

use log::{debug, error, info, warn};

use crate::command::INIT_SEQUENCE;
use crate::error::OledError;
use crate::framebuffer::Framebuffer;
use crate::glyph;
use crate::interface::Transport;

/// Lifecycle of an [`OledDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Constructed, or `init()` did not complete.
    Uninitialized,
    /// Panel configured and showing the frame buffer.
    Ready,
    /// `deinit()` has released the bus.
    Closed,
}

/// Driver for a 128×64 SSD1306 panel.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — blank frame buffer, no bus traffic.
/// 2. [`OledDriver::init()`] — takes an opened transport, sends the
///    power-on command sequence and pushes a blank frame.
/// 3. Draw into the frame buffer, then [`OledDriver::update()`].
/// 4. [`OledDriver::deinit()`] (or drop) — releases the transport.
///
/// Drawing and `update()` are only meaningful in [`DriverState::Ready`];
/// the driver does not re-check the state on every call. Access must be
/// serialised by the caller: wrap the driver in a mutex if several threads
/// draw to it.
///
/// # Example
///
/// ```no_run
/// use smartfarm_oled_display_rs::{I2cInterface, OledDriver, DEFAULT_ADDRESS};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut oled = OledDriver::new();
/// oled.init(I2cInterface::new(i2c, DEFAULT_ADDRESS)).unwrap();
/// oled.draw_string(0, 0, "Hello");
/// oled.update().unwrap();
/// # }
/// ```
pub struct OledDriver<T: Transport> {
    /// `Some` from `init()` until `deinit()`, including after a failed
    /// `init()` so the handle is still released exactly once.
    transport: Option<T>,
    framebuffer: Framebuffer,
    state: DriverState,
}

impl<T: Transport> Default for OledDriver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> OledDriver<T> {
    /// Construct an uninitialised driver. No bus traffic.
    pub fn new() -> Self {
        Self {
            transport: None,
            framebuffer: Framebuffer::new(),
            state: DriverState::Uninitialized,
        }
    }

    /// Bring the panel from power-on to displaying a blank screen.
    ///
    /// Takes ownership of an opened `transport`, sends [`INIT_SEQUENCE`]
    /// one command frame per byte, then clears and pushes the frame buffer.
    ///
    /// # Errors
    ///
    /// The first failing bus operation aborts initialisation and is
    /// returned unchanged. Nothing is rolled back or retried; the panel may
    /// be left half-configured. The transport stays owned by the driver so
    /// [`deinit()`](Self::deinit) still releases it.
    pub fn init(&mut self, transport: T) -> Result<(), OledError<T::Error>> {
        if let Some(mut previous) = self.transport.take() {
            warn!("OLED re-initialised; closing previous bus handle");
            previous.close();
        }
        self.state = DriverState::Uninitialized;

        let transport = self.transport.insert(transport);
        for (i, &command) in INIT_SEQUENCE.iter().enumerate() {
            if let Err(e) = transport.send_command(command) {
                error!("OLED init aborted at byte {} ({:#04x})", i, command);
                return Err(e);
            }
        }
        debug!("OLED init sequence sent ({} bytes)", INIT_SEQUENCE.len());

        self.framebuffer.clear();
        self.update()?;

        self.state = DriverState::Ready;
        info!("OLED initialised");
        Ok(())
    }

    /// Release the bus handle. Safe to call repeatedly, and after a failed
    /// [`init()`](Self::init).
    pub fn deinit(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            transport.close();
            info!("OLED released");
        }
        self.state = DriverState::Closed;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// `true` once [`init()`](Self::init) has succeeded and until
    /// [`deinit()`](Self::deinit).
    pub fn is_initialized(&self) -> bool {
        self.state == DriverState::Ready
    }

    // ── Drawing (memory only) ────────────────────────────────────────

    /// Turn every pixel in the frame buffer off.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.framebuffer.set_pixel(x, y, on);
    }

    pub fn draw_char(&mut self, x: i32, y: i32, c: char) {
        glyph::draw_char(&mut self.framebuffer, x, y, c);
    }

    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        glyph::draw_string(&mut self.framebuffer, x, y, text);
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Mutable frame buffer, for drawing with `embedded-graphics`
    /// primitives via its [`DrawTarget`] impl.
    ///
    /// [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    // ── Device I/O ───────────────────────────────────────────────────

    /// Push the whole frame buffer to the panel in one data frame.
    ///
    /// # Errors
    ///
    /// [`OledError::BusClosed`] without a transport, otherwise whatever the
    /// transport reports.
    pub fn update(&mut self) -> Result<(), OledError<T::Error>> {
        let transport = self.transport.as_mut().ok_or(OledError::BusClosed)?;
        transport.send_data(self.framebuffer.as_bytes())
    }
}

impl<T: Transport> Drop for OledDriver<T> {
    fn drop(&mut self) {
        self.deinit();
    }
}

#[cfg(feature = "linux")]
mod linux_init {
    use std::path::Path;

    use linux_embedded_hal::i2cdev::linux::LinuxI2CError;
    use log::error;

    use super::OledDriver;
    use crate::error::OledError;
    use crate::linux::LinuxI2c;

    impl OledDriver<LinuxI2c> {
        /// Open the i2c-dev node at `device_path`, bind `address` and run
        /// [`init()`](Self::init).
        ///
        /// # Errors
        ///
        /// [`OledError::DeviceOpen`] or [`OledError::AddressBind`] from
        /// opening the bus, then anything [`init()`](Self::init) returns.
        pub fn init_device<P: AsRef<Path>>(
            &mut self,
            device_path: P,
            address: u8,
        ) -> Result<(), OledError<LinuxI2CError>> {
            let bus = LinuxI2c::open(device_path.as_ref(), address).map_err(|e| {
                error!("OLED: {}", e);
                e
            })?;
            self.init(bus)
        }
    }

}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::BUFFER_SIZE;
    use crate::interface::I2cInterface;
    use crate::mock::{MockBusError, RecordingI2c, RecordingTransport};

    #[test]
    fn new_driver_is_uninitialised_and_blank() {
        let driver = OledDriver::<RecordingTransport>::new();
        assert_eq!(driver.state(), DriverState::Uninitialized);
        assert!(!driver.is_initialized());
        assert_eq!(driver.framebuffer(), &Framebuffer::new());
    }

    #[test]
    fn init_sends_exact_command_sequence() {
        let (transport, log) = RecordingTransport::new();
        let mut driver = OledDriver::new();
        driver.init(transport).unwrap();

        assert_eq!(log.borrow().commands, INIT_SEQUENCE.to_vec());
        assert_eq!(
            log.borrow().commands,
            vec![
                0xAE, 0x20, 0x00, 0xB0, 0xC8, 0x00, 0x10, 0x40, 0x81, 0xFF, 0xA1, 0xA6, 0xA8,
                0x3F, 0xA4, 0xD3, 0x00, 0xD5, 0x80, 0xD9, 0xF1, 0xDA, 0x12, 0xDB, 0x40, 0x8D,
                0x14, 0xAF,
            ]
        );
        assert!(driver.is_initialized());
    }

    #[test]
    fn init_pushes_one_blank_frame() {
        let (transport, log) = RecordingTransport::new();
        let mut driver = OledDriver::new();
        driver.draw_pixel(1, 1, true);
        driver.init(transport).unwrap();

        let log = log.borrow();
        assert_eq!(log.data.len(), 1);
        assert_eq!(log.data[0], vec![0u8; BUFFER_SIZE]);
    }

    #[test]
    fn failed_command_aborts_init() {
        let (mut transport, log) = RecordingTransport::new();
        transport.fail_command_at = Some(5);
        let mut driver = OledDriver::new();

        let err = driver.init(transport).unwrap_err();
        assert!(matches!(err, OledError::Write(MockBusError)));
        assert_eq!(log.borrow().commands, INIT_SEQUENCE[..5].to_vec());
        assert!(log.borrow().data.is_empty());
        assert_eq!(driver.state(), DriverState::Uninitialized);
    }

    #[test]
    fn failed_blank_push_fails_init() {
        let (mut transport, log) = RecordingTransport::new();
        transport.fail_data = true;
        let mut driver = OledDriver::new();

        assert!(driver.init(transport).is_err());
        assert_eq!(log.borrow().commands.len(), INIT_SEQUENCE.len());
        assert!(!driver.is_initialized());
    }

    #[test]
    fn deinit_after_failed_init_releases_once() {
        let (mut transport, log) = RecordingTransport::new();
        transport.fail_command_at = Some(0);
        let mut driver = OledDriver::new();
        let _ = driver.init(transport);

        driver.deinit();
        driver.deinit();
        assert_eq!(log.borrow().releases, 1);
        assert_eq!(driver.state(), DriverState::Closed);
    }

    #[test]
    fn deinit_twice_releases_once() {
        let (transport, log) = RecordingTransport::new();
        let mut driver = OledDriver::new();
        driver.init(transport).unwrap();

        driver.deinit();
        driver.deinit();
        assert_eq!(log.borrow().releases, 1);
        drop(driver);
        assert_eq!(log.borrow().releases, 1);
    }

    #[test]
    fn deinit_without_init_is_harmless() {
        let mut driver = OledDriver::<RecordingTransport>::new();
        driver.deinit();
        assert_eq!(driver.state(), DriverState::Closed);
    }

    #[test]
    fn drop_releases_bus() {
        let (transport, log) = RecordingTransport::new();
        {
            let mut driver = OledDriver::new();
            driver.init(transport).unwrap();
        }
        assert_eq!(log.borrow().releases, 1);
    }

    #[test]
    fn reinit_closes_previous_handle() {
        let (first, first_log) = RecordingTransport::new();
        let (second, second_log) = RecordingTransport::new();
        let mut driver = OledDriver::new();
        driver.init(first).unwrap();
        driver.init(second).unwrap();

        assert_eq!(first_log.borrow().releases, 1);
        assert_eq!(second_log.borrow().releases, 0);
        assert!(driver.is_initialized());
    }

    #[test]
    fn drawing_never_touches_the_bus() {
        let (transport, log) = RecordingTransport::new();
        let mut driver = OledDriver::new();
        driver.init(transport).unwrap();
        let (commands, frames) = (log.borrow().commands.len(), log.borrow().data.len());

        driver.clear();
        driver.draw_pixel(3, 3, true);
        driver.draw_char(10, 10, 'x');
        driver.draw_string(0, 56, "bottom row");

        assert_eq!(log.borrow().commands.len(), commands);
        assert_eq!(log.borrow().data.len(), frames);
    }

    #[test]
    fn update_sends_current_frame_buffer() {
        let (transport, log) = RecordingTransport::new();
        let mut driver = OledDriver::new();
        driver.init(transport).unwrap();

        driver.draw_pixel(0, 0, true);
        driver.draw_pixel(127, 63, true);
        driver.update().unwrap();

        let log = log.borrow();
        assert_eq!(log.data.len(), 2);
        let frame = &log.data[1];
        assert_eq!(frame.len(), BUFFER_SIZE);
        assert_eq!(frame[0], 0x01);
        assert_eq!(frame[BUFFER_SIZE - 1], 0x80);
        assert_eq!(frame.as_slice(), driver.framebuffer().as_bytes());
    }

    #[test]
    fn update_without_bus_is_bus_closed() {
        let mut driver = OledDriver::<RecordingTransport>::new();
        assert!(matches!(driver.update(), Err(OledError::BusClosed)));

        let (transport, _log) = RecordingTransport::new();
        driver.init(transport).unwrap();
        driver.deinit();
        assert!(matches!(driver.update(), Err(OledError::BusClosed)));
    }

    #[test]
    fn init_over_embedded_hal_bus_frames_every_byte() {
        let mut bus = RecordingI2c::default();
        {
            let mut driver = OledDriver::new();
            driver.init(I2cInterface::new(&mut bus, 0x3C)).unwrap();
        }

        assert_eq!(bus.writes.len(), INIT_SEQUENCE.len() + 1);
        for ((address, frame), &command) in bus.writes.iter().zip(INIT_SEQUENCE.iter()) {
            assert_eq!(*address, 0x3C);
            assert_eq!(frame, &vec![0x00, command]);
        }
        let (_, data) = bus.writes.last().unwrap();
        assert_eq!(data.len(), BUFFER_SIZE + 1);
        assert_eq!(data[0], 0x40);
    }
}
