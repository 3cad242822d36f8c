//! Recording bus doubles shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation};

use crate::error::OledError;
use crate::interface::{data_frame, Transport, FRAME_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

impl i2c::Error for MockBusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

// ── embedded-hal I2C ─────────────────────────────────────────────────────

/// I2C bus that records every write as `(address, bytes)`.
#[derive(Default)]
pub struct RecordingI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    fail: bool,
}

impl RecordingI2c {
    /// Bus whose every transaction fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ErrorType for RecordingI2c {
    type Error = MockBusError;
}

impl I2c for RecordingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockBusError);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}

// ── Transport ────────────────────────────────────────────────────────────

/// Everything a [`RecordingTransport`] saw, shared with the test body.
#[derive(Default, Debug)]
pub struct BusLog {
    /// Command bytes in send order.
    pub commands: Vec<u8>,
    /// Data payloads (without the control byte) in send order.
    pub data: Vec<Vec<u8>>,
    /// Times the handle actually went from open to closed.
    pub releases: usize,
}

/// [`Transport`] that records calls and can be told to fail.
pub struct RecordingTransport {
    log: Rc<RefCell<BusLog>>,
    open: bool,
    /// Fail the command with this zero-based index.
    pub fail_command_at: Option<usize>,
    pub fail_data: bool,
}

impl RecordingTransport {
    pub fn new() -> (Self, Rc<RefCell<BusLog>>) {
        let log = Rc::new(RefCell::new(BusLog::default()));
        let transport = Self {
            log: Rc::clone(&log),
            open: true,
            fail_command_at: None,
            fail_data: false,
        };
        (transport, log)
    }
}

impl Transport for RecordingTransport {
    type Error = MockBusError;

    fn send_command(&mut self, command: u8) -> Result<(), OledError<MockBusError>> {
        if !self.open {
            return Err(OledError::BusClosed);
        }
        let mut log = self.log.borrow_mut();
        if self.fail_command_at == Some(log.commands.len()) {
            return Err(OledError::Write(MockBusError));
        }
        log.commands.push(command);
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), OledError<MockBusError>> {
        if !self.open {
            return Err(OledError::BusClosed);
        }
        if self.fail_data {
            return Err(OledError::Write(MockBusError));
        }
        let mut frame = [0u8; FRAME_CAPACITY];
        let frame = data_frame::<MockBusError>(data, &mut frame)?;
        self.log.borrow_mut().data.push(frame[1..].to_vec());
        Ok(())
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            self.log.borrow_mut().releases += 1;
        }
    }
}
