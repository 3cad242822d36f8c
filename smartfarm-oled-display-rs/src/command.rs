//! SSD1306 command bytes and I2C control bytes.
//!
//! Every I2C write to the controller starts with a control byte that tells
//! it how to interpret the rest of the frame. There is no D/C line on the
//! 2-wire bus, so this byte is the whole command/data distinction:
//!
//! - [`CONTROL_COMMAND`] — the payload is one or more command bytes.
//! - [`CONTROL_DATA`] — the payload is GDDRAM pixel data.

// ---------------------------------------------------------------------------
// Control bytes
// ---------------------------------------------------------------------------

/// Co = 0, D/C# = 0: command stream.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Co = 0, D/C# = 1: data stream.
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Default 7-bit I2C address of the panel (SA0 tied low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Default i2c-dev node the panel hangs off.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/i2c-1";

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

pub const SET_CONTRAST: u8 = 0x81;
/// Output follows RAM content.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;

// ---------------------------------------------------------------------------
// Addressing setting commands
// ---------------------------------------------------------------------------

pub const SET_LOW_COLUMN: u8 = 0x00;
pub const SET_HIGH_COLUMN: u8 = 0x10;
pub const MEMORY_MODE: u8 = 0x20;
/// Operand for [`MEMORY_MODE`]: horizontal addressing.
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;
pub const SET_PAGE_START: u8 = 0xB0;

// ---------------------------------------------------------------------------
// Hardware configuration commands
// ---------------------------------------------------------------------------

pub const SET_START_LINE: u8 = 0x40;
/// Column 127 mapped to SEG0.
pub const SEG_REMAP: u8 = 0xA1;
pub const SET_MULTIPLEX: u8 = 0xA8;
/// COM scan from COM[N-1] down to COM0.
pub const COM_SCAN_DEC: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving scheme commands
// ---------------------------------------------------------------------------

pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_VCOM_DETECT: u8 = 0xDB;
pub const CHARGE_PUMP: u8 = 0x8D;
/// Operand for [`CHARGE_PUMP`]: enable the internal DC-DC.
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

// ---------------------------------------------------------------------------
// Power-on sequence
// ---------------------------------------------------------------------------

/// Bytes sent, one command frame each, to take a 128×64 panel from reset
/// to displaying. Operands follow their command inline.
#[rustfmt::skip]
pub const INIT_SEQUENCE: [u8; 28] = [
    DISPLAY_OFF,
    MEMORY_MODE, MEMORY_MODE_HORIZONTAL,
    SET_PAGE_START,
    COM_SCAN_DEC,
    SET_LOW_COLUMN,
    SET_HIGH_COLUMN,
    SET_START_LINE,
    SET_CONTRAST, 0xFF,
    SEG_REMAP,
    NORMAL_DISPLAY,
    SET_MULTIPLEX, 0x3F, // 64 rows
    DISPLAY_ALL_ON_RESUME,
    SET_DISPLAY_OFFSET, 0x00,
    SET_DISPLAY_CLOCK_DIV, 0x80,
    SET_PRECHARGE, 0xF1,
    SET_COM_PINS, 0x12,
    SET_VCOM_DETECT, 0x40,
    CHARGE_PUMP, CHARGE_PUMP_ENABLE,
    DISPLAY_ON,
];
