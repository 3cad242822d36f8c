//! Runtime configuration: defaults, then environment, then flags.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use smartfarm_oled_display_rs::{DEFAULT_ADDRESS, DEFAULT_DEVICE_PATH};

/// Environment variable overriding the i2c-dev node.
pub const ENV_DEVICE: &str = "SMARTFARM_OLED_DEVICE";

/// Environment variable overriding the panel address.
pub const ENV_ADDRESS: &str = "SMARTFARM_OLED_ADDRESS";

/// Where to find the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub device_path: PathBuf,
    /// 7-bit I2C address.
    pub address: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_path: PathBuf::from(DEFAULT_DEVICE_PATH),
            address: DEFAULT_ADDRESS,
        }
    }
}

impl Config {
    /// Defaults overridden by whichever of [`ENV_DEVICE`] / [`ENV_ADDRESS`]
    /// are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_DEVICE) {
            config.device_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_ADDRESS) {
            config.address =
                parse_address(&raw).with_context(|| format!("invalid {}", ENV_ADDRESS))?;
        }
        Ok(config)
    }
}

/// Parse a 7-bit address written as decimal (`60`) or hex (`0x3C`).
pub fn parse_address(raw: &str) -> Result<u8> {
    let raw = raw.trim();
    let value = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => raw.parse::<u8>(),
    }
    .with_context(|| format!("`{}` is not an I2C address", raw))?;

    if value > 0x7F {
        bail!("address {:#04x} does not fit in 7 bits", value);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel_wiring() {
        let c = Config::default();
        assert_eq!(c.device_path, PathBuf::from("/dev/i2c-1"));
        assert_eq!(c.address, 0x3C);
    }

    #[test]
    fn env_overrides_defaults() {
        let c = Config::from_lookup(|key| match key {
            ENV_DEVICE => Some("/dev/i2c-2".to_string()),
            ENV_ADDRESS => Some("0x3d".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(c.device_path, PathBuf::from("/dev/i2c-2"));
        assert_eq!(c.address, 0x3D);
    }

    #[test]
    fn empty_env_keeps_defaults() {
        assert_eq!(Config::from_lookup(|_| None).unwrap(), Config::default());
    }

    #[test]
    fn bad_env_address_is_an_error() {
        let err = Config::from_lookup(|key| (key == ENV_ADDRESS).then(|| "oled".to_string()));
        assert!(err.is_err());
    }

    #[test]
    fn address_formats() {
        assert_eq!(parse_address("60").unwrap(), 0x3C);
        assert_eq!(parse_address("0x3C").unwrap(), 0x3C);
        assert_eq!(parse_address(" 0X3d ").unwrap(), 0x3D);
        assert!(parse_address("0x80").is_err());
        assert!(parse_address("300").is_err());
        assert!(parse_address("").is_err());
    }
}
