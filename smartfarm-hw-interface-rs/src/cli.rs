//! Command-line parsing.
//!
//! ```text
//! smartfarm-hw-interface [--device PATH] [--address ADDR] <COMMAND>
//!
//!   status <temp °C> <humidity %> <lux> <lamp on|off> <pump on|off>
//!   text <x> <y> <words…>
//!   clear
//! ```
//!
//! The readings for `status` stand in for the sensor and GPIO drivers,
//! which run elsewhere on the controller.

use std::convert::Infallible;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use smartfarm::readings::{Actuator, ActuatorSource, ActuatorStates, ReadingSource, SensorReadings};

use crate::config::{parse_address, Config};

pub const USAGE: &str = "\
usage: smartfarm-hw-interface [--device PATH] [--address ADDR] <COMMAND>

commands:
  status <temp> <humidity> <lux> <lamp on|off> <pump on|off>
  text <x> <y> <words...>
  clear

environment:
  SMARTFARM_OLED_DEVICE   i2c-dev node (default /dev/i2c-1)
  SMARTFARM_OLED_ADDRESS  7-bit panel address (default 0x3C)
  RUST_LOG                log filter (default info)";

/// Readings and actuator states given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CliReadings {
    pub readings: SensorReadings,
    pub actuators: ActuatorStates,
}

impl ReadingSource for CliReadings {
    type Error = Infallible;

    fn read(&mut self) -> Result<SensorReadings, Infallible> {
        Ok(self.readings)
    }
}

impl ActuatorSource for CliReadings {
    fn is_on(&self, actuator: Actuator) -> bool {
        self.actuators.is_on(actuator)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Status(CliReadings),
    Text { x: i32, y: i32, text: String },
    Clear,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub device: Option<PathBuf>,
    pub address: Option<u8>,
    pub command: Command,
}

impl Cli {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut device = None;
        let mut address = None;
        let mut rest = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--device" => {
                    let path = args.next().context("--device needs a path")?;
                    device = Some(PathBuf::from(path));
                }
                "--address" => {
                    let raw = args.next().context("--address needs a value")?;
                    address = Some(parse_address(&raw)?);
                }
                "-h" | "--help" => {
                    return Ok(Self {
                        device,
                        address,
                        command: Command::Help,
                    })
                }
                _ => {
                    rest.push(arg);
                    rest.extend(args.by_ref());
                }
            }
        }

        let command = parse_command(&rest)?;
        Ok(Self {
            device,
            address,
            command,
        })
    }

    /// Flags win over whatever the environment set.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.device {
            config.device_path = path.clone();
        }
        if let Some(address) = self.address {
            config.address = address;
        }
    }
}

fn parse_command(args: &[String]) -> Result<Command> {
    let Some((name, operands)) = args.split_first() else {
        bail!("missing command\n\n{}", USAGE);
    };

    match name.as_str() {
        "status" => {
            let [temp, hum, lux, lamp, pump] = operands else {
                bail!("status takes 5 operands\n\n{}", USAGE);
            };
            let readings = SensorReadings::new(
                temp.parse().with_context(|| format!("bad temperature `{}`", temp))?,
                hum.parse().with_context(|| format!("bad humidity `{}`", hum))?,
                lux.parse().with_context(|| format!("bad lux `{}`", lux))?,
            );
            let actuators = ActuatorStates::new(parse_switch(lamp)?, parse_switch(pump)?);
            Ok(Command::Status(CliReadings {
                readings,
                actuators,
            }))
        }
        "text" => {
            let [x, y, words @ ..] = operands else {
                bail!("text takes <x> <y> <words...>\n\n{}", USAGE);
            };
            Ok(Command::Text {
                x: x.parse().with_context(|| format!("bad x `{}`", x))?,
                y: y.parse().with_context(|| format!("bad y `{}`", y))?,
                text: words.join(" "),
            })
        }
        "clear" => {
            if !operands.is_empty() {
                bail!("clear takes no operands\n\n{}", USAGE);
            }
            Ok(Command::Clear)
        }
        "help" => Ok(Command::Help),
        other => bail!("unknown command `{}`\n\n{}", other, USAGE),
    }
}

fn parse_switch(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "1" | "true" => Ok(true),
        "off" | "0" | "false" => Ok(false),
        _ => bail!("expected on/off, got `{}`", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn status_command() {
        let cli = Cli::parse(args("status 23.7 55.2 410 off on")).unwrap();
        let Command::Status(src) = cli.command else {
            panic!("expected status");
        };
        assert_eq!(src.readings, SensorReadings::new(23.7, 55.2, 410));
        assert!(!src.is_on(Actuator::Lamp));
        assert!(src.is_on(Actuator::Pump));
    }

    #[test]
    fn flags_before_command() {
        let cli = Cli::parse(args("--device /dev/i2c-3 --address 0x3D clear")).unwrap();
        assert_eq!(cli.device, Some(PathBuf::from("/dev/i2c-3")));
        assert_eq!(cli.address, Some(0x3D));
        assert_eq!(cli.command, Command::Clear);
    }

    #[test]
    fn text_joins_words() {
        let cli = Cli::parse(args("text 0 56 hello smart farm")).unwrap();
        assert_eq!(
            cli.command,
            Command::Text {
                x: 0,
                y: 56,
                text: "hello smart farm".to_string()
            }
        );
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse(args("--address 61 clear")).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.address, 61);
        assert_eq!(config.device_path, Config::default().device_path);
    }

    #[test]
    fn help() {
        assert_eq!(Cli::parse(args("--help")).unwrap().command, Command::Help);
        assert_eq!(Cli::parse(args("help")).unwrap().command, Command::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Cli::parse(args("")).is_err());
        assert!(Cli::parse(args("status 1 2 3 on")).is_err());
        assert!(Cli::parse(args("status warm 2 3 on off")).is_err());
        assert!(Cli::parse(args("status 1 2 3 maybe off")).is_err());
        assert!(Cli::parse(args("clear now")).is_err());
        assert!(Cli::parse(args("--address")).is_err());
        assert!(Cli::parse(args("reboot")).is_err());
    }

    #[test]
    fn clear_with_operands_names_clear() {
        let msg = Cli::parse(args("clear now")).unwrap_err().to_string();
        assert!(msg.starts_with("clear takes no operands"), "{}", msg);
        assert!(!msg.contains("unknown command"));
    }
}
