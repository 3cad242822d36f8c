//! smartfarm-hw-interface
//!
//! Linux glue for the greenhouse status display. Wires the readings crate
//! and the OLED driver together:
//!
//! 1. Configuration is resolved from defaults, the environment and flags.
//! 2. The OLED is opened on its i2c-dev node and initialised.
//! 3. The requested command is rendered (status screen, free text, clear).
//!
//! The display is a secondary surface. If it cannot be opened or written,
//! the failure is logged, the readings are still logged, and the program
//! exits normally.

mod cli;
mod config;

use std::convert::Infallible;

use anyhow::Result;
use log::{error, info, warn};
use smartfarm::readings::{ActuatorSource, ReadingSource};
use smartfarm_oled_display_rs::{LinuxI2c, OledDriver, OledError, Transport};

use crate::cli::{Cli, Command, USAGE};
use crate::config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse(std::env::args().skip(1))?;
    if cli.command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    info!(
        "smartfarm-hw-interface starting (OLED {} @ {:#04x})",
        config.device_path.display(),
        config.address
    );

    let mut oled: OledDriver<LinuxI2c> = OledDriver::new();
    if let Err(e) = oled.init_device(&config.device_path, config.address) {
        // Sensor/actuator reporting carries on without the panel.
        warn!("OLED unavailable, continuing without display: {}", e);
    }

    let mut command = cli.command;
    log_command(&mut command);

    if oled.is_initialized() {
        if let Err(e) = execute(&mut command, &mut oled) {
            error!("OLED update failed: {}", e);
        }
    }

    oled.deinit();
    Ok(())
}

/// Report what is being shown, display or not.
fn log_command(command: &mut Command) {
    match command {
        Command::Status(source) => {
            let r = read_infallible(source);
            let a = source.states();
            info!(
                "Temp {:.1} C, Hum {:.1} %, Lux {}, Lamp {}, Pump {}",
                r.temperature_c, r.humidity_pct, r.lux, a.lamp, a.pump
            );
        }
        Command::Text { x, y, text } => info!("Text at ({}, {}): {:?}", x, y, text),
        Command::Clear => info!("Clearing display"),
        Command::Help => {}
    }
}

/// Render `command` and push it to the panel.
fn execute<T: Transport>(
    command: &mut Command,
    oled: &mut OledDriver<T>,
) -> Result<(), OledError<T::Error>> {
    match command {
        Command::Status(source) => {
            let readings = read_infallible(source);
            oled.show_readings(&readings, &*source)
        }
        Command::Text { x, y, text } => {
            oled.clear();
            oled.draw_string(*x, *y, text);
            oled.update()
        }
        Command::Clear => {
            oled.clear();
            oled.update()
        }
        Command::Help => Ok(()),
    }
}

fn read_infallible<S>(source: &mut S) -> smartfarm::readings::SensorReadings
where
    S: ReadingSource<Error = Infallible>,
{
    match source.read() {
        Ok(readings) => readings,
        Err(never) => match never {},
    }
}
