/// Actuator channels driven by the controller's GPIO lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Actuator {
    /// Grow lamp.
    Lamp,
    /// Irrigation pump.
    Pump,
}

impl Actuator {
    /// Every channel, in status-screen order.
    pub const ALL: [Actuator; 2] = [Actuator::Lamp, Actuator::Pump];

    /// Four-character label used on the status screen.
    pub fn label(self) -> &'static str {
        match self {
            Actuator::Lamp => "Lamp",
            Actuator::Pump => "Pump",
        }
    }
}

/// On/off state of every [`Actuator`] channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorStates {
    pub lamp: bool,
    pub pump: bool,
}

impl ActuatorStates {
    pub fn new(lamp: bool, pump: bool) -> Self {
        Self { lamp, pump }
    }

    pub fn is_on(&self, actuator: Actuator) -> bool {
        match actuator {
            Actuator::Lamp => self.lamp,
            Actuator::Pump => self.pump,
        }
    }

    pub fn set(&mut self, actuator: Actuator, on: bool) {
        match actuator {
            Actuator::Lamp => self.lamp = on,
            Actuator::Pump => self.pump = on,
        }
    }

    /// Flip a channel and return its new state.
    pub fn toggle(&mut self, actuator: Actuator) -> bool {
        let on = !self.is_on(actuator);
        self.set(actuator, on);
        on
    }
}

/// Read-only view of actuator state, implemented by the GPIO layer.
pub trait ActuatorSource {
    fn is_on(&self, actuator: Actuator) -> bool;

    /// Snapshot of every channel.
    fn states(&self) -> ActuatorStates {
        ActuatorStates {
            lamp: self.is_on(Actuator::Lamp),
            pump: self.is_on(Actuator::Pump),
        }
    }
}

impl ActuatorSource for ActuatorStates {
    fn is_on(&self, actuator: Actuator) -> bool {
        ActuatorStates::is_on(self, actuator)
    }
}
