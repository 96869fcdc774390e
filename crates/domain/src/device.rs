//! Device — a simulated controllable unit with on/off state.
//!
//! The device set is closed: [`Device`] is a tagged union over the known
//! kinds, each carrying its own fields, with per-operation dispatch. The
//! [`SmartDevice`] trait captures the capability every kind shares
//! (`turn_on`, `turn_off`, `status`) and is implemented by each kind as
//! well as by [`Device`] itself.

mod light;
mod thermostat;

pub use light::{Light, LightBuilder};
pub use thermostat::{Thermostat, ThermostatBuilder};

use serde::{Deserialize, Serialize};

use crate::error::{CasitaError, UnsupportedCommandError, ValidationError};
use crate::id::DeviceId;
use crate::notification::Notification;
use crate::time::Timestamp;

/// Common capability of every device kind.
pub trait SmartDevice {
    /// Unique identifier of the device.
    fn id(&self) -> DeviceId;

    /// Identifying name, immutable after construction.
    fn name(&self) -> &str;

    /// Whether the device is currently switched on.
    fn is_on(&self) -> bool;

    /// When the device was last switched on, `None` before first activation.
    fn last_activated(&self) -> Option<Timestamp>;

    /// Switch the device on, recording `at` as the activation time.
    ///
    /// Returns the notifications the transition produced. The known kinds
    /// never fail; the fallible signature exists so collections of devices
    /// can apply a continue-and-collect policy uniformly.
    ///
    /// # Errors
    ///
    /// The built-in kinds always return `Ok`.
    fn turn_on(&mut self, at: Timestamp) -> Result<Vec<Notification>, CasitaError>;

    /// Switch the device off. Idempotent state-wise.
    fn turn_off(&mut self) -> Notification;

    /// Human-readable summary, recomputed on demand.
    fn status(&self) -> String;
}

/// State shared by every device kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Core {
    pub id: DeviceId,
    pub name: String,
    pub is_on: bool,
    pub last_activated: Option<Timestamp>,
}

impl Core {
    pub(crate) fn new(id: DeviceId, name: String) -> Self {
        Self {
            id,
            name,
            is_on: false,
            last_activated: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CasitaError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    pub(crate) fn turn_on(&mut self, at: Timestamp) -> Notification {
        self.is_on = true;
        self.last_activated = Some(at);
        Notification::TurnedOn {
            device: self.name.clone(),
            at,
        }
    }

    pub(crate) fn turn_off(&mut self) -> Notification {
        self.is_on = false;
        Notification::TurnedOff {
            device: self.name.clone(),
        }
    }

    pub(crate) fn status(&self) -> String {
        let state = if self.is_on { "ON" } else { "OFF" };
        format!("{} is {state}", self.name)
    }
}

/// Render a temperature the way the status strings expect: whole values
/// lose the trailing `.0` (`20.0` → `20`), fractional values print as-is.
pub(crate) fn fmt_celsius(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// A device of one of the known kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Device {
    Light(Light),
    Thermostat(Thermostat),
}

impl Device {
    /// Set a light's brightness level.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::InvalidArgument`] when `level` is above 100
    /// (state untouched), or [`CasitaError::Unsupported`] when the device
    /// is not a light.
    pub fn set_brightness(&mut self, level: u8) -> Result<Notification, CasitaError> {
        match self {
            Self::Light(light) => light.set_brightness(level),
            Self::Thermostat(thermostat) => Err(UnsupportedCommandError {
                device: thermostat.name().to_string(),
                command: "set_brightness",
            }
            .into()),
        }
    }

    /// Set a thermostat's target temperature. No range validation:
    /// the thermostat accepts any value, implausible ones included.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::Unsupported`] when the device is not a
    /// thermostat.
    pub fn set_target_temperature(&mut self, celsius: f64) -> Result<Notification, CasitaError> {
        match self {
            Self::Thermostat(thermostat) => Ok(thermostat.set_target(celsius)),
            Self::Light(light) => Err(UnsupportedCommandError {
                device: light.name().to_string(),
                command: "set_target_temperature",
            }
            .into()),
        }
    }

    /// Feed a thermostat a new sensed temperature. This models external
    /// sensor input, not a device command.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::Unsupported`] when the device is not a
    /// thermostat.
    pub fn update_current_temperature(
        &mut self,
        celsius: f64,
    ) -> Result<Notification, CasitaError> {
        match self {
            Self::Thermostat(thermostat) => Ok(thermostat.update_current(celsius)),
            Self::Light(light) => Err(UnsupportedCommandError {
                device: light.name().to_string(),
                command: "update_current_temperature",
            }
            .into()),
        }
    }
}

impl SmartDevice for Device {
    fn id(&self) -> DeviceId {
        match self {
            Self::Light(d) => d.id(),
            Self::Thermostat(d) => d.id(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Light(d) => d.name(),
            Self::Thermostat(d) => d.name(),
        }
    }

    fn is_on(&self) -> bool {
        match self {
            Self::Light(d) => d.is_on(),
            Self::Thermostat(d) => d.is_on(),
        }
    }

    fn last_activated(&self) -> Option<Timestamp> {
        match self {
            Self::Light(d) => d.last_activated(),
            Self::Thermostat(d) => d.last_activated(),
        }
    }

    fn turn_on(&mut self, at: Timestamp) -> Result<Vec<Notification>, CasitaError> {
        match self {
            Self::Light(d) => d.turn_on(at),
            Self::Thermostat(d) => d.turn_on(at),
        }
    }

    fn turn_off(&mut self) -> Notification {
        match self {
            Self::Light(d) => d.turn_off(),
            Self::Thermostat(d) => d.turn_off(),
        }
    }

    fn status(&self) -> String {
        match self {
            Self::Light(d) => d.status(),
            Self::Thermostat(d) => d.status(),
        }
    }
}

impl From<Light> for Device {
    fn from(light: Light) -> Self {
        Self::Light(light)
    }
}

impl From<Thermostat> for Device {
    fn from(thermostat: Thermostat) -> Self {
        Self::Thermostat(thermostat)
    }
}
