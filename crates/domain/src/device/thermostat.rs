//! Thermostat — heating control with a sensed and a target temperature.

use serde::{Deserialize, Serialize};

use crate::error::CasitaError;
use crate::id::DeviceId;
use crate::notification::Notification;
use crate::time::Timestamp;

use super::{Core, SmartDevice, fmt_celsius};

const DEFAULT_CURRENT_CELSIUS: f64 = 20.0;
const DEFAULT_TARGET_CELSIUS: f64 = 22.0;

/// A simulated thermostat. The target is deliberately unvalidated:
/// it acts as an unconstrained sensor mock and accepts any value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thermostat {
    #[serde(flatten)]
    core: Core,
    current_celsius: f64,
    target_celsius: f64,
}

impl Thermostat {
    /// Create a builder for constructing a [`Thermostat`].
    #[must_use]
    pub fn builder() -> ThermostatBuilder {
        ThermostatBuilder::default()
    }

    /// Last sensed temperature.
    #[must_use]
    pub fn current_celsius(&self) -> f64 {
        self.current_celsius
    }

    /// Temperature the thermostat maintains while on.
    #[must_use]
    pub fn target_celsius(&self) -> f64 {
        self.target_celsius
    }

    /// Set the target temperature. Accepts any value, no range check.
    pub fn set_target(&mut self, celsius: f64) -> Notification {
        self.target_celsius = celsius;
        Notification::TargetChanged {
            device: self.core.name.clone(),
            target_celsius: celsius,
        }
    }

    /// Record a new sensed temperature. Models external sensor input.
    pub fn update_current(&mut self, celsius: f64) -> Notification {
        self.current_celsius = celsius;
        Notification::CurrentTemperatureUpdated {
            device: self.core.name.clone(),
            celsius,
        }
    }
}

impl SmartDevice for Thermostat {
    fn id(&self) -> DeviceId {
        self.core.id
    }

    fn name(&self) -> &str {
        &self.core.name
    }

    fn is_on(&self) -> bool {
        self.core.is_on
    }

    fn last_activated(&self) -> Option<Timestamp> {
        self.core.last_activated
    }

    /// Base turn-on followed by a maintaining-target notification.
    fn turn_on(&mut self, at: Timestamp) -> Result<Vec<Notification>, CasitaError> {
        let turned_on = self.core.turn_on(at);
        let maintaining = Notification::MaintainingTarget {
            device: self.core.name.clone(),
            target_celsius: self.target_celsius,
        };
        Ok(vec![turned_on, maintaining])
    }

    fn turn_off(&mut self) -> Notification {
        self.core.turn_off()
    }

    fn status(&self) -> String {
        format!(
            "{}, Current: {}\u{b0}C, Target: {}\u{b0}C",
            self.core.status(),
            fmt_celsius(self.current_celsius),
            fmt_celsius(self.target_celsius)
        )
    }
}

/// Step-by-step builder for [`Thermostat`].
#[derive(Debug, Default)]
pub struct ThermostatBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    current_celsius: Option<f64>,
    target_celsius: Option<f64>,
}

impl ThermostatBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn current_celsius(mut self, celsius: f64) -> Self {
        self.current_celsius = Some(celsius);
        self
    }

    #[must_use]
    pub fn target_celsius(mut self, celsius: f64) -> Self {
        self.target_celsius = Some(celsius);
        self
    }

    /// Consume the builder, validate, and return a [`Thermostat`].
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Thermostat, CasitaError> {
        let thermostat = Thermostat {
            core: Core::new(
                self.id.unwrap_or_default(),
                self.name.unwrap_or_default(),
            ),
            current_celsius: self.current_celsius.unwrap_or(DEFAULT_CURRENT_CELSIUS),
            target_celsius: self.target_celsius.unwrap_or(DEFAULT_TARGET_CELSIUS),
        };
        thermostat.core.validate()?;
        Ok(thermostat)
    }
}
