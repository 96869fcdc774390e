//! Light — a dimmable on/off device.

use serde::{Deserialize, Serialize};

use crate::error::{CasitaError, InvalidArgumentError};
use crate::id::DeviceId;
use crate::notification::Notification;
use crate::time::Timestamp;

use super::{Core, SmartDevice};

const DEFAULT_BRIGHTNESS: u8 = 50;
const MAX_BRIGHTNESS: u8 = 100;

/// A simulated light with a brightness level in `[0, 100]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    #[serde(flatten)]
    core: Core,
    brightness: u8,
}

impl Light {
    /// Create a builder for constructing a [`Light`].
    #[must_use]
    pub fn builder() -> LightBuilder {
        LightBuilder::default()
    }

    /// Current brightness level.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the brightness level. Works whether the light is on or off.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::InvalidArgument`] when `level` is above 100;
    /// the stored level is left unchanged.
    pub fn set_brightness(&mut self, level: u8) -> Result<Notification, CasitaError> {
        if level > MAX_BRIGHTNESS {
            return Err(InvalidArgumentError {
                argument: "brightness",
                min: 0,
                max: i64::from(MAX_BRIGHTNESS),
                value: i64::from(level),
            }
            .into());
        }
        self.brightness = level;
        Ok(Notification::BrightnessChanged {
            device: self.core.name.clone(),
            level,
        })
    }
}

impl SmartDevice for Light {
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

    fn turn_on(&mut self, at: Timestamp) -> Result<Vec<Notification>, CasitaError> {
        Ok(vec![self.core.turn_on(at)])
    }

    fn turn_off(&mut self) -> Notification {
        self.core.turn_off()
    }

    fn status(&self) -> String {
        format!("{}, Brightness: {}%", self.core.status(), self.brightness)
    }
}

/// Step-by-step builder for [`Light`].
#[derive(Debug, Default)]
pub struct LightBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    brightness: Option<u8>,
}

impl LightBuilder {
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
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Consume the builder, validate, and return a [`Light`].
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::Validation`] if `name` is missing or empty,
    /// or [`CasitaError::InvalidArgument`] if `brightness` is above 100.
    pub fn build(self) -> Result<Light, CasitaError> {
        let brightness = self.brightness.unwrap_or(DEFAULT_BRIGHTNESS);
        if brightness > MAX_BRIGHTNESS {
            return Err(InvalidArgumentError {
                argument: "brightness",
                min: 0,
                max: i64::from(MAX_BRIGHTNESS),
                value: i64::from(brightness),
            }
            .into());
        }
        let light = Light {
            core: Core::new(
                self.id.unwrap_or_default(),
                self.name.unwrap_or_default(),
            ),
            brightness,
        };
        light.core.validate()?;
        Ok(light)
    }
}
