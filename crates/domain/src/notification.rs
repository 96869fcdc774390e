//! Notification — an immutable record of a device or registry state change.
//!
//! Commands return notifications instead of printing, so the core stays
//! testable independent of any output medium. The `app` crate publishes
//! them on an in-process bus.

use serde::{Deserialize, Serialize};

use crate::device::fmt_celsius;
use crate::time::Timestamp;

/// A state-change record emitted by a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// A device was switched on.
    TurnedOn { device: String, at: Timestamp },
    /// A device was switched off.
    TurnedOff { device: String },
    /// A thermostat started maintaining its target temperature.
    MaintainingTarget { device: String, target_celsius: f64 },
    /// A light's brightness level changed.
    BrightnessChanged { device: String, level: u8 },
    /// A thermostat's target temperature changed.
    TargetChanged { device: String, target_celsius: f64 },
    /// A thermostat received a new sensed temperature.
    CurrentTemperatureUpdated { device: String, celsius: f64 },
    /// A device was registered in a room.
    DeviceAdded { device: String, room: String },
    /// A room was registered in the home.
    RoomAdded { room: String },
}

impl Notification {
    /// Name of the device (or room) the notification concerns.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::TurnedOn { device, .. }
            | Self::TurnedOff { device }
            | Self::MaintainingTarget { device, .. }
            | Self::BrightnessChanged { device, .. }
            | Self::TargetChanged { device, .. }
            | Self::CurrentTemperatureUpdated { device, .. }
            | Self::DeviceAdded { device, .. } => device,
            Self::RoomAdded { room } => room,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TurnedOn { device, at } => write!(f, "{device} turned ON at {at}"),
            Self::TurnedOff { device } => write!(f, "{device} turned OFF"),
            Self::MaintainingTarget {
                device,
                target_celsius,
            } => write!(
                f,
                "{device} is now maintaining {}\u{b0}C",
                fmt_celsius(*target_celsius)
            ),
            Self::BrightnessChanged { device, level } => {
                write!(f, "{device} brightness set to {level}%")
            }
            Self::TargetChanged {
                device,
                target_celsius,
            } => write!(
                f,
                "{device} target temperature set to {}\u{b0}C",
                fmt_celsius(*target_celsius)
            ),
            Self::CurrentTemperatureUpdated { device, celsius } => write!(
                f,
                "{device} current temperature is now {}\u{b0}C",
                fmt_celsius(*celsius)
            ),
            Self::DeviceAdded { device, room } => write!(f, "Added {device} to {room}"),
            Self::RoomAdded { room } => write!(f, "Added room: {room}"),
        }
    }
}
