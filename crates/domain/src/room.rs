//! Room — an ordered grouping of devices.
//!
//! Append-only: devices are added in insertion order and never removed.
//! Duplicate names are allowed; devices are addressed by [`DeviceId`].

use serde::{Deserialize, Serialize};

use crate::device::{Device, SmartDevice};
use crate::error::{CasitaError, ValidationError};
use crate::id::{DeviceId, RoomId};
use crate::notification::Notification;
use crate::time::Timestamp;

/// An ordered collection of devices within the home.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    devices: Vec<Device>,
}

/// A device that failed during a bulk operation.
#[derive(Debug)]
pub struct DeviceFailure {
    pub device_id: DeviceId,
    pub error: CasitaError,
}

/// Outcome of [`Room::turn_on_all`]: the notifications produced plus any
/// per-device failures that were skipped over.
#[derive(Debug, Default)]
pub struct RoomActivation {
    pub notifications: Vec<Notification>,
    pub failures: Vec<DeviceFailure>,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Unique identifier of the room.
    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Identifying name, immutable after construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Devices in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Append a device, returning its identifier. Always succeeds:
    /// no capacity limit and no uniqueness check on names.
    pub fn add_device(&mut self, device: Device) -> DeviceId {
        let id = device.id();
        self.devices.push(device);
        id
    }

    /// Look up a device by id.
    #[must_use]
    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id() == id)
    }

    /// Look up a device by id for mutation.
    pub fn device_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id() == id)
    }

    /// Switch every device on in insertion order.
    ///
    /// A failing device does not abort the sweep: its error is recorded in
    /// the returned [`RoomActivation`] and the remaining devices are still
    /// processed.
    pub fn turn_on_all(&mut self, at: Timestamp) -> RoomActivation {
        let mut activation = RoomActivation::default();
        for device in &mut self.devices {
            match device.turn_on(at) {
                Ok(notifications) => activation.notifications.extend(notifications),
                Err(error) => activation.failures.push(DeviceFailure {
                    device_id: device.id(),
                    error,
                }),
            }
        }
        activation
    }

    /// Per-device status strings in insertion order, recomputed per call.
    pub fn statuses(&self) -> impl Iterator<Item = String> + '_ {
        self.devices.iter().map(Device::status)
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    name: Option<String>,
    devices: Vec<Device>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn device(mut self, device: impl Into<Device>) -> Self {
        self.devices.push(device.into());
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Room, CasitaError> {
        let room = Room {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            devices: self.devices,
        };
        if room.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Light, Thermostat};
    use crate::time::now;

    fn light(name: &str) -> Device {
        Light::builder().name(name).build().unwrap().into()
    }

    fn thermostat(name: &str) -> Device {
        Thermostat::builder().name(name).build().unwrap().into()
    }

    #[test]
    fn should_build_valid_room_when_name_provided() {
        let room = Room::builder().name("Living Room").build().unwrap();
        assert_eq!(room.name(), "Living Room");
        assert!(room.devices().is_empty());
    }

    #[test]
    fn should_reject_build_when_name_is_empty() {
        let result = Room::builder().build();
        assert!(matches!(
            result,
            Err(CasitaError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_preserve_insertion_order_in_statuses() {
        let mut room = Room::builder().name("Living Room").build().unwrap();
        room.add_device(light("A"));
        room.add_device(light("B"));
        room.add_device(light("C"));

        let names: Vec<String> = room.statuses().collect();
        assert_eq!(
            names,
            vec![
                "A is OFF, Brightness: 50%",
                "B is OFF, Brightness: 50%",
                "C is OFF, Brightness: 50%",
            ]
        );
    }

    #[test]
    fn should_allow_duplicate_device_names() {
        let mut room = Room::builder().name("Hallway").build().unwrap();
        let first = room.add_device(light("Lamp"));
        let second = room.add_device(light("Lamp"));

        assert_ne!(first, second);
        assert_eq!(room.devices().len(), 2);
    }

    #[test]
    fn should_recompute_statuses_on_each_call() {
        let mut room = Room::builder().name("Office").build().unwrap();
        let id = room.add_device(light("Desk"));

        let before: Vec<String> = room.statuses().collect();
        assert_eq!(before, vec!["Desk is OFF, Brightness: 50%"]);

        room.device_mut(id).unwrap().turn_on(now()).unwrap();

        let after: Vec<String> = room.statuses().collect();
        assert_eq!(after, vec!["Desk is ON, Brightness: 50%"]);
    }

    #[test]
    fn should_turn_on_all_devices_in_insertion_order() {
        let mut room = Room::builder().name("Living Room").build().unwrap();
        room.add_device(light("L1"));
        room.add_device(thermostat("T1"));
        room.add_device(light("L2"));

        let activation = room.turn_on_all(now());

        assert!(activation.failures.is_empty());
        assert!(room.devices().iter().all(SmartDevice::is_on));

        // Thermostat contributes two notifications, lights one each.
        let subjects: Vec<&str> = activation
            .notifications
            .iter()
            .map(Notification::subject)
            .collect();
        assert_eq!(subjects, vec!["L1", "T1", "T1", "L2"]);
    }

    #[test]
    fn should_report_no_failures_for_builtin_device_kinds() {
        let mut room = Room::builder().name("Bedroom").build().unwrap();
        room.add_device(light("Night Light"));

        let activation = room.turn_on_all(now());
        assert!(activation.failures.is_empty());
        assert_eq!(activation.notifications.len(), 1);
    }

    #[test]
    fn should_find_device_by_id() {
        let mut room = Room::builder().name("Kitchen").build().unwrap();
        let id = room.add_device(light("Spot"));

        assert_eq!(room.device(id).map(Device::name), Some("Spot"));
        assert!(room.device(DeviceId::new()).is_none());
    }

    #[test]
    fn should_build_room_with_initial_devices() {
        let room = Room::builder()
            .name("Studio")
            .device(Light::builder().name("Key Light").build().unwrap())
            .device(Thermostat::builder().name("Climate").build().unwrap())
            .build()
            .unwrap();

        assert_eq!(room.devices().len(), 2);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let mut room = Room::builder().name("Attic").build().unwrap();
        room.add_device(thermostat("T1"));

        let json = serde_json::to_string(&room).unwrap();
        let parsed: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id(), room.id());
        assert_eq!(parsed.name(), "Attic");
        assert_eq!(parsed.devices().len(), 1);
    }
}
