//! Home service — use-cases for driving the device registry.
//!
//! Owns the [`Home`] aggregate. Every command mutates the domain and then
//! publishes the notifications the domain returned; queries recompute
//! status listings on demand.

use casita_domain::device::{Device, SmartDevice};
use casita_domain::error::{CasitaError, NotFoundError};
use casita_domain::home::{Home, RoomStatus};
use casita_domain::id::{DeviceId, RoomId};
use casita_domain::notification::Notification;
use casita_domain::room::{DeviceFailure, Room};
use casita_domain::time::now;

use crate::ports::NotificationPublisher;

/// Application service for registry and device-control operations.
pub struct HomeService<P> {
    home: Home,
    publisher: P,
}

impl<P: NotificationPublisher> HomeService<P> {
    /// Create a service over an empty home.
    pub fn new(publisher: P) -> Self {
        Self {
            home: Home::new(),
            publisher,
        }
    }

    /// Read-only view of the aggregate.
    #[must_use]
    pub fn home(&self) -> &Home {
        &self.home
    }

    /// Register a room.
    ///
    /// # Errors
    ///
    /// Propagates a publishing error from the notification port.
    #[tracing::instrument(skip(self, room), fields(room_name = %room.name()))]
    pub async fn add_room(&mut self, room: Room) -> Result<RoomId, CasitaError> {
        let name = room.name().to_string();
        let id = self.home.add_room(room);
        self.publisher
            .publish(Notification::RoomAdded { room: name })
            .await?;
        Ok(id)
    }

    /// Register a device in a room.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room is unknown, or a
    /// publishing error from the notification port.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name()))]
    pub async fn add_device(
        &mut self,
        room_id: RoomId,
        device: Device,
    ) -> Result<DeviceId, CasitaError> {
        let room = self.room_mut(room_id)?;
        let room_name = room.name().to_string();
        let device_name = device.name().to_string();
        let id = room.add_device(device);
        self.publisher
            .publish(Notification::DeviceAdded {
                device: device_name,
                room: room_name,
            })
            .await?;
        Ok(id)
    }

    /// Switch a device on, recording the activation time.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room or device is
    /// unknown, or a publishing error from the notification port.
    #[tracing::instrument(skip(self))]
    pub async fn turn_on(
        &mut self,
        room_id: RoomId,
        device_id: DeviceId,
    ) -> Result<(), CasitaError> {
        let notifications = self.device_mut(room_id, device_id)?.turn_on(now())?;
        self.publish_all(notifications).await
    }

    /// Switch a device off.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room or device is
    /// unknown, or a publishing error from the notification port.
    #[tracing::instrument(skip(self))]
    pub async fn turn_off(
        &mut self,
        room_id: RoomId,
        device_id: DeviceId,
    ) -> Result<(), CasitaError> {
        let notification = self.device_mut(room_id, device_id)?.turn_off();
        self.publisher.publish(notification).await
    }

    /// Switch every device in a room on, in insertion order.
    ///
    /// A failing device does not abort the sweep; the collected failures
    /// are returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room is unknown, or a
    /// publishing error from the notification port.
    #[tracing::instrument(skip(self))]
    pub async fn turn_on_all(&mut self, room_id: RoomId) -> Result<Vec<DeviceFailure>, CasitaError> {
        let activation = self.room_mut(room_id)?.turn_on_all(now());
        self.publish_all(activation.notifications).await?;
        Ok(activation.failures)
    }

    /// Set a light's brightness level.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room or device is
    /// unknown, [`CasitaError::InvalidArgument`] when `level` is out of
    /// range (device state untouched), [`CasitaError::Unsupported`] when
    /// the device is not a light, or a publishing error.
    #[tracing::instrument(skip(self))]
    pub async fn set_brightness(
        &mut self,
        room_id: RoomId,
        device_id: DeviceId,
        level: u8,
    ) -> Result<(), CasitaError> {
        let notification = self
            .device_mut(room_id, device_id)?
            .set_brightness(level)?;
        self.publisher.publish(notification).await
    }

    /// Set a thermostat's target temperature (unvalidated by design).
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room or device is
    /// unknown, [`CasitaError::Unsupported`] when the device is not a
    /// thermostat, or a publishing error.
    #[tracing::instrument(skip(self))]
    pub async fn set_target_temperature(
        &mut self,
        room_id: RoomId,
        device_id: DeviceId,
        celsius: f64,
    ) -> Result<(), CasitaError> {
        let notification = self
            .device_mut(room_id, device_id)?
            .set_target_temperature(celsius)?;
        self.publisher.publish(notification).await
    }

    /// Feed a thermostat a new sensed temperature.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room or device is
    /// unknown, [`CasitaError::Unsupported`] when the device is not a
    /// thermostat, or a publishing error.
    #[tracing::instrument(skip(self))]
    pub async fn update_current_temperature(
        &mut self,
        room_id: RoomId,
        device_id: DeviceId,
        celsius: f64,
    ) -> Result<(), CasitaError> {
        let notification = self
            .device_mut(room_id, device_id)?
            .update_current_temperature(celsius)?;
        self.publisher.publish(notification).await
    }

    /// Status string of a single device, recomputed on demand.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room or device is unknown.
    pub fn device_status(
        &self,
        room_id: RoomId,
        device_id: DeviceId,
    ) -> Result<String, CasitaError> {
        let room = self.room(room_id)?;
        room.device(device_id)
            .map(Device::status)
            .ok_or_else(|| not_found("Device", device_id.to_string()))
    }

    /// Per-device status strings of a room, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room is unknown.
    pub fn room_statuses(&self, room_id: RoomId) -> Result<Vec<String>, CasitaError> {
        Ok(self.room(room_id)?.statuses().collect())
    }

    /// Nested status report for the whole home.
    #[must_use]
    pub fn home_status(&self) -> Vec<RoomStatus> {
        self.home.status().collect()
    }

    fn room(&self, id: RoomId) -> Result<&Room, CasitaError> {
        self.home
            .room(id)
            .ok_or_else(|| not_found("Room", id.to_string()))
    }

    fn room_mut(&mut self, id: RoomId) -> Result<&mut Room, CasitaError> {
        self.home
            .room_mut(id)
            .ok_or_else(|| not_found("Room", id.to_string()))
    }

    fn device_mut(
        &mut self,
        room_id: RoomId,
        device_id: DeviceId,
    ) -> Result<&mut Device, CasitaError> {
        self.room_mut(room_id)?
            .device_mut(device_id)
            .ok_or_else(|| not_found("Device", device_id.to_string()))
    }

    async fn publish_all(&self, notifications: Vec<Notification>) -> Result<(), CasitaError> {
        for notification in notifications {
            self.publisher.publish(notification).await?;
        }
        Ok(())
    }
}

fn not_found(entity: &'static str, id: String) -> CasitaError {
    NotFoundError { entity, id }.into()
}
