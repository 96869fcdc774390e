//! Home — an ordered grouping of rooms with nested status reporting.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;
use crate::room::Room;

/// The top-level aggregate. Owns its rooms exclusively; rooms are appended
/// in order and never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Home {
    rooms: Vec<Room>,
}

/// One room's full status listing: per-device status strings in device
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatus {
    pub room: String,
    pub devices: Vec<String>,
}

impl Home {
    /// Create an empty home.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rooms in insertion order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Append a room, returning its identifier. Always succeeds.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = room.id();
        self.rooms.push(room);
        id
    }

    /// Look up a room by id.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == id)
    }

    /// Look up a room by id for mutation.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id() == id)
    }

    /// Full status listing per room, in room insertion order, recomputed
    /// on each call. No cross-room computation happens here.
    pub fn status(&self) -> impl Iterator<Item = RoomStatus> + '_ {
        self.rooms.iter().map(|room| RoomStatus {
            room: room.name().to_string(),
            devices: room.statuses().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Device, Light, SmartDevice, Thermostat};
    use crate::time::now;

    fn light(name: &str) -> Device {
        Light::builder().name(name).build().unwrap().into()
    }

    fn thermostat(name: &str) -> Device {
        Thermostat::builder().name(name).build().unwrap().into()
    }

    #[test]
    fn should_start_empty() {
        let home = Home::new();
        assert!(home.rooms().is_empty());
        assert_eq!(home.status().count(), 0);
    }

    #[test]
    fn should_report_rooms_in_insertion_order() {
        let mut home = Home::new();
        home.add_room(Room::builder().name("R1").build().unwrap());
        home.add_room(Room::builder().name("R2").build().unwrap());

        let names: Vec<String> = home.status().map(|s| s.room).collect();
        assert_eq!(names, vec!["R1", "R2"]);
    }

    #[test]
    fn should_nest_device_statuses_within_room_order() {
        let mut r1 = Room::builder().name("R1").build().unwrap();
        r1.add_device(light("L1"));
        r1.add_device(thermostat("T1"));

        let mut r2 = Room::builder().name("R2").build().unwrap();
        r2.add_device(light("L2"));

        let mut home = Home::new();
        home.add_room(r1);
        home.add_room(r2);

        let report: Vec<RoomStatus> = home.status().collect();
        assert_eq!(
            report,
            vec![
                RoomStatus {
                    room: "R1".to_string(),
                    devices: vec![
                        "L1 is OFF, Brightness: 50%".to_string(),
                        "T1 is OFF, Current: 20\u{b0}C, Target: 22\u{b0}C".to_string(),
                    ],
                },
                RoomStatus {
                    room: "R2".to_string(),
                    devices: vec!["L2 is OFF, Brightness: 50%".to_string()],
                },
            ]
        );
    }

    #[test]
    fn should_recompute_status_on_each_call() {
        let mut home = Home::new();
        let mut room = Room::builder().name("Living Room").build().unwrap();
        let device_id = room.add_device(light("Main"));
        let room_id = home.add_room(room);

        let before: Vec<RoomStatus> = home.status().collect();
        assert!(before[0].devices[0].contains("OFF"));

        home.room_mut(room_id)
            .unwrap()
            .device_mut(device_id)
            .unwrap()
            .turn_on(now())
            .unwrap();

        let after: Vec<RoomStatus> = home.status().collect();
        assert!(after[0].devices[0].contains("ON"));
    }

    #[test]
    fn should_find_room_by_id() {
        let mut home = Home::new();
        let id = home.add_room(Room::builder().name("Garage").build().unwrap());

        assert_eq!(home.room(id).map(Room::name), Some("Garage"));
        assert!(home.room(RoomId::new()).is_none());
    }

    #[test]
    fn should_allow_rooms_with_duplicate_names() {
        let mut home = Home::new();
        let first = home.add_room(Room::builder().name("Closet").build().unwrap());
        let second = home.add_room(Room::builder().name("Closet").build().unwrap());

        assert_ne!(first, second);
        assert_eq!(home.rooms().len(), 2);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let mut home = Home::new();
        let mut room = Room::builder().name("Den").build().unwrap();
        room.add_device(light("Reading Lamp"));
        home.add_room(room);

        let json = serde_json::to_string(&home).unwrap();
        let parsed: Home = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rooms().len(), 1);
        assert_eq!(parsed.rooms()[0].devices()[0].name(), "Reading Lamp");
    }
}
