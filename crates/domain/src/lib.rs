//! # casita-domain
//!
//! Pure domain model for the casita smart-home simulation.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (simulated controllable units: lights, thermostats)
//! - Define **Rooms** (ordered groupings of devices with bulk operations)
//! - Define the **Home** (ordered grouping of rooms with nested reporting)
//! - Define **Notifications** (state-change records emitted by commands)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod home;
pub mod notification;
pub mod room;
