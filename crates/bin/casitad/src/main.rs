//! # casitad — casita demo daemon
//!
//! Composition root that wires the notification bus and registry service
//! together and runs the demonstration scenario.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the in-process notification bus and a subscriber that logs
//!   every notification
//! - Construct the [`HomeService`], injecting the bus via its port trait
//! - Build the demo home and run the documented interaction sequence
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use casita_app::event_bus::InProcessNotificationBus;
use casita_app::ports::NotificationPublisher;
use casita_app::services::home_service::HomeService;
use casita_domain::device::{Light, Thermostat};
use casita_domain::room::Room;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let bus = Arc::new(InProcessNotificationBus::new(config.bus.capacity));
    let mut notifications = bus.subscribe();
    let logger = tokio::spawn(async move {
        while let Ok(notification) = notifications.recv().await {
            tracing::info!(%notification, "notification");
        }
    });

    let mut service = HomeService::new(Arc::clone(&bus));
    run_demo(&mut service).await?;

    // Dropping every sender closes the channel and ends the logger task.
    drop(service);
    drop(bus);
    logger.await.context("notification logger task failed")?;

    Ok(())
}

/// The original demonstration sequence: two rooms, three devices, a few
/// direct commands, then a room-wide sweep.
async fn run_demo<P: NotificationPublisher>(service: &mut HomeService<P>) -> anyhow::Result<()> {
    let living_room = service
        .add_room(Room::builder().name("Living Room").build()?)
        .await?;
    let bedroom = service
        .add_room(Room::builder().name("Master Bedroom").build()?)
        .await?;

    let main_light = service
        .add_device(
            living_room,
            Light::builder().name("Living Room Main Light").build()?.into(),
        )
        .await?;
    let thermostat = service
        .add_device(
            living_room,
            Thermostat::builder()
                .name("Living Room Thermostat")
                .build()?
                .into(),
        )
        .await?;
    let night_light = service
        .add_device(
            bedroom,
            Light::builder().name("Bedroom Night Light").build()?.into(),
        )
        .await?;

    service.turn_on(living_room, main_light).await?;
    service.set_brightness(living_room, main_light, 75).await?;

    service.turn_on(living_room, thermostat).await?;
    service
        .set_target_temperature(living_room, thermostat, 21.5)
        .await?;

    service.turn_on(bedroom, night_light).await?;

    log_home_status(service);

    let failures = service.turn_on_all(living_room).await?;
    for failure in &failures {
        tracing::warn!(
            device = %failure.device_id,
            error = %failure.error,
            "device failed to turn on"
        );
    }

    log_home_status(service);

    Ok(())
}

fn log_home_status<P: NotificationPublisher>(service: &HomeService<P>) {
    for room_status in service.home_status() {
        tracing::info!(room = %room_status.room, "room status");
        for status in room_status.devices {
            tracing::info!(%status, "device status");
        }
    }
}
