//! # casita-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **notification port** that output adapters implement
//! - Provide **in-process infrastructure** (notification bus) that doesn't
//!   need IO
//! - Implement the registry use-cases: [`services::home_service::HomeService`]
//!   owns the [`Home`](casita_domain::home::Home) aggregate, drives every
//!   device and room operation, and publishes the notifications that
//!   commands return
//!
//! ## Dependency rule
//! Depends on `casita-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
