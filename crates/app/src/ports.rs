//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The domain returns notifications as plain values; how they leave
//! the process (log line, console, test recorder) is an adapter concern.

pub mod notifier;

pub use notifier::NotificationPublisher;
