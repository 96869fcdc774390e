//! Notification port — publish/subscribe for device notifications.

use std::future::Future;

use casita_domain::error::CasitaError;
use casita_domain::notification::Notification;

/// Publishes device notifications to interested subscribers.
pub trait NotificationPublisher {
    /// Publish a notification to all current subscribers.
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CasitaError>> + Send;
}

impl<T: NotificationPublisher + Send + Sync> NotificationPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CasitaError>> + Send {
        (**self).publish(notification)
    }
}
