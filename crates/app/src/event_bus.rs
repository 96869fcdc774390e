//! In-process notification bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use casita_domain::error::CasitaError;
use casita_domain::notification::Notification;

use crate::ports::NotificationPublisher;

/// In-process notification bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the notification is simply dropped).
pub struct InProcessNotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl InProcessNotificationBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to notifications on this bus.
    ///
    /// Returns a receiver that will get all notifications published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl NotificationPublisher for InProcessNotificationBus {
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CasitaError>> + Send {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(notification);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casita_domain::time::now;

    fn turned_on(device: &str) -> Notification {
        Notification::TurnedOn {
            device: device.to_string(),
            at: now(),
        }
    }

    #[tokio::test]
    async fn should_deliver_notification_to_subscriber() {
        let bus = InProcessNotificationBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(turned_on("L1")).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.subject(), "L1");
    }

    #[tokio::test]
    async fn should_deliver_notification_to_multiple_subscribers() {
        let bus = InProcessNotificationBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(turned_on("T1")).await.unwrap();

        let r1 = rx1.recv().await.unwrap();
        let r2 = rx2.recv().await.unwrap();
        assert_eq!(r1, r2);
    }

    #[tokio::test]
    async fn should_succeed_when_no_subscribers() {
        let bus = InProcessNotificationBus::new(16);
        let result = bus.publish(turned_on("L1")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_deliver_notifications_published_before_subscription() {
        let bus = InProcessNotificationBus::new(16);

        bus.publish(turned_on("early")).await.unwrap();

        let mut rx = bus.subscribe();
        bus.publish(turned_on("late")).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.subject(), "late");
    }

    #[tokio::test]
    async fn should_preserve_publish_order_for_a_subscriber() {
        let bus = InProcessNotificationBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(turned_on("first")).await.unwrap();
        bus.publish(turned_on("second")).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().subject(), "first");
        assert_eq!(rx.recv().await.unwrap().subject(), "second");
    }
}
