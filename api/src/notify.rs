//! Local notification scheduling
//!
//! Fire-and-forget implementation of the notifier port: a spawned task
//! waits out the delay and emits the notification through tracing,
//! where a device-facing delivery channel would hook in.

use async_trait::async_trait;
use tracing::info;

use mates_core::ports::outbound::{Notification, Notifier, NotifyError};

/// Notifier delivering after a delay on the local runtime
#[derive(Default)]
pub struct LocalNotifier;

impl LocalNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LocalNotifier {
    async fn schedule(&self, notification: Notification) -> Result<(), NotifyError> {
        tokio::spawn(async move {
            tokio::time::sleep(notification.after).await;
            info!(
                title = %notification.title,
                body = %notification.body,
                "notification delivered"
            );
        });
        Ok(())
    }
}
