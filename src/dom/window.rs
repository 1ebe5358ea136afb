use std::sync::Arc;
use tokio::sync::Mutex;

/// Blocking user-facing messages (the page's `alert`)
///
/// Headless, so each alert is logged and kept for inspection instead of shown.
#[derive(Clone, Default)]
pub struct Window {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn alert(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(message = %message, "Alert shown");
        self.alerts.lock().await.push(message);
    }

    /// Every alert shown so far, oldest first
    pub async fn alerts(&self) -> Vec<String> {
        self.alerts.lock().await.clone()
    }

    pub async fn last_alert(&self) -> Option<String> {
        self.alerts.lock().await.last().cloned()
    }

    /// Removes and returns every alert shown so far
    pub async fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut *self.alerts.lock().await)
    }
}
