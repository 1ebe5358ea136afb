use futures::future::BoxFuture;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::RwLock;

use super::element::ElementState;

/// Events the page surface dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    Input,
    Click,
}

/// An event handler; each dispatch awaits the returned future
pub type Listener = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_listener_id() -> u64 {
    NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle returned by `Element::add_event_listener`
///
/// Dropping it leaves the listener registered; call `unsubscribe` to remove it.
#[derive(Debug)]
pub struct Subscription {
    pub(crate) target: Weak<RwLock<ElementState>>,
    pub(crate) id: u64,
    pub kind: EventKind,
}

impl Subscription {
    /// Removes the listener. Returns false if it was already gone.
    pub async fn unsubscribe(self) -> bool {
        let Some(target) = self.target.upgrade() else {
            return false;
        };
        let mut state = target.write().await;
        let before = state.listeners.len();
        state.listeners.retain(|(id, _, _)| *id != self.id);
        state.listeners.len() != before
    }
}
