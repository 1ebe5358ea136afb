use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use scraper::Html;

use super::events::{next_listener_id, EventKind, Listener, Subscription};
use crate::view::escape_text;

/// Mutable state behind an element handle
pub(crate) struct ElementState {
    tag: &'static str,
    attrs: BTreeMap<String, String>,
    value: String,
    disabled: bool,
    hidden: bool,
    inner_html: String,
    pub(crate) listeners: Vec<(u64, EventKind, Listener)>,
}

/// Shared handle to one element of the page
///
/// Clones point at the same element, so writes through any clone are visible to
/// every holder. Concurrent writers simply race; the last write wins.
#[derive(Clone)]
pub struct Element {
    id: Arc<str>,
    inner: Arc<RwLock<ElementState>>,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").field("id", &self.id).finish()
    }
}

impl Element {
    pub fn new(tag: &'static str, id: &str) -> Self {
        Self::with_attrs(tag, id, &[])
    }

    /// Creates an element with initial attributes
    ///
    /// A `value` attribute also seeds the element's current value, and `disabled`
    /// or `hidden` set the matching flags.
    pub fn with_attrs(tag: &'static str, id: &str, attrs: &[(&str, &str)]) -> Self {
        Self::with_text(tag, id, attrs, "")
    }

    /// Creates an element with initial attributes and escaped text content
    pub fn with_text(tag: &'static str, id: &str, attrs: &[(&str, &str)], text: &str) -> Self {
        let mut state = ElementState {
            tag,
            attrs: BTreeMap::new(),
            value: String::new(),
            disabled: false,
            hidden: false,
            inner_html: escape_text(text),
            listeners: Vec::new(),
        };
        for (name, value) in attrs {
            match *name {
                "value" => state.value = value.to_string(),
                "disabled" => state.disabled = true,
                "hidden" => state.hidden = true,
                _ => {
                    state.attrs.insert(name.to_string(), value.to_string());
                }
            }
        }

        Self {
            id: Arc::from(id),
            inner: Arc::new(RwLock::new(state)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn tag(&self) -> &'static str {
        self.inner.read().await.tag
    }

    pub async fn value(&self) -> String {
        self.inner.read().await.value.clone()
    }

    pub async fn set_value(&self, value: impl Into<String>) {
        self.inner.write().await.value = value.into();
    }

    pub async fn attribute(&self, name: &str) -> Option<String> {
        self.inner.read().await.attrs.get(name).cloned()
    }

    pub async fn is_disabled(&self) -> bool {
        self.inner.read().await.disabled
    }

    pub async fn set_disabled(&self, disabled: bool) {
        self.inner.write().await.disabled = disabled;
    }

    pub async fn is_hidden(&self) -> bool {
        self.inner.read().await.hidden
    }

    pub async fn set_hidden(&self, hidden: bool) {
        self.inner.write().await.hidden = hidden;
    }

    /// Drops the current content and installs `html` in its place
    pub async fn set_inner_html(&self, html: impl Into<String>) {
        self.inner.write().await.inner_html = html.into();
    }

    pub async fn inner_html(&self) -> String {
        self.inner.read().await.inner_html.clone()
    }

    /// Replaces the content with `text`, escaped
    pub async fn set_text(&self, text: impl AsRef<str>) {
        self.set_inner_html(escape_text(text.as_ref())).await;
    }

    pub async fn clear(&self) {
        self.set_inner_html(String::new()).await;
    }

    /// Text of the content with markup stripped and entities decoded
    pub async fn text_content(&self) -> String {
        let html = self.inner_html().await;
        Html::parse_fragment(&html).root_element().text().collect()
    }

    pub async fn add_event_listener(&self, kind: EventKind, listener: Listener) -> Subscription {
        let id = next_listener_id();
        self.inner.write().await.listeners.push((id, kind, listener));
        Subscription {
            target: Arc::downgrade(&self.inner),
            id,
            kind,
        }
    }

    pub async fn listener_count(&self, kind: EventKind) -> usize {
        let state = self.inner.read().await;
        state.listeners.iter().filter(|(_, k, _)| *k == kind).count()
    }

    /// Runs every listener for `kind` in registration order
    ///
    /// Disabled elements swallow events, as a browser would. The state lock is
    /// released before any listener runs.
    pub async fn dispatch(&self, kind: EventKind) {
        let listeners: Vec<Listener> = {
            let state = self.inner.read().await;
            if state.disabled {
                tracing::debug!(element = %self.id, ?kind, "Event ignored on disabled element");
                return;
            }
            state
                .listeners
                .iter()
                .filter(|(_, k, _)| *k == kind)
                .map(|(_, _, l)| l.clone())
                .collect()
        };

        for listener in listeners {
            listener().await;
        }
    }
}
