//! The recommendation form controller
//!
//! Owns the form lifecycle: loading the title catalog into the selector,
//! validating and submitting a request, and rendering results or errors into
//! the results container. Every error is recovered here and turned into a
//! visible state change; nothing escapes an event handler.
use futures::FutureExt;
use std::future::Future;
use std::sync::{Arc, Weak};
use tokio::sync::RwLock;

use crate::{
    config::Config,
    dom::{self, Document, Element, EventKind, Listener, Subscription, Window},
    error::{AppError, AppResult},
    models::BookTitleCatalog,
    services::RecommendationApi,
};

mod catalog;
mod requester;

/// The page elements the controller drives, resolved once at construction
#[derive(Debug, Clone)]
pub struct FormElements {
    pub form: Element,
    pub title_input: Element,
    pub count_range: Element,
    pub count_readout: Element,
    pub results: Element,
    pub title_status: Element,
    pub retry_button: Element,
}

impl FormElements {
    pub fn resolve(document: &Document) -> AppResult<Self> {
        let get = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| AppError::MissingElement(id.to_string()))
        };

        Ok(Self {
            form: get(dom::FORM_ID)?,
            title_input: get(dom::TITLE_INPUT_ID)?,
            count_range: get(dom::COUNT_RANGE_ID)?,
            count_readout: get(dom::COUNT_READOUT_ID)?,
            results: get(dom::RESULTS_ID)?,
            title_status: get(dom::TITLE_STATUS_ID)?,
            retry_button: get(dom::RETRY_BUTTON_ID)?,
        })
    }
}

pub struct RecommendationFormController {
    api: Arc<dyn RecommendationApi>,
    elements: FormElements,
    window: Window,
    priority_titles: Vec<String>,
    placeholder_image: String,
    default_count: u32,
    /// Last successfully loaded catalog, used to validate submitted titles
    catalog: RwLock<Option<BookTitleCatalog>>,
}

/// Listeners registered by `RecommendationFormController::bind`
#[derive(Debug)]
pub struct Bindings {
    subscriptions: Vec<Subscription>,
}

impl Bindings {
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Removes every listener the controller registered
    pub async fn unbind(self) {
        for subscription in self.subscriptions {
            subscription.unsubscribe().await;
        }
    }
}

impl RecommendationFormController {
    pub fn new(
        api: Arc<dyn RecommendationApi>,
        document: &Document,
        config: &Config,
    ) -> AppResult<Self> {
        let elements = FormElements::resolve(document)?;

        Ok(Self {
            api,
            elements,
            window: document.window().clone(),
            priority_titles: config.priority_titles(),
            placeholder_image: config.placeholder_image_url.clone(),
            default_count: config.default_recommendations,
            catalog: RwLock::new(None),
        })
    }

    pub fn elements(&self) -> &FormElements {
        &self.elements
    }

    /// Registers the form's event listeners and syncs the count readout
    ///
    /// - `submit` on the form requests recommendations
    /// - `input` on the range control updates the readout
    /// - `click` on the retry button reloads the catalog
    ///
    /// Listeners hold weak references, so dropping the controller disarms them.
    pub async fn bind(self: &Arc<Self>) -> Bindings {
        let weak = Arc::downgrade(self);
        let el = &self.elements;

        let subscriptions = vec![
            el.form
                .add_event_listener(
                    EventKind::Submit,
                    Self::listener(&weak, |c| async move { c.submit().await }),
                )
                .await,
            el.count_range
                .add_event_listener(
                    EventKind::Input,
                    Self::listener(&weak, |c| async move { c.sync_count_readout().await }),
                )
                .await,
            el.retry_button
                .add_event_listener(
                    EventKind::Click,
                    Self::listener(&weak, |c| async move {
                        c.load_catalog().await;
                    }),
                )
                .await,
        ];

        self.sync_count_readout().await;

        tracing::debug!(listeners = subscriptions.len(), "Form listeners bound");

        Bindings { subscriptions }
    }

    fn listener<F, Fut>(controller: &Weak<Self>, handler: F) -> Listener
    where
        F: Fn(Arc<Self>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let controller = controller.clone();
        Arc::new(move || {
            let pending = controller.upgrade().map(&handler);
            async move {
                if let Some(pending) = pending {
                    pending.await;
                }
            }
            .boxed()
        })
    }

    /// Copies the range control's value into its readout
    pub async fn sync_count_readout(&self) {
        let value = self.elements.count_range.value().await;
        self.elements.count_readout.set_text(value).await;
    }
}
