//! In-memory page surface the controller drives
mod element;
mod events;
mod window;

pub use element::Element;
pub use events::{EventKind, Listener, Subscription};
pub use window::Window;

use std::collections::HashMap;

pub const FORM_ID: &str = "recommendation-form";
pub const TITLE_INPUT_ID: &str = "book-title";
pub const COUNT_RANGE_ID: &str = "num-recommendations";
pub const COUNT_READOUT_ID: &str = "num-recommendations-value";
pub const RESULTS_ID: &str = "results";
pub const TITLE_STATUS_ID: &str = "title-status";
pub const RETRY_BUTTON_ID: &str = "retry-titles";

/// Elements addressable by id, plus the window
#[derive(Clone, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
    window: Window,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recommendation page with every element the form controller expects
    pub fn index() -> Self {
        let mut doc = Self::new();
        doc.insert(Element::new("form", FORM_ID));
        doc.insert(Element::with_attrs(
            "select",
            TITLE_INPUT_ID,
            &[("name", "book_title"), ("required", "")],
        ));
        doc.insert(Element::with_attrs(
            "input",
            COUNT_RANGE_ID,
            &[
                ("type", "range"),
                ("name", "num_recommendations"),
                ("min", "1"),
                ("max", "20"),
                ("value", "5"),
            ],
        ));
        doc.insert(Element::new("span", COUNT_READOUT_ID));
        doc.insert(Element::with_attrs(
            "div",
            RESULTS_ID,
            &[("class", "results-container")],
        ));
        doc.insert(Element::with_attrs(
            "p",
            TITLE_STATUS_ID,
            &[("class", "title-status")],
        ));
        doc.insert(Element::with_text(
            "button",
            RETRY_BUTTON_ID,
            &[("type", "button"), ("hidden", "")],
            "Retry",
        ));
        doc
    }

    /// Adds an element, replacing any element with the same id
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id().to_string(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.elements.get(id).cloned()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}
