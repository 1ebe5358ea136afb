//! Askama templates for everything the controller writes into the page
use askama::Html as HtmlEscaper;
use askama::{MarkupDisplay, Template};

mod results;
mod titles;

pub use results::{
    error_message, loading_indicator, render_results, render_results_into, BOOK_CARD_CLASS,
    NO_RESULTS_CLASS,
};
pub use titles::{error_options, loading_options, title_options};

/// Escapes `text` for use as element content
pub fn escape_text(text: &str) -> String {
    MarkupDisplay::new_unsafe(text, HtmlEscaper).to_string()
}

/// Renders `template`, falling back to an inline error block
fn render(template: &impl Template) -> String {
    template.render().unwrap_or_else(|err| {
        tracing::error!(error = %err, "Template failed to render");
        format!(r#"<p class="error">{}</p>"#, escape_text(&err.to_string()))
    })
}
