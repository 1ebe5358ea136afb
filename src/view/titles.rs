use askama::Template;

use super::render;
use crate::models::BookTitleCatalog;

/// Selector option set: a valueless prompt, then one option per title
#[derive(Template)]
#[template(
    source = r#"<option value=""{% if prompt_disabled %} disabled{% endif %}>{{ prompt }}</option>
{%- for title in titles %}
<option value="{{ title }}">{{ title }}</option>
{%- endfor %}"#,
    ext = "html"
)]
struct TitleOptionsTemplate<'a> {
    prompt: &'a str,
    prompt_disabled: bool,
    titles: &'a [String],
}

/// Option set while the catalog is being fetched
pub fn loading_options() -> String {
    render(&TitleOptionsTemplate {
        prompt: "Loading titles...",
        prompt_disabled: false,
        titles: &[],
    })
}

/// Option set for a loaded catalog
pub fn title_options(catalog: &BookTitleCatalog) -> String {
    render(&TitleOptionsTemplate {
        prompt: "Select a book",
        prompt_disabled: false,
        titles: catalog.titles(),
    })
}

/// Option set after a failed load
pub fn error_options() -> String {
    render(&TitleOptionsTemplate {
        prompt: "Error loading titles",
        prompt_disabled: true,
        titles: &[],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn options(html: &str) -> Vec<(String, String)> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("option").unwrap();
        fragment
            .select(&selector)
            .map(|el| {
                let value = el.value().attr("value").unwrap_or_default().to_string();
                (value, el.text().collect())
            })
            .collect()
    }

    #[test]
    fn test_title_options_lead_with_prompt() {
        let catalog = BookTitleCatalog::build(vec!["Dune".to_string(), "Emma".to_string()], &[]);
        let options = options(&title_options(&catalog));
        assert_eq!(
            options,
            vec![
                (String::new(), "Select a book".to_string()),
                ("Dune".to_string(), "Dune".to_string()),
                ("Emma".to_string(), "Emma".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_options_single_disabled_prompt() {
        let html = error_options();
        let fragment = Html::parse_fragment(&html);
        let selector = Selector::parse("option[disabled]").unwrap();
        assert_eq!(fragment.select(&selector).count(), 1);
        assert_eq!(options(&html).len(), 1);
    }
}
