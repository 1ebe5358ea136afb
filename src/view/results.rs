use askama::Template;

use super::render;
use crate::dom::Element;
use crate::models::RecommendedBook;

pub const BOOK_CARD_CLASS: &str = "book-card";
pub const NO_RESULTS_CLASS: &str = "no-results";

struct BookCard<'a> {
    title: &'a str,
    author: &'a str,
    year: String,
    similarity: String,
    image_url: &'a str,
    note: Option<&'a str>,
}

#[derive(Template)]
#[template(
    source = r#"{% if cards.is_empty() -%}
<p class="no-results">No similar books found. Try another title.</p>
{%- else -%}
{% for card in cards -%}
<div class="book-card">
  <img class="book-cover" src="{{ card.image_url }}" alt="{{ card.title }}">
  <div class="book-info">
    <h3 class="book-title">{{ card.title }}</h3>
    <p class="book-author">by {{ card.author }}</p>
    <p class="book-year">Published: {{ card.year }}</p>
    <p class="similarity-score">Similarity: {{ card.similarity }}</p>
    {%- match card.note %}{% when Some with (note) %}
    <p class="book-note">{{ note }}</p>
    {%- when None %}{% endmatch %}
  </div>
</div>
{% endfor -%}
{%- endif %}"#,
    ext = "html"
)]
struct ResultsTemplate<'a> {
    cards: Vec<BookCard<'a>>,
}

#[derive(Template)]
#[template(
    source = r#"<div class="loading">Finding similar books...</div>"#,
    ext = "html"
)]
struct LoadingTemplate;

#[derive(Template)]
#[template(source = r#"<p class="error">{{ message }}</p>"#, ext = "html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

/// Renders the results list for `books`
///
/// Books with a similarity score of zero or less are dropped; the rest keep the
/// server's order. An empty list renders a single "no results" placeholder.
pub fn render_results(books: &[RecommendedBook], placeholder_image: &str) -> String {
    let cards = books
        .iter()
        .filter(|book| book.is_similar())
        .map(|book| BookCard {
            title: &book.title,
            author: &book.author,
            year: book.year.to_string(),
            similarity: book.similarity_percent(),
            image_url: book.image_url_or(placeholder_image),
            note: book.note(),
        })
        .collect();

    render(&ResultsTemplate { cards })
}

/// Clears `container` and renders `books` into it, returning the card count
pub async fn render_results_into(
    container: &Element,
    books: &[RecommendedBook],
    placeholder_image: &str,
) -> usize {
    let cards = books.iter().filter(|book| book.is_similar()).count();
    container
        .set_inner_html(render_results(books, placeholder_image))
        .await;
    cards
}

pub fn loading_indicator() -> String {
    render(&LoadingTemplate)
}

pub fn error_message(message: &str) -> String {
    render(&ErrorTemplate { message })
}
