use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Request sent to the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub book_title: String,
    pub num_recommendations: u32,
}

/// Publication year as the server sends it
///
/// The dataset mixes numeric years with free-form strings ("Unknown", "1999?").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PublicationYear {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl Display for PublicationYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicationYear::Integer(year) => write!(f, "{}", year),
            // f64 Display already drops a trailing ".0"
            PublicationYear::Decimal(year) => write!(f, "{}", year),
            PublicationYear::Text(year) => write!(f, "{}", year),
        }
    }
}

/// A book returned by the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedBook {
    pub title: String,
    pub author: String,
    pub year: PublicationYear,
    /// Similarity to the query book in [0, 1]; zero or below means "not a match"
    #[serde(default)]
    pub similarity_score: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Advisory text such as "exact match excluded"
    #[serde(default)]
    pub note: Option<String>,
}

impl RecommendedBook {
    /// Whether the book should be shown at all
    pub fn is_similar(&self) -> bool {
        self.similarity_score > 0.0
    }

    /// Similarity as a percentage with one decimal place, e.g. `83.7%`
    ///
    /// Ties round away from zero (`0.8125` is `81.3%`), not to even.
    pub fn similarity_percent(&self) -> String {
        let percent = (self.similarity_score * 1000.0).round() / 10.0;
        format!("{:.1}%", percent)
    }

    /// Cover URL, or `placeholder` when the server sent none
    pub fn image_url_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => placeholder,
        }
    }

    /// The note, if it carries any text
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}
