mod book;
mod catalog;

pub use book::{PublicationYear, RecommendationRequest, RecommendedBook};
pub use catalog::BookTitleCatalog;

use serde::Deserialize;

// ============================================================================
// Recommendation Server Wire Types
// ============================================================================

/// Body of `GET /book-titles`
#[derive(Debug, Clone, Deserialize)]
pub struct TitlesEnvelope {
    #[serde(default)]
    pub titles: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/recommend`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendEnvelope {
    #[serde(default)]
    pub recommendations: Option<Vec<RecommendedBook>>,
    #[serde(default)]
    pub error: Option<String>,
}
