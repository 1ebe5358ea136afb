//! Recommendation server abstraction
//!
//! The controller only talks to the server through `RecommendationApi`. Tests
//! swap in a mock; the binary points the HTTP implementation at any host.
use crate::{
    error::ApiResult,
    models::{RecommendationRequest, RecommendedBook},
};

mod http;

pub use http::HttpRecommendationApi;

/// Trait for the two endpoints the page depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationApi: Send + Sync {
    /// Fetch every selectable book title (`GET /book-titles`)
    ///
    /// Returns the titles in server order. An absent `titles` field comes back as
    /// an empty list; deciding whether that is usable is left to the caller.
    async fn fetch_titles(&self) -> ApiResult<Vec<String>>;

    /// Ask for books similar to `request.book_title` (`POST /api/recommend`)
    async fn recommend(&self, request: &RecommendationRequest) -> ApiResult<Vec<RecommendedBook>>;
}
