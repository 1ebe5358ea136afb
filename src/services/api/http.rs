use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    error::{ApiError, ApiResult},
    models::{RecommendEnvelope, RecommendationRequest, RecommendedBook, TitlesEnvelope},
    services::api::RecommendationApi,
};

const TITLES_PATH: &str = "/book-titles";
const RECOMMEND_PATH: &str = "/api/recommend";

/// `reqwest` client for the recommendation server
#[derive(Clone)]
pub struct HttpRecommendationApi {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecommendationApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), api_url)
    }

    pub fn with_client(http_client: HttpClient, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            api_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Reads the body and decodes it, keeping the status for error reporting
    ///
    /// An error body is decoded even on a failing status so the server's own
    /// message reaches the user.
    async fn decode<T: DeserializeOwned>(
        response: Response,
    ) -> ApiResult<(StatusCode, Option<T>, String)> {
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => Ok((status, Some(parsed), body)),
            Err(e) if status.is_success() => Err(ApiError::Decode(e)),
            Err(_) => Ok((status, None, body)),
        }
    }
}

#[async_trait::async_trait]
impl RecommendationApi for HttpRecommendationApi {
    async fn fetch_titles(&self) -> ApiResult<Vec<String>> {
        let response = self.http_client.get(self.url(TITLES_PATH)).send().await?;
        let (status, envelope, body) = Self::decode::<TitlesEnvelope>(response).await?;

        if let Some(message) = envelope.as_ref().and_then(|e| e.error.clone()) {
            return Err(ApiError::Server(message));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let titles = envelope.and_then(|e| e.titles).unwrap_or_default();

        tracing::info!(titles = titles.len(), "Book titles fetched");

        Ok(titles)
    }

    async fn recommend(&self, request: &RecommendationRequest) -> ApiResult<Vec<RecommendedBook>> {
        let response = self
            .http_client
            .post(self.url(RECOMMEND_PATH))
            .json(request)
            .send()
            .await?;
        let (status, envelope, body) = Self::decode::<RecommendEnvelope>(response).await?;

        if let Some(message) = envelope.as_ref().and_then(|e| e.error.clone()) {
            return Err(ApiError::Server(message));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let books = envelope.and_then(|e| e.recommendations).unwrap_or_default();

        tracing::info!(
            book_title = %request.book_title,
            requested = request.num_recommendations,
            returned = books.len(),
            "Recommendations fetched"
        );

        Ok(books)
    }
}
