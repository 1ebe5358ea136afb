use tracing::Instrument;
use uuid::Uuid;

use super::RecommendationFormController;
use crate::{
    error::{ApiError, AppError},
    models::RecommendationRequest,
    view,
};

const DEFAULT_MIN_COUNT: i64 = 1;
const DEFAULT_MAX_COUNT: i64 = 20;

impl RecommendationFormController {
    /// Handles a form submission
    ///
    /// An empty title, or one missing from the loaded catalog, raises a blocking
    /// alert and never reaches the network.
    pub async fn submit(&self) {
        let book_title = self.elements.title_input.value().await.trim().to_string();

        if book_title.is_empty() {
            self.window.alert("Please select a book title").await;
            return;
        }

        let unknown = match self.catalog.read().await.as_ref() {
            Some(catalog) => !catalog.contains(&book_title),
            None => false,
        };
        if unknown {
            self.window
                .alert("Please select a book title from the list")
                .await;
            return;
        }

        let num_recommendations = self.read_count().await;

        self.request_recommendations(RecommendationRequest {
            book_title,
            num_recommendations,
        })
        .await;
    }

    /// Sends `request` and renders the outcome into the results container
    ///
    /// The container shows a loading indicator for the duration of the call and
    /// always ends up holding results, an inline error, or nothing. A server
    /// `error` body raises an alert and clears earlier results. Overlapping calls
    /// are not fenced: whichever resolves last owns the container.
    pub async fn request_recommendations(&self, request: RecommendationRequest) {
        let span = tracing::info_span!(
            "recommend",
            request_id = %Uuid::new_v4(),
            book_title = %request.book_title,
            num_recommendations = request.num_recommendations,
        );

        async {
            let results = &self.elements.results;
            results.set_inner_html(view::loading_indicator()).await;

            match self
                .api
                .recommend(&request)
                .await
                .map_err(AppError::Recommendation)
            {
                Ok(books) => {
                    let cards =
                        view::render_results_into(results, &books, &self.placeholder_image).await;
                    tracing::info!(received = books.len(), cards, "Recommendations rendered");
                }
                Err(err @ AppError::Recommendation(ApiError::Server(_))) => {
                    tracing::warn!(error = %err, "Recommendation request rejected");
                    results.clear().await;
                    self.window.alert(err.user_message()).await;
                }
                Err(err) => {
                    tracing::error!(error = %err, "Recommendation request failed");
                    results
                        .set_inner_html(view::error_message(&err.user_message()))
                        .await;
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Current count from the range control, clamped to its bounds
    async fn read_count(&self) -> u32 {
        let range = &self.elements.count_range;
        let min = parse_count(range.attribute("min").await.as_deref())
            .unwrap_or(DEFAULT_MIN_COUNT)
            .max(1);
        let max = parse_count(range.attribute("max").await.as_deref())
            .unwrap_or(DEFAULT_MAX_COUNT)
            .max(min);

        let value = range.value().await;
        let count = parse_count(Some(&value)).unwrap_or_else(|| {
            tracing::warn!(value = %value, "Unusable recommendation count, using default");
            i64::from(self.default_count)
        });

        // Bounded by `max`, which came from an i64 no smaller than 1
        u32::try_from(count.clamp(min, max)).unwrap_or(self.default_count)
    }
}

/// Integer value of a form field, truncating decimals like `parseInt`
fn parse_count(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    })
}
