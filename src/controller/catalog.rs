use super::RecommendationFormController;
use crate::{
    error::{ApiError, AppError, AppResult},
    models::BookTitleCatalog,
    view,
};

impl RecommendationFormController {
    /// Fetches the title catalog and (re)populates the selector
    ///
    /// The selector is disabled and shows a loading option while the request is
    /// in flight. Its options are replaced wholesale on every call, so retrying
    /// is always safe. On failure the selector is left disabled with an error
    /// option, the status line explains why, and the retry button is revealed.
    ///
    /// Returns whether the catalog loaded.
    pub async fn load_catalog(&self) -> bool {
        let el = &self.elements;

        el.title_input.set_disabled(true).await;
        el.title_input.set_inner_html(view::loading_options()).await;
        el.title_input.set_value("").await;
        el.title_status.set_text("Loading book titles...").await;
        el.retry_button.set_hidden(true).await;

        match self.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(titles = catalog.len(), "Book title catalog loaded");

                el.title_input
                    .set_inner_html(view::title_options(&catalog))
                    .await;
                el.title_input.set_disabled(false).await;
                el.title_status.clear().await;
                *self.catalog.write().await = Some(catalog);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Book title catalog failed to load");

                *self.catalog.write().await = None;
                el.title_input.set_inner_html(view::error_options()).await;
                el.title_status.set_text(err.user_message()).await;
                el.retry_button.set_hidden(false).await;
                false
            }
        }
    }

    async fn fetch_catalog(&self) -> AppResult<BookTitleCatalog> {
        let titles = self
            .api
            .fetch_titles()
            .await
            .map_err(AppError::CatalogLoad)?;

        let catalog = BookTitleCatalog::build(titles, &self.priority_titles);
        if catalog.is_empty() {
            return Err(AppError::CatalogLoad(ApiError::MissingData("titles")));
        }

        Ok(catalog)
    }
}
