/// Failures talking to the recommendation server
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body carried an `error` field
    #[error("{0}")]
    Server(String),

    #[error("Response has no {0}")]
    MissingData(&'static str),
}

/// Client-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Failed to load book titles: {0}")]
    CatalogLoad(#[source] ApiError),

    #[error("Failed to get recommendations: {0}")]
    Recommendation(#[source] ApiError),

    #[error("Missing page element: #{0}")]
    MissingElement(String),
}

impl AppError {
    /// Message shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            AppError::CatalogLoad(ApiError::Server(msg)) => {
                format!("Error loading book titles: {}", msg)
            }
            AppError::CatalogLoad(_) => "Error loading book titles.".to_string(),
            AppError::Recommendation(ApiError::Server(msg)) => msg.clone(),
            AppError::Recommendation(_) => {
                "Failed to get recommendations. Please try again.".to_string()
            }
            AppError::MissingElement(id) => format!("Page is missing element #{}", id),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
pub type AppResult<T> = Result<T, AppError>;
