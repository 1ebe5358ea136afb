pub mod api;

pub use api::{HttpRecommendationApi, RecommendationApi};
