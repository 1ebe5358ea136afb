//! Client-side controller for the book recommendation page.
//!
//! The page is modelled as an in-memory [`dom::Document`]; the
//! [`controller::RecommendationFormController`] drives it against the
//! recommendation server's `/book-titles` and `/api/recommend` endpoints.
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod view;

pub use config::Config;
pub use controller::{Bindings, FormElements, RecommendationFormController};
pub use error::{ApiError, AppError};
