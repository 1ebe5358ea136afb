use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use scraper::{Html, Selector};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use bookrec_client::{
    dom::{Document, Element, EventKind},
    models::RecommendationRequest,
    services::{HttpRecommendationApi, RecommendationApi},
    ApiError, Config, RecommendationFormController,
};

/// Serves `router` on an ephemeral port and returns its base URL
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn titles_router(titles: Value) -> Router {
    Router::new().route(
        "/book-titles",
        get(move || {
            let titles = titles.clone();
            async move { Json(json!({ "titles": titles })) }
        }),
    )
}

fn create_page(base_url: &str, config: Config) -> (Arc<RecommendationFormController>, Document) {
    let document = Document::index();
    let api = Arc::new(HttpRecommendationApi::new(base_url));
    let controller = RecommendationFormController::new(api, &document, &config).unwrap();
    (Arc::new(controller), document)
}

async fn select_text(element: &Element, selector: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(&element.inner_html().await);
    let selector = Selector::parse(selector).unwrap();
    fragment
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

async fn select_attr(element: &Element, selector: &str, attr: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(&element.inner_html().await);
    let selector = Selector::parse(selector).unwrap();
    fragment
        .select(&selector)
        .filter_map(|el| el.value().attr(attr).map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_catalog_loads_with_priority_titles_first() {
    let base = spawn_backend(titles_router(json!(["Emma", "Dune", "Ulysses", "Emma"]))).await;
    let config = Config {
        priority_titles: vec!["Ulysses".to_string(), "Beloved".to_string()],
        ..Config::default()
    };
    let (controller, _document) = create_page(&base, config);

    assert!(controller.load_catalog().await);

    let options = select_text(&controller.elements().title_input, "option").await;
    assert_eq!(options, vec!["Select a book", "Ulysses", "Emma", "Dune"]);
}

#[tokio::test]
async fn test_catalog_error_body_shows_retry() {
    let router = Router::new().route(
        "/book-titles",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "db down" })),
            )
        }),
    );
    let base = spawn_backend(router).await;
    let (controller, _document) = create_page(&base, Config::default());

    assert!(!controller.load_catalog().await);

    let el = controller.elements();
    assert_eq!(el.title_input.text_content().await, "Error loading titles");
    assert!(el.title_input.is_disabled().await);
    assert!(!el.retry_button.is_hidden().await);
    assert_eq!(el.retry_button.text_content().await, "Retry");
    assert_eq!(
        el.title_status.text_content().await,
        "Error loading book titles: db down"
    );
}

#[tokio::test]
async fn test_catalog_with_no_titles_is_an_error() {
    let base = spawn_backend(titles_router(json!([]))).await;
    let (controller, _document) = create_page(&base, Config::default());

    assert!(!controller.load_catalog().await);
    assert!(!controller.elements().retry_button.is_hidden().await);
}

#[tokio::test]
async fn test_titles_non_json_failure_reports_status() {
    let router = Router::new().route(
        "/book-titles",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
    );
    let base = spawn_backend(router).await;
    let api = HttpRecommendationApi::new(&base);

    match api.fetch_titles().await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dune_scenario_end_to_end() {
    let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let captured = received.clone();

    let router = titles_router(json!(["Dune", "Dune Messiah"])).route(
        "/api/recommend",
        post(move |Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                *captured.lock().await = Some(body);
                Json(json!({
                    "recommendations": [
                        {"title": "Dune Messiah", "author": "Frank Herbert", "year": 1969,
                         "similarity_score": 0.9, "image_url": "http://covers/dm.jpg"},
                        {"title": "Children of Dune", "author": "Frank Herbert", "year": "1976",
                         "similarity_score": 0.5, "note": "same series"},
                        {"title": "Emma", "author": "Jane Austen", "year": 1815,
                         "similarity_score": 0}
                    ]
                }))
            }
        }),
    );
    let base = spawn_backend(router).await;
    let (controller, document) = create_page(&base, Config::default());
    let _bindings = controller.bind().await;
    controller.load_catalog().await;

    let el = controller.elements();
    el.title_input.set_value("Dune").await;
    el.form.dispatch(EventKind::Submit).await;

    assert_eq!(
        received.lock().await.clone(),
        Some(json!({ "book_title": "Dune", "num_recommendations": 5 }))
    );
    assert_eq!(
        select_text(&el.results, ".book-card .book-title").await,
        vec!["Dune Messiah", "Children of Dune"]
    );
    assert_eq!(
        select_text(&el.results, ".similarity-score").await,
        vec!["Similarity: 90.0%", "Similarity: 50.0%"]
    );
    assert_eq!(
        select_attr(&el.results, ".book-cover", "src").await,
        vec!["http://covers/dm.jpg", "/static/images/placeholder.png"]
    );
    assert_eq!(
        select_text(&el.results, ".book-note").await,
        vec!["same series"]
    );
    assert!(document.window().alerts().await.is_empty());
}

#[tokio::test]
async fn test_recommend_error_body_alerts_and_clears() {
    let router = Router::new().route(
        "/api/recommend",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Book title is required" })),
            )
        }),
    );
    let base = spawn_backend(router).await;
    let (controller, document) = create_page(&base, Config::default());
    controller.elements().results.set_text("stale results").await;

    controller
        .request_recommendations(RecommendationRequest {
            book_title: "Dune".to_string(),
            num_recommendations: 5,
        })
        .await;

    assert_eq!(controller.elements().results.inner_html().await, "");
    assert_eq!(
        document.window().last_alert().await.as_deref(),
        Some("Book title is required")
    );
}

#[tokio::test]
async fn test_malformed_recommend_body_shows_generic_failure() {
    let router = Router::new().route(
        "/api/recommend",
        post(|| async { "<html>oops</html>" }),
    );
    let base = spawn_backend(router).await;
    let (controller, document) = create_page(&base, Config::default());

    controller
        .request_recommendations(RecommendationRequest {
            book_title: "Dune".to_string(),
            num_recommendations: 5,
        })
        .await;

    assert_eq!(
        controller.elements().results.text_content().await,
        "Failed to get recommendations. Please try again."
    );
    assert!(document.window().alerts().await.is_empty());
}

#[tokio::test]
async fn test_empty_title_sends_nothing() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/api/recommend",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "recommendations": [] }))
            }
        }),
    );
    let base = spawn_backend(router).await;
    let (controller, document) = create_page(&base, Config::default());
    let _bindings = controller.bind().await;

    controller.elements().form.dispatch(EventKind::Submit).await;

    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(document.window().alerts().await.len(), 1);
}

#[tokio::test]
async fn test_last_response_to_resolve_wins() {
    let router = Router::new().route(
        "/api/recommend",
        post(|Json(body): Json<Value>| async move {
            let title = body["book_title"].as_str().unwrap_or_default().to_string();
            if title == "Dune" {
                tokio::time::sleep(Duration::from_millis(300)).await;
            }
            Json(json!({
                "recommendations": [
                    {"title": format!("like {}", title), "author": "A", "year": 2000,
                     "similarity_score": 0.7}
                ]
            }))
        }),
    );
    let base = spawn_backend(router).await;
    let (controller, _document) = create_page(&base, Config::default());

    let slow = controller.request_recommendations(RecommendationRequest {
        book_title: "Dune".to_string(),
        num_recommendations: 1,
    });
    let fast = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        controller
            .request_recommendations(RecommendationRequest {
                book_title: "Emma".to_string(),
                num_recommendations: 1,
            })
            .await
    };
    tokio::join!(slow, fast);

    assert_eq!(
        select_text(&controller.elements().results, ".book-title").await,
        vec!["like Dune"]
    );
}

#[test]
fn test_unreachable_server_never_leaves_loading() {
    tokio_test::block_on(async {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let (controller, _document) = create_page(&base, Config::default());
        controller
            .request_recommendations(RecommendationRequest {
                book_title: "Dune".to_string(),
                num_recommendations: 5,
            })
            .await;

        let results = &controller.elements().results;
        assert!(select_text(results, ".loading").await.is_empty());
        assert_eq!(
            select_text(results, "p.error").await,
            vec!["Failed to get recommendations. Please try again."]
        );

        assert!(!controller.load_catalog().await);
        assert!(!controller.elements().retry_button.is_hidden().await);
    });
}
