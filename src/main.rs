use std::sync::Arc;

use bookrec_client::{
    dom::{Document, EventKind},
    services::HttpRecommendationApi,
    Config, RecommendationFormController,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Drive the recommendation page headlessly against a running server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Book to find recommendations for; omit to only load the catalog
    #[arg(short, long)]
    title: Option<String>,

    /// Number of recommendations to ask for
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Server base URL, overriding API_BASE_URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "bookrec_client=info".into()),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url;
    }

    tracing::info!(api_url = %config.api_base_url, "Starting recommendation page");

    let api = Arc::new(HttpRecommendationApi::new(config.api_base_url.clone()));
    let document = Document::index();
    let controller = Arc::new(RecommendationFormController::new(api, &document, &config)?);
    let bindings = controller.bind().await;

    let elements = controller.elements();
    if !controller.load_catalog().await {
        println!("{}", elements.title_status.text_content().await);
    }

    if let Some(title) = args.title {
        elements.title_input.set_value(title).await;
        if let Some(count) = args.count {
            elements.count_range.set_value(count.to_string()).await;
            elements.count_range.dispatch(EventKind::Input).await;
        }
        elements.form.dispatch(EventKind::Submit).await;

        for alert in document.window().take_alerts().await {
            println!("{}", alert);
        }
        println!("{}", elements.results.inner_html().await);
    }

    bindings.unbind().await;
    Ok(())
}
