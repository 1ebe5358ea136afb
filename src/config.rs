use serde::Deserialize;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation server (no trailing slash)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Image shown on a card when the server sends no cover URL
    #[serde(default = "default_placeholder_image_url")]
    pub placeholder_image_url: String,

    /// Titles listed ahead of the rest of the catalog, comma separated
    #[serde(default)]
    pub priority_titles: Vec<String>,

    /// Count used when the range control holds an unusable value
    #[serde(default = "default_recommendations")]
    pub default_recommendations: u32,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_placeholder_image_url() -> String {
    "/static/images/placeholder.png".to_string()
}

fn default_recommendations() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            placeholder_image_url: default_placeholder_image_url(),
            priority_titles: Vec::new(),
            default_recommendations: default_recommendations(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Priority titles with surrounding whitespace and blanks removed
    pub fn priority_titles(&self) -> Vec<String> {
        self.priority_titles
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}
