/// Default model used for both improvement and refinement.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the Generative Language REST API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini client configuration loaded from environment variables.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Never leaves the server.
    pub api_key: String,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// Base URL without trailing slash.
    pub api_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var          | Default                                             |
    /// |------------------|-----------------------------------------------------|
    /// | `GEMINI_API_KEY` | falls back to `API_KEY`; required                   |
    /// | `GEMINI_MODEL`   | `gemini-2.5-flash`                                  |
    /// | `GEMINI_API_URL` | `https://generativelanguage.googleapis.com/v1beta`  |
    ///
    /// Panics when no API key is set.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .expect("GEMINI_API_KEY (or API_KEY) must be set");

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let api_url = std::env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            model,
            api_url,
        }
    }
}
