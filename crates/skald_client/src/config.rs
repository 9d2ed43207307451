//! Completion client configuration.

use skald_error::ConfigError;

/// Default chat-completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
/// Default sampling temperature for story generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.9;
/// Default output token bound for story generation.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
/// Default wall-clock budget for one completion call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// Explicit configuration for the completion client.
///
/// All generation parameters live here rather than as magic numbers at call
/// sites; environment access happens only in [`CompletionConfig::from_env`].
///
/// # Examples
///
/// ```
/// use skald_client::CompletionConfig;
///
/// let config = CompletionConfig::new("sk-or-test")
///     .with_model("openai/gpt-4o-mini")
///     .with_timeout_secs(20);
/// assert_eq!(config.timeout_secs, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    /// Bearer token for the completion service
    pub api_key: String,
    /// Chat-completions endpoint URL
    pub base_url: String,
    /// Model identifier sent in the request body
    pub model: String,
    /// Default sampling temperature
    pub temperature: f32,
    /// Default maximum output tokens
    pub max_tokens: u32,
    /// Hard wall-clock timeout for one call, in seconds
    pub timeout_secs: u64,
    /// Optional `HTTP-Referer` attribution header
    pub referer: Option<String>,
    /// Optional `X-Title` attribution header
    pub title: Option<String>,
}

impl CompletionConfig {
    /// Configuration with the given API key and all defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            referer: None,
            title: None,
        }
    }

    /// Read the API key from `OPENROUTER_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|e| ConfigError::new(format!("OPENROUTER_API_KEY not set: {e}")))?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the default sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the default output token bound.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Override the wall-clock timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the attribution headers sent to the service.
    pub fn with_attribution(
        mut self,
        referer: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.referer = Some(referer.into());
        self.title = Some(title.into());
        self
    }
}
