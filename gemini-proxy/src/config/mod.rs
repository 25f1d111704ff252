use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Outbound timeout applied to every upstream call; must be positive.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` when `GEMINI_API_KEY` is unset or blank. The proxy still starts
    /// and answers every prompt with "API key not configured.".
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl GeminiSettings {
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .map(Secret::new);

        GeminiSettings {
            api_key,
            base_url: get_env(&lookup, "GEMINI_BASE_URL", DEFAULT_BASE_URL),
            model: get_env(&lookup, "GEMINI_MODEL", DEFAULT_MODEL),
            timeout_secs: get_env(
                &lookup,
                "GEMINI_TIMEOUT_SECS",
                &DEFAULT_TIMEOUT_SECS.to_string(),
            )
            .trim()
            .parse::<u64>()
            .ok()
            // zero would make every upstream call fail at once
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl ProxyConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let gemini = GeminiSettings::from_lookup(|key| env::var(key).ok());

        Ok(ProxyConfig {
            common,
            gemini,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }
}

fn get_env<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}
