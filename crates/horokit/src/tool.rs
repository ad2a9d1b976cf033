//! Configured prediction pipeline

use crate::client::{fetch_page, prediction_url, FetchOptions};
use crate::convert::items_to_text;
use crate::error::HoroError;
use crate::extract::{prediction_items, preloaded_state};
use crate::sign::{label_for, Sign};
use crate::DEFAULT_BASE_URL;
use tracing::warn;

/// Wrap plain prediction text with a localized header.
///
/// The label lookup falls back to the raw key, so unknown keys still
/// produce a well-formed message.
pub fn format_horoscope(key: &str, text: &str) -> String {
    format!("**Гороскоп для знака \"{}\"**\n\n{}", label_for(key), text)
}

/// Builder for configuring the prediction pipeline
#[derive(Debug, Clone, Default)]
pub struct HoroscopeBuilder {
    user_agent: Option<String>,
    base_url: Option<String>,
}

impl HoroscopeBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the upstream base URL (tests point this at a local server)
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = Some(base.into());
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Horoscope {
        Horoscope {
            options: FetchOptions {
                user_agent: self.user_agent,
            },
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Configured prediction pipeline: fetch, extract, flatten, format.
///
/// Stateless and reentrant; concurrent calls share nothing, so one
/// instance can serve any number of in-flight requests.
#[derive(Debug, Clone)]
pub struct Horoscope {
    options: FetchOptions,
    base_url: String,
}

impl Default for Horoscope {
    fn default() -> Self {
        HoroscopeBuilder::new().build()
    }
}

impl Horoscope {
    /// Create a new builder
    pub fn builder() -> HoroscopeBuilder {
        HoroscopeBuilder::new()
    }

    /// The upstream base URL this pipeline fetches from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and flatten the prediction for a sign.
    ///
    /// Returns the plain text, or a typed error for every way the
    /// pipeline can come up empty-handed.
    pub async fn prediction(&self, sign: Sign) -> Result<String, HoroError> {
        let url = prediction_url(&self.base_url, sign);
        let page = fetch_page(&url, &self.options).await?;
        let state = preloaded_state(&page)?;
        let items = prediction_items(&state);
        let text = items_to_text(&items);
        if text.is_empty() {
            return Err(HoroError::NoPrediction);
        }
        Ok(text)
    }

    /// Prediction text with every failure replaced by a canned message.
    ///
    /// This is the boundary the surrounding adapter calls: it always
    /// returns a displayable string and never propagates an error.
    pub async fn content(&self, sign: Sign) -> String {
        match self.prediction(sign).await {
            Ok(text) => text,
            Err(err) => {
                warn!(sign = sign.as_str(), error = %err, "prediction unavailable");
                err.user_message().to_string()
            }
        }
    }

    /// Fully formatted message: localized header plus prediction text
    pub async fn message(&self, sign: Sign) -> String {
        let body = self.content(sign).await;
        format_horoscope(sign.as_str(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_horoscope_known_sign() {
        let msg = format_horoscope("aries", "Текст прогноза.");
        assert_eq!(msg, "**Гороскоп для знака \"Овен\"**\n\nТекст прогноза.");
    }

    #[test]
    fn test_format_horoscope_unknown_key_passes_through() {
        let msg = format_horoscope("dragon", "body");
        assert!(msg.starts_with("**Гороскоп для знака \"dragon\"**"));
        assert!(msg.ends_with("\n\nbody"));
    }

    #[test]
    fn test_format_horoscope_header_unchanged_by_body() {
        for body in ["", "a", "**Гороскоп**", "multi\n\nline"] {
            let msg = format_horoscope("leo", body);
            assert!(msg.starts_with("**Гороскоп для знака \"Лев\"**\n\n"));
        }
    }

    #[test]
    fn test_builder_defaults() {
        let horoscope = Horoscope::default();
        assert_eq!(horoscope.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_overrides() {
        let horoscope = Horoscope::builder()
            .user_agent("TestAgent/1.0")
            .base_url("http://127.0.0.1:9000")
            .build();
        assert_eq!(horoscope.base_url(), "http://127.0.0.1:9000");
        assert_eq!(
            horoscope.options.user_agent.as_deref(),
            Some("TestAgent/1.0")
        );
    }
}
