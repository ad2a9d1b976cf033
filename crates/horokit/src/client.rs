//! HTTP client for prediction pages

use crate::error::HoroError;
use crate::sign::Sign;
use crate::DEFAULT_USER_AGENT;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::{debug, error, warn};

/// First-byte timeout (connect + first response byte)
const FIRST_BYTE_TIMEOUT: Duration = Duration::from_secs(5);

/// Body timeout (total)
const BODY_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch options configured via the builder
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
}

/// Build the prediction URL for a sign.
///
/// The sign token is interpolated between fixed path segments; the
/// base is configurable so tests can point at a local server.
pub fn prediction_url(base_url: &str, sign: Sign) -> String {
    format!(
        "{}/prediction/{}/today/",
        base_url.trim_end_matches('/'),
        sign.as_str()
    )
}

/// Fetch a page and return its body as text.
///
/// The status code is not inspected: error pages flow into extraction
/// like any other body, where a missing script element degrades to the
/// not-found result. Transport failures are the only hard errors here,
/// and there is no retry.
pub async fn fetch_page(url: &str, options: &FetchOptions) -> Result<String, HoroError> {
    let parsed = url::Url::parse(url).map_err(|_| HoroError::InvalidUrl)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(HoroError::InvalidUrl);
    }

    // Build headers
    let mut headers = HeaderMap::new();
    let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html, text/plain, */*;q=0.8"),
    );

    // Build client
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(FIRST_BYTE_TIMEOUT)
        .timeout(FIRST_BYTE_TIMEOUT)
        .build()
        .map_err(HoroError::ClientBuild)?;

    // Send request
    let response = client
        .get(url)
        .send()
        .await
        .map_err(HoroError::from_reqwest)?;

    let status_code = response.status().as_u16();
    debug!(status = status_code, url = %url, "fetched prediction page");

    // Read body with timeout
    let (body, truncated) = read_body_with_timeout(response, BODY_TIMEOUT).await;
    if truncated {
        warn!(url = %url, "body read incomplete, extraction may degrade");
    }

    Ok(String::from_utf8_lossy(&body).to_string())
}

/// Read response body with timeout, returning partial content if timeout occurs
async fn read_body_with_timeout(response: reqwest::Response, timeout: Duration) -> (Bytes, bool) {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        let chunk_future = stream.next();
        let timeout_future = tokio::time::sleep_until(deadline);

        tokio::select! {
            chunk = chunk_future => {
                match chunk {
                    Some(Ok(bytes)) => {
                        body.extend_from_slice(&bytes);
                    }
                    Some(Err(e)) => {
                        error!("Error reading body chunk: {}", e);
                        let has_content = !body.is_empty();
                        return (Bytes::from(body), has_content);
                    }
                    None => {
                        // Stream complete
                        return (Bytes::from(body), false);
                    }
                }
            }
            _ = timeout_future => {
                warn!("Body timeout reached, returning partial content");
                return (Bytes::from(body), true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ALL_SIGNS;
    use crate::DEFAULT_BASE_URL;

    #[test]
    fn test_prediction_url_for_all_signs() {
        for sign in ALL_SIGNS {
            let url = prediction_url(DEFAULT_BASE_URL, sign);
            assert_eq!(
                url,
                format!("https://horo.mail.ru/prediction/{}/today/", sign.as_str())
            );
        }
    }

    #[test]
    fn test_prediction_url_trims_trailing_slash() {
        assert_eq!(
            prediction_url("http://127.0.0.1:8080/", Sign::Leo),
            "http://127.0.0.1:8080/prediction/leo/today/"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_bad_scheme() {
        let options = FetchOptions::default();
        let result = fetch_page("ftp://example.com/x", &options).await;
        assert!(matches!(result, Err(HoroError::InvalidUrl)));

        let result = fetch_page("not a url", &options).await;
        assert!(matches!(result, Err(HoroError::InvalidUrl)));
    }
}
