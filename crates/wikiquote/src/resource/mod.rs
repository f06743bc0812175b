// ABOUTME: Resource handling for the MediaWiki API: URL construction, HTTP fetch and JSON decoding.
// ABOUTME: Network, status, size and decoding failures all surface as ErrorCode::Fetch.

use std::collections::HashMap;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::QuoteError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// API endpoint template; `{lang}` is replaced by the language code.
pub const DEFAULT_API_URL: &str = "https://{lang}.wikiquote.org/w/api.php";

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, QuoteError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            QuoteError::fetch(
                &self.url,
                "Decode",
                Some(anyhow::anyhow!("invalid JSON: {}", e)),
            )
        })
    }
}

/// Build an API request URL for `lang` from `template`.
///
/// `format=json` is always appended before `params`.
pub fn api_url(template: &str, lang: &str, params: &[(&str, &str)]) -> Result<Url, QuoteError> {
    let raw = template.replace("{lang}", lang);
    let mut url = Url::parse(&raw).map_err(|e| {
        QuoteError::invalid_url(&raw, "ApiUrl", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(QuoteError::invalid_url(
            &raw,
            "ApiUrl",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("format", "json");
        for (key, value) in params {
            query.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Fetch a resource from the given URL.
pub async fn fetch(
    client: &reqwest::Client,
    url: &Url,
    opts: &FetchOptions,
) -> Result<FetchResult, QuoteError> {
    let mut request = client.get(url.clone());
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    tracing::debug!(url = %url, "sending request");
    let response = request.send().await.map_err(|e| {
        QuoteError::fetch(url.as_str(), "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
    })?;

    // Check Content-Length header before reading body
    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(QuoteError::fetch(
                url.as_str(),
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().await.map_err(|e| {
        QuoteError::fetch(
            url.as_str(),
            "Fetch",
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(QuoteError::fetch(
            url.as_str(),
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    if status != 200 {
        return Err(QuoteError::fetch(
            url.as_str(),
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status)),
        ));
    }

    tracing::debug!(url = %url, status, bytes = body.len(), "received response");
    Ok(FetchResult {
        status,
        url: url.to_string(),
        content_type,
        body,
    })
}

/// Fetch a URL and decode its JSON body.
pub async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &Url,
    opts: &FetchOptions,
) -> Result<T, QuoteError> {
    fetch(client, url, opts).await?.json()
}
