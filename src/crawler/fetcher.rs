//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for listing and detail pages
//! - Classifying responses into success, not-found, and errors
//!
//! There is no retry: a failed request is reported to the caller once.

use crate::config::HttpConfig;
use crate::FolioError;
use reqwest::{redirect::Policy, Client, StatusCode};

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered 404
    NotFound,
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed (up to 10 hops) and compressed responses are
/// decoded transparently.
///
/// # Example
///
/// ```no_run
/// use folio_crawl::config::HttpConfig;
/// use folio_crawl::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the response
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(FetchResult::Success)` |
/// | HTTP 404 | `Ok(FetchResult::NotFound)` |
/// | Any other 4xx/5xx | `Err(FolioError::Status)` |
/// | Timeout | `Err(FolioError::Timeout)` |
/// | Other network error | `Err(FolioError::Http)` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchResult, FolioError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    let final_url = response.url().to_string();

    if status == StatusCode::NOT_FOUND {
        return Ok(FetchResult::NotFound);
    }

    if status.is_client_error() || status.is_server_error() {
        return Err(FolioError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| classify_error(url, e))?;

    Ok(FetchResult::Success {
        final_url,
        status_code: status.as_u16(),
        body,
    })
}

/// Fetches a URL, treating "not found" as an error like any other status
///
/// Returns the final URL (after redirects) and the page body.
pub async fn fetch_html(client: &Client, url: &str) -> Result<(String, String), FolioError> {
    match fetch_page(client, url).await? {
        FetchResult::Success {
            final_url, body, ..
        } => Ok((final_url, body)),
        FetchResult::NotFound => Err(FolioError::Status {
            url: url.to_string(),
            status: StatusCode::NOT_FOUND.as_u16(),
        }),
    }
}

fn classify_error(url: &str, error: reqwest::Error) -> FolioError {
    if error.is_timeout() {
        FolioError::Timeout {
            url: url.to_string(),
        }
    } else {
        FolioError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
