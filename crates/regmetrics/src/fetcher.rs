//! HTTP metrics source.
//!
//! Fetches `GET /api/metrics` once per session:
//! - Web: browser `fetch()` against the page's own origin
//! - Desktop: pooled reqwest client against the local development server
//!
//! Only a `200 OK` body is handed on for parsing. No timeout is set; the
//! transport's own limits apply.

use dioxus::logger::tracing::debug;
use regmetrics_core::config::METRICS_ENDPOINT;
use regmetrics_core::source::MetricsSource;
use regmetrics_core::LoadError;

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;

/// Global HTTP client (desktop). reqwest pools connections internally.
#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Joins the metrics endpoint onto an `http`/`https` origin.
///
/// ```
/// use regmetrics::fetcher::resolve_metrics_url;
///
/// let url = resolve_metrics_url("http://localhost:5000").unwrap();
/// assert_eq!(url, "http://localhost:5000/api/metrics");
/// ```
pub fn resolve_metrics_url(origin: &str) -> Result<String, LoadError> {
    let base = url::Url::parse(origin)
        .map_err(|e| LoadError::Transport(format!("Invalid origin {}: {}", origin, e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(LoadError::Transport(format!(
            "Unsupported scheme: {} (only http/https allowed)",
            base.scheme()
        )));
    }

    let url = base
        .join(METRICS_ENDPOINT)
        .map_err(|e| LoadError::Transport(format!("Invalid metrics URL: {}", e)))?;
    Ok(url.into())
}

/// Metrics source backed by the HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMetricsSource {
    url: String,
}

impl HttpMetricsSource {
    /// Source for the endpoint under `origin`.
    pub fn new(origin: &str) -> Result<Self, LoadError> {
        Ok(Self {
            url: resolve_metrics_url(origin)?,
        })
    }

    /// Source for the current platform's origin.
    pub fn for_platform() -> Result<Self, LoadError> {
        Self::new(&platform_origin()?)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait(?Send)]
impl MetricsSource for HttpMetricsSource {
    async fn fetch_body(&self) -> Result<String, LoadError> {
        debug!("GET {}", self.url);
        let body = fetch_text(&self.url).await?;
        debug!("Received {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Origin of the page that loaded the app.
#[cfg(target_arch = "wasm32")]
fn platform_origin() -> Result<String, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Transport("window unavailable".to_string()))?;
    window
        .location()
        .origin()
        .map_err(|e| LoadError::Transport(format!("Page origin unavailable: {:?}", e)))
}

/// Desktop builds have no page, so they talk to the development server.
#[cfg(not(target_arch = "wasm32"))]
fn platform_origin() -> Result<String, LoadError> {
    Ok(regmetrics_core::config::DEFAULT_DESKTOP_ORIGIN.to_string())
}

/// Web implementation: browser fetch API.
#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window =
        web_sys::window().ok_or_else(|| LoadError::Transport("window unavailable".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Transport(format!("Fetch failed: {:?} ({})", e, url)))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Transport("Failed to cast to Response".to_string()))?;

    if resp.status() != 200 {
        return Err(LoadError::Status(resp.status()));
    }

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| LoadError::Transport(format!("Failed to read body: {:?}", e)))?,
    )
    .await
    .map_err(|e| LoadError::Transport(format!("Failed to await body: {:?}", e)))?;

    text.as_string()
        .ok_or_else(|| LoadError::Parse("Response body is not text".to_string()))
}

/// Desktop implementation: pooled reqwest client.
#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let response = HTTP_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Transport(format!("Failed to fetch {}: {}", url, e)))?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(LoadError::Status(status));
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::Transport(format!("Failed to read response body: {}", e)))
}
