use std::time::Duration;
use anyhow::Result;
use reqwest::{Client, Response};

/// Build the HTTP client shared by the provider clients
pub fn build_http_client(timeout_ms: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(ms) = timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }
    Ok(builder.build()?)
}

/// Turn a non-2xx response into an error carrying the status and body
pub async fn ensure_success(response: Response, provider: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    anyhow::bail!("{} returned {}: {}", provider, status, body.trim())
}
