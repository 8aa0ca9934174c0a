use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches the whole body at `url` as text with a single GET.
///
/// Transport failures and non-2xx responses are returned as errors. There is
/// no retry.
pub async fn download(url: &str) -> Result<String, FetchError> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Client)?;

    debug!(url, "requesting log file");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;
    debug!(%status, bytes = body.len(), "log file received");
    Ok(body)
}
