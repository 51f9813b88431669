// HTTP Fetching
//
// One blocking client for the landing page and the range document. Every
// request gets exactly one attempt: the provider republishes the document
// on a weekly cadence, so a failed run is simply rerun rather than
// retried internally.

use reqwest::blocking::Client;
use tracing::debug;

use crate::constants::{HTTP_REQUEST_TIMEOUT, USER_AGENT};
use crate::error::RangeError;
use crate::Result;

/// Blocking HTTP client carrying the crate's timeout and user agent
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(HTTP_REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// GET a URL and return the raw response body.
    ///
    /// A non-success status becomes [`RangeError::Http`] with the status
    /// and URL; connection, TLS, and timeout failures pass through as
    /// [`RangeError::Transport`].
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RangeError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
