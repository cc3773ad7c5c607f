use tracing::{debug, warn};

use crate::errors::ClientError;

use super::{ClientConfig, Method, Transport};

/// HTTP client for the printer host.
///
/// Prepends the configured base URL to every encoded request path and
/// authenticates with the host's application key. Holds no state between
/// round trips beyond reqwest's connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    pub config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

impl Transport for Client {
    /// Performs one round trip and returns the raw response bytes.
    ///
    /// 401 and 403 map to `Unauthorized`, any other non-2xx status to
    /// `UnexpectedStatus` with the body text attached. Connection-level
    /// failures surface as `Request`. No retries at this layer.
    async fn do_request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&[u8]>,
    ) -> Result<Vec<u8>, ClientError> {
        let url = format!("{}{}", self.config.base_url(), uri);
        debug!(%method, %url, "sending request to printer host");

        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self
                .http
                .post(&url)
                .header("Content-Type", "application/json"),
        };
        request = request.header("X-Api-Key", &self.config.api_key);
        if let Some(bytes) = body {
            request = request.body(bytes.to_vec());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            warn!(%url, "printer host rejected the application key");
            return Err(ClientError::Unauthorized);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "printer host returned an error status");
            return Err(ClientError::UnexpectedStatus(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        debug!(len = bytes.len(), "received response");
        Ok(bytes.to_vec())
    }
}
