use tracing::{debug, instrument, warn};

use crate::{
    error::ClientError,
    model::Conditions,
    openweather::{self, BASE_URL},
};

/// HTTP client for the current-weather endpoint.
///
/// One request per call; no retries, no caching.
#[derive(Debug, Clone)]
pub struct Client {
    token: String,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, BASE_URL.to_string())
    }

    /// Point the client at another endpoint, e.g. a mock server.
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            token,
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current conditions at `location`.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn current(&self, location: &str) -> Result<Conditions, ClientError> {
        let url = openweather::format_url_with_base(&self.base_url, location, &self.token);

        debug!("requesting current conditions");
        let res = self.http.get(&url).send().await.map_err(ClientError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(ClientError::Body)?;

        if !status.is_success() {
            warn!(%status, "OpenWeather returned an error status");
            return Err(ClientError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let conditions = openweather::parse_json(body.as_bytes()).inspect_err(|err| {
            warn!(error = %err, body = %truncate_body(&body), "unexpected response body");
        })?;
        debug!(?conditions, "received current conditions");

        Ok(conditions)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
