//! HTTP client for the GitHub user endpoint.

use crate::error::LookupError;
use crate::profile::Profile;
use octoscope_core::config::ApiConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Looks up GitHub users by login.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    /// Build a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> octoscope_core::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| octoscope_core::Error::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL queried for `username`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/{}", self.base_url, username)
    }

    /// Fetch a profile. Every failure is folded into a [`LookupError`].
    ///
    /// `username` must already be trimmed and non-empty.
    pub async fn lookup(&self, username: &str) -> Result<Profile, LookupError> {
        let url = self.profile_url(username);
        debug!(%url, "Looking up profile");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return Err(LookupError::ConnectionError);
            }
        };

        let status = response.status().as_u16();
        if let Some(err) = LookupError::for_status(status) {
            info!(status, user = username, "Lookup failed: {}", err);
            return Err(err);
        }

        // A success status with an unusable body is reported like a transport
        // failure; the log line keeps the two distinguishable.
        match response.json::<Profile>().await {
            Ok(profile) => {
                info!(user = %profile.login, "Profile loaded");
                Ok(profile)
            }
            Err(e) => {
                warn!("Malformed profile body from {}: {}", url, e);
                Err(LookupError::ConnectionError)
            }
        }
    }
}
