//! Client for the users listing endpoint.

use reqwest::Client;
use std::time::Instant;

use crate::config::GithubConfig;

use super::error::FetchError;
use super::types::GithubUser;

/// Thin wrapper over a `reqwest::Client` bound to one users URL.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct UsersClient {
    client: Client,
    url: String,
}

impl UsersClient {
    pub fn new(config: &GithubConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: config.users_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue a single `GET` against the users URL and decode the body.
    ///
    /// No retry, no pagination. Fields beyond `login` and `avatar_url` are ignored.
    pub async fn fetch_users(&self) -> Result<Vec<GithubUser>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching users");

        let start = Instant::now();
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let users: Vec<GithubUser> = serde_json::from_slice(&body)?;

        tracing::debug!(
            count = users.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Users fetched"
        );
        Ok(users)
    }
}
