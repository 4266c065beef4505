//! GitHub API plumbing — token check, repository listing, README retrieval.
//!
//! Every call is a single request/response with the caller's Authorization
//! header passed through verbatim; no token is ever stored server-side.

pub mod enhance;
pub mod handlers;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;

use crate::errors::AppError;

const GITHUB_API_URL: &str = "https://api.github.com";
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("resume-sync-api/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
}

impl GithubClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// GET /user — validates the supplied token and returns the profile.
    pub async fn authenticated_user(&self, authorization: &str) -> Result<Value, AppError> {
        self.get_json(
            &format!("{GITHUB_API_URL}/user"),
            authorization,
            &[],
            "Invalid GitHub token or failed to authenticate",
        )
        .await
    }

    /// GET /user/repos — public and private repositories of the token's user.
    pub async fn list_repos(&self, authorization: &str) -> Result<Value, AppError> {
        // per_page raised so the extension sees more than the default 30 repos
        self.get_json(
            &format!("{GITHUB_API_URL}/user/repos"),
            authorization,
            &[("per_page", "100")],
            "Could not fetch repositories",
        )
        .await
    }

    /// GET /repos/{full_name}/readme as raw text. A missing README is not an
    /// error: returns `Ok(None)` on 404.
    pub async fn fetch_readme(
        &self,
        authorization: &str,
        full_name: &str,
    ) -> Result<Option<String>, AppError> {
        let response = self
            .client
            .get(format!("{GITHUB_API_URL}/repos/{full_name}/readme"))
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/vnd.github.raw")
            .send()
            .await
            .map_err(|e| AppError::GitHub {
                status: 502,
                message: format!("README request failed: {e}"),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::GitHub {
                status: status.as_u16(),
                message: format!("Could not fetch README for {full_name}"),
            });
        }

        let body = response.text().await.map_err(|e| AppError::GitHub {
            status: 502,
            message: format!("Failed to read README body: {e}"),
        })?;
        Ok(Some(body))
    }

    async fn get_json(
        &self,
        url: &str,
        authorization: &str,
        query: &[(&str, &str)],
        failure_detail: &str,
    ) -> Result<Value, AppError> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, authorization)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::GitHub {
                status: 502,
                message: format!("Request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::GitHub {
                status: status.as_u16(),
                message: failure_detail.to_string(),
            });
        }

        response.json().await.map_err(|e| AppError::GitHub {
            status: 502,
            message: format!("Invalid JSON from GitHub: {e}"),
        })
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
