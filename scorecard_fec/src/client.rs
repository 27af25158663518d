//! HTTP client for the FEC API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::errors::FecError;
use crate::query::{CandidateSearchQuery, CommitteeQuery, ReceiptsQuery};
use crate::retry::{with_retry, RetryPolicy};
use crate::types::{CandidateSearchResponse, CommitteeResponse, ReceiptsResponse};

/// Request timeout for FEC API calls (seconds).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Fixed delay before every request, to stay under the hourly rate limit.
const REQUEST_DELAY: Duration = Duration::from_millis(100);

/// FEC API client for fetching candidate, committee, and contribution data.
///
/// Every request is paced by a fixed delay and goes through the bounded
/// retry policy in [`crate::retry`].
pub struct FecClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    retry: RetryPolicy,
    request_delay: Duration,
}

impl FecClient {
    /// Create a new FecClient with the default base URL.
    pub fn new(api_key: String) -> Result<Self, FecError> {
        Self::with_base_url("https://api.open.fec.gov/v1", api_key)
    }

    /// Create a new FecClient with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, FecError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FecError::Network)?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.to_string(),
            retry: RetryPolicy::default(),
            request_delay: REQUEST_DELAY,
        })
    }

    /// Override the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Override the per-request pacing delay.
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Internal helper to perform GET requests with retries.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, FecError> {
        let url = format!("{}{}", self.base_url, path);

        // Add api_key to params
        let mut all_params = params.to_vec();
        all_params.push(("api_key".to_string(), self.api_key.clone()));

        with_retry(&self.retry, || self.request::<T>(&url, &all_params)).await
    }

    /// A single request attempt: pacing delay, GET, status mapping, decode.
    async fn request<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<T, FecError> {
        sleep(self.request_delay).await;

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FecError::Timeout
                } else {
                    FecError::Network(e)
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FecError::RateLimited);
        } else if status == reqwest::StatusCode::FORBIDDEN {
            return Err(FecError::InvalidApiKey);
        } else if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(FecError::InvalidRequest(format!(
                "HTTP {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        response.json::<T>().await.map_err(|e| {
            FecError::ParseFailed(format!("Failed to deserialize response: {}", e))
        })
    }

    /// Search for candidates by name and other filters. One page only.
    pub async fn search_candidates(
        &self,
        query: &CandidateSearchQuery,
    ) -> Result<CandidateSearchResponse, FecError> {
        let params = query.to_query_pairs();
        self.get("/candidates/search/", &params).await
    }

    /// Get committees authorized by a specific candidate.
    pub async fn get_candidate_committees(
        &self,
        candidate_id: &str,
        query: &CommitteeQuery,
    ) -> Result<CommitteeResponse, FecError> {
        let path = format!("/candidate/{}/committees/", candidate_id);
        let params = query.to_query_pairs();
        self.get(&path, &params).await
    }

    /// Get one page of Schedule A receipts.
    pub async fn get_receipts(
        &self,
        query: &ReceiptsQuery,
    ) -> Result<ReceiptsResponse, FecError> {
        let params = query.to_query_pairs();
        self.get("/schedules/schedule_a/", &params).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...", &body[..MAX])
    }
}
